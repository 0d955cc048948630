use serde::Serialize;

#[derive(Debug, Clone)]
pub struct SpeechAudio {
    pub bytes: Vec<u8>,
    pub content_type: String,
    /// Text the server actually spoke (`X-Translated-Text`).
    pub server_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub server_url: String,
    pub reachable: bool,
    pub error: Option<String>,
}
