use crate::config::TtsConfig;
use crate::error::{CoreError, Result};
use crate::model::language::Language;
use crate::services::tts_types::{HealthReport, SpeechAudio};

use rand::{thread_rng, Rng};
use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

use std::{thread, time::Duration};

const BASE_DELAY_MS: u64 = 500;
const HEALTH_TIMEOUT_SECS: u64 = 10;
const SNIPPET_LEN: usize = 400;
const TRANSLATED_HEADER: &str = "X-Translated-Text";

enum Failure {
    Retry(CoreError),
    Fatal(CoreError),
}

fn backoff(attempt: usize) -> Duration {
    let jitter: u64 = thread_rng().gen_range(0..200);
    let ms = BASE_DELAY_MS * (2_u64.pow(attempt as u32)) + jitter;
    Duration::from_millis(ms)
}

/// Client for the speech server (`/health`, `/generate_audio_mp3`).
pub struct TtsClient {
    client: Client,
    base_url: String,
    max_retries: usize,
}

impl TtsClient {
    pub fn new(cfg: &TtsConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()?;

        Ok(TtsClient {
            client,
            base_url: cfg.server_url.trim_end_matches('/').to_string(),
            max_retries: cfg.max_retries.max(1),
        })
    }

    pub fn health(&self) -> HealthReport {
        let url = format!("{}/health", self.base_url);

        let res = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(HEALTH_TIMEOUT_SECS))
            .send()
            .map_err(CoreError::from)
            .and_then(|resp| {
                let status = resp.status();
                let text = resp.text()?;
                if !status.is_success() {
                    return Err(CoreError::Server {
                        status,
                        message: extract_error_message(&text),
                    });
                }
                let v: serde_json::Value = serde_json::from_str(&text)?;
                Ok(v.get("status").and_then(|s| s.as_str()) == Some("ok"))
            });

        match res {
            Ok(reachable) => HealthReport {
                server_url: self.base_url.clone(),
                reachable,
                error: None,
            },
            Err(e) => {
                log::warn!("speech server at {} unreachable: {e}", self.base_url);
                HealthReport {
                    server_url: self.base_url.clone(),
                    reachable: false,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    pub fn synthesize(&self, text: &str, lang: Language) -> Result<SpeechAudio> {
        let url = format!("{}/generate_audio_mp3", self.base_url);

        self.with_retries(|| {
            let resp = self
                .client
                .get(&url)
                .query(&[("text", text), ("lang_code", lang.code())])
                .send()
                .map_err(|e| Failure::Retry(e.into()))?;

            read_audio(resp)
        })
    }

    fn with_retries<T>(&self, mut op: impl FnMut() -> std::result::Result<T, Failure>) -> Result<T> {
        let mut attempt = 0;
        loop {
            match op() {
                Ok(v) => return Ok(v),
                Err(Failure::Retry(e)) if attempt + 1 < self.max_retries => {
                    log::warn!("speech request failed (attempt {}): {e}", attempt + 1);
                    thread::sleep(backoff(attempt));
                    attempt += 1;
                }
                Err(Failure::Retry(e)) | Err(Failure::Fatal(e)) => return Err(e),
            }
        }
    }
}

fn read_audio(resp: Response) -> std::result::Result<SpeechAudio, Failure> {
    let status = resp.status();

    if !status.is_success() {
        let body = resp.text().unwrap_or_default();
        let err = CoreError::Server {
            status,
            message: extract_error_message(&body),
        };
        return Err(if should_retry_http(status) {
            Failure::Retry(err)
        } else {
            Failure::Fatal(err)
        });
    }

    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    let server_text = resp
        .headers()
        .get(TRANSLATED_HEADER)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());

    if !is_audio(&content_type) {
        let body = resp.text().unwrap_or_default();
        return Err(Failure::Fatal(CoreError::UnexpectedContent {
            content_type,
            body: snippet(&body),
        }));
    }

    let bytes = resp.bytes().map_err(|e| Failure::Retry(e.into()))?;
    if bytes.is_empty() {
        return Err(Failure::Fatal(CoreError::EmptyAudio));
    }

    Ok(SpeechAudio {
        bytes: bytes.to_vec(),
        content_type,
        server_text,
    })
}

fn is_audio(content_type: &str) -> bool {
    let ct = content_type.to_ascii_lowercase();
    ct.contains("audio") || ct.contains("mpeg") || ct.contains("mp3")
}

fn should_retry_http(status: StatusCode) -> bool {
    status == StatusCode::REQUEST_TIMEOUT
        || status == StatusCode::TOO_MANY_REQUESTS
        || status.is_server_error()
}

/// `{ "error": "..." }` from the speech server, else the raw body.
fn extract_error_message(body_text: &str) -> String {
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(body_text) {
        if let Some(msg) = v.get("error").and_then(|m| m.as_str()) {
            return msg.to_string();
        }
        if let Some(msg) = v
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return msg.to_string();
        }
    }

    snippet(body_text)
}

fn snippet(body_text: &str) -> String {
    let trimmed = body_text.trim();
    match trimmed.char_indices().nth(SNIPPET_LEN) {
        Some((cut, _)) => format!("{}...", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::JoinHandle;

    /// Serves the canned responses to consecutive connections and returns
    /// the request lines it saw.
    pub(crate) fn serve(responses: Vec<Vec<u8>>) -> (String, JoinHandle<Vec<String>>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = format!("http://{}", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let mut seen = Vec::new();
            for response in responses {
                let (mut stream, _) = listener.accept().unwrap();
                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    let n = stream.read(&mut chunk).unwrap();
                    if n == 0 {
                        break;
                    }
                    buf.extend_from_slice(&chunk[..n]);
                }
                let head = String::from_utf8_lossy(&buf);
                seen.push(head.lines().next().unwrap_or("").to_string());
                stream.write_all(&response).unwrap();
                stream.flush().unwrap();
            }
            seen
        });

        (addr, handle)
    }

    pub(crate) fn http_response(status: &str, headers: &[(&str, &str)], body: &[u8]) -> Vec<u8> {
        let mut out = format!("HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n", body.len());
        for (k, v) in headers {
            out.push_str(&format!("{k}: {v}\r\n"));
        }
        out.push_str("\r\n");
        let mut bytes = out.into_bytes();
        bytes.extend_from_slice(body);
        bytes
    }

    fn client(url: &str, retries: usize) -> TtsClient {
        TtsClient::new(&TtsConfig {
            server_url: format!("{url}/"),
            timeout_secs: 5,
            max_retries: retries,
        })
        .unwrap()
    }

    #[test]
    fn synthesize_reads_audio_and_header() {
        let (url, server) = serve(vec![http_response(
            "200 OK",
            &[("Content-Type", "audio/mpeg"), ("X-Translated-Text", "vanakkam")],
            b"ID3fake",
        )]);

        let audio = client(&url, 1).synthesize("hello there", Language::Ta).unwrap();
        assert_eq!(audio.bytes, b"ID3fake");
        assert_eq!(audio.content_type, "audio/mpeg");
        assert_eq!(audio.server_text.as_deref(), Some("vanakkam"));

        let seen = server.join().unwrap();
        assert!(seen[0].starts_with("GET /generate_audio_mp3?text=hello"));
        assert!(seen[0].contains("lang_code=ta"));
    }

    #[test]
    fn client_error_is_not_retried() {
        let (url, server) = serve(vec![http_response(
            "400 BAD REQUEST",
            &[("Content-Type", "application/json")],
            br#"{"error": "Missing 'text' or 'lang_code'"}"#,
        )]);

        let err = client(&url, 3).synthesize("x", Language::Hi).unwrap_err();
        match err {
            CoreError::Server { status, message } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(message, "Missing 'text' or 'lang_code'");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(server.join().unwrap().len(), 1);
    }

    #[test]
    fn server_error_is_retried() {
        let (url, server) = serve(vec![
            http_response("503 SERVICE UNAVAILABLE", &[], b"busy"),
            http_response("200 OK", &[("Content-Type", "audio/mpeg")], b"mp3"),
        ]);

        let audio = client(&url, 2).synthesize("x", Language::Ml).unwrap();
        assert_eq!(audio.bytes, b"mp3");
        assert_eq!(server.join().unwrap().len(), 2);
    }

    #[test]
    fn rejects_non_audio_body() {
        let (url, server) = serve(vec![http_response(
            "200 OK",
            &[("Content-Type", "text/html")],
            b"<html>captive portal</html>",
        )]);

        let err = client(&url, 1).synthesize("x", Language::Ta).unwrap_err();
        assert!(matches!(err, CoreError::UnexpectedContent { ref body, .. } if body.contains("captive")));
        server.join().unwrap();
    }

    #[test]
    fn health_reports_ok() {
        let (url, server) = serve(vec![http_response(
            "200 OK",
            &[("Content-Type", "application/json")],
            br#"{"status": "ok"}"#,
        )]);

        let report = client(&url, 1).health();
        assert!(report.reachable);
        assert!(report.error.is_none());
        assert_eq!(server.join().unwrap()[0], "GET /health HTTP/1.1");
    }

    #[test]
    fn health_reports_unreachable() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let report = client(&url, 1).health();
        assert!(!report.reachable);
        assert!(report.error.is_some());
    }

    #[test]
    fn retry_policy() {
        assert!(should_retry_http(StatusCode::TOO_MANY_REQUESTS));
        assert!(should_retry_http(StatusCode::BAD_GATEWAY));
        assert!(!should_retry_http(StatusCode::NOT_FOUND));
    }

    #[test]
    fn snippet_is_char_safe() {
        let long = "வ".repeat(SNIPPET_LEN + 10);
        let s = snippet(&long);
        assert!(s.ends_with("..."));
        assert_eq!(s.chars().count(), SNIPPET_LEN + 3);
    }

    #[test]
    fn backoff_grows() {
        assert!(backoff(0) < Duration::from_millis(BASE_DELAY_MS + 200));
        assert!(backoff(2) >= Duration::from_millis(BASE_DELAY_MS * 4));
    }
}
