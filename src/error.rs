use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("text is empty")]
    EmptyInput,

    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("invalid phrase pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {}: {message}", .status.as_u16())]
    Server { status: StatusCode, message: String },

    #[error("unexpected content-type '{content_type}': {body}")]
    UnexpectedContent { content_type: String, body: String },

    #[error("speech server returned an empty body")]
    EmptyAudio,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot decode {path} as {encoding}")]
    Decode { path: String, encoding: String },

    #[error("invalid dictionary: {0}")]
    Dictionary(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
