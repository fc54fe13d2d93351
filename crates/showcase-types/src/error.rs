use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SiteError {
    #[error("Chat error: {0}")]
    Chat(String),

    #[error("Speech error: {0}")]
    Speech(String),

    #[error("Audio error: {0}")]
    Audio(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),

    #[error("Access denied")]
    AccessDenied,

    #[error("Daily demo limit reached")]
    QuotaExhausted,

    #[error("Empty input")]
    EmptyInput,

    #[error("A request is already in progress")]
    Busy,

    #[error("{0}")]
    Other(String),
}

impl SiteError {
    /// Errors that the widget prevents up front rather than reports
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SiteError::QuotaExhausted | SiteError::EmptyInput | SiteError::Busy
        )
    }
}

impl From<serde_json::Error> for SiteError {
    fn from(e: serde_json::Error) -> Self {
        SiteError::Serialization(e.to_string())
    }
}
