use thiserror::Error;

/// Shown to the user whenever the boundary file cannot be loaded. The
/// underlying error only goes to the log.
pub const MAP_UNAVAILABLE_MESSAGE: &str = "Не удалось загрузить карту";

#[derive(Debug, Error)]
pub enum BoundaryError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("boundary fetch from {url} timed out after {timeout_secs}s")]
    Timeout { url: String, timeout_secs: u64 },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl BoundaryError {
    /// Generic message safe to display; never includes technical detail.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        MAP_UNAVAILABLE_MESSAGE
    }
}
