/// Errors that can occur while fetching or decoding a remote source.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Empty response from {0}")]
    EmptyResponse(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected response shape: {0}")]
    Shape(String),
}

impl ScrapeError {
    pub fn empty_response(url: impl Into<String>) -> Self {
        Self::EmptyResponse(url.into())
    }

    pub fn shape(msg: impl Into<String>) -> Self {
        Self::Shape(msg.into())
    }

    /// True for transport-level failures (connection, TLS, timeout, HTTP status).
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Status { .. })
    }
}
