use thiserror::Error;

/// Errors raised while interpreting channel and schedule values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// UTC offset string is not one of the accepted shapes
    #[error("Invalid UTC offset: {0:?}")]
    InvalidOffset(String),

    /// Schedule timestamp could not be parsed
    #[error("Invalid timestamp: {0:?}")]
    InvalidTimestamp(String),

    /// Release date could not be parsed
    #[error("Invalid date: {0:?}")]
    InvalidDate(String),
}

impl CoreError {
    pub fn invalid_offset(msg: impl Into<String>) -> Self {
        Self::InvalidOffset(msg.into())
    }

    pub fn invalid_timestamp(msg: impl Into<String>) -> Self {
        Self::InvalidTimestamp(msg.into())
    }

    pub fn invalid_date(msg: impl Into<String>) -> Self {
        Self::InvalidDate(msg.into())
    }
}
