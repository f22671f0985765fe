use thiserror::Error;

/// Errors that end the CLI with a non-zero status.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Pipeline failure
    #[error("{0}")]
    Pipeline(#[from] tvguide_lib::PipelineError),

    /// Logger setup failed
    #[error("Logging error: {0}")]
    Logging(String),
}

impl CliError {
    pub(crate) fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}
