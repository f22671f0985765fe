/// Errors that can occur while writing output documents.
#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
