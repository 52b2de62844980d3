use thiserror::Error;

// Main Application Error Type

#[derive(Error, Debug)]
pub enum EnhanceError {
    #[error("Enhancer Error: {0}")]
    Enhancer(#[from] EnhancerError),
    #[error("Enhancer task failed to complete: {0}")]
    Task(#[from] tokio::task::JoinError),
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization Error: {0}")]
    Json(#[from] serde_json::Error),
}

// Errors raised inside a single enhancer. Any of these aborts the whole
// generation; no partial strategy list is returned.
#[derive(Error, Debug)]
pub enum EnhancerError {
    #[error("'{0}' is not a valid hex color")]
    InvalidColor(String),
    #[error("The document palette is empty.")]
    EmptyPalette,
}
