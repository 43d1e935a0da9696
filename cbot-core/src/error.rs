use thiserror::Error;

#[derive(Error, Debug)]
pub enum CbotError {
    /// A required identifier was missing or empty. Rejected before any external call.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The model call failed or returned an unusable result. The session is left unmodified.
    #[error("Model invocation failed: {0}")]
    Model(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// An outbound send of one chunk failed. Local to that chunk.
    #[error("Delivery error: {0}")]
    Delivery(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CbotError>;
