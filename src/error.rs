//! Huginn error types

/// Huginn error types
#[derive(Debug, thiserror::Error)]
pub enum HuginnError {
    // Transport/network errors
    #[error("transport error: {0}")]
    Transport(String),

    #[error("RPC failed ({code}): {message}")]
    Rpc {
        code: tonic::Code,
        message: String,
    },

    #[error("operation not implemented: {0}")]
    NotImplemented(String),

    // Data errors
    #[error("decode error: {0}")]
    Decode(#[from] prost::DecodeError),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for huginn operations
pub type Result<T> = std::result::Result<T, HuginnError>;
