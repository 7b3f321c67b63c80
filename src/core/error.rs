//! Error types for the sink

pub type Result<T> = std::result::Result<T, SinkError>;

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Destination error with name
    #[error("Destination error for '{destination}': {message}")]
    DestinationError {
        destination: String,
        message: String,
    },
}

impl SinkError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        SinkError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a destination error
    pub fn destination(destination: impl Into<String>, message: impl Into<String>) -> Self {
        SinkError::DestinationError {
            destination: destination.into(),
            message: message.into(),
        }
    }
}
