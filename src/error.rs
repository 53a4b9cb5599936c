use thiserror::Error;

/// Errors surfaced to the user as a transient message.
///
/// None of these abort anything: the path and history stay as they were.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    #[error("{0}")]
    InvalidOperation(String),

    #[error("Close the path before adding it to your design")]
    PathNotClosed,

    #[error("The path is empty")]
    EmptyPath,

    #[error("Could not read the image: {0}")]
    ImageDecodeFailure(String),

    #[error("The design rejected the shape: {0}")]
    HostRejection(String),
}

impl EditorError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidOperation(reason.into())
    }
}

pub type EditorResult<T> = Result<T, EditorError>;
