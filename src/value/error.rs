//! Error type raised by callables.

use std::sync::Arc;

use thiserror::Error;

/// The error a [`Callable`](super::Callable) "throws".
///
/// `Clone` so that a settled [`Deferred`](super::Deferred) can hand the same
/// error to every waiter.
#[derive(Debug, Clone, Error)]
pub enum CallError {
    #[error("{0}")]
    Message(String),

    #[error("invalid argument at position {index}: {reason}")]
    InvalidArgument { index: usize, reason: String },

    #[error(transparent)]
    Source(Arc<dyn std::error::Error + Send + Sync>),
}

impl CallError {
    pub fn source_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        CallError::Source(Arc::new(error))
    }
}

impl From<String> for CallError {
    fn from(msg: String) -> Self {
        CallError::Message(msg)
    }
}

impl From<&str> for CallError {
    fn from(msg: &str) -> Self {
        CallError::Message(msg.to_owned())
    }
}
