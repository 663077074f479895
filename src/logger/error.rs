//! Error types for logger configuration.

use thiserror::Error;

/// Errors raised while turning a [`LoggerConfig`](super::LoggerConfig) into options.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A prefix spanning lines would split every logged path.
    #[error("prefix must be a single line, got {prefix:?}")]
    MultilinePrefix { prefix: String },
}
