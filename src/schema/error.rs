//! Error types for schema execution.

use thiserror::Error;

use crate::value::CallError;

/// Errors that abort [`execute`](super::execute).
#[derive(Debug, Clone, Error)]
pub enum ExecutionError {
    /// A field or the query root refers to a type missing from the type map.
    #[error("unknown type: {name}")]
    UnknownType { name: String },

    /// A selection names a field its parent type does not declare.
    #[error("type {type_name} has no field '{field}'")]
    UnknownField { type_name: String, field: String },

    /// A resolver (declared or default) returned an error.
    #[error("resolver failed at {path}: {source}")]
    Resolver { path: String, source: CallError },

    /// A list-typed field produced something other than a list.
    #[error("expected a list at {path}, got {kind}")]
    NotAList { path: String, kind: &'static str },

    /// A non-null field resolved to null.
    #[error("non-null field resolved to null at {path}")]
    NullValue { path: String },
}
