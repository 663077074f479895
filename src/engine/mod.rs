//! Generic instrumentation engine.
//!
//! This module walks arbitrary [`Value`](crate::value::Value) graphs and wraps
//! every callable it finds.
//!
//! # Main Components
//!
//! - [`traverse`] - Depth-first walk producing (value, key, container, path) for every leaf
//! - [`is_callable`] - The one predicate deciding what gets instrumented
//! - [`wrap_callable`] - Builds a logging wrapper around a callable
//! - [`WrapRegistry`] - Per-run record of schema claims and installed wrappers
//! - [`instrument_value`] - The generic pass tying the above together

pub mod traverse;
pub mod wrap;

pub use traverse::{traverse, Container, Visit};
pub use wrap::*;
