//! # Entry Point
//!
//! [`GraphQLLogger`] ties the passes together. One call to
//! [`GraphQLLogger::instrument`] mutates the target in place:
//!
//! 1. If the target is a [`Schema`], the resolver pass wraps every declared
//!    resolver, logging execution-time paths.
//! 2. Then, always, the generic pass walks the value graph (a plain value, or
//!    the schema's root value) and wraps every callable it finds, logging
//!    structural paths.
//!
//! Both passes share one [`WrapRegistry`] for the duration of the call, so a
//! resolver reachable from both ends up behind the schema wrapper and logs
//! once per invocation.

pub mod error;
pub mod options;

pub use error::*;
pub use options::*;

use tracing::info;

use crate::engine::{instrument_value, WrapRegistry};
use crate::schema::{instrument_schema, Schema};
use crate::value::Value;

/// What to instrument.
#[derive(Debug)]
pub enum Target<'a> {
    Value(&'a Value),
    Schema(&'a mut Schema),
}

impl<'a> From<&'a Value> for Target<'a> {
    fn from(value: &'a Value) -> Self {
        Target::Value(value)
    }
}

impl<'a> From<&'a mut Schema> for Target<'a> {
    fn from(schema: &'a mut Schema) -> Self {
        Target::Schema(schema)
    }
}

/// Counts from one instrumentation call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstrumentReport {
    /// Schema fields whose resolver was replaced.
    pub resolvers: usize,
    /// Value slots whose callable was replaced.
    pub callables: usize,
}

/// Installs logging wrappers according to its [`LoggerOptions`].
#[derive(Debug, Clone, Default)]
pub struct GraphQLLogger {
    options: LoggerOptions,
}

impl GraphQLLogger {
    pub fn new(options: LoggerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LoggerOptions {
        &self.options
    }

    /// Wraps every callable reachable from `target`, in place.
    pub fn instrument<'a>(&self, target: impl Into<Target<'a>>) -> InstrumentReport {
        let sink = self.options.sink();
        let prefix = self.options.prefix();
        let mut registry = WrapRegistry::new();
        let mut report = InstrumentReport::default();

        let root = match target.into() {
            Target::Schema(schema) => {
                report.resolvers = instrument_schema(schema, sink, prefix, &mut registry);
                schema.root_value().clone()
            }
            Target::Value(value) => value.clone(),
        };
        report.callables = instrument_value(&root, sink, prefix, &mut registry);

        info!(
            resolvers = report.resolvers,
            callables = report.callables,
            prefix,
            "Instrumentation finished"
        );
        report
    }
}

/// Builds an instrumentation function from `options`.
///
/// ```
/// use graphql_log::{create_graphql_logger, LoggerOptions, Object, Value};
///
/// let log_executions = create_graphql_logger(LoggerOptions::new().with_prefix("svc."));
/// let resolvers = Value::from(Object::new().with("answer", 42));
/// log_executions((&resolvers).into());
/// ```
pub fn create_graphql_logger(options: LoggerOptions) -> impl Fn(Target<'_>) {
    let logger = GraphQLLogger::new(options);
    move |target: Target<'_>| {
        logger.instrument(target);
    }
}
