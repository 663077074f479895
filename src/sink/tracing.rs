//! # Structured Sink
//!
//! [`TracingSink`] turns every instrumented call into a `tracing` event, so
//! resolver paths flow through whatever subscriber the application installed
//! (filtering, formatting, exporting).
//!
//! Each event is emitted at `INFO` on the `graphql_log` target with the path
//! recorded as a structured field:
//!
//! ```text
//! INFO graphql_log: Resolver invoked path="svc.hero.friends.0.name"
//! ```
//!
//! Filter it like any other target:
//!
//! ```bash
//! RUST_LOG=graphql_log=info cargo run
//! ```

use tracing::info;

use super::LogSink;

/// Target every [`TracingSink`] event is recorded under.
pub const TARGET: &str = "graphql_log";

/// Emits one structured `tracing` event per logged path.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, path: &str) {
        info!(target: TARGET, path, "Resolver invoked");
    }
}
