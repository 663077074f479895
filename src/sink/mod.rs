//! Log sinks: where instrumented callables report their paths.
//!
//! A sink receives one path string per invocation of a wrapped callable. What
//! happens next (printing, shipping, counting) is entirely the sink's business.
//!
//! # Main Components
//!
//! - [`LogSink`] - The sink contract; any `Fn(&str) + Send + Sync` closure is a sink
//! - [`LineSink`] / [`StdoutSink`] - One line per path on a writer (the default)
//! - [`TracingSink`] - One structured `tracing` event per path
//!
//! # Testing
//!
//! See [`mock`] for a recording sink to assert on in tests.

pub mod mock;
pub mod tracing;

pub use self::tracing::TracingSink;
pub use mock::RecordingSink;

use std::io::{self, Write};

use parking_lot::Mutex;

/// Receives the path of every instrumented call.
///
/// Implementations must not fail the call they are reporting on, so `log` has
/// no error channel.
pub trait LogSink: Send + Sync {
    fn log(&self, path: &str);
}

impl<F> LogSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn log(&self, path: &str) {
        self(path)
    }
}

/// Writes each path as its own line.
pub struct LineSink<W: Write + Send> {
    writer: Mutex<W>,
}

/// The default sink: one line per path on standard output.
pub type StdoutSink = LineSink<io::Stdout>;

impl<W: Write + Send> LineSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl LineSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write + Send> LogSink for LineSink<W> {
    fn log(&self, path: &str) {
        let mut writer = self.writer.lock();
        if let Err(error) = writeln!(writer, "{path}").and_then(|()| writer.flush()) {
            ::tracing::warn!(%error, path, "Failed to write log line");
        }
    }
}
