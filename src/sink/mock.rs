//! # Recording Sink
//!
//! Utilities for testing instrumented code without touching stdout.
//!
//! Clone a [`RecordingSink`], hand one clone to the logger and keep the other to
//! assert on:
//!
//! ```
//! use graphql_log::sink::RecordingSink;
//! use graphql_log::{Callable, GraphQLLogger, LoggerOptions, Object, Value};
//!
//! let spy = RecordingSink::new();
//! let logger = GraphQLLogger::new(LoggerOptions::new().with_sink(spy.clone()));
//!
//! let ping = Callable::anonymous(|_| Ok(Value::Null));
//! let root = Value::from(Object::new().with("ping", ping));
//! logger.instrument(&root);
//!
//! let ping = root.as_object().and_then(|o| o.get("ping")).unwrap();
//! ping.as_callable().unwrap().call(Default::default()).unwrap();
//! spy.assert_logged(&["ping"]);
//! ```

use std::sync::Arc;

use parking_lot::Mutex;

use super::LogSink;

/// A sink that remembers every path it receives, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    paths: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.paths.lock().len()
    }

    pub fn last(&self) -> Option<String> {
        self.paths.lock().last().cloned()
    }

    pub fn clear(&self) {
        self.paths.lock().clear();
    }

    /// Panics unless exactly `expected` was logged, in order.
    #[track_caller]
    pub fn assert_logged(&self, expected: &[&str]) {
        let paths = self.paths();
        assert_eq!(paths, expected, "logged paths differ from expectation");
    }
}

impl LogSink for RecordingSink {
    fn log(&self, path: &str) {
        self.paths.lock().push(path.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_record() {
        let spy = RecordingSink::new();
        let handle = spy.clone();

        handle.log("a");
        handle.log("b");

        assert_eq!(spy.count(), 2);
        assert_eq!(spy.last().as_deref(), Some("b"));
        spy.assert_logged(&["a", "b"]);

        spy.clear();
        assert_eq!(handle.count(), 0);
    }
}
