//! Logger configuration.
//!
//! [`LoggerOptions`] is what the logger runs with: a sink and a prefix.
//! [`LoggerConfig`] is its serialisable counterpart for loading from config
//! files or environment-driven settings; it names a built-in sink instead of
//! holding one.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::sink::{LogSink, StdoutSink, TracingSink};

/// Resolved options for one logger.
#[derive(Clone)]
pub struct LoggerOptions {
    sink: Arc<dyn LogSink>,
    prefix: String,
}

impl LoggerOptions {
    /// Defaults: the stdout line sink and no prefix.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sink(self, sink: impl LogSink + 'static) -> Self {
        self.with_shared_sink(Arc::new(sink))
    }

    pub fn with_shared_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn sink(&self) -> &Arc<dyn LogSink> {
        &self.sink
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            sink: Arc::new(StdoutSink::stdout()),
            prefix: String::new(),
        }
    }
}

impl fmt::Debug for LoggerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerOptions")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

/// Built-in sinks selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkKind {
    #[default]
    Stdout,
    Tracing,
}

/// Serialisable logger settings.
///
/// ```
/// use graphql_log::{LoggerConfig, LoggerOptions, SinkKind};
///
/// let config = LoggerConfig { prefix: "svc.".into(), sink: SinkKind::Tracing };
/// let options = LoggerOptions::try_from(config).unwrap();
/// assert_eq!(options.prefix(), "svc.");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub prefix: String,
    pub sink: SinkKind,
}

impl TryFrom<LoggerConfig> for LoggerOptions {
    type Error = ConfigError;

    fn try_from(config: LoggerConfig) -> Result<Self, Self::Error> {
        if config.prefix.contains(['\n', '\r']) {
            return Err(ConfigError::MultilinePrefix {
                prefix: config.prefix,
            });
        }

        let options = LoggerOptions::new().with_prefix(config.prefix);
        Ok(match config.sink {
            SinkKind::Stdout => options,
            SinkKind::Tracing => options.with_sink(TracingSink),
        })
    }
}
