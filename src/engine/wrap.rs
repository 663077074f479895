//! # Callable Wrapping
//!
//! Installs logging wrappers around callables found by [`traverse`].
//!
//! A wrapper logs its path exactly once per invocation, before delegating, then
//! hands the original the identical [`Invocation`] and returns whatever the
//! original returned. Errors come back untouched, and deferred results come
//! back unawaited.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, trace};

use super::traverse;
use crate::sink::LogSink;
use crate::value::{Callable, CallableId, Invocation, Value};

/// Name carried by every installed wrapper.
pub const WRAPPED_NAME: &str = "wrapped";

/// The capability check shared by both wrapping strategies.
pub fn is_callable(value: &Value) -> Option<&Callable> {
    value.as_callable()
}

/// Wraps `original` so each call logs `path` to `sink` first.
pub fn wrap_callable(original: Callable, path: String, sink: Arc<dyn LogSink>) -> Callable {
    Callable::new(WRAPPED_NAME, move |invocation: Invocation| {
        sink.log(&path);
        original.call(invocation)
    })
}

/// Per-run record of the wrappers installed so far.
///
/// The schema pass claims each resolver it wraps, keyed by the identity of the
/// original function. The generic pass installs a fresh wrapper per slot,
/// except for claimed originals, which receive the schema wrapper, and for
/// wrappers from this run, which are left where they are.
#[derive(Debug, Default)]
pub struct WrapRegistry {
    claimed: HashMap<CallableId, Callable>,
    installed: HashSet<CallableId>,
}

impl WrapRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `wrapper` as the schema wrapper for `original`.
    ///
    /// The first claim for an original wins.
    pub fn claim(&mut self, original: &Callable, wrapper: &Callable) {
        self.installed.insert(wrapper.id());
        self.claimed
            .entry(original.id())
            .or_insert_with(|| wrapper.clone());
    }

    /// The schema wrapper installed for `original`, if any.
    pub fn claimed(&self, original: &Callable) -> Option<&Callable> {
        self.claimed.get(&original.id())
    }

    /// Records `wrapper` as installed in this run and hands it back.
    pub fn install(&mut self, wrapper: Callable) -> Callable {
        self.installed.insert(wrapper.id());
        wrapper
    }

    /// Number of wrappers installed so far.
    pub fn len(&self) -> usize {
        self.installed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.installed.is_empty()
    }

    pub fn is_wrapper(&self, callable: &Callable) -> bool {
        self.installed.contains(&callable.id())
    }
}

/// The generic pass: wraps every callable reachable from `root`, logging
/// `prefix` followed by its structural path.
///
/// Each slot gets its own wrapper, so a function stored under two keys logs
/// whichever key it was called through. Returns the number of slots rewritten.
pub fn instrument_value(
    root: &Value,
    sink: &Arc<dyn LogSink>,
    prefix: &str,
    registry: &mut WrapRegistry,
) -> usize {
    let mut rewritten = 0;

    traverse(root, |visit| {
        let Some(original) = is_callable(visit.value) else {
            return;
        };
        let path = format!("{prefix}{}", visit.path);
        if registry.is_wrapper(original) {
            trace!(%path, "Already instrumented in this run");
            return;
        }

        let wrapper = match registry.claimed(original) {
            Some(resolver) => {
                debug!(%path, "Sharing resolver wrapper");
                resolver.clone()
            }
            None => {
                debug!(%path, name = original.name(), "Instrumented callable");
                registry.install(wrap_callable(original.clone(), path, Arc::clone(sink)))
            }
        };
        visit.container.set(visit.key, Value::Function(wrapper));
        rewritten += 1;
    });

    rewritten
}
