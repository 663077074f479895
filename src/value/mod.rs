//! # Dynamic Values
//!
//! The data the instrumentation pass walks. A [`Value`] is a cheap-to-clone
//! handle: scalars are stored inline, while [`Object`] and [`List`] are shared,
//! interior-mutable containers. Cloning a container clones the handle, not the
//! contents, so the same container can be reachable from several places
//! (including from itself) and a mutation through one handle is visible
//! through all of them.
//!
//! Equality follows the same rule: scalars compare by value, containers,
//! callables and deferred results compare by identity.

pub mod callable;
pub mod error;
pub mod path;

pub use callable::*;
pub use error::*;
pub use path::*;

use std::fmt;
use std::sync::Arc;

use futures::future::{BoxFuture, Shared};
use futures::FutureExt;
use indexmap::IndexMap;
use parking_lot::RwLock;

/// A dynamically-typed value.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(List),
    Object(Object),
    Function(Callable),
    /// The pending result of an asynchronous callable.
    Deferred(Deferred),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_callable(&self) -> Option<&Callable> {
        match self {
            Value::Function(callable) => Some(callable),
            _ => None,
        }
    }

    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Object(_) => "object",
            Value::Function(_) => "function",
            Value::Deferred(_) => "deferred",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => a.ptr_eq(b),
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::Deferred(a), Value::Deferred(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<List> for Value {
    fn from(value: List) -> Self {
        Value::List(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl From<Callable> for Value {
    fn from(value: Callable) -> Self {
        Value::Function(value)
    }
}

impl From<Deferred> for Value {
    fn from(value: Deferred) -> Self {
        Value::Deferred(value)
    }
}

// =============================================================================
// CONTAINERS
// =============================================================================

/// Shared, insertion-ordered map of named members.
#[derive(Clone, Default)]
pub struct Object(Arc<RwLock<IndexMap<String, Value>>>);

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for literals in tests and setup code.
    pub fn with(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.0.read().get(key).cloned()
    }

    /// Inserts or replaces a member, keeping the original position of an
    /// existing key.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.write().insert(key.into(), value.into())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.read().contains_key(key)
    }

    pub fn keys(&self) -> Vec<String> {
        self.0.read().keys().cloned().collect()
    }

    /// Snapshot of the members in insertion order.
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.0
            .read()
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }

    pub fn ptr_eq(&self, other: &Object) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn identity(&self) -> usize {
        Arc::as_ptr(&self.0) as usize
    }
}

// Members are not printed: a container may contain itself.
impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object").field("keys", &self.keys()).finish()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let map = iter
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Object(Arc::new(RwLock::new(map)))
    }
}

/// Shared, ordered sequence of values.
#[derive(Clone, Default)]
pub struct List(Arc<RwLock<Vec<Value>>>);

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.read().get(index).cloned()
    }

    pub fn push(&self, value: impl Into<Value>) {
        self.0.write().push(value.into());
    }

    /// Replaces the item at `index`. Returns `false` when out of bounds.
    pub fn set(&self, index: usize, value: impl Into<Value>) -> bool {
        match self.0.write().get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Snapshot of the items in index order.
    pub fn values(&self) -> Vec<Value> {
        self.0.read().clone()
    }

    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }

    pub fn ptr_eq(&self, other: &List) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn identity(&self) -> usize {
        Arc::as_ptr(&self.0) as usize
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List").field("len", &self.len()).finish()
    }
}

impl<V: Into<Value>> FromIterator<V> for List {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let items = iter.into_iter().map(Into::into).collect();
        List(Arc::new(RwLock::new(items)))
    }
}

// =============================================================================
// DEFERRED RESULTS
// =============================================================================

/// A shared, lazily-polled asynchronous result.
///
/// Cloning shares the same underlying future; every clone observes the same
/// outcome once it settles.
#[derive(Clone)]
pub struct Deferred(Shared<BoxFuture<'static, CallResult>>);

impl Deferred {
    pub fn new(future: impl std::future::Future<Output = CallResult> + Send + 'static) -> Self {
        Deferred(future.boxed().shared())
    }

    /// An already-settled result.
    pub fn ready(result: CallResult) -> Self {
        Self::new(futures::future::ready(result))
    }

    /// Waits for the outcome.
    pub async fn resolve(&self) -> CallResult {
        self.0.clone().await
    }

    /// Returns the outcome if some clone has already driven it to completion.
    pub fn peek(&self) -> Option<&CallResult> {
        self.0.peek()
    }

    pub fn ptr_eq(&self, other: &Deferred) -> bool {
        self.0.ptr_eq(&other.0)
    }
}

impl fmt::Debug for Deferred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("settled", &self.peek().is_some())
            .finish()
    }
}
