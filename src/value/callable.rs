//! Callable values and the invocations they receive.

use std::fmt;
use std::sync::Arc;

use super::{CallError, Value};
use crate::schema::ResolveInfo;

/// What a callable produces: a value, or the error it "throws".
pub type CallResult = Result<Value, CallError>;

type CallFn = dyn Fn(Invocation) -> CallResult + Send + Sync;

/// Everything a callable receives when invoked.
///
/// The receiver and the positional arguments mirror a plain function call.
/// `info` is the execution-time slot the schema executor fills in when it
/// invokes a field resolver; it stays `None` for direct calls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Invocation {
    pub this: Value,
    pub args: Vec<Value>,
    pub info: Option<ResolveInfo>,
}

impl Invocation {
    pub fn new(args: impl IntoIterator<Item = Value>) -> Self {
        Self {
            this: Value::Null,
            args: args.into_iter().collect(),
            info: None,
        }
    }

    pub fn with_this(mut self, this: impl Into<Value>) -> Self {
        self.this = this.into();
        self
    }

    pub fn with_info(mut self, info: ResolveInfo) -> Self {
        self.info = Some(info);
        self
    }

    pub fn arg(&self, index: usize) -> Option<&Value> {
        self.args.get(index)
    }
}

/// Identity of a callable's underlying function.
///
/// Two [`Callable`] handles share an id exactly when one is a clone of the
/// other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallableId(usize);

/// A shared, named function value.
#[derive(Clone)]
pub struct Callable {
    name: Arc<str>,
    func: Arc<CallFn>,
}

impl Callable {
    pub fn new(
        name: impl Into<Arc<str>>,
        func: impl Fn(Invocation) -> CallResult + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// A callable with an empty name, like an anonymous closure.
    pub fn anonymous(func: impl Fn(Invocation) -> CallResult + Send + Sync + 'static) -> Self {
        Self::new("", func)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, invocation: Invocation) -> CallResult {
        (self.func)(invocation)
    }

    /// Calls with positional arguments only.
    pub fn call_with(&self, args: impl IntoIterator<Item = Value>) -> CallResult {
        self.call(Invocation::new(args))
    }

    pub fn id(&self) -> CallableId {
        CallableId(Arc::as_ptr(&self.func).cast::<()>() as usize)
    }

    pub fn ptr_eq(&self, other: &Callable) -> bool {
        self.id() == other.id()
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
