#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # graphql-log
//!
//! > **Log every resolver call, without touching a single resolver.**
//!
//! This crate takes a resolver map (any nested [`Value`] graph) or a typed
//! [`Schema`](schema::Schema), finds every callable reachable from it, and
//! swaps each one for a wrapper that reports the callable's path to a
//! [`LogSink`](sink::LogSink) before delegating. The wrappers are drop-in
//! replacements: same arguments, same receiver, same result, same error.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Install once, log per call
//! Instrumentation is a one-shot, synchronous rewrite of the structure you hand
//! in. Nothing runs in the background afterwards; each wrapped call logs exactly
//! once, at call time, and then gets out of the way. Asynchronous results are
//! passed back unawaited.
//!
//! ### Two path dialects
//! A callable found by walking the value graph is logged under its structural
//! path (`nested.items.0.run`). A resolver declared on a schema field is logged
//! under the path the executor is resolving (`hero.friends.1.name`), which knows
//! about aliases and list positions. The two are kept apart on purpose: they do
//! not have to agree for the same function.
//!
//! ### One log line per call
//! Both passes share a per-run registry. Every slot in the value graph gets
//! its own wrapper, so a function stored under two keys logs whichever key it
//! was called through. A resolver reachable from both the schema and its root
//! value sits behind the schema wrapper in both places and logs once per call.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`value`])
//! Cheap-to-clone handles over shared, mutable containers and callables.
//! - **Key items**: [`Value`], [`Object`], [`List`], [`Callable`], [`Invocation`].
//!
//! ### 2. The Engine ([`engine`])
//! The cycle-safe depth-first walk and the generic wrapping pass.
//! - **Key items**: [`traverse`](engine::traverse()), [`is_callable`](engine::is_callable),
//!   [`WrapRegistry`](engine::WrapRegistry).
//!
//! ### 3. The Schema ([`schema`])
//! Typed schema model, a small executor, and the resolver wrapping pass.
//! - **Key items**: [`Schema`](schema::Schema), [`execute`](schema::execute()),
//!   [`ResolveInfo`](schema::ResolveInfo).
//!
//! ### 4. The Output ([`sink`])
//! Where paths go: stdout lines by default, `tracing` events, or any closure.
//!
//! ### 5. The Entry Point ([`logger`])
//! Options, configuration, and [`GraphQLLogger`].
//!
//! ## 🚀 Quick Start
//!
//! ```
//! use graphql_log::sink::RecordingSink;
//! use graphql_log::{Callable, GraphQLLogger, LoggerOptions, Object, Value};
//!
//! let spy = RecordingSink::new();
//! let logger = GraphQLLogger::new(LoggerOptions::new().with_sink(spy.clone()).with_prefix("svc."));
//!
//! let users = Object::new().with("list", Callable::anonymous(|_| Ok(Value::Null)));
//! let resolvers = Value::from(Object::new().with("users", users.clone()));
//! logger.instrument(&resolvers);
//!
//! users.get("list").unwrap().as_callable().unwrap().call(Default::default()).unwrap();
//! spy.assert_logged(&["svc.users.list"]);
//! ```

pub mod engine;
pub mod logger;
pub mod schema;
pub mod sink;
pub mod value;

pub use logger::{
    create_graphql_logger, ConfigError, GraphQLLogger, InstrumentReport, LoggerConfig, LoggerOptions,
    SinkKind, Target,
};
pub use value::{CallError, CallResult, Callable, Deferred, Invocation, Key, List, Object, Path, Value};
