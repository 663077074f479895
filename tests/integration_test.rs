use std::sync::Arc;

use graphql_log::sink::{LineSink, RecordingSink};
use graphql_log::{
    create_graphql_logger, CallError, Callable, GraphQLLogger, Invocation, List, LoggerOptions, Object,
    Value,
};
use parking_lot::Mutex;

fn logger_with_spy(prefix: &str) -> (GraphQLLogger, RecordingSink) {
    let spy = RecordingSink::new();
    let options = LoggerOptions::new().with_sink(spy.clone()).with_prefix(prefix);
    (GraphQLLogger::new(options), spy)
}

fn noop() -> Callable {
    Callable::new("noop", |_| Ok(Value::Null))
}

fn call(object: &Object, key: &str, invocation: Invocation) -> Result<Value, CallError> {
    object
        .get(key)
        .and_then(|v| v.as_callable().cloned())
        .expect("member should be callable")
        .call(invocation)
}

/// A top-level callable logs its own key.
#[test]
fn test_top_level_function_logs_key() {
    let (logger, spy) = logger_with_spy("");
    let obj = Object::new().with("a", noop());

    logger.instrument(&Value::from(obj.clone()));
    call(&obj, "a", Invocation::default()).expect("call should succeed");

    spy.assert_logged(&["a"]);
}

/// Nested callables log the dot-joined path from the root.
#[test]
fn test_nested_function_logs_dotted_path() {
    let (logger, spy) = logger_with_spy("");
    let nested = Object::new().with("a", noop());
    let obj = Object::new().with("nested", nested.clone());

    logger.instrument(&Value::from(obj));
    call(&nested, "a", Invocation::default()).expect("call should succeed");

    spy.assert_logged(&["nested.a"]);
}

/// The prefix is prepended verbatim.
#[test]
fn test_prefix_is_prepended() {
    let (logger, spy) = logger_with_spy("svc.");
    let obj = Object::new().with("a", noop());

    logger.instrument(&Value::from(obj.clone()));
    call(&obj, "a", Invocation::default()).expect("call should succeed");

    spy.assert_logged(&["svc.a"]);
}

/// Non-callables keep their value; callables are replaced by a distinct wrapper.
#[test]
fn test_non_functions_are_left_alone() {
    let (logger, _spy) = logger_with_spy("");
    let original = noop();
    let shared_list: List = [1, 2].into_iter().collect();
    let obj = Object::new()
        .with("a", original.clone())
        .with("b", "str")
        .with("n", Value::Null)
        .with("list", shared_list.clone());

    logger.instrument(&Value::from(obj.clone()));

    assert_eq!(obj.get("b"), Some(Value::from("str")));
    assert_eq!(obj.get("n"), Some(Value::Null));
    assert_eq!(obj.get("list"), Some(Value::from(shared_list)));

    let wrapped = obj.get("a").and_then(|v| v.as_callable().cloned()).expect("still callable");
    assert!(!wrapped.ptr_eq(&original));
    assert_eq!(wrapped.name(), "wrapped");
}

/// Arguments, receiver, and return value pass through untouched, with one log per call.
#[test]
fn test_arguments_and_results_pass_through() {
    let (logger, spy) = logger_with_spy("");
    let received = Arc::new(Mutex::new(None));
    let target = {
        let received = Arc::clone(&received);
        Callable::new("target", move |inv: Invocation| {
            let count = inv.args.len() as i64;
            *received.lock() = Some(inv);
            Ok(Value::from(count))
        })
    };
    let obj = Object::new().with("test", target);

    logger.instrument(&Value::from(obj.clone()));

    let invocation = Invocation::new([Value::from("some"), Value::from("arguments")]).with_this(obj.clone());
    let result = call(&obj, "test", invocation.clone()).expect("call should succeed");

    assert_eq!(result, Value::Int(2));
    assert_eq!(received.lock().as_ref(), Some(&invocation));
    spy.assert_logged(&["test"]);
}

/// Errors from the original propagate unchanged after exactly one log entry.
#[test]
fn test_errors_propagate_after_logging() {
    let (logger, spy) = logger_with_spy("");
    let io_error = CallError::source_error(std::io::Error::other("disk on fire"));
    let failing = {
        let io_error = io_error.clone();
        Callable::new("failing", move |_| Err(io_error.clone()))
    };
    let obj = Object::new().with("failing", failing);

    logger.instrument(&Value::from(obj.clone()));
    let err = call(&obj, "failing", Invocation::default()).expect_err("call should fail");

    match (&err, &io_error) {
        (CallError::Source(got), CallError::Source(expected)) => assert!(Arc::ptr_eq(got, expected)),
        _ => panic!("unexpected error: {err:?}"),
    }
    spy.assert_logged(&["failing"]);
}

/// Self-referential graphs are instrumented without looping.
#[test]
fn test_cyclic_graph_terminates() {
    let (logger, spy) = logger_with_spy("");
    let obj = Object::new().with("run", noop());
    obj.insert("self", obj.clone());
    let children: List = [Value::from(obj.clone())].into_iter().collect();
    obj.insert("children", children);

    let report = logger.instrument(&Value::from(obj.clone()));
    call(&obj, "run", Invocation::default()).expect("call should succeed");

    assert_eq!(report.callables, 1);
    spy.assert_logged(&["run"]);
}

/// List members are addressed by index.
#[test]
fn test_list_members_use_index_segments() {
    let (logger, spy) = logger_with_spy("");
    let handler = Object::new().with("run", noop());
    let handlers: List = [Value::from(Object::new()), Value::from(handler.clone())].into_iter().collect();

    logger.instrument(&Value::from(Object::new().with("handlers", handlers)));
    call(&handler, "run", Invocation::default()).expect("call should succeed");

    spy.assert_logged(&["handlers.1.run"]);
}

/// One function under two keys logs whichever key it was called through.
#[test]
fn test_shared_function_logs_each_key() {
    let (logger, spy) = logger_with_spy("");
    let shared = noop();
    let obj = Object::new().with("test", shared.clone()).with("test2", shared);

    logger.instrument(&Value::from(obj.clone()));
    call(&obj, "test2", Invocation::default()).expect("call should succeed");
    call(&obj, "test", Invocation::default()).expect("call should succeed");

    spy.assert_logged(&["test2", "test"]);
}

/// One function at two list positions logs the position it was called through.
#[test]
fn test_shared_function_logs_each_index() {
    let (logger, spy) = logger_with_spy("");
    let shared = noop();
    let handlers: List = [shared.clone(), shared].into_iter().collect();

    logger.instrument(&Value::from(Object::new().with("handlers", handlers.clone())));
    let second = handlers.get(1).and_then(|v| v.as_callable().cloned()).expect("callable item");
    second.call(Invocation::default()).expect("call should succeed");

    spy.assert_logged(&["handlers.1"]);
}

/// The function returned by `create_graphql_logger` instruments in place.
#[test]
fn test_create_graphql_logger_returns_instrumenter() {
    let spy = RecordingSink::new();
    let log_executions = create_graphql_logger(LoggerOptions::new().with_sink(spy.clone()));
    let obj = Object::new().with("test", noop()).with("test2", noop());

    log_executions((&Value::from(obj.clone())).into());
    call(&obj, "test2", Invocation::default()).expect("call should succeed");
    call(&obj, "test", Invocation::default()).expect("call should succeed");

    spy.assert_logged(&["test2", "test"]);
}

/// A closure works as a custom sink.
#[test]
fn test_closure_sink_receives_paths() {
    let seen = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink = {
        let seen = Arc::clone(&seen);
        move |path: &str| seen.lock().push(path.to_owned())
    };
    let logger = GraphQLLogger::new(LoggerOptions::new().with_sink(sink));
    let obj = Object::new().with("test", noop());

    logger.instrument(&Value::from(obj.clone()));
    call(&obj, "test", Invocation::default()).expect("call should succeed");

    assert_eq!(*seen.lock(), vec!["test".to_owned()]);
}

/// The line sink writes one line per call.
#[test]
fn test_line_sink_writes_lines() {
    let buffer = SharedBuffer::default();
    let logger = GraphQLLogger::new(
        LoggerOptions::new()
            .with_sink(LineSink::new(buffer.clone()))
            .with_prefix("api."),
    );
    let obj = Object::new().with("a", noop()).with("b", noop());

    logger.instrument(&Value::from(obj.clone()));
    call(&obj, "b", Invocation::default()).expect("call should succeed");
    call(&obj, "a", Invocation::default()).expect("call should succeed");

    assert_eq!(buffer.contents(), "api.b\napi.a\n");
}

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().clone()).expect("utf-8 output")
    }
}

impl std::io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// With default options, wrapped calls still behave and write to stdout.
#[test]
fn test_default_sink_does_not_disturb_calls() {
    let logger = GraphQLLogger::default();
    let obj = Object::new().with("answer", Callable::new("answer", |_| Ok(Value::Int(42))));

    logger.instrument(&Value::from(obj.clone()));

    assert_eq!(call(&obj, "answer", Invocation::default()).expect("call should succeed"), Value::Int(42));
}

const STDOUT_CHILD_ENV: &str = "GRAPHQL_LOG_STDOUT_CHILD";

/// Runs in a child process only; writes through the default sink.
#[test]
fn test_default_sink_child() {
    if std::env::var_os(STDOUT_CHILD_ENV).is_none() {
        return;
    }
    let obj = Object::new().with("answer", noop());
    GraphQLLogger::default().instrument(&Value::from(obj.clone()));
    call(&obj, "answer", Invocation::default()).expect("call should succeed");
}

/// The default sink writes one line per call to stdout.
#[test]
fn test_default_sink_writes_to_stdout() {
    let exe = std::env::current_exe().expect("test binary path");
    let output = std::process::Command::new(exe)
        .args(["test_default_sink_child", "--exact", "--nocapture", "--test-threads=1"])
        .env(STDOUT_CHILD_ENV, "1")
        .output()
        .expect("child test run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("answer\n"), "stdout was: {stdout}");
}
