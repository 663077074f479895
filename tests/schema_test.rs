use graphql_log::schema::{execute, Field, ObjectType, Schema, Selection, TypeRef};
use graphql_log::sink::RecordingSink;
use graphql_log::{Callable, GraphQLLogger, Invocation, List, LoggerOptions, Object, Value};

fn logger_with_spy(prefix: &str) -> (GraphQLLogger, RecordingSink) {
    let spy = RecordingSink::new();
    let options = LoggerOptions::new().with_sink(spy.clone()).with_prefix(prefix);
    (GraphQLLogger::new(options), spy)
}

fn field_of(value: &Value, key: &str) -> Value {
    value.as_object().and_then(|o| o.get(key)).unwrap_or_default()
}

fn hello_schema() -> Schema {
    Schema::new(
        ObjectType::new("Query")
            .with_field(Field::new("hello", TypeRef::named("String")).resolve(|_| Ok(Value::from("world")))),
    )
}

/// A declared resolver logs its execution-time path and still returns its value.
#[tokio::test]
async fn test_schema_resolver_logs_execution_path() {
    let (logger, spy) = logger_with_spy("");
    let mut schema = hello_schema();

    let report = logger.instrument(&mut schema);
    let result = execute(&schema, &[Selection::field("hello")], Value::Null)
        .await
        .expect("execution should succeed");

    assert_eq!(report.resolvers, 1);
    assert_eq!(field_of(&result, "hello"), Value::from("world"));
    spy.assert_logged(&["hello"]);
}

/// Aliases and list positions show up in the logged path.
#[tokio::test]
async fn test_execution_paths_follow_query_shape() {
    let (logger, spy) = logger_with_spy("gql.");
    let heroes: List = [
        Object::new().with("name", "Luke"),
        Object::new().with("name", "Leia"),
    ]
    .into_iter()
    .collect();
    let query = ObjectType::new("Query").with_field(
        Field::new("heroes", TypeRef::list(TypeRef::named("Hero"))).resolve(move |_| Ok(heroes.clone().into())),
    );
    let hero = ObjectType::new("Hero").with_field(
        Field::new("name", TypeRef::named("String")).resolve(|inv| Ok(field_of(&inv.this, "name"))),
    );
    let mut schema = Schema::new(query).with_type(hero);

    logger.instrument(&mut schema);
    let result = execute(
        &schema,
        &[Selection::field("heroes").alias("rebels").select([Selection::field("name")])],
        Value::Null,
    )
    .await
    .expect("execution should succeed");

    spy.assert_logged(&["gql.rebels", "gql.rebels.0.name", "gql.rebels.1.name"]);
    let rebels = field_of(&result, "rebels");
    let leia = rebels.as_list().and_then(|l| l.get(1)).expect("second hero");
    assert_eq!(field_of(&leia, "name"), Value::from("Leia"));
}

/// A resolver that is both declared and present in the root value is wrapped once.
#[tokio::test]
async fn test_shared_resolver_is_not_double_wrapped() {
    let (logger, spy) = logger_with_spy("");
    let hello = Callable::new("hello", |_| Ok(Value::from("world")));
    let root = Object::new().with("hello", hello.clone());
    let mut schema = Schema::new(
        ObjectType::new("Query")
            .with_field(Field::new("hello", TypeRef::named("String")).with_resolver(hello.clone())),
    )
    .with_root_value(root.clone());

    let report = logger.instrument(&mut schema);

    let declared = schema
        .query_type()
        .and_then(|q| q.field("hello"))
        .and_then(|f| f.resolver())
        .cloned()
        .expect("declared resolver");
    let from_root = root.get("hello").and_then(|v| v.as_callable().cloned()).expect("root resolver");
    assert!(declared.ptr_eq(&from_root));
    assert_eq!(report.resolvers, 1);
    assert_eq!(report.callables, 1);

    execute(&schema, &[Selection::field("hello").alias("greeting")], Value::Null)
        .await
        .expect("execution should succeed");
    spy.assert_logged(&["greeting"]);
}

/// Root-value functions without a declared resolver get the generic dialect.
#[tokio::test]
async fn test_root_value_functions_use_structural_paths() {
    let (logger, spy) = logger_with_spy("");
    let mut schema = Schema::new(
        ObjectType::new("Query")
            .with_field(Field::new("version", TypeRef::named("Int")))
            .with_field(Field::new("status", TypeRef::named("String"))),
    )
    .with_root_value(
        Object::new()
            .with("version", 3)
            .with("status", Callable::new("status", |_| Ok(Value::from("ok")))),
    );

    let report = logger.instrument(&mut schema);
    let result = execute(
        &schema,
        &[Selection::field("version"), Selection::field("status").alias("health")],
        Value::Null,
    )
    .await
    .expect("execution should succeed");

    assert_eq!(report.resolvers, 0);
    assert_eq!(field_of(&result, "version"), Value::Int(3));
    assert_eq!(field_of(&result, "health"), Value::from("ok"));
    spy.assert_logged(&["status"]);
}

/// Fields without resolvers stay without resolvers.
#[test]
fn test_fields_without_resolvers_are_untouched() {
    let (logger, _spy) = logger_with_spy("");
    let mut schema = Schema::new(
        ObjectType::new("Query").with_field(Field::new("plain", TypeRef::named("String"))),
    );

    logger.instrument(&mut schema);

    let plain = schema.query_type().and_then(|q| q.field("plain")).expect("field");
    assert!(plain.resolver().is_none());
}

/// Direct calls outside the executor fall back to `Type.field`.
#[test]
fn test_direct_resolver_call_uses_static_path() {
    let (logger, spy) = logger_with_spy("");
    let mut schema = hello_schema();

    logger.instrument(&mut schema);
    let resolver = schema
        .query_type()
        .and_then(|q| q.field("hello"))
        .and_then(|f| f.resolver())
        .expect("resolver");

    assert_eq!(resolver.call(Invocation::default()).expect("call"), Value::from("world"));
    spy.assert_logged(&["Query.hello"]);
}
