//! # Executor
//!
//! Resolves a tree of [`Selection`]s against a [`Schema`], the way a GraphQL
//! engine executes an operation. There is no query-language parser; selections
//! are built in code.
//!
//! ## Field resolution
//!
//! - A field with a declared resolver gets an [`Invocation`] whose receiver is
//!   the parent value, whose arguments are `[source, arguments, context]`, and
//!   whose `info` slot carries the execution-time [`ResolveInfo`].
//! - A field without one falls back to the default resolver: read the parent
//!   object's property named after the field. A callable property is invoked
//!   with `[arguments, context]`, the parent as receiver and the same `info`.
//! - Deferred results are awaited before completion.
//!
//! ## Completion
//!
//! Non-null wrappers reject nulls, list types complete item by item with the
//! index appended to the path, object types resolve their sub-selections, and
//! scalars are returned as they are.

use futures::future::BoxFuture;
use futures::FutureExt;
use tracing::{debug, trace};

use super::{ExecutionError, Field, NamedType, ObjectType, ResolveInfo, ResponsePath, Schema, TypeRef};
use crate::engine::is_callable;
use crate::value::{CallResult, Invocation, List, Object, Value};

/// One requested field, possibly aliased, with arguments and sub-selections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub name: String,
    pub alias: Option<String>,
    pub arguments: Vec<(String, Value)>,
    pub selections: Vec<Selection>,
}

impl Selection {
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.push((name.into(), value.into()));
        self
    }

    pub fn select(mut self, selections: impl IntoIterator<Item = Selection>) -> Self {
        self.selections.extend(selections);
        self
    }

    /// The key this field appears under in the response.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    fn arguments_object(&self) -> Object {
        self.arguments.iter().cloned().collect()
    }
}

/// Executes `selections` against the query type, with the schema's root value
/// as the top-level source.
pub async fn execute(
    schema: &Schema,
    selections: &[Selection],
    context: Value,
) -> Result<Value, ExecutionError> {
    let query = schema.query_type().ok_or_else(|| ExecutionError::UnknownType {
        name: schema.query_name().to_owned(),
    })?;

    debug!(query = query.name(), fields = selections.len(), "Executing operation");
    let executor = Executor { schema, context };
    executor
        .resolve_object(query, schema.root_value().clone(), selections, ResponsePath::root())
        .await
}

struct Executor<'s> {
    schema: &'s Schema,
    context: Value,
}

impl<'s> Executor<'s> {
    fn resolve_object<'a>(
        &'a self,
        parent: &'a ObjectType,
        source: Value,
        selections: &'a [Selection],
        path: ResponsePath,
    ) -> BoxFuture<'a, Result<Value, ExecutionError>> {
        async move {
            let data = Object::new();

            for selection in selections {
                let field = parent.field(&selection.name).ok_or_else(|| ExecutionError::UnknownField {
                    type_name: parent.name().to_owned(),
                    field: selection.name.clone(),
                })?;
                let field_path = path.key(selection.response_key());
                trace!(path = %field_path, "Resolving field");

                let info = ResolveInfo {
                    field_name: field.name().to_owned(),
                    parent_type: parent.name().to_owned(),
                    return_type: field.ty().clone(),
                    path: field_path.clone(),
                };
                let resolved = match self.resolve_field(field, &source, selection, info) {
                    Ok(Value::Deferred(deferred)) => deferred.resolve().await,
                    other => other,
                }
                .map_err(|source| ExecutionError::Resolver {
                    path: field_path.to_string(),
                    source,
                })?;

                let completed = self.complete(field.ty(), resolved, selection, field_path).await?;
                data.insert(selection.response_key(), completed);
            }

            Ok(Value::Object(data))
        }
        .boxed()
    }

    fn resolve_field(
        &self,
        field: &Field,
        source: &Value,
        selection: &Selection,
        info: ResolveInfo,
    ) -> CallResult {
        let arguments = Value::Object(selection.arguments_object());

        if let Some(resolver) = field.resolver() {
            let invocation = Invocation::new([source.clone(), arguments, self.context.clone()])
                .with_this(source.clone())
                .with_info(info);
            return resolver.call(invocation);
        }

        let property = source
            .as_object()
            .and_then(|object| object.get(field.name()))
            .unwrap_or_default();

        match is_callable(&property) {
            Some(method) => {
                let invocation = Invocation::new([arguments, self.context.clone()])
                    .with_this(source.clone())
                    .with_info(info);
                method.call(invocation)
            }
            None => Ok(property),
        }
    }

    fn complete<'a>(
        &'a self,
        ty: &'a TypeRef,
        value: Value,
        selection: &'a Selection,
        path: ResponsePath,
    ) -> BoxFuture<'a, Result<Value, ExecutionError>> {
        async move {
            match ty {
                TypeRef::NonNull(inner) => {
                    let completed = self.complete(inner, value, selection, path.clone()).await?;
                    if completed.is_null() {
                        return Err(ExecutionError::NullValue {
                            path: path.to_string(),
                        });
                    }
                    Ok(completed)
                }
                _ if value.is_null() => Ok(Value::Null),
                TypeRef::List(inner) => {
                    let Value::List(items) = value else {
                        return Err(ExecutionError::NotAList {
                            path: path.to_string(),
                            kind: value.kind(),
                        });
                    };
                    let completed = List::new();
                    for (index, item) in items.values().into_iter().enumerate() {
                        completed.push(self.complete(inner, item, selection, path.index(index)).await?);
                    }
                    Ok(Value::List(completed))
                }
                TypeRef::Named(name) => match self.schema.get_type(name) {
                    Some(NamedType::Object(object)) => {
                        self.resolve_object(object, value, &selection.selections, path).await
                    }
                    Some(NamedType::Scalar(_)) => Ok(value),
                    None => Err(ExecutionError::UnknownType { name: name.clone() }),
                },
            }
        }
        .boxed()
    }
}
