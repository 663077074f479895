//! # Typed Schema
//!
//! A minimal GraphQL-style schema: a type map of named types, object types with
//! declared fields, and optional per-field resolvers. Fields without a resolver
//! are served from the schema's root value by the executor's default
//! resolver.
//!
//! ```
//! use graphql_log::schema::{Field, ObjectType, Schema, TypeRef};
//! use graphql_log::Value;
//!
//! let schema = Schema::new(
//!     ObjectType::new("Query")
//!         .with_field(Field::new("hello", TypeRef::named("String")).resolve(|_| Ok(Value::from("world")))),
//! );
//!
//! assert!(schema.object_type("Query").and_then(|q| q.field("hello")).is_some());
//! ```
//!
//! See [`execute`] for running selections and [`instrument`] for the resolver
//! wrapping pass.

pub mod error;
pub mod execute;
pub mod info;
pub mod instrument;

pub use error::*;
pub use execute::{execute, Selection};
pub use info::*;
pub use instrument::instrument_schema;

use std::fmt;

use indexmap::IndexMap;

use crate::value::{CallResult, Callable, Invocation, Value};

/// Scalars every schema knows about.
pub const BUILTIN_SCALARS: [&str; 5] = ["String", "Int", "Float", "Boolean", "ID"];

/// Reference to a type from a field declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    pub fn list(inner: TypeRef) -> Self {
        TypeRef::List(Box::new(inner))
    }

    pub fn non_null(inner: TypeRef) -> Self {
        TypeRef::NonNull(Box::new(inner))
    }

    /// The innermost named type, with list and non-null wrappers removed.
    pub fn named_type(&self) -> &str {
        match self {
            TypeRef::Named(name) => name,
            TypeRef::List(inner) | TypeRef::NonNull(inner) => inner.named_type(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => f.write_str(name),
            TypeRef::List(inner) => write!(f, "[{inner}]"),
            TypeRef::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

/// A declared field and, optionally, the resolver that produces it.
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    ty: TypeRef,
    resolver: Option<Callable>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            resolver: None,
        }
    }

    pub fn with_resolver(mut self, resolver: Callable) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Attaches a closure as resolver, named after the field.
    pub fn resolve(self, func: impl Fn(Invocation) -> CallResult + Send + Sync + 'static) -> Self {
        let resolver = Callable::new(self.name.as_str(), func);
        self.with_resolver(resolver)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }

    pub fn resolver(&self) -> Option<&Callable> {
        self.resolver.as_ref()
    }

    pub(crate) fn set_resolver(&mut self, resolver: Callable) {
        self.resolver = Some(resolver);
    }
}

/// A composite type with insertion-ordered fields.
#[derive(Debug, Clone)]
pub struct ObjectType {
    name: String,
    fields: IndexMap<String, Field>,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: IndexMap::new(),
        }
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.insert(field.name.clone(), field);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }

    pub(crate) fn fields_mut(&mut self) -> impl Iterator<Item = &mut Field> {
        self.fields.values_mut()
    }

    /// Types in the reserved `__` namespace belong to introspection.
    pub fn is_introspection(&self) -> bool {
        self.name.starts_with("__")
    }
}

/// Any entry of the type map.
#[derive(Debug, Clone)]
pub enum NamedType {
    Scalar(String),
    Object(ObjectType),
}

impl NamedType {
    pub fn name(&self) -> &str {
        match self {
            NamedType::Scalar(name) => name,
            NamedType::Object(object) => object.name(),
        }
    }
}

impl From<ObjectType> for NamedType {
    fn from(object: ObjectType) -> Self {
        NamedType::Object(object)
    }
}

/// A typed schema: its type map, the query root type, and the root value
/// handed to top-level fields.
#[derive(Debug, Clone)]
pub struct Schema {
    query: String,
    types: IndexMap<String, NamedType>,
    root_value: Value,
}

impl Schema {
    /// Creates a schema rooted at `query`, with the built-in scalars registered.
    pub fn new(query: ObjectType) -> Self {
        let mut types: IndexMap<String, NamedType> = BUILTIN_SCALARS
            .iter()
            .map(|name| (name.to_string(), NamedType::Scalar(name.to_string())))
            .collect();
        let query_name = query.name().to_owned();
        types.insert(query_name.clone(), query.into());

        Self {
            query: query_name,
            types,
            root_value: Value::Null,
        }
    }

    /// Registers (or replaces) a named type.
    pub fn with_type(mut self, ty: impl Into<NamedType>) -> Self {
        let ty = ty.into();
        self.types.insert(ty.name().to_owned(), ty);
        self
    }

    pub fn with_root_value(mut self, root_value: impl Into<Value>) -> Self {
        self.root_value = root_value.into();
        self
    }

    pub fn query_name(&self) -> &str {
        &self.query
    }

    pub fn query_type(&self) -> Option<&ObjectType> {
        self.object_type(&self.query)
    }

    pub fn type_map(&self) -> &IndexMap<String, NamedType> {
        &self.types
    }

    pub fn get_type(&self, name: &str) -> Option<&NamedType> {
        self.types.get(name)
    }

    pub fn object_type(&self, name: &str) -> Option<&ObjectType> {
        match self.types.get(name) {
            Some(NamedType::Object(object)) => Some(object),
            _ => None,
        }
    }

    pub fn root_value(&self) -> &Value {
        &self.root_value
    }

    pub(crate) fn object_types_mut(&mut self) -> impl Iterator<Item = &mut ObjectType> {
        self.types.values_mut().filter_map(|ty| match ty {
            NamedType::Object(object) => Some(object),
            NamedType::Scalar(_) => None,
        })
    }
}
