//! # Resolver Field Wrapping
//!
//! The schema-aware pass. Rather than walking the schema structurally, it goes
//! through the type map: every declared object type outside the reserved `__`
//! namespace, every field on it that carries a resolver.
//!
//! The installed wrapper computes its path per call from the execution-time
//! [`ResolveInfo`], so it reports where in the response the resolver ran
//! (aliases, list indices), not merely `Type.field`. Called directly, without
//! info, it falls back to `Type.field`.
//!
//! Fields without a resolver are left alone; no default resolver is
//! synthesised for them.

use std::sync::Arc;

use tracing::{debug, trace};

use super::{ResolveInfo, Schema};
use crate::engine::{WrapRegistry, WRAPPED_NAME};
use crate::sink::LogSink;
use crate::value::{Callable, Invocation};

/// Path a schema wrapper reports: the response path when the executor supplied
/// one, else the static fallback.
pub fn execution_path(info: Option<&ResolveInfo>, fallback: &str) -> String {
    match info {
        Some(info) => info.path.to_string(),
        None => fallback.to_owned(),
    }
}

/// Wraps a resolver so each call logs `prefix` plus its execution-time path.
pub fn wrap_resolver(
    original: Callable,
    fallback: String,
    prefix: String,
    sink: Arc<dyn LogSink>,
) -> Callable {
    Callable::new(WRAPPED_NAME, move |invocation: Invocation| {
        let path = execution_path(invocation.info.as_ref(), &fallback);
        sink.log(&format!("{prefix}{path}"));
        original.call(invocation)
    })
}

/// Wraps every declared resolver of every non-introspection object type.
///
/// Every field gets its own wrapper, so a resolver shared by two fields still
/// falls back to the right `Type.field`. Returns the number of fields
/// rewritten.
pub fn instrument_schema(
    schema: &mut Schema,
    sink: &Arc<dyn LogSink>,
    prefix: &str,
    registry: &mut WrapRegistry,
) -> usize {
    let mut rewritten = 0;

    for object in schema.object_types_mut() {
        if object.is_introspection() {
            trace!(type_name = object.name(), "Skipping introspection type");
            continue;
        }
        let type_name = object.name().to_owned();

        for field in object.fields_mut() {
            let Some(resolver) = field.resolver().cloned() else {
                continue;
            };
            if registry.is_wrapper(&resolver) {
                continue;
            }
            let fallback = format!("{type_name}.{}", field.name());

            let wrapper = wrap_resolver(resolver.clone(), fallback, prefix.to_owned(), Arc::clone(sink));
            registry.claim(&resolver, &wrapper);
            field.set_resolver(wrapper);
            debug!(type_name = type_name.as_str(), field = field.name(), "Instrumented resolver");
            rewritten += 1;
        }
    }

    rewritten
}
