//! # Deep Traversal
//!
//! Depth-first walk over every member of every container reachable from a
//! root [`Value`].
//!
//! For each member the walk appends the member's key to the parent path. Members
//! that are themselves containers are walked into; every other member (scalars,
//! callables, deferred results, nulls) is handed to the visitor. Deciding which
//! leaves matter is the visitor's job.
//!
//! ## Guarantees
//!
//! - Members are visited in natural order: insertion order for objects, index
//!   order for lists.
//! - A container is expanded at most once per walk, identified by its shared
//!   allocation. Cycles and shared sub-trees therefore terminate; a container
//!   reachable along several paths is walked under the first one.
//! - Each container's members are snapshotted before any of them is visited and
//!   no lock is held while the visitor runs, so the visitor may replace
//!   `container[key]` freely. A replacement is never walked in the same pass.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::value::{Key, List, Object, Path, Value};

/// A container seen during traversal.
#[derive(Debug, Clone)]
pub enum Container {
    Object(Object),
    List(List),
}

impl Container {
    /// The container behind `value`, if it is one.
    pub fn of(value: &Value) -> Option<Container> {
        match value {
            Value::Object(object) => Some(Container::Object(object.clone())),
            Value::List(list) => Some(Container::List(list.clone())),
            _ => None,
        }
    }

    pub fn get(&self, key: &Key) -> Option<Value> {
        match (self, key) {
            (Container::Object(object), Key::Field(name)) => object.get(name),
            (Container::List(list), Key::Index(index)) => list.get(*index),
            _ => None,
        }
    }

    /// Replaces the member at `key`. Keys of the wrong kind are ignored.
    pub fn set(&self, key: &Key, value: Value) {
        match (self, key) {
            (Container::Object(object), Key::Field(name)) => {
                object.insert(name.clone(), value);
            }
            (Container::List(list), Key::Index(index)) => {
                list.set(*index, value);
            }
            _ => trace!(%key, "Key does not address this container"),
        }
    }

    fn identity(&self) -> usize {
        match self {
            Container::Object(object) => object.identity(),
            Container::List(list) => list.identity(),
        }
    }

    fn snapshot(&self) -> Vec<(Key, Value)> {
        match self {
            Container::Object(object) => object
                .entries()
                .into_iter()
                .map(|(name, value)| (Key::Field(name), value))
                .collect(),
            Container::List(list) => list
                .values()
                .into_iter()
                .enumerate()
                .map(|(index, value)| (Key::Index(index), value))
                .collect(),
        }
    }
}

/// One leaf handed to the visitor.
#[derive(Debug)]
pub struct Visit<'a> {
    pub value: &'a Value,
    pub key: &'a Key,
    pub container: &'a Container,
    pub path: &'a Path,
}

/// Walks `root` depth-first, calling `visit` for every non-container member.
///
/// A root that is not a container has no members and produces no visits.
pub fn traverse<F>(root: &Value, mut visit: F)
where
    F: FnMut(Visit<'_>),
{
    let Some(container) = Container::of(root) else {
        debug!(kind = root.kind(), "Root is not a container, nothing to traverse");
        return;
    };

    let mut walker = Walker {
        expanded: HashSet::new(),
        leaves: 0,
        visit: &mut visit,
    };
    walker.walk(&container, &Path::root());

    debug!(
        containers = walker.expanded.len(),
        leaves = walker.leaves,
        "Traversal finished"
    );
}

struct Walker<'v, F> {
    expanded: HashSet<usize>,
    leaves: usize,
    visit: &'v mut F,
}

impl<F> Walker<'_, F>
where
    F: FnMut(Visit<'_>),
{
    fn walk(&mut self, container: &Container, path: &Path) {
        if !self.expanded.insert(container.identity()) {
            trace!(%path, "Container already expanded");
            return;
        }
        trace!(%path, "Expanding container");

        for (key, value) in container.snapshot() {
            let child = path.child(key.clone());
            match Container::of(&value) {
                Some(inner) => self.walk(&inner, &child),
                None => {
                    self.leaves += 1;
                    (self.visit)(Visit {
                        value: &value,
                        key: &key,
                        container,
                        path: &child,
                    });
                }
            }
        }
    }
}
