//! Execution-time information handed to resolvers.
//!
//! [`ResponsePath`] is the path dialect of the executor: response keys (the
//! alias when one was given, else the field name) and list indices, in the
//! order they were entered while resolving. It is not the same thing as a
//! structural [`Path`](crate::value::Path); the two can disagree for the same
//! resolver.

use std::fmt;

use super::TypeRef;

/// One step of a response path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Position in the response currently being resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ResponsePath(Vec<PathSegment>);

impl ResponsePath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn key(&self, key: impl Into<String>) -> ResponsePath {
        self.child(PathSegment::Key(key.into()))
    }

    pub fn index(&self, index: usize) -> ResponsePath {
        self.child(PathSegment::Index(index))
    }

    fn child(&self, segment: PathSegment) -> ResponsePath {
        let mut segments = self.0.clone();
        segments.push(segment);
        ResponsePath(segments)
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn last(&self) -> Option<&PathSegment> {
        self.0.last()
    }
}

/// Dot-joined, e.g. `hero.friends.1.name`.
impl fmt::Display for ResponsePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// What the executor knows about the field being resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolveInfo {
    pub field_name: String,
    pub parent_type: String,
    pub return_type: TypeRef,
    pub path: ResponsePath,
}
