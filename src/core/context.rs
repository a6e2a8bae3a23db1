//! Context Field Carrier
//!
//! A `Context` carries an ordered list of key/value pairs down a call
//! chain. Appending never touches the parent: each node points at its
//! parent through an `Arc`, so derived contexts share their prefix and
//! siblings never observe each other.
//!
//! # Example
//!
//! ```
//! use rust_logging_facade::core::Context;
//!
//! let request = Context::background().with_field("request_id", "abc-123");
//! let handler = request.with_field("route", "/login");
//!
//! assert_eq!(request.fields().len(), 1);
//! assert_eq!(handler.fields().len(), 2);
//! ```

use super::field::FieldValue;
use std::fmt;
use std::sync::Arc;

struct Node {
    key: String,
    value: FieldValue,
    parent: Option<Arc<Node>>,
}

impl Drop for Node {
    /// Unlink uniquely owned ancestors one at a time so a long chain is
    /// freed in a loop instead of one stack frame per node.
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut inner) => next = inner.parent.take(),
                Err(_) => break,
            }
        }
    }
}

#[derive(Clone, Default)]
pub struct Context {
    head: Option<Arc<Node>>,
    len: usize,
}

impl Context {
    /// An empty context with no carried fields.
    pub fn background() -> Self {
        Self::default()
    }

    /// Derive a child context with one more pair appended.
    #[must_use]
    pub fn with_field<K, V>(&self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        Self {
            head: Some(Arc::new(Node {
                key: key.into(),
                value: value.into(),
                parent: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// All carried pairs in append order.
    pub fn fields(&self) -> Vec<(String, FieldValue)> {
        let mut out = Vec::with_capacity(self.len);
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            out.push((node.key.clone(), node.value.clone()));
            cursor = node.parent.as_deref();
        }
        out.reverse();
        out
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("fields", &self.fields())
            .finish()
    }
}

/// Append a pair to `parent`, treating an absent parent as an empty one.
pub fn append<K, V>(parent: Option<&Context>, key: K, value: V) -> Context
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    match parent {
        Some(ctx) => ctx.with_field(key, value),
        None => Context::background().with_field(key, value),
    }
}

/// Read the carried pairs; an absent context reads as empty.
pub fn read(ctx: Option<&Context>) -> Vec<(String, FieldValue)> {
    ctx.map(Context::fields).unwrap_or_default()
}
