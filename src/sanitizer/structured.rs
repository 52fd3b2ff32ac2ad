//! Sanitizer for nested containers of untrusted text.

use std::slice;

use super::MarkupSanitizer;
use crate::error::{Result, SanitizeError};
use crate::value::Value;

/// Applies [`MarkupSanitizer::safe_text`] to every leaf of a [`Value`] tree.
///
/// Leaves are sanitized with all tags stripped and no event pass; keys,
/// ordering and container kinds are reproduced exactly.
///
/// # Example
///
/// ```
/// use safe_text::{MarkupSanitizer, StructuredSanitizer, Value};
///
/// let sanitizer = StructuredSanitizer::new(MarkupSanitizer::builder().build().unwrap());
/// let form: Value = [("a", Value::from("<b>x</b>"))].into_iter().collect();
///
/// let clean = sanitizer.safe_array(&form).unwrap();
/// assert_eq!(clean.get("a").and_then(Value::as_text), Some("x"));
/// ```
#[derive(Clone, Debug)]
pub struct StructuredSanitizer {
    markup: MarkupSanitizer,
}

/// A container being rebuilt, with a cursor into its source.
enum Frame<'a> {
    List {
        source: slice::Iter<'a, Value>,
        out: Vec<Value>,
    },
    Map {
        source: slice::Iter<'a, (String, Value)>,
        out: Vec<(String, Value)>,
        // Key of the child container currently on top of this frame.
        pending_key: Option<String>,
    },
}

impl<'a> Frame<'a> {
    fn open(value: &'a Value) -> Option<Self> {
        match value {
            Value::Text(_) => None,
            Value::List(items) => Some(Frame::List {
                source: items.iter(),
                out: Vec::with_capacity(items.len()),
            }),
            Value::Map(entries) => Some(Frame::Map {
                source: entries.iter(),
                out: Vec::with_capacity(entries.len()),
                pending_key: None,
            }),
        }
    }

    /// Next unvisited child. For maps, its key is parked in `pending_key`.
    fn next_child(&mut self) -> Option<&'a Value> {
        match self {
            Frame::List { source, .. } => source.next(),
            Frame::Map {
                source,
                pending_key,
                ..
            } => source.next().map(|(key, value)| {
                *pending_key = Some(key.clone());
                value
            }),
        }
    }

    fn push(&mut self, value: Value) {
        match self {
            Frame::List { out, .. } => out.push(value),
            Frame::Map {
                out, pending_key, ..
            } => out.push((pending_key.take().unwrap_or_default(), value)),
        }
    }

    fn close(self) -> Value {
        match self {
            Frame::List { out, .. } => Value::List(out),
            Frame::Map { out, .. } => Value::Map(out),
        }
    }
}

impl StructuredSanitizer {
    /// Create a `StructuredSanitizer` that sanitizes leaves with `markup`.
    pub fn new(markup: MarkupSanitizer) -> Self {
        Self { markup }
    }

    /// Sanitize every leaf of `value`, returning a new tree of the same shape.
    ///
    /// Nesting depth is limited only by memory: the walk keeps its own stack
    /// instead of recursing.
    ///
    /// # Errors
    ///
    /// Returns [`SanitizeError::NotAContainer`] if `value` is a leaf.
    pub fn safe_array(&self, value: &Value) -> Result<Value> {
        let Some(mut current) = Frame::open(value) else {
            tracing::warn!("safe_array called on a leaf value");
            return Err(SanitizeError::NotAContainer);
        };

        // Ancestors of `current`, innermost last.
        let mut stack: Vec<Frame<'_>> = Vec::new();
        let mut leaves = 0usize;
        let mut containers = 1usize;

        loop {
            match current.next_child() {
                Some(Value::Text(text)) => {
                    leaves += 1;
                    current.push(Value::Text(self.markup.safe_text(text, false, false)));
                }
                Some(child) => {
                    if let Some(frame) = Frame::open(child) {
                        containers += 1;
                        stack.push(std::mem::replace(&mut current, frame));
                    }
                }
                None => match stack.pop() {
                    Some(parent) => {
                        let done = std::mem::replace(&mut current, parent).close();
                        current.push(done);
                    }
                    None => {
                        tracing::debug!("Sanitized {leaves} leaves in {containers} containers");
                        return Ok(current.close());
                    }
                },
            }
        }
    }
}
