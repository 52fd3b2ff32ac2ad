//! The [`Value`] tree that callers build from untrusted field data before
//! handing it to a [`StructuredSanitizer`](crate::StructuredSanitizer).

use crate::error::{Result, SanitizeError};

/// A nested container of text leaves.
///
/// Maps keep their entries in insertion order, so sanitizing a map yields the
/// same keys in the same order.
///
/// # Example
///
/// ```
/// use safe_text::Value;
///
/// let form: Value = [
///     ("name", Value::from("<b>Ada</b>")),
///     ("tags", Value::from(vec![Value::from("x"), Value::from("y")])),
/// ]
/// .into_iter()
/// .collect();
///
/// assert!(form.is_container());
/// assert_eq!(form.get("name").and_then(Value::as_text), Some("<b>Ada</b>"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// A leaf string.
    Text(String),
    /// An ordered sequence.
    List(Vec<Value>),
    /// An ordered mapping from keys to values.
    Map(Vec<(String, Value)>),
}

impl Value {
    /// Returns `true` for [`Value::List`] and [`Value::Map`].
    pub fn is_container(&self) -> bool {
        !matches!(self, Value::Text(_))
    }

    /// Returns the leaf text, or `None` for containers.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Looks up the first entry with the given key in a map.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Borrows a list of text leaves as blocklist tokens.
    ///
    /// Fails with [`SanitizeError::NotAList`] for leaves, maps, and lists that
    /// contain anything other than text.
    pub fn as_token_list(&self) -> Result<Vec<&str>> {
        let Value::List(items) = self else {
            return Err(SanitizeError::NotAList);
        };
        items
            .iter()
            .map(|item| item.as_text().ok_or(SanitizeError::NotAList))
            .collect()
    }
}

/// Children are moved onto a heap stack before they drop, so tearing down a
/// deeply nested tree does not recurse.
impl Drop for Value {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        take_children(self, &mut stack);
        while let Some(mut child) = stack.pop() {
            take_children(&mut child, &mut stack);
        }
    }
}

fn take_children(value: &mut Value, stack: &mut Vec<Value>) {
    match value {
        Value::Text(_) => {}
        Value::List(items) => stack.append(items),
        Value::Map(entries) => stack.extend(entries.drain(..).map(|(_, v)| v)),
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
