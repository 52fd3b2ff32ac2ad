//! Detection and removal of regex meta-characters.
//!
//! Text containing any of `. \ + * ? [ ^ ] ( $ )` can change the meaning of a
//! pattern it is spliced into. [`has_metas`] reports whether such characters
//! are present; [`strip_metas`] removes them as literal substrings, so the
//! stripper itself never interprets its input as a pattern.

use super::{Sanitizer, SubstringStripper};

/// The meta-characters removed by [`strip_metas`], in removal order.
pub const META_CHARACTERS: [&str; 11] = [".", "+", "*", "?", "[", "^", "]", "(", "$", ")", "\\"];

const META_CHARS: [char; 11] = ['.', '+', '*', '?', '[', '^', ']', '(', '$', ')', '\\'];

/// Returns `true` if `text` contains at least one meta-character.
///
/// Empty text has none.
///
/// ```
/// use safe_text::has_metas;
///
/// assert!(has_metas("a.b"));
/// assert!(!has_metas("abc"));
/// assert!(!has_metas(""));
/// ```
pub fn has_metas(text: &str) -> bool {
    text.contains(META_CHARS)
}

/// Removes every meta-character from `text`.
///
/// Returns `None` for empty text.
///
/// ```
/// use safe_text::strip_metas;
///
/// assert_eq!(strip_metas("a.b*c").as_deref(), Some("abc"));
/// assert_eq!(strip_metas(""), None);
/// ```
pub fn strip_metas(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    Some(MetaStripper::new().sanitize(text))
}

/// [`Sanitizer`] form of [`strip_metas`], for use in a
/// [`SanitizerPipeline`](super::SanitizerPipeline).
#[derive(Clone, Debug)]
pub struct MetaStripper {
    inner: SubstringStripper,
}

impl MetaStripper {
    /// Create a `MetaStripper` for the [`META_CHARACTERS`] set.
    pub fn new() -> Self {
        Self {
            inner: SubstringStripper::new(META_CHARACTERS),
        }
    }
}

impl Default for MetaStripper {
    fn default() -> Self {
        Self::new()
    }
}

impl Sanitizer for MetaStripper {
    fn sanitize(&self, text: &str) -> String {
        self.inner.sanitize(text)
    }
}
