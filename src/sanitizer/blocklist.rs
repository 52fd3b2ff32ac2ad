//! One-shot blocklist removal over a caller-supplied token list.

use super::{RegexStripper, Sanitizer, SubstringStripper};
use crate::error::Result;
use crate::value::Value;

/// Letter-case handling for [`custom_strip`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CaseMode {
    /// Tokens match only their exact spelling.
    #[default]
    Sensitive,
    /// Tokens match regardless of letter case.
    Insensitive,
}

/// Remove all occurrences of every token from `text`.
///
/// Returns `Ok(None)` for empty text. Empty tokens are ignored, and an empty
/// token list returns the text unchanged. Tokens are always matched literally;
/// [`CaseMode::Insensitive`] escapes them before building a matcher.
///
/// # Errors
///
/// Returns [`SanitizeError::Pattern`](crate::SanitizeError::Pattern) if an
/// insensitive token is too large to compile.
///
/// # Example
///
/// ```
/// use safe_text::{custom_strip, CaseMode};
///
/// let out = custom_strip(&["A"], "banana", CaseMode::Insensitive).unwrap();
/// assert_eq!(out.as_deref(), Some("bnn"));
/// ```
pub fn custom_strip<S: AsRef<str>>(
    tokens: &[S],
    text: &str,
    mode: CaseMode,
) -> Result<Option<String>> {
    if text.is_empty() {
        return Ok(None);
    }

    tracing::debug!("Stripping {} tokens ({mode:?})", tokens.len());
    let stripped = match mode {
        CaseMode::Sensitive => SubstringStripper::new(tokens).sanitize(text),
        CaseMode::Insensitive => RegexStripper::try_new(tokens)?.sanitize(text),
    };
    Ok(Some(stripped))
}

/// [`custom_strip`] for a token argument whose shape is only known at runtime.
///
/// # Errors
///
/// Returns [`SanitizeError::NotAList`](crate::SanitizeError::NotAList) unless
/// `tokens` is a [`Value::List`] of text leaves. Empty text short-circuits to
/// `Ok(None)` before the shape is checked.
pub fn custom_strip_value(tokens: &Value, text: &str, mode: CaseMode) -> Result<Option<String>> {
    if text.is_empty() {
        return Ok(None);
    }

    let tokens = tokens.as_token_list().inspect_err(|e| {
        tracing::warn!("custom_strip_value: {e}");
    })?;
    custom_strip(&tokens, text, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SanitizeError;

    #[test]
    fn empty_text_is_absent() {
        assert!(custom_strip(&["a"], "", CaseMode::Sensitive).unwrap().is_none());
        assert!(custom_strip(&["a"], "", CaseMode::Insensitive).unwrap().is_none());
    }

    #[test]
    fn empty_token_list_is_identity() {
        let out = custom_strip::<&str>(&[], "abc", CaseMode::Sensitive).unwrap();
        assert_eq!(out.as_deref(), Some("abc"));
    }

    #[test]
    fn sensitive_removes_all_occurrences() {
        let out = custom_strip(&["a"], "banana", CaseMode::Sensitive).unwrap();
        assert_eq!(out.as_deref(), Some("bnn"));
        let out = custom_strip(&["A"], "banana", CaseMode::Sensitive).unwrap();
        assert_eq!(out.as_deref(), Some("banana"));
    }

    #[test]
    fn insensitive_removes_all_occurrences() {
        let out = custom_strip(&["A"], "banana", CaseMode::Insensitive).unwrap();
        assert_eq!(out.as_deref(), Some("bnn"));
    }

    #[test]
    fn stripping_everything_is_not_absent() {
        let out = custom_strip(&["ab"], "abab", CaseMode::Sensitive).unwrap();
        assert_eq!(out, Some(String::new()));
    }

    #[test]
    fn default_mode_is_sensitive() {
        assert_eq!(CaseMode::default(), CaseMode::Sensitive);
    }

    #[test]
    fn value_tokens_must_be_a_list() {
        let result = custom_strip_value(&Value::from("a"), "banana", CaseMode::Sensitive);
        assert!(matches!(result, Err(SanitizeError::NotAList)));
    }

    #[test]
    fn value_tokens_empty_text_wins_over_shape() {
        let result = custom_strip_value(&Value::from("a"), "", CaseMode::Sensitive);
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn value_tokens_list() {
        let tokens = Value::from(vec![Value::from("n"), Value::from("")]);
        let out = custom_strip_value(&tokens, "banana", CaseMode::Sensitive).unwrap();
        assert_eq!(out.as_deref(), Some("baaa"));
    }
}
