//! Storage-escaping policies applied as the last step of
//! [`MarkupSanitizer::safe_text`](crate::MarkupSanitizer::safe_text).
//!
//! The crate ships with three policies:
//!
//! - [`PassThrough`] -- no escaping (the default).
//! - [`AddSlashes`] -- backslash-escapes quotes, backslashes, and NUL.
//! - [`SqlQuotes`] -- doubles single quotes for SQL string literals.
//!
//! Implement the [`StorageEscape`] trait, or pass a closure, to add your own.

mod slashes;
mod sql;

pub use slashes::AddSlashes;
pub use sql::SqlQuotes;

/// Trait for adapting sanitized text to a persistence backend's quoting rules.
///
/// Implementations must be `Send + Sync` so a configured sanitizer can be
/// shared across threads.
///
/// # Implementing a custom policy
///
/// ```
/// use safe_text::StorageEscape;
///
/// struct Backticks;
///
/// impl StorageEscape for Backticks {
///     fn escape(&self, text: &str) -> String {
///         text.replace('`', "``")
///     }
/// }
///
/// assert_eq!(Backticks.escape("a`b"), "a``b");
/// ```
pub trait StorageEscape: Send + Sync {
    /// Escape `text` for the target backend.
    fn escape(&self, text: &str) -> String;
}

impl<F> StorageEscape for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn escape(&self, text: &str) -> String {
        self(text)
    }
}

/// Policy that returns text unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassThrough;

impl StorageEscape for PassThrough {
    fn escape(&self, text: &str) -> String {
        text.to_string()
    }
}
