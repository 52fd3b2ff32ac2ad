//! Quote doubling for standard SQL string literals.

use crate::storage::StorageEscape;

/// Policy that doubles every single quote.
///
/// # Example
///
/// ```
/// use safe_text::{SqlQuotes, StorageEscape};
///
/// assert_eq!(SqlQuotes.escape("O'Reilly"), "O''Reilly");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct SqlQuotes;

impl StorageEscape for SqlQuotes {
    fn escape(&self, text: &str) -> String {
        text.replace('\'', "''")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubles_single_quotes() {
        assert_eq!(SqlQuotes.escape("it's 'quoted'"), "it''s ''quoted''");
    }

    #[test]
    fn leaves_double_quotes_and_backslashes() {
        assert_eq!(SqlQuotes.escape(r#""a\b""#), r#""a\b""#);
    }
}
