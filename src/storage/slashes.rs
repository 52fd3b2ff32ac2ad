//! Backslash escaping for backends that expect C-style quoted strings.

use crate::storage::StorageEscape;

/// Policy that prefixes `'`, `"` and `\` with a backslash and writes NUL as
/// `\0`.
///
/// # Example
///
/// ```
/// use safe_text::{AddSlashes, StorageEscape};
///
/// assert_eq!(AddSlashes.escape("O'Reilly"), r"O\'Reilly");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct AddSlashes;

impl StorageEscape for AddSlashes {
    fn escape(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '\'' | '"' | '\\' => {
                    out.push('\\');
                    out.push(c);
                }
                '\0' => out.push_str("\\0"),
                _ => out.push(c),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_quotes_and_backslashes() {
        assert_eq!(AddSlashes.escape(r#"a'b"c\d"#), r#"a\'b\"c\\d"#);
    }

    #[test]
    fn escapes_nul() {
        assert_eq!(AddSlashes.escape("a\0b"), r"a\0b");
    }

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(AddSlashes.escape("plain text"), "plain text");
    }
}
