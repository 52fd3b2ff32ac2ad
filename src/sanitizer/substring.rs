//! Case-sensitive literal-substring blocklist.

use super::Sanitizer;

/// Sanitizer that removes every occurrence of each token, matched literally
/// and case-sensitively.
///
/// Tokens are applied in order; each token operates on the output of the
/// previous one. Empty tokens are dropped at construction.
///
/// # Example
///
/// ```
/// use safe_text::{Sanitizer, SubstringStripper};
///
/// let s = SubstringStripper::new(["a"]);
/// assert_eq!(s.sanitize("banana"), "bnn");
/// ```
#[derive(Clone, Debug)]
pub struct SubstringStripper {
    tokens: Vec<String>,
}

impl SubstringStripper {
    /// Create a new `SubstringStripper` from a list of tokens.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tokens: tokens
                .into_iter()
                .filter(|t| !t.as_ref().is_empty())
                .map(|t| t.as_ref().to_string())
                .collect(),
        }
    }
}

impl Sanitizer for SubstringStripper {
    fn sanitize(&self, text: &str) -> String {
        self.tokens
            .iter()
            .fold(text.to_string(), |acc, token| acc.replace(token.as_str(), ""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_all_occurrences() {
        let stripper = SubstringStripper::new(["SECRET"]);
        assert_eq!(stripper.sanitize("SECRET and SECRET and SECRET"), " and  and ");
    }

    #[test]
    fn is_case_sensitive() {
        let stripper = SubstringStripper::new(["a"]);
        assert_eq!(stripper.sanitize("bAnana"), "bAnn");
    }

    #[test]
    fn tokens_are_literal() {
        let stripper = SubstringStripper::new([".", "*"]);
        assert_eq!(stripper.sanitize("a.b*c"), "abc");
        assert_eq!(stripper.sanitize("abc"), "abc");
    }

    #[test]
    fn empty_tokens_are_skipped() {
        let stripper = SubstringStripper::new(["", "x"]);
        assert_eq!(stripper.sanitize("axbxc"), "abc");
    }

    #[test]
    fn no_tokens_returns_original() {
        let stripper = SubstringStripper::new(Vec::<String>::new());
        assert_eq!(stripper.sanitize("<p>unchanged</p>"), "<p>unchanged</p>");
    }

    #[test]
    fn tokens_applied_sequentially() {
        // Removing "x" joins "a" and "b" into a token already applied.
        let stripper = SubstringStripper::new(["ab", "x"]);
        assert_eq!(stripper.sanitize("axb"), "ab");
    }
}
