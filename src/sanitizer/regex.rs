//! Case-insensitive blocklist built on escaped regex patterns.

use regex::{Regex, RegexBuilder};

use super::Sanitizer;

/// Sanitizer that removes every occurrence of each token regardless of
/// letter case.
///
/// Each token is passed through [`regex::escape`] before compilation, so
/// tokens containing `.`, `*` and other pattern meta-characters match only
/// themselves. Tokens are applied in order; empty tokens are dropped.
///
/// # Example
///
/// ```
/// use safe_text::{RegexStripper, Sanitizer};
///
/// let stripper = RegexStripper::new(["onclick"]);
/// assert_eq!(stripper.sanitize("a OnClick=b"), "a =b");
/// ```
#[derive(Clone, Debug)]
pub struct RegexStripper {
    patterns: Vec<Regex>,
}

impl RegexStripper {
    /// Create a new `RegexStripper` from a list of tokens.
    ///
    /// # Panics
    ///
    /// Panics if a token is too large for the regex engine. Use
    /// [`try_new`](Self::try_new) for a fallible alternative.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::try_new(tokens).expect("token exceeds regex size limit")
    }

    /// Fallible constructor that returns a [`regex::Error`] when a token
    /// cannot be compiled.
    pub fn try_new<I, S>(tokens: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = tokens
            .into_iter()
            .filter(|t| !t.as_ref().is_empty())
            .map(|t| {
                RegexBuilder::new(&regex::escape(t.as_ref()))
                    .case_insensitive(true)
                    .build()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }
}

impl Sanitizer for RegexStripper {
    fn sanitize(&self, text: &str) -> String {
        self.patterns.iter().fold(text.to_string(), |acc, re| {
            re.replace_all(&acc, "").into_owned()
        })
    }
}
