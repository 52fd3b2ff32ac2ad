//! Builder for configuring a [`MarkupSanitizer`].

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::Result;
use crate::sanitizer::{EVENT_HANDLERS, MarkupSanitizer, RegexStripper};
use crate::storage::{PassThrough, StorageEscape};

/// Builder for configuring a [`MarkupSanitizer`].
///
/// Provides a fluent API for the allowed-tag set and the storage-escaping
/// policy. Both are owned by the caller's application; the sanitizer never
/// reads them from anywhere else.
///
/// # Example
///
/// ```
/// use safe_text::{AddSlashes, MarkupSanitizerBuilder};
///
/// let sanitizer = MarkupSanitizerBuilder::new()
///     .allow_tags(["b", "i", "u"])
///     .allow_tags_str("<p><br>")
///     .storage_escape(AddSlashes)
///     .build()
///     .unwrap();
///
/// assert!(sanitizer.allowed_tags().contains("br"));
/// ```
pub struct MarkupSanitizerBuilder {
    allowed_tags: HashSet<String>,
    storage: Arc<dyn StorageEscape>,
}

impl MarkupSanitizerBuilder {
    /// Create a new builder with no allowed tags and no storage escaping.
    pub fn new() -> Self {
        Self {
            allowed_tags: HashSet::new(),
            storage: Arc::new(PassThrough),
        }
    }

    /// Permit one tag to survive tag filtering.
    ///
    /// Names are case-insensitive and may be written bare (`b`) or bracketed
    /// (`<b>`, `</b>`).
    pub fn allow_tag(mut self, tag: impl AsRef<str>) -> Self {
        let name = normalize_tag(tag.as_ref());
        if !name.is_empty() {
            self.allowed_tags.insert(name);
        }
        self
    }

    /// Permit each of the given tags. See [`allow_tag`](Self::allow_tag).
    pub fn allow_tags<I, S>(self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tags.into_iter().fold(self, |builder, tag| builder.allow_tag(tag))
    }

    /// Permit the tags listed in a bracketed string such as `"<b><i><u>"`.
    pub fn allow_tags_str(self, tags: &str) -> Self {
        self.allow_tags(tags.split('>'))
    }

    /// Set the escaping applied as the final step of
    /// [`safe_text`](MarkupSanitizer::safe_text).
    pub fn storage_escape(mut self, policy: impl StorageEscape + 'static) -> Self {
        self.storage = Arc::new(policy);
        self
    }

    /// Consume the builder and compile the sanitizer.
    pub fn build(self) -> Result<MarkupSanitizer> {
        let events = RegexStripper::try_new(EVENT_HANDLERS)?;
        tracing::debug!("Built markup sanitizer with {} allowed tags", self.allowed_tags.len());
        Ok(MarkupSanitizer::new(self.allowed_tags, events, self.storage))
    }
}

impl Default for MarkupSanitizerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_tag(tag: &str) -> String {
    tag.trim()
        .trim_start_matches('<')
        .trim_start_matches('/')
        .trim_end_matches('>')
        .trim_end_matches('/')
        .trim()
        .to_ascii_lowercase()
}
