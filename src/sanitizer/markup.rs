//! Markup sanitizer: tag allow-listing, entity escaping, and removal of
//! script event-handler attribute names.

use std::collections::HashSet;
use std::sync::Arc;

use super::tags::strip_tags;
use super::{RegexStripper, Sanitizer};
use crate::config::MarkupSanitizerBuilder;
use crate::storage::StorageEscape;

/// DOM event-handler attribute names removed when `include_events` is set.
pub const EVENT_HANDLERS: [&str; 20] = [
    "onmousedown",
    "onmouseup",
    "onclick",
    "ondblclick",
    "onmouseover",
    "onmouseout",
    "onselect",
    "onkeydown",
    "onkeypress",
    "onkeyup",
    "onblur",
    "onfocus",
    "onreset",
    "onsubmit",
    "onload",
    "onunload",
    "onresize",
    "onabort",
    "onchange",
    "onerror",
];

/// Escape the characters that are special in HTML: `& < > " '`.
///
/// ```
/// use safe_text::escape_html;
///
/// assert_eq!(
///     escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
///     "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/a&gt;"
/// );
/// ```
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Makes untrusted text safe to render inside markup.
///
/// Built with [`MarkupSanitizer::builder`], which supplies the allowed-tag
/// set and the storage-escaping policy. A built sanitizer is immutable and
/// can be shared freely between threads.
///
/// # Example
///
/// ```
/// use safe_text::MarkupSanitizer;
///
/// let sanitizer = MarkupSanitizer::builder().allow_tags(["b", "i"]).build().unwrap();
///
/// let out = sanitizer.safe_text("<script>alert(1)</script>", false, true);
/// assert_eq!(out, "alert(1)");
///
/// let out = sanitizer.safe_text(r#"<b onclick="go()">hi</b>"#, true, true);
/// assert_eq!(out, "&lt;b =&quot;go()&quot;&gt;hi&lt;/b&gt;");
/// ```
#[derive(Clone)]
pub struct MarkupSanitizer {
    allowed_tags: HashSet<String>,
    no_tags: HashSet<String>,
    events: RegexStripper,
    storage: Arc<dyn StorageEscape>,
}

impl MarkupSanitizer {
    /// Start configuring a sanitizer.
    pub fn builder() -> MarkupSanitizerBuilder {
        MarkupSanitizerBuilder::new()
    }

    pub(crate) fn new(
        allowed_tags: HashSet<String>,
        events: RegexStripper,
        storage: Arc<dyn StorageEscape>,
    ) -> Self {
        Self {
            allowed_tags,
            no_tags: HashSet::new(),
            events,
            storage,
        }
    }

    /// The configured allowed-tag set.
    pub fn allowed_tags(&self) -> &HashSet<String> {
        &self.allowed_tags
    }

    /// Sanitize `text` for inclusion in rendered markup.
    ///
    /// Steps, each consuming the previous step's output:
    ///
    /// 1. Remove tags: all of them, or all but the allowed set when
    ///    `allow_tags` is set.
    /// 2. Escape `& < > " '` as entities.
    /// 3. Trim surrounding whitespace.
    /// 4. If `include_events`, remove every [`EVENT_HANDLERS`] name,
    ///    case-insensitively, until none is left.
    /// 5. Apply the storage-escaping policy.
    ///
    /// Never fails; empty input yields empty output.
    pub fn safe_text(&self, text: &str, allow_tags: bool, include_events: bool) -> String {
        let allowed = if allow_tags {
            &self.allowed_tags
        } else {
            &self.no_tags
        };

        let stripped = strip_tags(text, allowed);
        let escaped = escape_html(&stripped);
        let mut value = escaped.trim().to_string();
        tracing::trace!(
            input = text.len(),
            stripped = stripped.len(),
            escaped = value.len(),
            "filtered and escaped markup"
        );

        if include_events {
            // Removing one name can join its neighbours into another.
            let before = value.len();
            loop {
                let next = self.events.sanitize(&value);
                if next.len() == value.len() {
                    break;
                }
                value = next;
            }
            if value.len() != before {
                tracing::debug!("Removed {} bytes of event handlers", before - value.len());
            }
        }

        self.storage.escape(&value)
    }
}

/// Runs [`safe_text`](MarkupSanitizer::safe_text) with allowed tags kept and
/// event handlers removed.
impl Sanitizer for MarkupSanitizer {
    fn sanitize(&self, text: &str) -> String {
        self.safe_text(text, true, true)
    }
}

impl std::fmt::Debug for MarkupSanitizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkupSanitizer")
            .field("allowed_tags", &self.allowed_tags)
            .finish_non_exhaustive()
    }
}
