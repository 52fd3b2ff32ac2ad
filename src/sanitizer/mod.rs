//! Text sanitizers and the pipeline that chains them.
//!
//! Sanitizers implement the [`Sanitizer`] trait and can be composed into a
//! [`SanitizerPipeline`] that runs them sequentially.
//!
//! Built-in sanitizers:
//!
//! - [`SubstringStripper`] -- case-sensitive literal blocklist.
//! - [`RegexStripper`] -- case-insensitive blocklist over escaped patterns.
//! - [`MetaStripper`] -- removes regex meta-characters.
//! - [`MarkupSanitizer`] -- tag filtering, entity escaping, event-handler
//!   removal.
//!
//! [`StructuredSanitizer`] applies a [`MarkupSanitizer`] to every leaf of a
//! nested [`Value`](crate::Value).

mod blocklist;
mod markup;
mod meta;
mod regex;
mod structured;
mod substring;
mod tags;

pub use self::regex::RegexStripper;
pub use blocklist::{CaseMode, custom_strip, custom_strip_value};
pub use markup::{EVENT_HANDLERS, MarkupSanitizer, escape_html};
pub use meta::{META_CHARACTERS, MetaStripper, has_metas, strip_metas};
pub use structured::StructuredSanitizer;
pub use substring::SubstringStripper;

/// Trait for text sanitizers.
///
/// Each sanitizer receives a string and returns a transformed version.
/// Implementations must be `Send + Sync` so they can be shared between
/// threads.
pub trait Sanitizer: Send + Sync {
    /// Transform the given text, returning the sanitized result.
    fn sanitize(&self, text: &str) -> String;
}

/// An ordered chain of [`Sanitizer`] implementations applied sequentially.
///
/// Each sanitizer receives the output of the previous one. An empty pipeline
/// is a no-op.
///
/// # Example
///
/// ```
/// use safe_text::{MarkupSanitizer, MetaStripper, SanitizerPipeline};
///
/// // Render-safe and pattern-safe in one pass.
/// let mut pipeline = SanitizerPipeline::new();
/// pipeline.add(MarkupSanitizer::builder().build().unwrap());
/// pipeline.add(MetaStripper::new());
///
/// assert_eq!(pipeline.sanitize("<i>a.b*</i>"), "ab");
/// ```
#[derive(Default)]
pub struct SanitizerPipeline {
    sanitizers: Vec<Box<dyn Sanitizer>>,
}

impl SanitizerPipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self {
            sanitizers: Vec::new(),
        }
    }

    /// Append a sanitizer to the end of the pipeline.
    pub fn add(&mut self, sanitizer: impl Sanitizer + 'static) {
        self.sanitizers.push(Box::new(sanitizer));
    }

    /// Run the full pipeline on the given text, returning the final result.
    pub fn sanitize(&self, text: &str) -> String {
        self.sanitizers
            .iter()
            .fold(text.to_string(), |acc, s| s.sanitize(&acc))
    }

    /// Returns `true` if no sanitizers have been added.
    pub fn is_empty(&self) -> bool {
        self.sanitizers.is_empty()
    }
}

impl Sanitizer for SanitizerPipeline {
    fn sanitize(&self, text: &str) -> String {
        SanitizerPipeline::sanitize(self, text)
    }
}
