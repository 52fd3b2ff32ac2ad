//! # safe_text
//!
//! Stateless sanitizers that make untrusted text safe for two destinations:
//! pattern engines (meta-character removal) and rendered markup (tag
//! allow-listing, entity escaping, and removal of script event-handler
//! attribute names).
//!
//! ## Overview
//!
//! - [`has_metas`] / [`strip_metas`] detect and remove `. \ + * ? [ ^ ] ( $ )`.
//! - [`custom_strip`] removes every occurrence of a list of tokens, with or
//!   without regard to letter case. Tokens are always matched literally.
//! - [`MarkupSanitizer::safe_text`] filters tags, escapes entities, trims,
//!   strips event handlers, and finally applies a caller-chosen
//!   [`StorageEscape`] policy.
//! - [`StructuredSanitizer::safe_array`] runs the markup sanitizer over every
//!   leaf of a nested [`Value`], keeping its shape and keys.
//!
//! Operations that have nothing to return for empty input return `None`, so
//! "no value" is never confused with a sanitized empty string.
//!
//! ## Quick start
//!
//! ```rust
//! use safe_text::{MarkupSanitizer, StructuredSanitizer, Value, SqlQuotes, strip_metas};
//!
//! let markup = MarkupSanitizer::builder()
//!     .allow_tags(["b", "i", "u", "p", "br"])
//!     .storage_escape(SqlQuotes)
//!     .build()
//!     .unwrap();
//!
//! let comment = markup.safe_text("<img src=x onerror=alert(1)>Nice!", true, true);
//! assert_eq!(comment, "Nice!");
//!
//! let form: Value = [("title", "<b>Hi</b> & bye")].into_iter().collect();
//! let clean = StructuredSanitizer::new(markup).safe_array(&form).unwrap();
//! assert_eq!(clean.get("title").and_then(Value::as_text), Some("Hi &amp; bye"));
//!
//! assert_eq!(strip_metas("file(1).txt").as_deref(), Some("file1txt"));
//! ```

pub mod config;
pub mod error;
pub mod sanitizer;
pub mod storage;
pub mod value;

pub use config::MarkupSanitizerBuilder;
pub use error::{Result, SanitizeError};
pub use sanitizer::{
    CaseMode, EVENT_HANDLERS, META_CHARACTERS, MarkupSanitizer, MetaStripper, RegexStripper,
    Sanitizer, SanitizerPipeline, StructuredSanitizer, SubstringStripper, custom_strip,
    custom_strip_value, escape_html, has_metas, strip_metas,
};
pub use storage::{AddSlashes, PassThrough, SqlQuotes, StorageEscape};
pub use value::Value;
