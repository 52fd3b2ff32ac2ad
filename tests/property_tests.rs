//! Property tests for the sanitizers.
//!
//! These check the guarantees that must hold for every input, not just the
//! hand-picked examples in `integration.rs`.

use safe_text::{
    CaseMode, META_CHARACTERS, MarkupSanitizer, StructuredSanitizer, Value, custom_strip,
    has_metas, strip_metas,
};
use proptest::prelude::*;

fn markup() -> MarkupSanitizer {
    MarkupSanitizer::builder()
        .allow_tags(["b", "i", "u", "p", "br"])
        .build()
        .unwrap()
}

// Strategy: nested containers up to a few levels deep
fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = "[ -~]{0,20}".prop_map(Value::Text);
    leaf.prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::List),
            prop::collection::vec(("[a-z_]{1,8}", inner), 0..6).prop_map(Value::Map),
        ]
    })
}

/// Same container kinds, same keys in the same order, text wherever the
/// original had text.
fn same_shape(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Text(_), Value::Text(_)) => true,
        (Value::List(x), Value::List(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(x, y)| same_shape(x, y))
        }
        (Value::Map(x), Value::Map(y)) => {
            x.len() == y.len()
                && x
                    .iter()
                    .zip(y)
                    .all(|((kx, vx), (ky, vy))| kx == ky && same_shape(vx, vy))
        }
        _ => false,
    }
}

fn leaves(value: &Value) -> Vec<&str> {
    match value {
        Value::Text(text) => vec![text.as_str()],
        Value::List(items) => items.iter().flat_map(leaves).collect(),
        Value::Map(entries) => entries.iter().flat_map(|(_, v)| leaves(v)).collect(),
    }
}

proptest! {
    /// Property: detection agrees with a plain character scan
    #[test]
    fn proptest_has_metas_matches_char_scan(text in "\\PC{0,40}") {
        let expected = META_CHARACTERS.iter().any(|m| text.contains(m));
        prop_assert_eq!(has_metas(&text), expected);
    }

    /// Property: stripped text never contains a meta-character
    #[test]
    fn proptest_strip_metas_removes_every_meta(text in "\\PC{1,40}") {
        let stripped = strip_metas(&text);
        prop_assert!(stripped.is_some());
        let stripped = stripped.unwrap();
        prop_assert!(!has_metas(&stripped));
        prop_assert!(stripped.len() <= text.len());
    }

    /// Property: an empty token list is the identity
    #[test]
    fn proptest_empty_token_list_is_identity(text in "\\PC{1,40}") {
        let out = custom_strip::<&str>(&[], &text, CaseMode::Insensitive).unwrap();
        prop_assert_eq!(out, Some(text));
    }

    /// Property: a single-character token never survives, in either mode
    ///
    /// Longer tokens can re-form from their neighbours after one pass
    /// (`"aabb"` minus `"ab"` is `"ab"`), so only single characters are
    /// guaranteed gone.
    #[test]
    fn proptest_custom_strip_removes_token(
        text in "[a-dA-D.*]{1,30}",
        token in "[a-dA-D.*]",
    ) {
        let sensitive = custom_strip(&[&token], &text, CaseMode::Sensitive).unwrap().unwrap();
        prop_assert!(!sensitive.contains(&token));

        let insensitive = custom_strip(&[&token], &text, CaseMode::Insensitive).unwrap().unwrap();
        prop_assert!(!insensitive.to_lowercase().contains(&token.to_lowercase()));
    }

    /// Property: markup output never contains raw angle brackets
    #[test]
    fn proptest_safe_text_has_no_angle_brackets(
        text in "\\PC{0,60}",
        allow_tags in any::<bool>(),
        include_events in any::<bool>(),
    ) {
        let out = markup().safe_text(&text, allow_tags, include_events);
        prop_assert!(!out.contains('<'));
        prop_assert!(!out.contains('>'));
    }

    /// Property: sanitized output is a fixed point
    #[test]
    fn proptest_safe_text_is_idempotent(text in "[a-m0-9 &;'\"<>/]{0,40}") {
        let s = markup();
        let once = s.safe_text(&text, false, true);
        let twice = s.safe_text(&once, false, true);
        prop_assert_eq!(once, twice);
    }

    /// Property: shape and keys survive; every leaf is tag-free
    #[test]
    fn proptest_safe_array_preserves_shape(value in arb_value()) {
        let sanitizer = StructuredSanitizer::new(markup());
        let result = sanitizer.safe_array(&value);

        if value.is_container() {
            let clean = result.unwrap();
            prop_assert!(same_shape(&value, &clean));
            for leaf in leaves(&clean) {
                prop_assert!(!leaf.contains('<') && !leaf.contains('>'));
            }
        } else {
            prop_assert!(result.is_err());
        }
    }
}
