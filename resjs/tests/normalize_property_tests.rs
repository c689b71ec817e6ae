//! Property-based tests for the normalization rules.

use proptest::prelude::*;
use resjs::normalize::{encode_html, normalize_key, normalize_value};

proptest! {
    #[test]
    fn normalize_key_is_idempotent(raw in ".*") {
        let once = normalize_key(&raw);
        prop_assert_eq!(normalize_key(&once), once);
    }

    #[test]
    fn normalize_key_preserves_tail(raw in "[A-Za-z][A-Za-z0-9]{0,20}") {
        let normalized = normalize_key(&raw);
        // Only the first character may differ; everything after it is untouched.
        prop_assert_eq!(&normalized[1..], &raw[1..]);
    }

    #[test]
    fn newline_escaping_is_idempotent(raw in ".*") {
        let once = normalize_value(&raw, false);
        prop_assert_eq!(normalize_value(&once, false), once);
    }

    #[test]
    fn escaped_values_contain_no_line_feeds(raw in ".*") {
        let escaped = normalize_value(&raw, false);
        prop_assert!(!escaped.contains('\n'));
    }

    #[test]
    fn html_encoding_leaves_no_bare_markup_chars(raw in ".*") {
        let encoded = encode_html(&raw);
        prop_assert!(!encoded.contains('<'));
        prop_assert!(!encoded.contains('>'));
        prop_assert!(!encoded.contains('"'));
        prop_assert!(!encoded.contains('\''));
    }

    #[test]
    fn normalization_is_deterministic(raw in ".*", html_encode in any::<bool>()) {
        prop_assert_eq!(
            normalize_value(&raw, html_encode),
            normalize_value(&raw, html_encode)
        );
    }
}

#[test]
fn html_encoding_is_single_pass_only() {
    // Encoding is deliberately not idempotent; the serializer applies it once.
    let once = encode_html("a & b");
    assert_eq!(once, "a &amp; b");
    assert_eq!(encode_html(&once), "a &amp;amp; b");
}
