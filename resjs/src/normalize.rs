//! Key and value normalization for serialized output.

/// Lower-cases only the first character of a member name; all other
/// characters are left unchanged.
///
/// Applied to both group names and keys so the emitted object properties
/// follow script naming conventions. Idempotent.
pub fn normalize_key(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Converts a raw localized value into a serialization-safe single line.
///
/// Every `\r\n` sequence and every bare line feed becomes the two-character
/// escape `\n`; when `html_encode` is set the result is subsequently
/// entity-encoded. Escaping runs before encoding so the escape sequence
/// itself is never re-encoded.
pub fn normalize_value(raw: &str, html_encode: bool) -> String {
    let mut result = raw.replace("\r\n", "\\n").replace('\n', "\\n");

    if html_encode {
        result = encode_html(&result);
    }

    result
}

/// Entity-encodes the characters significant to markup: `&`, `<`, `>`, `"`
/// and `'`. The ampersand is handled first so entities are not re-encoded
/// within a single pass. Encoding twice double-escapes; callers must apply
/// it once.
pub fn encode_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
