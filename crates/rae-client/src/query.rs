use unicode_normalization::UnicodeNormalization;
use url::form_urlencoded;

/// Canonical form of a headword before lookup: surrounding whitespace
/// trimmed, accents composed (NFC)
pub fn normalize_headword(word: &str) -> String {
    word.trim().nfc().collect()
}

/// Escape free-text search terms for the `q=` parameter. Spaces become `+`.
pub fn escape_terms(terms: &str) -> String {
    form_urlencoded::byte_serialize(terms.as_bytes()).collect()
}
