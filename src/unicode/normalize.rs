//! Unicode normalization helpers.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalize `text` to NFC (canonical composition).
#[must_use]
pub fn normalize_nfc(text: &str) -> String {
    text.nfc().collect()
}

/// Normalize `text` to NFD (canonical decomposition).
#[must_use]
pub fn normalize_nfd(text: &str) -> String {
    text.nfd().collect()
}

/// Remove diacritics: decompose, drop combining marks, recompose.
///
/// `"Crème Brûlée"` becomes `"Creme Brulee"`. Letters without a
/// decomposition (`ø`, `ß`) are left as they are.
#[must_use]
pub fn strip_diacritics(text: &str) -> String {
    if text.is_ascii() {
        return text.to_string();
    }
    text.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect()
}

/// Compare two strings after NFC normalization.
#[must_use]
pub fn compare_normalized(a: &str, b: &str) -> Ordering {
    a.nfc().cmp(b.nfc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_nfc_combining_to_composed() {
        assert_eq!(normalize_nfc("e\u{0301}"), "é");
    }

    #[test]
    fn normalize_nfd_composed_to_decomposed() {
        assert_eq!(normalize_nfd("é"), "e\u{0301}");
    }

    #[test]
    fn strip_diacritics_folds_accents() {
        assert_eq!(strip_diacritics("Crème Brûlée"), "Creme Brulee");
        assert_eq!(strip_diacritics("naïve"), "naive");
        assert_eq!(strip_diacritics("plain"), "plain");
    }

    #[test]
    fn strip_diacritics_keeps_undecomposable_letters() {
        assert_eq!(strip_diacritics("øß"), "øß");
    }

    #[test]
    fn compare_normalized_equates_visually_identical_strings() {
        assert_eq!(compare_normalized("café", "cafe\u{0301}"), Ordering::Equal);
        assert_eq!(compare_normalized("a", "b"), Ordering::Less);
    }
}
