//! Overlap-aware substring search over grapheme clusters.
//!
//! Matching compares whole graphemes, so `"e"` never matches inside
//! `"e\u{0301}"`. Case-insensitive mode lower-cases every grapheme with
//! [`str::to_lowercase`] (ordinal, no collation); reported positions always
//! refer to graphemes of the original text.
//!
//! The general scan keeps a prefix-function table for the pattern and walks
//! the text once, so the number of grapheme comparisons is linear in
//! `text + pattern` regardless of how repetitive either side is.

use std::borrow::Cow;

use crate::unicode::grapheme::graphemes;

/// Graphemes of `text`, lower-cased when `case_sensitive` is off.
pub(crate) fn folded(text: &str, case_sensitive: bool) -> Vec<Cow<'_, str>> {
    graphemes(text)
        .map(|g| {
            if case_sensitive || !g.chars().any(char::is_uppercase) {
                Cow::Borrowed(g)
            } else {
                Cow::Owned(g.to_lowercase())
            }
        })
        .collect()
}

/// `table[i]` is the length of the longest proper prefix of
/// `needle[..=i]` that is also a suffix of it.
fn prefix_table<T: PartialEq>(needle: &[T]) -> Vec<usize> {
    let mut table = vec![0; needle.len()];
    let mut k = 0;
    for i in 1..needle.len() {
        while k > 0 && needle[i] != needle[k] {
            k = table[k - 1];
        }
        if needle[i] == needle[k] {
            k += 1;
        }
        table[i] = k;
    }
    table
}

/// Start positions of `needle` in `haystack`, ascending.
///
/// With `overlap` the scan resumes one position after each match start;
/// without it, right after the match (greedy, left to right).
pub(crate) fn find_all<T: PartialEq>(haystack: &[T], needle: &[T], overlap: bool) -> Vec<usize> {
    let m = needle.len();
    if m == 0 || m > haystack.len() {
        return Vec::new();
    }

    let table = prefix_table(needle);
    let mut matches = Vec::new();
    let mut k = 0;
    for (i, item) in haystack.iter().enumerate() {
        while k > 0 && *item != needle[k] {
            k = table[k - 1];
        }
        if *item == needle[k] {
            k += 1;
        }
        if k == m {
            matches.push(i + 1 - m);
            k = if overlap { table[m - 1] } else { 0 };
        }
    }
    matches
}

/// All alignments match when both sides repeat the same single grapheme.
fn dense_matches<T: PartialEq>(haystack: &[T], needle: &[T]) -> Option<Vec<usize>> {
    let first = haystack.first()?;
    let uniform = haystack.iter().all(|g| g == first) && needle.iter().all(|g| g == first);
    uniform.then(|| (0..=haystack.len() - needle.len()).collect())
}

/// Grapheme positions where `pattern` starts in `text`.
///
/// - empty `text`, empty `pattern`, or a pattern longer than the text
///   yields `[]`;
/// - `pattern == text` yields `[0]`;
/// - `with_overlap` reports matches that share characters
///   (`"testest"` / `"test"` gives `[0, 3]`), otherwise matches are taken
///   greedily from the left.
///
/// ```
/// use ringtext::text::indexes_of;
///
/// assert_eq!(indexes_of("testest", "test", true, true), vec![0, 3]);
/// assert_eq!(indexes_of("aaaa", "aa", false, true), vec![0, 2]);
/// assert_eq!(indexes_of("TestTest", "test", true, false), vec![0, 4]);
/// ```
#[must_use]
pub fn indexes_of(text: &str, pattern: &str, with_overlap: bool, case_sensitive: bool) -> Vec<usize> {
    if text.is_empty() || pattern.is_empty() {
        return Vec::new();
    }

    let haystack = folded(text, case_sensitive);
    let needle = folded(pattern, case_sensitive);
    if needle.len() > haystack.len() {
        return Vec::new();
    }
    if haystack == needle {
        return vec![0];
    }
    if with_overlap {
        if let Some(all) = dense_matches(&haystack, &needle) {
            return all;
        }
    }
    find_all(&haystack, &needle, with_overlap)
}

/// Number of occurrences of `pattern`, counted with the same overlap rule
/// as [`indexes_of`].
#[must_use]
pub fn count(text: &str, pattern: &str, with_overlap: bool, case_sensitive: bool) -> usize {
    indexes_of(text, pattern, with_overlap, case_sensitive).len()
}

/// True when `pattern` occurs in `text` on grapheme boundaries.
///
/// Empty text contains nothing; an empty pattern is contained in any
/// non-empty text.
#[must_use]
pub fn contains(text: &str, pattern: &str, case_sensitive: bool) -> bool {
    if text.is_empty() {
        return false;
    }
    if pattern.is_empty() {
        return true;
    }
    let haystack = folded(text, case_sensitive);
    let needle = folded(pattern, case_sensitive);
    !find_all(&haystack, &needle, false).is_empty()
}

/// True when `text` begins with `pattern`. Empty operands never match.
#[must_use]
pub fn starts_with(text: &str, pattern: &str, case_sensitive: bool) -> bool {
    if text.is_empty() || pattern.is_empty() {
        return false;
    }
    let haystack = folded(text, case_sensitive);
    let needle = folded(pattern, case_sensitive);
    haystack.starts_with(&needle)
}

/// True when `text` ends with `pattern`. Empty operands never match.
#[must_use]
pub fn ends_with(text: &str, pattern: &str, case_sensitive: bool) -> bool {
    if text.is_empty() || pattern.is_empty() {
        return false;
    }
    let haystack = folded(text, case_sensitive);
    let needle = folded(pattern, case_sensitive);
    haystack.ends_with(&needle)
}
