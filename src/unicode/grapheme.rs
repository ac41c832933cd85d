//! Grapheme cluster iteration.
//!
//! Every length, index and range in this crate counts extended grapheme
//! clusters, so `"e\u{0301}"` and `"👨‍👩‍👧"` are one character each.

use unicode_segmentation::UnicodeSegmentation;

/// Iterator over grapheme clusters in a string.
pub struct GraphemeIterator<'a> {
    inner: unicode_segmentation::Graphemes<'a>,
}

impl<'a> Iterator for GraphemeIterator<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for GraphemeIterator<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

/// Iterate over grapheme clusters in a string.
#[must_use]
pub fn graphemes(s: &str) -> GraphemeIterator<'_> {
    GraphemeIterator {
        inner: s.graphemes(true),
    }
}

/// Iterate over grapheme clusters with byte indices.
pub fn grapheme_indices(s: &str) -> impl DoubleEndedIterator<Item = (usize, &str)> {
    s.grapheme_indices(true)
}

/// True when every byte of `s` is its own grapheme cluster: ASCII without
/// `'\r'`, which joins a following `'\n'` into one cluster.
fn is_byte_per_grapheme(s: &str) -> bool {
    s.is_ascii() && !s.as_bytes().contains(&b'\r')
}

/// Number of grapheme clusters (user-perceived characters) in `s`.
#[must_use]
pub fn grapheme_count(s: &str) -> usize {
    if is_byte_per_grapheme(s) {
        return s.len();
    }
    s.graphemes(true).count()
}

/// Byte offset where every grapheme starts, plus a trailing `s.len()`.
///
/// `bounds[i]..bounds[i + 1]` is the byte range of grapheme `i`.
#[must_use]
pub fn grapheme_bounds(s: &str) -> Vec<usize> {
    let mut bounds = Vec::with_capacity(s.len() + 1);
    if is_byte_per_grapheme(s) {
        bounds.extend(0..=s.len());
        return bounds;
    }
    bounds.extend(s.grapheme_indices(true).map(|(offset, _)| offset));
    bounds.push(s.len());
    bounds
}

/// Reverse `s` grapheme by grapheme, keeping combining sequences intact.
#[must_use]
pub fn reverse_graphemes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for g in graphemes(s).rev() {
        out.push_str(g);
    }
    out
}

/// Check if a string is ASCII-only.
#[must_use]
pub fn is_ascii_only(s: &str) -> bool {
    s.is_ascii()
}
