//! Ring-indexed, grapheme-aware access to a borrowed string.
//!
//! [`RingText`] addresses characters (extended grapheme clusters) by signed
//! index. Out-of-range requests never fail:
//!
//! - in **bounded** mode (`infinite = false`) indices saturate into
//!   `[0, last_index]`;
//! - in **infinite** mode the text is treated as tiling the whole integer
//!   line with period `len()`, so index `-1` is the last character and a
//!   range longer than the text repeats it.
//!
//! A range written backwards (`lower > upper`) returns the addressed
//! characters in reverse order.
//!
//! # Example
//!
//! ```
//! use ringtext::RingText;
//!
//! let ring = RingText::new("abcd");
//! assert_eq!(ring.character_at(-1, true), "d");
//! assert_eq!(ring.substring(2..=9, true), "cdabcdab");
//! assert_eq!(ring.substring(3..=1, false), "dcb");
//! assert_eq!(ring.substring(-5..=99, false), "abcd");
//! ```

use crate::text::range::{RangeRequest, TextRange, to_index};
use crate::unicode::grapheme::{grapheme_bounds, graphemes};

/// One contiguous part of a wrapped extraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Piece {
    /// Graphemes `first..=last` of a single tile.
    Span(usize, usize),
    /// This many complete copies of the text.
    Tiles(usize),
}

/// Grapheme-indexed view over a `&str` with saturating and wraparound access.
#[derive(Clone, Debug)]
pub struct RingText<'a> {
    text: &'a str,
    /// Byte offset of each grapheme start, followed by `text.len()`.
    bounds: Vec<usize>,
}

impl<'a> RingText<'a> {
    /// Segment `text` into grapheme clusters.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            bounds: grapheme_bounds(text),
        }
    }

    /// The underlying string.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Number of grapheme clusters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bounds.len() - 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index of the last grapheme, `None` when empty.
    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.len().checked_sub(1)
    }

    /// Grapheme `index`, `None` when out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'a str> {
        if index >= self.len() {
            return None;
        }
        Some(&self.text[self.bounds[index]..self.bounds[index + 1]])
    }

    /// Iterate over the grapheme clusters.
    pub fn graphemes(&self) -> impl DoubleEndedIterator<Item = &'a str> + '_ {
        self.bounds
            .windows(2)
            .map(|w| &self.text[w[0]..w[1]])
    }

    /// Byte slice covering graphemes `first..=last`; both must be in range.
    fn span(&self, first: usize, last: usize) -> &'a str {
        &self.text[self.bounds[first]..self.bounds[last + 1]]
    }

    /// Byte offset where grapheme `index` starts, saturating to the end.
    pub(crate) fn byte_offset(&self, index: usize) -> usize {
        self.bounds[index.min(self.len())]
    }

    /// Bounded byte range addressed by `range`, ignoring its direction.
    /// `None` for empty text or an empty range.
    pub(crate) fn byte_span<R: TextRange>(&self, range: R) -> Option<std::ops::Range<usize>> {
        let last = to_index(self.last_index()?);
        let (lo, hi) = range.to_request()?.ordered();
        let (first, last) = clamp_pair(lo, hi, last);
        Some(self.bounds[first]..self.bounds[last + 1])
    }

    fn push_span(&self, out: &mut String, first: usize, last: usize, reversed: bool) {
        if reversed {
            for i in (first..=last).rev() {
                out.push_str(&self.text[self.bounds[i]..self.bounds[i + 1]]);
            }
        } else {
            out.push_str(self.span(first, last));
        }
    }

    /// All graphemes as owned strings.
    #[must_use]
    pub fn character_array(&self) -> Vec<String> {
        self.graphemes().map(str::to_string).collect()
    }

    #[must_use]
    pub fn first_character(&self) -> Option<String> {
        self.get(0).map(str::to_string)
    }

    #[must_use]
    pub fn last_character(&self) -> Option<String> {
        self.last_index()
            .and_then(|last| self.get(last))
            .map(str::to_string)
    }

    /// The character at `index`.
    ///
    /// Bounded mode clamps the index; infinite mode reads the periodic
    /// extension, so `character_at(k, true) == character_at(k mod len, true)`.
    /// Empty text yields `""`.
    #[must_use]
    pub fn character_at(&self, index: isize, infinite: bool) -> String {
        self.extract(RangeRequest::new(index, index), infinite)
    }

    /// Same as [`character_at`](Self::character_at), counting from the left.
    #[must_use]
    pub fn character_from_left(&self, index: isize, infinite: bool) -> String {
        self.character_at(index, infinite)
    }

    /// The character `index` steps left of the last one.
    #[must_use]
    pub fn character_from_right(&self, index: isize, infinite: bool) -> String {
        let Some(last) = self.last_index() else {
            return String::new();
        };
        self.character_at(to_index(last).saturating_sub(index), infinite)
    }

    /// Characters addressed by `range`.
    ///
    /// See the module docs for clamping, wrapping and reversal rules.
    #[must_use]
    pub fn substring<R: TextRange>(&self, range: R, infinite: bool) -> String {
        match range.to_request() {
            Some(request) => self.extract(request, infinite),
            None => String::new(),
        }
    }

    /// Characters from the start up to and including `index`.
    #[must_use]
    pub fn substring_from_left(&self, index: isize, infinite: bool) -> String {
        self.extract(RangeRequest::new(0, index), infinite)
    }

    /// The last `steps + 1` characters.
    ///
    /// In infinite mode a negative `steps` reads forward past the end
    /// instead: `last ..= last + |steps|`.
    #[must_use]
    pub fn substring_from_right(&self, steps: isize, infinite: bool) -> String {
        let Some(last) = self.last_index() else {
            return String::new();
        };
        let last = to_index(last);
        let request = if infinite && steps < 0 {
            RangeRequest::new(last, last.saturating_add(steps.saturating_neg()))
        } else {
            RangeRequest::new(last.saturating_sub(steps), last)
        };
        self.extract(request, infinite)
    }

    /// Split the bounded `substring(range)` into pieces of `chunk_length`
    /// characters; the final piece may be shorter.
    #[must_use]
    pub fn chunks<R: TextRange>(&self, chunk_length: usize, range: R) -> Vec<String> {
        if chunk_length == 0 || self.is_empty() {
            return Vec::new();
        }
        let selected = self.substring(range, false);
        let selected = RingText::new(&selected);
        if chunk_length == 1 {
            return selected.character_array();
        }
        let count = selected.len();
        (0..count)
            .step_by(chunk_length)
            .map(|first| {
                let last = (first + chunk_length - 1).min(count - 1);
                selected.span(first, last).to_string()
            })
            .collect()
    }

    fn extract(&self, request: RangeRequest, infinite: bool) -> String {
        let Some(last) = self.last_index() else {
            return String::new();
        };
        let (lo, hi) = request.ordered();
        let reversed = request.is_reversed();
        let last_signed = to_index(last);

        let mut out = String::new();
        if infinite && (lo < 0 || hi > last_signed) {
            self.push_wrapped(&mut out, lo, hi, reversed);
        } else {
            let (first, last) = clamp_pair(lo, hi, last_signed);
            self.push_span(&mut out, first, last, reversed);
        }
        out
    }

    /// Split `lo..=hi` over the periodic extension into tile-local pieces.
    fn wrap_pieces(&self, lo: isize, hi: isize) -> Vec<Piece> {
        let len = self.len();
        let last = len - 1;
        // Shift by whole periods so the start lands inside the first tile.
        let start = lo.rem_euclid(to_index(len)).unsigned_abs();
        let total = hi.abs_diff(lo).saturating_add(1);

        if total <= len - start {
            return vec![Piece::Span(start, start + total - 1)];
        }

        let mut pieces = vec![Piece::Span(start, last)];
        let emitted = len - start;
        let remaining = total - emitted;
        let whole = remaining / len;
        if whole > 0 {
            pieces.push(Piece::Tiles(whole));
        }
        let tail = remaining % len;
        if tail > 0 {
            pieces.push(Piece::Span(0, tail - 1));
        }
        pieces
    }

    fn push_wrapped(&self, out: &mut String, lo: isize, hi: isize, reversed: bool) {
        let pieces = self.wrap_pieces(lo, hi);
        let tile = if reversed {
            let mut rev = String::with_capacity(self.text.len());
            self.push_span(&mut rev, 0, self.len() - 1, true);
            rev
        } else {
            String::new()
        };

        let mut emit = |piece: Piece| match piece {
            Piece::Span(first, last) => self.push_span(out, first, last, reversed),
            Piece::Tiles(count) => {
                let unit = if reversed { tile.as_str() } else { self.text };
                for _ in 0..count {
                    out.push_str(unit);
                }
            }
        };

        if reversed {
            pieces.into_iter().rev().for_each(&mut emit);
        } else {
            pieces.into_iter().for_each(&mut emit);
        }
    }
}

/// Saturate an ordered pair into `[0, last]`.
fn clamp_pair(lo: isize, hi: isize, last: isize) -> (usize, usize) {
    let (lo, hi) = if lo < 0 && hi < 0 {
        (0, 0)
    } else if lo > last && hi > last {
        (last, last)
    } else {
        (lo.max(0), hi.min(last))
    };
    (lo.unsigned_abs(), hi.unsigned_abs())
}

/// Number of grapheme clusters in `text`.
#[must_use]
pub fn length(text: &str) -> usize {
    crate::unicode::grapheme::grapheme_count(text)
}

/// Index of the last grapheme of `text`, `None` when empty.
#[must_use]
pub fn last_index(text: &str) -> Option<usize> {
    length(text).checked_sub(1)
}

/// Explode `text` into single-grapheme strings.
#[must_use]
pub fn character_array(text: &str) -> Vec<String> {
    graphemes(text).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_and_last_index() {
        let ring = RingText::new("héllo");
        assert_eq!(ring.len(), 5);
        assert_eq!(ring.last_index(), Some(4));

        let empty = RingText::new("");
        assert!(empty.is_empty());
        assert_eq!(empty.last_index(), None);
        assert_eq!(last_index(""), None);
        assert_eq!(length("e\u{0301}"), 1);
    }

    #[test]
    fn test_character_at_bounded_clamps() {
        let ring = RingText::new("abc");
        assert_eq!(ring.character_at(0, false), "a");
        assert_eq!(ring.character_at(2, false), "c");
        assert_eq!(ring.character_at(-7, false), "a");
        assert_eq!(ring.character_at(42, false), "c");
    }

    #[test]
    fn test_character_at_infinite_wraps() {
        let ring = RingText::new("abc");
        assert_eq!(ring.character_at(3, true), "a");
        assert_eq!(ring.character_at(4, true), "b");
        assert_eq!(ring.character_at(-1, true), "c");
        assert_eq!(ring.character_at(-3, true), "a");
        assert_eq!(ring.character_at(-4, true), "c");
        assert_eq!(ring.character_at(3002, true), "c");
    }

    #[test]
    fn test_character_from_right() {
        let ring = RingText::new("abc");
        assert_eq!(ring.character_from_right(0, false), "c");
        assert_eq!(ring.character_from_right(2, false), "a");
        assert_eq!(ring.character_from_right(5, false), "a");
        assert_eq!(ring.character_from_right(3, true), "c");
        assert_eq!(ring.character_from_right(-1, true), "a");
        assert_eq!(ring.character_from_left(1, false), "b");
    }

    #[test]
    fn test_empty_text_saturates() {
        let ring = RingText::new("");
        assert_eq!(ring.character_at(0, false), "");
        assert_eq!(ring.character_at(-3, true), "");
        assert_eq!(ring.character_from_right(0, true), "");
        assert_eq!(ring.substring(-5..=5, true), "");
        assert_eq!(ring.substring_from_left(3, false), "");
        assert_eq!(ring.substring_from_right(3, true), "");
        assert!(ring.chunks(2, 0..=4).is_empty());
        assert_eq!(ring.first_character(), None);
        assert_eq!(ring.last_character(), None);
    }

    #[test]
    fn test_substring_bounded() {
        let ring = RingText::new("abcdef");
        assert_eq!(ring.substring(1..=3, false), "bcd");
        assert_eq!(ring.substring(1..4, false), "bcd");
        assert_eq!(ring.substring(-3..=2, false), "abc");
        assert_eq!(ring.substring(4..=40, false), "ef");
        assert_eq!(ring.substring(-9..=-2, false), "a");
        assert_eq!(ring.substring(8..=12, false), "f");
        assert_eq!(ring.substring(-1..=99, false), "abcdef");
        assert_eq!(ring.substring(2..2, false), "");
    }

    #[test]
    fn test_substring_reversed() {
        let ring = RingText::new("abcdef");
        assert_eq!(ring.substring(3..=1, false), "dcb");
        assert_eq!(ring.substring(40..=4, false), "fe");
        assert_eq!(ring.substring((5, 0), false), "fedcba");
    }

    #[test]
    fn test_substring_infinite() {
        let ring = RingText::new("abcd");
        assert_eq!(ring.substring(2..=9, true), "cdabcdab");
        assert_eq!(ring.substring(-2..=1, true), "cdab");
        assert_eq!(ring.substring(-6..=-5, true), "cd");
        assert_eq!(ring.substring(0..=11, true), "abcdabcdabcd");
        assert_eq!(ring.substring(5..=6, true), "bc");
        assert_eq!(ring.substring(-1..=-1, true), "d");
        // in range: infinite changes nothing
        assert_eq!(ring.substring(1..=2, true), "bc");
    }

    #[test]
    fn test_substring_infinite_reversed() {
        let ring = RingText::new("abcd");
        assert_eq!(ring.substring(9..=2, true), "badcbadc");
        assert_eq!(ring.substring(1..=-2, true), "badc");
        assert_eq!(ring.substring(11..=0, true), "dcbadcbadcba");
    }

    #[test]
    fn test_substring_infinite_length() {
        let ring = RingText::new("xyz");
        let cases: [(isize, isize); 5] = [(-10, 10), (0, 2), (3, 3), (-1, 7), (5, 30)];
        for (lo, hi) in cases {
            let out = ring.substring(lo..=hi, true);
            assert_eq!(length(&out), (hi - lo + 1).unsigned_abs());
        }
    }

    #[test]
    fn test_substring_graphemes() {
        let ring = RingText::new("a👨‍👩‍👧e\u{0301}");
        assert_eq!(ring.len(), 3);
        assert_eq!(ring.character_at(1, false), "👨‍👩‍👧");
        assert_eq!(ring.substring(2..=0, false), "e\u{0301}👨‍👩‍👧a");
        assert_eq!(ring.substring(2..=4, true), "e\u{0301}a👨‍👩‍👧");
    }

    #[test]
    fn test_substring_from_left_and_right() {
        let ring = RingText::new("abcdef");
        assert_eq!(ring.substring_from_left(2, false), "abc");
        assert_eq!(ring.substring_from_left(20, false), "abcdef");
        assert_eq!(ring.substring_from_left(7, true), "abcdefab");
        assert_eq!(ring.substring_from_right(1, false), "ef");
        assert_eq!(ring.substring_from_right(10, false), "abcdef");
        assert_eq!(ring.substring_from_right(7, true), "efabcdef");
        assert_eq!(ring.substring_from_right(-2, true), "fab");
    }

    #[test]
    fn test_chunks() {
        let ring = RingText::new("abcdefg");
        assert_eq!(ring.chunks(3, 0..=6), vec!["abc", "def", "g"]);
        assert_eq!(ring.chunks(1, 1..=3), vec!["b", "c", "d"]);
        assert_eq!(ring.chunks(2, 0..4), vec!["ab", "cd"]);
        assert_eq!(ring.chunks(10, 0..=6), vec!["abcdefg"]);
        assert!(ring.chunks(0, 0..=6).is_empty());
        assert_eq!(ring.chunks(2, 6..=3), vec!["gf", "ed"]);
    }

    #[test]
    fn test_wrap_pieces() {
        let ring = RingText::new("abcd");
        assert_eq!(ring.wrap_pieces(1, 2), vec![Piece::Span(1, 2)]);
        assert_eq!(
            ring.wrap_pieces(2, 13),
            vec![Piece::Span(2, 3), Piece::Tiles(2), Piece::Span(0, 1)]
        );
        assert_eq!(
            ring.wrap_pieces(-4, 3),
            vec![Piece::Span(0, 3), Piece::Tiles(1)]
        );
    }

    #[test]
    fn test_character_array() {
        assert_eq!(character_array("ab"), vec!["a", "b"]);
        assert!(RingText::new("").character_array().is_empty());
        assert_eq!(RingText::new("xy").last_character().as_deref(), Some("y"));
    }

    #[test]
    fn test_empty_half_open_range_reads_nothing() {
        let ring = RingText::new("abcd");
        assert_eq!(ring.substring(3..3, false), "");
        assert_eq!(ring.substring(3..3, true), "");
        assert_eq!(ring.substring(-2..-2, true), "");
        assert_eq!(ring.substring(2..=3, false), "cd");
        assert_eq!(ring.byte_span(3..3), None);
    }

    #[test]
    fn test_crlf_counts_as_one_character() {
        let ring = RingText::new("a\r\nb");
        assert_eq!(ring.len(), 3);
        assert_eq!(ring.len(), ring.character_array().len());
        assert_eq!(ring.character_at(1, false), "\r\n");
        assert_eq!(ring.character_at(2, false), "b");
        assert_eq!(ring.substring(2..=0, false), "b\r\na");
        assert_eq!(ring.byte_span(1..=1), Some(1..3));
    }

    #[test]
    fn test_byte_span() {
        let ring = RingText::new("aé👍b");
        assert_eq!(ring.byte_span(1..=2), Some(1..7));
        assert_eq!(ring.byte_span(2..=1), Some(1..7));
        assert_eq!(ring.byte_span(-4..=-1), Some(0..1));
        assert_eq!(ring.byte_span(2..2), None);
        assert_eq!(ring.byte_offset(3), 7);
        assert_eq!(ring.byte_offset(99), 8);
        assert_eq!(RingText::new("").byte_span(0..=3), None);
    }
}
