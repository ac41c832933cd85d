//! Pure text transformations.
//!
//! Every function takes the text by reference and returns a new `String`.
//! Positions are grapheme indices and saturate like bounded
//! [`RingText`] access, so no input makes these panic.

use std::fmt::Display;

use crate::text::{RingText, TextRange, ends_with, find_all, folded, starts_with};
use crate::unicode::classify::is_punctuation;
use crate::unicode::{display_width, reverse_graphemes, strip_diacritics};

/// Which side of the text receives padding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PadSide {
    Left,
    #[default]
    Right,
    /// Split evenly; the right side takes the odd column.
    Both,
}

// =============================================================================
// Appending and padding
// =============================================================================

#[must_use]
pub fn appended_left(text: &str, prefix: &str) -> String {
    format!("{prefix}{text}")
}

#[must_use]
pub fn appended_right(text: &str, suffix: &str) -> String {
    format!("{text}{suffix}")
}

#[must_use]
pub fn appended_both(text: &str, affix: &str) -> String {
    format!("{affix}{text}{affix}")
}

/// `text` concatenated `times` times; `times <= 0` gives `""`.
#[must_use]
pub fn repeated(text: &str, times: isize) -> String {
    usize::try_from(times).map_or_else(|_| String::new(), |n| text.repeat(n))
}

#[must_use]
pub fn padded_left(text: &str, pad: &str, times: isize) -> String {
    format!("{}{text}", repeated(pad, times))
}

#[must_use]
pub fn padded_right(text: &str, pad: &str, times: isize) -> String {
    format!("{text}{}", repeated(pad, times))
}

#[must_use]
pub fn padded(text: &str, pad: &str, times: isize) -> String {
    let pad = repeated(pad, times);
    format!("{pad}{text}{pad}")
}

/// Pad with spaces until the display width reaches `width` columns.
///
/// Text already at least `width` columns wide is returned unchanged. Width
/// follows the global [`WidthMethod`](crate::unicode::WidthMethod).
#[must_use]
pub fn pad_to_width(text: &str, width: usize, side: PadSide) -> String {
    let missing = width.saturating_sub(display_width(text));
    if missing == 0 {
        return text.to_string();
    }
    let (left, right) = match side {
        PadSide::Left => (missing, 0),
        PadSide::Right => (0, missing),
        PadSide::Both => (missing / 2, missing - missing / 2),
    };
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

// =============================================================================
// Replacing, inserting and removing
// =============================================================================

/// Replace the bounded `range` with `with`. An empty range or empty text
/// leaves the text as it is.
#[must_use]
pub fn replaced_range<R: TextRange>(text: &str, range: R, with: &str) -> String {
    let ring = RingText::new(text);
    let Some(span) = ring.byte_span(range) else {
        return text.to_string();
    };
    let mut out = String::with_capacity(text.len() + with.len());
    out.push_str(&text[..span.start]);
    out.push_str(with);
    out.push_str(&text[span.end..]);
    out
}

/// Replace the character at the clamped `index`.
#[must_use]
pub fn replaced_character_at(text: &str, index: isize, with: &str) -> String {
    replaced_range(text, (index, index), with)
}

/// Replace every case-insensitive occurrence of `pattern` inside the
/// bounded `range` (the whole text when `None`).
///
/// Occurrences are taken greedily from the left without overlap.
#[must_use]
pub fn replaced_substring<R: TextRange>(
    text: &str,
    pattern: &str,
    with: &str,
    range: Option<R>,
) -> String {
    let ring = RingText::new(text);
    let span = match range {
        Some(range) => ring.byte_span(range),
        None => ring.byte_span(0..to_signed(ring.len())),
    };
    let Some(span) = span else {
        return text.to_string();
    };
    if pattern.is_empty() {
        return text.to_string();
    }

    let region = RingText::new(&text[span.clone()]);
    let needle = folded(pattern, false);
    let starts = find_all(&folded(region.as_str(), false), &needle, false);
    if starts.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..span.start]);
    let mut cursor = 0;
    for start in starts {
        let from = region.byte_offset(start);
        out.push_str(&region.as_str()[cursor..from]);
        out.push_str(with);
        cursor = region.byte_offset(start + needle.len());
    }
    out.push_str(&region.as_str()[cursor..]);
    out.push_str(&text[span.end..]);
    out
}

/// Insert `substring` before the character at `index`, clamped into
/// `[0, length]`.
#[must_use]
pub fn inserted_at(text: &str, index: isize, substring: &str) -> String {
    let ring = RingText::new(text);
    let at = ring.byte_offset(usize::try_from(index).unwrap_or(0));
    let mut out = String::with_capacity(text.len() + substring.len());
    out.push_str(&text[..at]);
    out.push_str(substring);
    out.push_str(&text[at..]);
    out
}

#[must_use]
pub fn removed_range<R: TextRange>(text: &str, range: R) -> String {
    replaced_range(text, range, "")
}

#[must_use]
pub fn removed_character_at(text: &str, index: isize) -> String {
    replaced_range(text, (index, index), "")
}

/// Remove the characters `0..=to_index`. A negative index removes nothing.
#[must_use]
pub fn removed_from_left(text: &str, to_index: isize) -> String {
    if to_index < 0 {
        return text.to_string();
    }
    replaced_range(text, 0..=to_index, "")
}

/// Remove the last `steps + 1` characters. A negative count removes nothing.
#[must_use]
pub fn removed_from_right(text: &str, steps: isize) -> String {
    let ring = RingText::new(text);
    let Some(last) = ring.last_index() else {
        return String::new();
    };
    if steps < 0 {
        return text.to_string();
    }
    let last = to_signed(last);
    replaced_range(text, last.saturating_sub(steps)..=last, "")
}

/// Remove `pattern` until it no longer occurs, so removals that join
/// into a new occurrence are removed as well.
#[must_use]
pub fn removed_substring(text: &str, pattern: &str) -> String {
    let mut current = text.to_string();
    if pattern.is_empty() {
        return current;
    }
    let needle = folded(pattern, true);
    loop {
        let first = {
            let haystack = folded(&current, true);
            find_all(&haystack, &needle, false).first().copied()
        };
        let Some(first) = first else {
            return current;
        };
        let first = to_signed(first);
        current = removed_range(&current, first..first + to_signed(needle.len()));
    }
}

/// Move the bounded `range` so it starts before the character originally at
/// `to_index` (clamped into `[0, length]`).
///
/// A target inside or directly after the moved block leaves the text as it
/// is.
#[must_use]
pub fn moved<R: TextRange>(text: &str, range: R, to_index: isize) -> String {
    let ring = RingText::new(text);
    let Some(span) = ring.byte_span(range) else {
        return text.to_string();
    };
    let target = ring.byte_offset(usize::try_from(to_index).unwrap_or(0));
    let block = &text[span.clone()];

    if target < span.start {
        [&text[..target], block, &text[target..span.start], &text[span.end..]].concat()
    } else if target > span.end {
        [&text[..span.start], &text[span.end..target], block, &text[target..]].concat()
    } else {
        text.to_string()
    }
}

#[must_use]
pub fn removed_spaces_and_newlines(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, ' ' | '\n' | '\r'))
        .collect()
}

/// Drop punctuation and collapse whitespace runs to a single space.
#[must_use]
pub fn removed_punctuation(text: &str) -> String {
    let without: String = text.chars().filter(|&c| !is_punctuation(c)).collect();
    without.split_whitespace().collect::<Vec<_>>().join(" ")
}

// =============================================================================
// Trimming, truncating and ensuring
// =============================================================================

#[must_use]
pub fn reversed(text: &str) -> String {
    reverse_graphemes(text)
}

#[must_use]
pub fn trimmed(text: &str) -> String {
    text.trim().to_string()
}

#[must_use]
pub fn trimmed_left(text: &str) -> String {
    text.trim_start().to_string()
}

#[must_use]
pub fn trimmed_right(text: &str) -> String {
    text.trim_end().to_string()
}

/// Remove `prefix` when the text starts with it on a grapheme boundary.
#[must_use]
pub fn truncated_left(text: &str, prefix: &str) -> String {
    if starts_with(text, prefix, true) {
        text[prefix.len()..].to_string()
    } else {
        text.to_string()
    }
}

/// Remove `suffix` when the text ends with it on a grapheme boundary.
#[must_use]
pub fn truncated_right(text: &str, suffix: &str) -> String {
    if ends_with(text, suffix, true) {
        text[..text.len() - suffix.len()].to_string()
    } else {
        text.to_string()
    }
}

/// Prepend `prefix` unless it is already there.
#[must_use]
pub fn ensured_left(text: &str, prefix: &str) -> String {
    if prefix.is_empty() || text.starts_with(prefix) {
        text.to_string()
    } else {
        appended_left(text, prefix)
    }
}

/// Append `suffix` unless it is already there.
#[must_use]
pub fn ensured_right(text: &str, suffix: &str) -> String {
    if suffix.is_empty() || text.ends_with(suffix) {
        text.to_string()
    } else {
        appended_right(text, suffix)
    }
}

// =============================================================================
// Case and shape
// =============================================================================

/// Upper-case the first letter of every whitespace-separated word and
/// lower-case the rest.
#[must_use]
pub fn capitalized(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            word_start = true;
            out.push(c);
        } else if word_start {
            word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

#[must_use]
pub fn lower_cased(text: &str) -> String {
    text.to_lowercase()
}

#[must_use]
pub fn upper_cased(text: &str) -> String {
    text.to_uppercase()
}

/// `"hello big world"` becomes `"helloBigWorld"`.
#[must_use]
pub fn camel_cased(text: &str) -> String {
    let capitalized = capitalized(text);
    let mut words = capitalized.split_whitespace();
    let mut out = words.next().map(str::to_lowercase).unwrap_or_default();
    words.for_each(|word| out.push_str(word));
    out
}

/// `"hello big world"` becomes `"HelloBigWorld"`.
#[must_use]
pub fn pascal_cased(text: &str) -> String {
    capitalized(text).split_whitespace().collect()
}

/// Fold accented letters to their base letter.
#[must_use]
pub fn latinized(text: &str) -> String {
    strip_diacritics(text)
}

/// Latinize, then join the runs of `[A-Za-z0-9-]` with `-`.
///
/// Case is preserved: `"Crème Brûlée!"` becomes `"Creme-Brulee"`.
#[must_use]
pub fn slugified(text: &str) -> String {
    latinized(text)
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Join `elements` using `separator` between them.
#[must_use]
pub fn joined<I>(separator: &str, elements: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::new();
    for (i, element) in elements.into_iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(&element.to_string());
    }
    out
}

fn to_signed(value: usize) -> isize {
    crate::text::to_index(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_pad() {
        assert_eq!(appended_left("b", "a"), "ab");
        assert_eq!(appended_right("a", "b"), "ab");
        assert_eq!(appended_both("b", "*"), "*b*");
        assert_eq!(padded_left("x", "-", 3), "---x");
        assert_eq!(padded_right("x", "-", 2), "x--");
        assert_eq!(padded("x", "ab", 1), "abxab");
        assert_eq!(padded("x", "-", 0), "x");
        assert_eq!(padded("x", "-", -4), "x");
    }

    #[test]
    fn test_repeated() {
        assert_eq!(repeated("ab", 3), "ababab");
        assert_eq!(repeated("ab", 0), "");
        assert_eq!(repeated("ab", -1), "");
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("ab", 5, PadSide::Left), "   ab");
        assert_eq!(pad_to_width("ab", 5, PadSide::Right), "ab   ");
        assert_eq!(pad_to_width("ab", 5, PadSide::Both), " ab  ");
        // Wide characters count two columns.
        assert_eq!(pad_to_width("日本", 5, PadSide::Right), "日本 ");
        assert_eq!(pad_to_width("abcdef", 3, PadSide::Right), "abcdef");
    }

    #[test]
    fn test_replaced_range() {
        assert_eq!(replaced_range("abcdef", 1..=3, "X"), "aXef");
        assert_eq!(replaced_range("abcdef", 3..=1, "X"), "aXef");
        assert_eq!(replaced_range("abcdef", -5..=1, "X"), "Xcdef");
        assert_eq!(replaced_range("abcdef", 4..=99, "X"), "abcdX");
        assert_eq!(replaced_range("abcdef", 2..2, "X"), "abcdef");
        assert_eq!(replaced_range("", 0..=1, "X"), "");
        assert_eq!(replaced_character_at("a👍c", 1, "b"), "abc");
        assert_eq!(replaced_character_at("abc", 9, "Z"), "abZ");
    }

    #[test]
    fn test_replaced_substring() {
        assert_eq!(
            replaced_substring::<(isize, isize)>("Hello hello", "hello", "bye", None),
            "bye bye"
        );
        assert_eq!(replaced_substring("aXa aXa", "x", "-", Some(0..=3)), "a-a aXa");
        assert_eq!(replaced_substring("aaaa", "aa", "b", Some(1..=3)), "aba");
        assert_eq!(replaced_substring("abc", "", "b", Some(0..=2)), "abc");
        assert_eq!(replaced_substring("abc", "z", "b", Some(0..=2)), "abc");
    }

    #[test]
    fn test_inserted_at() {
        assert_eq!(inserted_at("ac", 1, "b"), "abc");
        assert_eq!(inserted_at("ab", -3, ">"), ">ab");
        assert_eq!(inserted_at("ab", 2, "<"), "ab<");
        assert_eq!(inserted_at("ab", 10, "<"), "ab<");
        assert_eq!(inserted_at("", 0, "x"), "x");
        assert_eq!(inserted_at("e\u{301}x", 1, "-"), "e\u{301}-x");
    }

    #[test]
    fn test_removals() {
        assert_eq!(removed_character_at("abc", 1), "ac");
        assert_eq!(removed_range("abcdef", 1..=4), "af");
        assert_eq!(removed_range("abcdef", 1..4), "aef");
        assert_eq!(removed_from_left("abcdef", 2), "def");
        assert_eq!(removed_from_left("abcdef", -1), "abcdef");
        assert_eq!(removed_from_right("abcdef", 1), "abcd");
        assert_eq!(removed_from_right("abcdef", 99), "");
        assert_eq!(removed_from_right("abcdef", -1), "abcdef");
        assert_eq!(removed_from_right("", 1), "");
    }

    #[test]
    fn test_removed_substring() {
        assert_eq!(removed_substring("a-b-c", "-"), "abc");
        // Removing the inner "ab" forms a new one.
        assert_eq!(removed_substring("aabb", "ab"), "");
        assert_eq!(removed_substring("abc", ""), "abc");
        assert_eq!(removed_substring("ABC", "b"), "ABC");
    }

    #[test]
    fn test_moved() {
        assert_eq!(moved("abcdef", 1..=2, 5), "adebcf");
        assert_eq!(moved("abcdef", 1..=2, 6), "adefbc");
        assert_eq!(moved("abcdef", 3..=4, 0), "deabcf");
        assert_eq!(moved("abcdef", 3..=4, 1), "adebcf");
        assert_eq!(moved("abcdef", 1..=2, 2), "abcdef");
        assert_eq!(moved("abcdef", 1..=2, 3), "abcdef");
        assert_eq!(moved("", 0..=1, 3), "");
    }

    #[test]
    fn test_whitespace_and_punctuation() {
        assert_eq!(removed_spaces_and_newlines("a b\nc\r\nd"), "abcd");
        assert_eq!(removed_punctuation("Hello, world!  How  are you?"), "Hello world How are you");
        assert_eq!(trimmed("  a b \n"), "a b");
        assert_eq!(trimmed_left("  a "), "a ");
        assert_eq!(trimmed_right("  a "), "  a");
    }

    #[test]
    fn test_truncate_and_ensure() {
        assert_eq!(truncated_left("https://x", "https://"), "x");
        assert_eq!(truncated_left("x", "https://"), "x");
        assert_eq!(truncated_right("file.txt", ".txt"), "file");
        assert_eq!(truncated_right("file.txt", ".md"), "file.txt");
        // "e" is not a grapheme prefix of "é".
        assert_eq!(truncated_left("e\u{301}x", "e"), "e\u{301}x");
        assert_eq!(ensured_left("x", "https://"), "https://x");
        assert_eq!(ensured_left("https://x", "https://"), "https://x");
        assert_eq!(ensured_right("dir", "/"), "dir/");
        assert_eq!(ensured_right("dir/", "/"), "dir/");
    }

    #[test]
    fn test_case_transforms() {
        assert_eq!(capitalized("hELLO big  wORLD"), "Hello Big  World");
        assert_eq!(camel_cased("hello big world"), "helloBigWorld");
        assert_eq!(camel_cased("Hello"), "hello");
        assert_eq!(camel_cased(""), "");
        assert_eq!(pascal_cased("hello big world"), "HelloBigWorld");
        assert_eq!(lower_cased("ÄB"), "äb");
        assert_eq!(upper_cased("äb"), "ÄB");
    }

    #[test]
    fn test_latinized_and_slugified() {
        assert_eq!(latinized("Crème Brûlée"), "Creme Brulee");
        assert_eq!(slugified("Crème Brûlée!"), "Creme-Brulee");
        assert_eq!(slugified("  a -- b  "), "a----b");
        assert_eq!(slugified(""), "");
    }

    #[test]
    fn test_joined() {
        assert_eq!(joined(", ", [1, 2, 3]), "1, 2, 3");
        assert_eq!(joined("-", ["a"]), "a");
        assert_eq!(joined("-", Vec::<String>::new()), "");
    }

    #[test]
    fn test_reversed_keeps_graphemes() {
        assert_eq!(reversed("ae\u{301}👍"), "👍e\u{301}a");
    }

    #[test]
    fn test_crlf_edits_keep_the_line_break() {
        assert_eq!(removed_substring("\r\nab", "b"), "\r\na");
        assert_eq!(
            replaced_substring::<(isize, isize)>("\r\nab", "a", "X", None),
            "\r\nXb"
        );
        assert_eq!(removed_character_at("a\r\nb", 1), "ab");
        assert_eq!(reversed("a\r\nb"), "b\r\na");
    }
}
