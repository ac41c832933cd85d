//! Whole-text inspection: words, lines, character frequency, repetition
//! and the classes of the first and last character.

use std::collections::HashMap;

use crate::text::RingText;
use crate::unicode::classify::{CharClass, char_classes, is_lower_case, is_punctuation, is_upper_case};
use crate::unicode::grapheme::graphemes;

/// Classes of the first character, empty for empty text.
#[must_use]
pub fn leading_class(text: &str) -> CharClass {
    graphemes(text).next().map_or(CharClass::empty(), char_classes)
}

/// Classes of the last character, empty for empty text.
#[must_use]
pub fn trailing_class(text: &str) -> CharClass {
    graphemes(text).next_back().map_or(CharClass::empty(), char_classes)
}

/// First character is unchanged by lower-casing.
#[must_use]
pub fn starts_lower_case(text: &str) -> bool {
    graphemes(text).next().is_some_and(is_lower_case)
}

#[must_use]
pub fn starts_upper_case(text: &str) -> bool {
    graphemes(text).next().is_some_and(is_upper_case)
}

#[must_use]
pub fn ends_lower_case(text: &str) -> bool {
    graphemes(text).next_back().is_some_and(is_lower_case)
}

#[must_use]
pub fn ends_upper_case(text: &str) -> bool {
    graphemes(text).next_back().is_some_and(is_upper_case)
}

/// Words separated by whitespace or punctuation.
#[must_use]
pub fn words(text: &str) -> Vec<String> {
    text.split(|c: char| c.is_whitespace() || is_punctuation(c))
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

#[must_use]
pub fn word_count(text: &str) -> usize {
    words(text).len()
}

/// Upper-cased first character of every space-separated word.
///
/// `"hello big world"` gives `"HBW"`.
#[must_use]
pub fn initials(text: &str) -> String {
    text.split_whitespace()
        .filter_map(|word| graphemes(word).next())
        .map(str::to_uppercase)
        .collect()
}

/// Lines split on `\n` or `\r\n`, without their terminators.
#[must_use]
pub fn lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// The most frequent characters.
///
/// Ties are all returned, ordered by first occurrence. Case-insensitive
/// counting reports lower-cased characters. With
/// `ignore_spaces_and_newlines`, characters made only of spaces, `\n` and
/// `\r` are not counted.
#[must_use]
pub fn most_common_characters(
    text: &str,
    case_sensitive: bool,
    ignore_spaces_and_newlines: bool,
) -> Vec<String> {
    most_common_where(text, case_sensitive, |g| {
        !(ignore_spaces_and_newlines && g.chars().all(|c| matches!(c, ' ' | '\n' | '\r')))
    })
}

/// The most frequent characters that belong to any of `class`.
///
/// `most_common_of(text, CharClass::NUMBER, true)` is the most common digit;
/// `CharClass::LETTER`, `CharClass::PUNCTUATION` and `CharClass::EMOJI`
/// work the same way.
#[must_use]
pub fn most_common_of(text: &str, class: CharClass, case_sensitive: bool) -> Vec<String> {
    most_common_where(text, case_sensitive, |g| char_classes(g).intersects(class))
}

fn most_common_where(text: &str, case_sensitive: bool, keep: impl Fn(&str) -> bool) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();
    for g in graphemes(text).filter(|g| keep(g)) {
        let key = if case_sensitive { g.to_string() } else { g.to_lowercase() };
        let count = counts.entry(key.clone()).or_insert(0);
        if *count == 0 {
            order.push(key);
        }
        *count += 1;
    }
    let Some(&max) = counts.values().max() else {
        return Vec::new();
    };
    order
        .into_iter()
        .filter(|key| counts.get(key) == Some(&max))
        .collect()
}

/// The character the whole text repeats, if it consists of one character
/// only.
#[must_use]
pub fn repeated_character(text: &str, case_sensitive: bool) -> Option<String> {
    repeated_unit(text, case_sensitive, 1)
}

/// The shortest proper substring the whole text is a repetition of.
///
/// `"abcabc"` gives `"abc"`; `"aaaa"` gives `"a"`; text with no such
/// period (or a single character) gives `None`.
#[must_use]
pub fn repeated_substring(text: &str, case_sensitive: bool) -> Option<String> {
    let len = RingText::new(text).len();
    (1..len)
        .filter(|period| len % period == 0)
        .find_map(|period| repeated_unit(text, case_sensitive, period))
}

/// The first `period` characters when the text is made of copies of them.
fn repeated_unit(text: &str, case_sensitive: bool, period: usize) -> Option<String> {
    let folded: Vec<String> = graphemes(text)
        .map(|g| if case_sensitive { g.to_string() } else { g.to_lowercase() })
        .collect();
    if folded.is_empty() || folded.len() % period != 0 {
        return None;
    }
    let unit = &folded[..period];
    folded
        .chunks(period)
        .all(|chunk| chunk == unit)
        .then(|| unit.concat())
}
