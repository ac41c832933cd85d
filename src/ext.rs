//! Extension traits: the method-call surface of the crate.
//!
//! [`StrExt`] adds pure methods to `str` (and so to `String` through
//! deref). [`StringExt`] adds in-place forms to `String`: each computes the
//! pure result, stores it in `self` and returns `&mut String` for chaining.
//!
//! Methods whose natural name is already taken by an inherent `str` or
//! `String` method carry a longer name (`contains_substring`,
//! `line_array`, `replace_in_range`, `trim_whitespace`), since inherent
//! methods always win method resolution.
//!
//! ```
//! use ringtext::{StrExt, StringExt};
//!
//! assert_eq!("abcd".substring(-1..=4, true), "dabcda");
//! assert_eq!("aaaa".count("aa", true, true), 3);
//!
//! let mut s = String::from("  hello big world ");
//! s.trim_whitespace().camelize().append_right("!");
//! assert_eq!(s, "helloBigWorld!");
//! ```

use std::fmt::Display;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::clipboard::{ClipboardService, copy_to_clipboard};
use crate::convert::{self, NumberLocale, UrlParts};
use crate::encoding;
use crate::error::Result;
use crate::text::{self, RingText, TextRange, inspect};
use crate::transform::{self, PadSide};
use crate::unicode::classify::{self, CharClass};

/// Pure, grapheme-aware methods on `str`.
pub trait StrExt {
    // -------------------------------------------------------------------------
    // Ring indexing
    // -------------------------------------------------------------------------

    /// Number of grapheme clusters.
    fn length(&self) -> usize;
    /// Index of the last character, `None` when empty.
    fn last_index(&self) -> Option<usize>;
    fn character_array(&self) -> Vec<String>;
    fn first_character(&self) -> Option<String>;
    fn last_character(&self) -> Option<String>;
    fn character_at(&self, index: isize, infinite: bool) -> String;
    fn character_from_left(&self, index: isize, infinite: bool) -> String;
    fn character_from_right(&self, index: isize, infinite: bool) -> String;
    fn substring<R: TextRange>(&self, range: R, infinite: bool) -> String;
    fn substring_from_left(&self, index: isize, infinite: bool) -> String;
    fn substring_from_right(&self, steps: isize, infinite: bool) -> String;
    /// Pieces of `chunk_length` characters; `chunk_length <= 0` gives `[]`.
    fn chunks<R: TextRange>(&self, chunk_length: isize, range: R) -> Vec<String>;

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    fn indexes_of(&self, pattern: &str, with_overlap: bool, case_sensitive: bool) -> Vec<usize>;
    fn count(&self, pattern: &str, with_overlap: bool, case_sensitive: bool) -> usize;
    fn contains_substring(&self, pattern: &str, case_sensitive: bool) -> bool;
    fn starts_with_substring(&self, pattern: &str, case_sensitive: bool) -> bool;
    fn ends_with_substring(&self, pattern: &str, case_sensitive: bool) -> bool;

    // -------------------------------------------------------------------------
    // Investigation
    // -------------------------------------------------------------------------

    fn char_classes(&self) -> CharClass;
    fn is_numeric(&self) -> bool;
    fn is_alphabetic(&self) -> bool;
    fn is_alphanumeric(&self) -> bool;
    fn is_lower_case(&self) -> bool;
    fn is_upper_case(&self) -> bool;
    fn is_palindrome(&self) -> bool;
    fn contains_number(&self) -> bool;
    fn contains_letter(&self) -> bool;
    fn contains_punctuation(&self) -> bool;
    fn contains_emoji(&self) -> bool;
    fn starts_with_number(&self) -> bool;
    fn starts_with_letter(&self) -> bool;
    fn starts_with_punctuation(&self) -> bool;
    fn starts_with_emoji(&self) -> bool;
    fn ends_with_number(&self) -> bool;
    fn ends_with_letter(&self) -> bool;
    fn ends_with_punctuation(&self) -> bool;
    fn ends_with_emoji(&self) -> bool;
    fn starts_lower_case(&self) -> bool;
    fn starts_upper_case(&self) -> bool;
    fn ends_lower_case(&self) -> bool;
    fn ends_upper_case(&self) -> bool;
    fn is_valid_email(&self) -> bool;
    fn is_valid_url(&self) -> bool;
    fn is_valid_schemed_url(&self) -> bool;
    fn is_valid_http_url(&self) -> bool;
    fn is_valid_https_url(&self) -> bool;
    fn is_valid_file_url(&self) -> bool;
    fn initials(&self) -> String;
    fn words(&self) -> Vec<String>;
    fn word_count(&self) -> usize;
    fn line_array(&self) -> Vec<String>;
    fn most_common_characters(&self, case_sensitive: bool, ignore_spaces_and_newlines: bool) -> Vec<String>;
    fn most_common_of(&self, class: CharClass, case_sensitive: bool) -> Vec<String>;
    fn repeated_character(&self, case_sensitive: bool) -> Option<String>;
    fn repeated_substring(&self, case_sensitive: bool) -> Option<String>;

    // -------------------------------------------------------------------------
    // Conversion and encoding
    // -------------------------------------------------------------------------

    fn bool_value(&self) -> Option<bool>;
    fn integer_value<T: FromStr + TryFrom<i128>>(&self) -> Option<T>;
    fn f32_value(&self, locale: NumberLocale) -> Option<f32>;
    fn f64_value(&self, locale: NumberLocale) -> Option<f64>;
    fn time_value(&self) -> Option<NaiveTime>;
    fn date_value(&self) -> Option<NaiveDate>;
    fn date_time_value(&self) -> Option<NaiveDateTime>;
    fn date_with_format(&self, format: &str) -> Option<NaiveDateTime>;
    fn url_value(&self) -> Option<UrlParts>;
    fn base64_encoded(&self) -> Option<String>;
    fn base64_decoded(&self) -> Option<String>;
    fn url_encoded(&self) -> Option<String>;
    fn url_decoded(&self) -> Option<String>;
    fn ascii_encoded(&self, ignore_invalid: bool) -> Option<Vec<u8>>;
    fn ascii_decoded(&self, ignore_invalid: bool) -> Option<Vec<String>>;
    fn unicode_encoded(&self) -> Vec<u32>;
    fn unicode_decoded(&self) -> Option<Vec<String>>;

    // -------------------------------------------------------------------------
    // Modification (pure)
    // -------------------------------------------------------------------------

    fn appended_left(&self, prefix: &str) -> String;
    fn appended_right(&self, suffix: &str) -> String;
    fn appended_both(&self, affix: &str) -> String;
    fn padded_left(&self, pad: &str, times: isize) -> String;
    fn padded_right(&self, pad: &str, times: isize) -> String;
    fn padded(&self, pad: &str, times: isize) -> String;
    fn pad_to_width(&self, width: usize, side: PadSide) -> String;
    fn repeated(&self, times: isize) -> String;
    fn replaced_character_at(&self, index: isize, with: &str) -> String;
    fn replaced_range<R: TextRange>(&self, range: R, with: &str) -> String;
    fn replaced_substring(&self, pattern: &str, with: &str) -> String;
    fn replaced_substring_in<R: TextRange>(&self, pattern: &str, with: &str, range: R) -> String;
    fn inserted_at(&self, index: isize, substring: &str) -> String;
    fn removed_character_at(&self, index: isize) -> String;
    fn removed_range<R: TextRange>(&self, range: R) -> String;
    fn removed_from_left(&self, to_index: isize) -> String;
    fn removed_from_right(&self, steps: isize) -> String;
    fn removed_substring(&self, pattern: &str) -> String;
    fn moved<R: TextRange>(&self, range: R, to_index: isize) -> String;
    fn removed_spaces_and_newlines(&self) -> String;
    fn removed_punctuation(&self) -> String;
    fn reversed(&self) -> String;
    fn trimmed(&self) -> String;
    fn trimmed_left(&self) -> String;
    fn trimmed_right(&self) -> String;
    fn truncated_left(&self, prefix: &str) -> String;
    fn truncated_right(&self, suffix: &str) -> String;
    fn ensured_left(&self, prefix: &str) -> String;
    fn ensured_right(&self, suffix: &str) -> String;
    fn capitalized(&self) -> String;
    fn lower_cased(&self) -> String;
    fn upper_cased(&self) -> String;
    fn camel_cased(&self) -> String;
    fn pascal_cased(&self) -> String;
    fn latinized(&self) -> String;
    fn slugified(&self) -> String;
    /// `self` used as the separator between `elements`.
    fn joined<I>(&self, elements: I) -> String
    where
        I: IntoIterator,
        I::Item: Display;

    // -------------------------------------------------------------------------
    // Clipboard
    // -------------------------------------------------------------------------

    fn copy_to_clipboard<S: ClipboardService + ?Sized>(&self, service: &mut S) -> Result<()>;
}

impl StrExt for str {
    fn length(&self) -> usize {
        text::length(self)
    }

    fn last_index(&self) -> Option<usize> {
        text::last_index(self)
    }

    fn character_array(&self) -> Vec<String> {
        text::character_array(self)
    }

    fn first_character(&self) -> Option<String> {
        RingText::new(self).first_character()
    }

    fn last_character(&self) -> Option<String> {
        RingText::new(self).last_character()
    }

    fn character_at(&self, index: isize, infinite: bool) -> String {
        RingText::new(self).character_at(index, infinite)
    }

    fn character_from_left(&self, index: isize, infinite: bool) -> String {
        RingText::new(self).character_from_left(index, infinite)
    }

    fn character_from_right(&self, index: isize, infinite: bool) -> String {
        RingText::new(self).character_from_right(index, infinite)
    }

    fn substring<R: TextRange>(&self, range: R, infinite: bool) -> String {
        RingText::new(self).substring(range, infinite)
    }

    fn substring_from_left(&self, index: isize, infinite: bool) -> String {
        RingText::new(self).substring_from_left(index, infinite)
    }

    fn substring_from_right(&self, steps: isize, infinite: bool) -> String {
        RingText::new(self).substring_from_right(steps, infinite)
    }

    fn chunks<R: TextRange>(&self, chunk_length: isize, range: R) -> Vec<String> {
        usize::try_from(chunk_length)
            .map(|length| RingText::new(self).chunks(length, range))
            .unwrap_or_default()
    }

    fn indexes_of(&self, pattern: &str, with_overlap: bool, case_sensitive: bool) -> Vec<usize> {
        text::indexes_of(self, pattern, with_overlap, case_sensitive)
    }

    fn count(&self, pattern: &str, with_overlap: bool, case_sensitive: bool) -> usize {
        text::count(self, pattern, with_overlap, case_sensitive)
    }

    fn contains_substring(&self, pattern: &str, case_sensitive: bool) -> bool {
        text::contains(self, pattern, case_sensitive)
    }

    fn starts_with_substring(&self, pattern: &str, case_sensitive: bool) -> bool {
        text::starts_with(self, pattern, case_sensitive)
    }

    fn ends_with_substring(&self, pattern: &str, case_sensitive: bool) -> bool {
        text::ends_with(self, pattern, case_sensitive)
    }

    fn char_classes(&self) -> CharClass {
        classify::char_classes(self)
    }

    fn is_numeric(&self) -> bool {
        classify::is_numeric(self)
    }

    fn is_alphabetic(&self) -> bool {
        classify::is_alphabetic(self)
    }

    fn is_alphanumeric(&self) -> bool {
        classify::is_alphanumeric(self)
    }

    fn is_lower_case(&self) -> bool {
        classify::is_lower_case(self)
    }

    fn is_upper_case(&self) -> bool {
        classify::is_upper_case(self)
    }

    fn is_palindrome(&self) -> bool {
        classify::is_palindrome(self)
    }

    fn contains_number(&self) -> bool {
        classify::contains_number(self)
    }

    fn contains_letter(&self) -> bool {
        classify::contains_letter(self)
    }

    fn contains_punctuation(&self) -> bool {
        classify::contains_punctuation(self)
    }

    fn contains_emoji(&self) -> bool {
        classify::contains_emoji(self)
    }

    fn starts_with_number(&self) -> bool {
        inspect::leading_class(self).contains(CharClass::NUMBER)
    }

    fn starts_with_letter(&self) -> bool {
        inspect::leading_class(self).contains(CharClass::LETTER)
    }

    fn starts_with_punctuation(&self) -> bool {
        inspect::leading_class(self).contains(CharClass::PUNCTUATION)
    }

    fn starts_with_emoji(&self) -> bool {
        inspect::leading_class(self).contains(CharClass::EMOJI)
    }

    fn ends_with_number(&self) -> bool {
        inspect::trailing_class(self).contains(CharClass::NUMBER)
    }

    fn ends_with_letter(&self) -> bool {
        inspect::trailing_class(self).contains(CharClass::LETTER)
    }

    fn ends_with_punctuation(&self) -> bool {
        inspect::trailing_class(self).contains(CharClass::PUNCTUATION)
    }

    fn ends_with_emoji(&self) -> bool {
        inspect::trailing_class(self).contains(CharClass::EMOJI)
    }

    fn starts_lower_case(&self) -> bool {
        inspect::starts_lower_case(self)
    }

    fn starts_upper_case(&self) -> bool {
        inspect::starts_upper_case(self)
    }

    fn ends_lower_case(&self) -> bool {
        inspect::ends_lower_case(self)
    }

    fn ends_upper_case(&self) -> bool {
        inspect::ends_upper_case(self)
    }

    fn is_valid_email(&self) -> bool {
        convert::is_valid_email(self)
    }

    fn is_valid_url(&self) -> bool {
        convert::is_valid_url(self)
    }

    fn is_valid_schemed_url(&self) -> bool {
        convert::is_valid_schemed_url(self)
    }

    fn is_valid_http_url(&self) -> bool {
        convert::is_valid_http_url(self)
    }

    fn is_valid_https_url(&self) -> bool {
        convert::is_valid_https_url(self)
    }

    fn is_valid_file_url(&self) -> bool {
        convert::is_valid_file_url(self)
    }

    fn initials(&self) -> String {
        inspect::initials(self)
    }

    fn words(&self) -> Vec<String> {
        inspect::words(self)
    }

    fn word_count(&self) -> usize {
        inspect::word_count(self)
    }

    fn line_array(&self) -> Vec<String> {
        inspect::lines(self)
    }

    fn most_common_characters(&self, case_sensitive: bool, ignore_spaces_and_newlines: bool) -> Vec<String> {
        inspect::most_common_characters(self, case_sensitive, ignore_spaces_and_newlines)
    }

    fn most_common_of(&self, class: CharClass, case_sensitive: bool) -> Vec<String> {
        inspect::most_common_of(self, class, case_sensitive)
    }

    fn repeated_character(&self, case_sensitive: bool) -> Option<String> {
        inspect::repeated_character(self, case_sensitive)
    }

    fn repeated_substring(&self, case_sensitive: bool) -> Option<String> {
        inspect::repeated_substring(self, case_sensitive)
    }

    fn bool_value(&self) -> Option<bool> {
        convert::bool_value(self)
    }

    fn integer_value<T: FromStr + TryFrom<i128>>(&self) -> Option<T> {
        convert::integer_value(self)
    }

    fn f32_value(&self, locale: NumberLocale) -> Option<f32> {
        convert::f32_value(self, locale)
    }

    fn f64_value(&self, locale: NumberLocale) -> Option<f64> {
        convert::f64_value(self, locale)
    }

    fn time_value(&self) -> Option<NaiveTime> {
        convert::time_value(self)
    }

    fn date_value(&self) -> Option<NaiveDate> {
        convert::date_value(self)
    }

    fn date_time_value(&self) -> Option<NaiveDateTime> {
        convert::date_time_value(self)
    }

    fn date_with_format(&self, format: &str) -> Option<NaiveDateTime> {
        convert::date_with_format(self, format)
    }

    fn url_value(&self) -> Option<UrlParts> {
        convert::url_value(self)
    }

    fn base64_encoded(&self) -> Option<String> {
        encoding::base64_encoded(self)
    }

    fn base64_decoded(&self) -> Option<String> {
        encoding::base64_decoded(self)
    }

    fn url_encoded(&self) -> Option<String> {
        encoding::url_encoded(self)
    }

    fn url_decoded(&self) -> Option<String> {
        encoding::url_decoded(self)
    }

    fn ascii_encoded(&self, ignore_invalid: bool) -> Option<Vec<u8>> {
        encoding::ascii_encoded(self, ignore_invalid)
    }

    fn ascii_decoded(&self, ignore_invalid: bool) -> Option<Vec<String>> {
        encoding::ascii_decoded(self, ignore_invalid)
    }

    fn unicode_encoded(&self) -> Vec<u32> {
        encoding::unicode_encoded(self)
    }

    fn unicode_decoded(&self) -> Option<Vec<String>> {
        encoding::unicode_decoded(self)
    }

    fn appended_left(&self, prefix: &str) -> String {
        transform::appended_left(self, prefix)
    }

    fn appended_right(&self, suffix: &str) -> String {
        transform::appended_right(self, suffix)
    }

    fn appended_both(&self, affix: &str) -> String {
        transform::appended_both(self, affix)
    }

    fn padded_left(&self, pad: &str, times: isize) -> String {
        transform::padded_left(self, pad, times)
    }

    fn padded_right(&self, pad: &str, times: isize) -> String {
        transform::padded_right(self, pad, times)
    }

    fn padded(&self, pad: &str, times: isize) -> String {
        transform::padded(self, pad, times)
    }

    fn pad_to_width(&self, width: usize, side: PadSide) -> String {
        transform::pad_to_width(self, width, side)
    }

    fn repeated(&self, times: isize) -> String {
        transform::repeated(self, times)
    }

    fn replaced_character_at(&self, index: isize, with: &str) -> String {
        transform::replaced_character_at(self, index, with)
    }

    fn replaced_range<R: TextRange>(&self, range: R, with: &str) -> String {
        transform::replaced_range(self, range, with)
    }

    fn replaced_substring(&self, pattern: &str, with: &str) -> String {
        transform::replaced_substring::<(isize, isize)>(self, pattern, with, None)
    }

    fn replaced_substring_in<R: TextRange>(&self, pattern: &str, with: &str, range: R) -> String {
        transform::replaced_substring(self, pattern, with, Some(range))
    }

    fn inserted_at(&self, index: isize, substring: &str) -> String {
        transform::inserted_at(self, index, substring)
    }

    fn removed_character_at(&self, index: isize) -> String {
        transform::removed_character_at(self, index)
    }

    fn removed_range<R: TextRange>(&self, range: R) -> String {
        transform::removed_range(self, range)
    }

    fn removed_from_left(&self, to_index: isize) -> String {
        transform::removed_from_left(self, to_index)
    }

    fn removed_from_right(&self, steps: isize) -> String {
        transform::removed_from_right(self, steps)
    }

    fn removed_substring(&self, pattern: &str) -> String {
        transform::removed_substring(self, pattern)
    }

    fn moved<R: TextRange>(&self, range: R, to_index: isize) -> String {
        transform::moved(self, range, to_index)
    }

    fn removed_spaces_and_newlines(&self) -> String {
        transform::removed_spaces_and_newlines(self)
    }

    fn removed_punctuation(&self) -> String {
        transform::removed_punctuation(self)
    }

    fn reversed(&self) -> String {
        transform::reversed(self)
    }

    fn trimmed(&self) -> String {
        transform::trimmed(self)
    }

    fn trimmed_left(&self) -> String {
        transform::trimmed_left(self)
    }

    fn trimmed_right(&self) -> String {
        transform::trimmed_right(self)
    }

    fn truncated_left(&self, prefix: &str) -> String {
        transform::truncated_left(self, prefix)
    }

    fn truncated_right(&self, suffix: &str) -> String {
        transform::truncated_right(self, suffix)
    }

    fn ensured_left(&self, prefix: &str) -> String {
        transform::ensured_left(self, prefix)
    }

    fn ensured_right(&self, suffix: &str) -> String {
        transform::ensured_right(self, suffix)
    }

    fn capitalized(&self) -> String {
        transform::capitalized(self)
    }

    fn lower_cased(&self) -> String {
        transform::lower_cased(self)
    }

    fn upper_cased(&self) -> String {
        transform::upper_cased(self)
    }

    fn camel_cased(&self) -> String {
        transform::camel_cased(self)
    }

    fn pascal_cased(&self) -> String {
        transform::pascal_cased(self)
    }

    fn latinized(&self) -> String {
        transform::latinized(self)
    }

    fn slugified(&self) -> String {
        transform::slugified(self)
    }

    fn joined<I>(&self, elements: I) -> String
    where
        I: IntoIterator,
        I::Item: Display,
    {
        transform::joined(self, elements)
    }

    fn copy_to_clipboard<S: ClipboardService + ?Sized>(&self, service: &mut S) -> Result<()> {
        copy_to_clipboard(service, self)
    }
}

/// In-place modification of a `String`.
///
/// Every method replaces `*self` with the matching [`StrExt`] result. The
/// encoding methods return `None` and leave `self` untouched when the
/// conversion fails.
pub trait StringExt {
    fn append_left(&mut self, prefix: &str) -> &mut String;
    fn append_right(&mut self, suffix: &str) -> &mut String;
    fn append_both(&mut self, affix: &str) -> &mut String;
    fn pad_left(&mut self, pad: &str, times: isize) -> &mut String;
    fn pad_right(&mut self, pad: &str, times: isize) -> &mut String;
    fn pad(&mut self, pad: &str, times: isize) -> &mut String;
    fn repeat_self(&mut self, times: isize) -> &mut String;
    fn replace_character_at(&mut self, index: isize, with: &str) -> &mut String;
    fn replace_in_range<R: TextRange>(&mut self, range: R, with: &str) -> &mut String;
    fn replace_substring(&mut self, pattern: &str, with: &str) -> &mut String;
    fn insert_at(&mut self, index: isize, substring: &str) -> &mut String;
    fn remove_character_at(&mut self, index: isize) -> &mut String;
    fn remove_range<R: TextRange>(&mut self, range: R) -> &mut String;
    fn remove_from_left(&mut self, to_index: isize) -> &mut String;
    fn remove_from_right(&mut self, steps: isize) -> &mut String;
    fn remove_substring(&mut self, pattern: &str) -> &mut String;
    fn move_range<R: TextRange>(&mut self, range: R, to_index: isize) -> &mut String;
    fn remove_spaces_and_newlines(&mut self) -> &mut String;
    fn remove_punctuation(&mut self) -> &mut String;
    fn reverse(&mut self) -> &mut String;
    fn trim_whitespace(&mut self) -> &mut String;
    fn trim_whitespace_left(&mut self) -> &mut String;
    fn trim_whitespace_right(&mut self) -> &mut String;
    fn truncate_left(&mut self, prefix: &str) -> &mut String;
    fn truncate_right(&mut self, suffix: &str) -> &mut String;
    fn ensure_left(&mut self, prefix: &str) -> &mut String;
    fn ensure_right(&mut self, suffix: &str) -> &mut String;
    fn capitalize(&mut self) -> &mut String;
    fn lower_case(&mut self) -> &mut String;
    fn upper_case(&mut self) -> &mut String;
    fn camelize(&mut self) -> &mut String;
    fn pascalize(&mut self) -> &mut String;
    fn latinize(&mut self) -> &mut String;
    fn slugify(&mut self) -> &mut String;
    /// Replace `self` with `elements` joined by the current content.
    fn join<I>(&mut self, elements: I) -> &mut String
    where
        I: IntoIterator,
        I::Item: Display;
    fn base64_encode(&mut self) -> Option<&mut String>;
    fn base64_decode(&mut self) -> Option<&mut String>;
    fn url_encode(&mut self) -> Option<&mut String>;
    fn url_decode(&mut self) -> Option<&mut String>;
}

impl StringExt for String {
    fn append_left(&mut self, prefix: &str) -> &mut String {
        self.insert_str(0, prefix);
        self
    }

    fn append_right(&mut self, suffix: &str) -> &mut String {
        self.push_str(suffix);
        self
    }

    fn append_both(&mut self, affix: &str) -> &mut String {
        *self = transform::appended_both(self, affix);
        self
    }

    fn pad_left(&mut self, pad: &str, times: isize) -> &mut String {
        *self = transform::padded_left(self, pad, times);
        self
    }

    fn pad_right(&mut self, pad: &str, times: isize) -> &mut String {
        *self = transform::padded_right(self, pad, times);
        self
    }

    fn pad(&mut self, pad: &str, times: isize) -> &mut String {
        *self = transform::padded(self, pad, times);
        self
    }

    fn repeat_self(&mut self, times: isize) -> &mut String {
        *self = transform::repeated(self, times);
        self
    }

    fn replace_character_at(&mut self, index: isize, with: &str) -> &mut String {
        *self = transform::replaced_character_at(self, index, with);
        self
    }

    fn replace_in_range<R: TextRange>(&mut self, range: R, with: &str) -> &mut String {
        *self = transform::replaced_range(self, range, with);
        self
    }

    fn replace_substring(&mut self, pattern: &str, with: &str) -> &mut String {
        *self = transform::replaced_substring::<(isize, isize)>(self, pattern, with, None);
        self
    }

    fn insert_at(&mut self, index: isize, substring: &str) -> &mut String {
        *self = transform::inserted_at(self, index, substring);
        self
    }

    fn remove_character_at(&mut self, index: isize) -> &mut String {
        *self = transform::removed_character_at(self, index);
        self
    }

    fn remove_range<R: TextRange>(&mut self, range: R) -> &mut String {
        *self = transform::removed_range(self, range);
        self
    }

    fn remove_from_left(&mut self, to_index: isize) -> &mut String {
        *self = transform::removed_from_left(self, to_index);
        self
    }

    fn remove_from_right(&mut self, steps: isize) -> &mut String {
        *self = transform::removed_from_right(self, steps);
        self
    }

    fn remove_substring(&mut self, pattern: &str) -> &mut String {
        *self = transform::removed_substring(self, pattern);
        self
    }

    fn move_range<R: TextRange>(&mut self, range: R, to_index: isize) -> &mut String {
        *self = transform::moved(self, range, to_index);
        self
    }

    fn remove_spaces_and_newlines(&mut self) -> &mut String {
        self.retain(|c| !matches!(c, ' ' | '\n' | '\r'));
        self
    }

    fn remove_punctuation(&mut self) -> &mut String {
        *self = transform::removed_punctuation(self);
        self
    }

    fn reverse(&mut self) -> &mut String {
        *self = transform::reversed(self);
        self
    }

    fn trim_whitespace(&mut self) -> &mut String {
        *self = transform::trimmed(self);
        self
    }

    fn trim_whitespace_left(&mut self) -> &mut String {
        *self = transform::trimmed_left(self);
        self
    }

    fn trim_whitespace_right(&mut self) -> &mut String {
        let end = self.trim_end().len();
        self.truncate(end);
        self
    }

    fn truncate_left(&mut self, prefix: &str) -> &mut String {
        *self = transform::truncated_left(self, prefix);
        self
    }

    fn truncate_right(&mut self, suffix: &str) -> &mut String {
        *self = transform::truncated_right(self, suffix);
        self
    }

    fn ensure_left(&mut self, prefix: &str) -> &mut String {
        *self = transform::ensured_left(self, prefix);
        self
    }

    fn ensure_right(&mut self, suffix: &str) -> &mut String {
        *self = transform::ensured_right(self, suffix);
        self
    }

    fn capitalize(&mut self) -> &mut String {
        *self = transform::capitalized(self);
        self
    }

    fn lower_case(&mut self) -> &mut String {
        *self = transform::lower_cased(self);
        self
    }

    fn upper_case(&mut self) -> &mut String {
        *self = transform::upper_cased(self);
        self
    }

    fn camelize(&mut self) -> &mut String {
        *self = transform::camel_cased(self);
        self
    }

    fn pascalize(&mut self) -> &mut String {
        *self = transform::pascal_cased(self);
        self
    }

    fn latinize(&mut self) -> &mut String {
        *self = transform::latinized(self);
        self
    }

    fn slugify(&mut self) -> &mut String {
        *self = transform::slugified(self);
        self
    }

    fn join<I>(&mut self, elements: I) -> &mut String
    where
        I: IntoIterator,
        I::Item: Display,
    {
        *self = transform::joined(self, elements);
        self
    }

    fn base64_encode(&mut self) -> Option<&mut String> {
        *self = encoding::base64_encoded(self)?;
        Some(self)
    }

    fn base64_decode(&mut self) -> Option<&mut String> {
        *self = encoding::base64_decoded(self)?;
        Some(self)
    }

    fn url_encode(&mut self) -> Option<&mut String> {
        *self = encoding::url_encoded(self)?;
        Some(self)
    }

    fn url_decode(&mut self) -> Option<&mut String> {
        *self = encoding::url_decoded(self)?;
        Some(self)
    }
}
