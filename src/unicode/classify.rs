//! Character classification and content predicates.
//!
//! Classes are decided per Unicode scalar; a string "contains" a class when
//! any of its scalars belongs to it.

use bitflags::bitflags;

use crate::unicode::grapheme::graphemes;

bitflags! {
    /// Character classes present in a piece of text.
    ///
    /// Returned by [`char_classes`] so several predicates can be answered
    /// from one scan.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct CharClass: u8 {
        /// Numeric scalar (decimal digits and other numerals).
        const NUMBER      = 0x01;
        /// Alphabetic scalar.
        const LETTER      = 0x02;
        /// Punctuation (Unicode `P*` categories for the covered blocks).
        const PUNCTUATION = 0x04;
        /// Scalar from the emoji table.
        const EMOJI       = 0x08;
        /// Whitespace, including newlines.
        const WHITESPACE  = 0x10;
        /// Lowercase letter.
        const LOWERCASE   = 0x20;
        /// Uppercase letter.
        const UPPERCASE   = 0x40;
    }
}

/// Codepoint ranges treated as emoji.
const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x3030, 0x3030),   // wavy dash
    (0x00AE, 0x00AE),   // registered sign
    (0x00A9, 0x00A9),   // copyright sign
    (0x1D000, 0x1F77F), // emoticons
    (0x2100, 0x27BF),   // misc symbols and dingbats
    (0xFE00, 0xFE0F),   // variation selectors
    (0x1F900, 0x1F9FF), // supplemental symbols and pictographs
];

/// Check a scalar against the emoji table.
#[must_use]
pub fn is_emoji(c: char) -> bool {
    let cp = u32::from(c);
    EMOJI_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&cp))
}

/// Check whether a scalar is punctuation.
///
/// ASCII symbols such as `$`, `+` or `|` are math/currency symbols in
/// Unicode and are not punctuation.
#[must_use]
pub fn is_punctuation(c: char) -> bool {
    if c.is_ascii() {
        return matches!(
            c,
            '!' | '"'
                | '#'
                | '%'
                | '&'
                | '\''
                | '('
                | ')'
                | '*'
                | ','
                | '-'
                | '.'
                | '/'
                | ':'
                | ';'
                | '?'
                | '@'
                | '['
                | '\\'
                | ']'
                | '_'
                | '{'
                | '}'
        );
    }
    matches!(
        u32::from(c),
        0x00A1 | 0x00A7 | 0x00AB | 0x00B6 | 0x00B7 | 0x00BB | 0x00BF
            | 0x037E
            | 0x0387
            | 0x055A..=0x055F
            | 0x0589..=0x058A
            | 0x05BE
            | 0x060C..=0x060D
            | 0x061B
            | 0x061F
            | 0x066A..=0x066D
            | 0x06D4
            | 0x0964..=0x0965
            | 0x2010..=0x2027
            | 0x2030..=0x2043
            | 0x2045..=0x2051
            | 0x2053..=0x205E
            | 0x207D..=0x207E
            | 0x208D..=0x208E
            | 0x2308..=0x230B
            | 0x2329..=0x232A
            | 0x2E00..=0x2E4F
            | 0x3001..=0x3003
            | 0x3008..=0x3011
            | 0x3014..=0x301F
            | 0xFE10..=0xFE19
            | 0xFE30..=0xFE52
            | 0xFE54..=0xFE61
            | 0xFF01..=0xFF03
            | 0xFF05..=0xFF0A
            | 0xFF0C..=0xFF0F
            | 0xFF1A..=0xFF1B
            | 0xFF1F..=0xFF20
            | 0xFF3B..=0xFF3D
            | 0xFF3F
            | 0xFF5B
            | 0xFF5D
            | 0xFF5F..=0xFF65
    )
}

fn classify_char(c: char) -> CharClass {
    let mut class = CharClass::empty();
    if c.is_numeric() {
        class |= CharClass::NUMBER;
    }
    if c.is_alphabetic() {
        class |= CharClass::LETTER;
    }
    if c.is_lowercase() {
        class |= CharClass::LOWERCASE;
    }
    if c.is_uppercase() {
        class |= CharClass::UPPERCASE;
    }
    if c.is_whitespace() {
        class |= CharClass::WHITESPACE;
    }
    if is_punctuation(c) {
        class |= CharClass::PUNCTUATION;
    }
    if is_emoji(c) {
        class |= CharClass::EMOJI;
    }
    class
}

/// Union of the classes of every scalar in `text`.
#[must_use]
pub fn char_classes(text: &str) -> CharClass {
    text.chars()
        .fold(CharClass::empty(), |acc, c| acc | classify_char(c))
}

#[must_use]
pub fn contains_number(text: &str) -> bool {
    text.chars().any(char::is_numeric)
}

#[must_use]
pub fn contains_letter(text: &str) -> bool {
    text.chars().any(char::is_alphabetic)
}

#[must_use]
pub fn contains_punctuation(text: &str) -> bool {
    text.chars().any(is_punctuation)
}

#[must_use]
pub fn contains_emoji(text: &str) -> bool {
    text.chars().any(is_emoji)
}

/// Non-empty, has a number and no letter.
#[must_use]
pub fn is_numeric(text: &str) -> bool {
    let class = char_classes(text);
    class.contains(CharClass::NUMBER) && !class.contains(CharClass::LETTER)
}

/// Non-empty, has a letter and no number.
#[must_use]
pub fn is_alphabetic(text: &str) -> bool {
    let class = char_classes(text);
    class.contains(CharClass::LETTER) && !class.contains(CharClass::NUMBER)
}

/// Non-empty and has a number or a letter.
#[must_use]
pub fn is_alphanumeric(text: &str) -> bool {
    char_classes(text).intersects(CharClass::NUMBER | CharClass::LETTER)
}

/// Non-empty and unchanged by lower-casing.
#[must_use]
pub fn is_lower_case(text: &str) -> bool {
    !text.is_empty() && text.to_lowercase() == text
}

/// Non-empty and unchanged by upper-casing.
#[must_use]
pub fn is_upper_case(text: &str) -> bool {
    !text.is_empty() && text.to_uppercase() == text
}

/// Non-empty, alphanumeric and equal to its grapheme reversal.
#[must_use]
pub fn is_palindrome(text: &str) -> bool {
    if !is_alphanumeric(text) {
        return false;
    }
    graphemes(text).eq(graphemes(text).rev())
}
