//! Text encodings: base64, percent-encoding, ASCII ordinals and Unicode
//! scalar values.

use base64::{Engine as _, engine::general_purpose};

use crate::error::{Error, Result};
use crate::event::discard;

// =============================================================================
// Base64
// =============================================================================

/// Standard-alphabet, padded base64 of the UTF-8 bytes. Empty text has no
/// encoding.
#[must_use]
pub fn base64_encoded(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    Some(general_purpose::STANDARD.encode(text.as_bytes()))
}

/// Decode standard base64 into UTF-8 text.
pub fn try_base64_decoded(text: &str) -> Result<String> {
    let bytes = general_purpose::STANDARD.decode(text.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}

/// Decoded base64, `Some("")` for empty input, `None` for a malformed
/// payload or bytes that are not UTF-8.
#[must_use]
pub fn base64_decoded(text: &str) -> Option<String> {
    if text.is_empty() {
        return Some(String::new());
    }
    discard("base64_decoded", try_base64_decoded(text))
}

// =============================================================================
// Percent encoding
// =============================================================================

/// Bytes left as-is by [`url_encoded`]: unreserved characters, sub-delims
/// and the IPv6 literal brackets.
const fn is_host_allowed(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(
            byte,
            b'-' | b'.'
                | b'_'
                | b'~'
                | b'!'
                | b'$'
                | b'&'
                | b'\''
                | b'('
                | b')'
                | b'*'
                | b'+'
                | b','
                | b';'
                | b'='
                | b'['
                | b']'
        )
}

/// Percent-encode every UTF-8 byte outside the URL host character set.
#[must_use]
pub fn url_encoded(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    let mut encoded = String::with_capacity(text.len());
    for &byte in text.as_bytes() {
        if is_host_allowed(byte) {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    Some(encoded)
}

/// Decode `%XX` escapes. Every other character is kept verbatim.
pub fn try_url_decoded(text: &str) -> Result<String> {
    let bytes = text.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let byte = bytes
                .get(i + 1..i + 3)
                .filter(|hex| hex.iter().all(u8::is_ascii_hexdigit))
                .and_then(|hex| std::str::from_utf8(hex).ok())
                .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                .ok_or(Error::InvalidPercentEncoding { position: i })?;
            decoded.push(byte);
            i += 3;
        } else {
            decoded.push(bytes[i]);
            i += 1;
        }
    }
    Ok(String::from_utf8(decoded)?)
}

#[must_use]
pub fn url_decoded(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    discard("url_decoded", try_url_decoded(text))
}

// =============================================================================
// ASCII ordinals
// =============================================================================

/// ASCII ordinals of every scalar. Empty text encodes as `[0]`.
///
/// A non-ASCII scalar makes the whole encoding fail unless
/// `ignore_invalid` is set, in which case it is skipped.
#[must_use]
pub fn ascii_encoded(text: &str, ignore_invalid: bool) -> Option<Vec<u8>> {
    if text.is_empty() {
        return Some(vec![0]);
    }
    let mut ordinals = Vec::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii() {
            ordinals.push(c as u8);
        } else if !ignore_invalid {
            return None;
        }
    }
    Some(ordinals)
}

fn ascii_char(value: i64) -> Result<char> {
    u8::try_from(value)
        .ok()
        .filter(u8::is_ascii)
        .map(char::from)
        .ok_or_else(|| Error::InvalidAscii(value.to_string()))
}

/// Characters for a list of ASCII ordinals.
pub fn try_from_ascii(ordinals: &[i64], ignore_invalid: bool) -> Result<String> {
    let mut text = String::with_capacity(ordinals.len());
    for &value in ordinals {
        match ascii_char(value) {
            Ok(c) => text.push(c),
            Err(_) if ignore_invalid => {}
            Err(e) => return Err(e),
        }
    }
    Ok(text)
}

#[must_use]
pub fn from_ascii(ordinals: &[i64], ignore_invalid: bool) -> Option<String> {
    discard("from_ascii", try_from_ascii(ordinals, ignore_invalid))
}

/// Decode space-separated ASCII ordinals (`"72 105"`) into one string per
/// ordinal.
pub fn try_ascii_decoded(text: &str, ignore_invalid: bool) -> Result<Vec<String>> {
    let mut characters = Vec::new();
    for token in text.split(' ') {
        let parsed = token
            .parse::<i64>()
            .map_err(|_| Error::InvalidAscii(token.to_string()))
            .and_then(ascii_char);
        match parsed {
            Ok(c) => characters.push(c.to_string()),
            Err(_) if ignore_invalid => {}
            Err(e) => return Err(e),
        }
    }
    Ok(characters)
}

/// Empty text decodes to `[]`.
#[must_use]
pub fn ascii_decoded(text: &str, ignore_invalid: bool) -> Option<Vec<String>> {
    if text.is_empty() {
        return Some(Vec::new());
    }
    discard("ascii_decoded", try_ascii_decoded(text, ignore_invalid))
}

// =============================================================================
// Unicode scalars
// =============================================================================

/// Scalar values of every `char` in `text`.
#[must_use]
pub fn unicode_encoded(text: &str) -> Vec<u32> {
    text.chars().map(u32::from).collect()
}

/// Decode space-separated scalar values into one string per scalar.
pub fn try_unicode_decoded(text: &str) -> Result<Vec<String>> {
    text.split(' ')
        .map(|token| {
            token
                .parse::<u32>()
                .ok()
                .and_then(char::from_u32)
                .map(String::from)
                .ok_or_else(|| Error::InvalidScalar(token.to_string()))
        })
        .collect()
}

/// Empty text decodes to `[]`; any token that is not a scalar value gives
/// `None`.
#[must_use]
pub fn unicode_decoded(text: &str) -> Option<Vec<String>> {
    if text.is_empty() {
        return Some(Vec::new());
    }
    discard("unicode_decoded", try_unicode_decoded(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_known_value() {
        assert_eq!(base64_encoded("Hello").as_deref(), Some("SGVsbG8="));
        assert_eq!(base64_decoded("SGVsbG8=").as_deref(), Some("Hello"));
        assert_eq!(base64_encoded("😀").as_deref(), Some("8J+YgA=="));
    }

    #[test]
    fn test_base64_edges() {
        assert_eq!(base64_encoded(""), None);
        assert_eq!(base64_decoded("").as_deref(), Some(""));
        assert_eq!(base64_decoded("not base64!"), None);
        // Valid base64 of 0xFF 0xFE, which is not UTF-8.
        assert!(matches!(try_base64_decoded("//4="), Err(Error::InvalidUtf8(_))));
    }

    #[test]
    fn test_url_encode() {
        assert_eq!(url_encoded("a b").as_deref(), Some("a%20b"));
        assert_eq!(url_encoded("ä/?").as_deref(), Some("%C3%A4%2F%3F"));
        assert_eq!(url_encoded("host-1.example").as_deref(), Some("host-1.example"));
        assert_eq!(url_encoded(""), None);
    }

    #[test]
    fn test_url_decode() {
        assert_eq!(url_decoded("a%20b").as_deref(), Some("a b"));
        assert_eq!(url_decoded("%C3%A4").as_deref(), Some("ä"));
        assert_eq!(url_decoded("a+b").as_deref(), Some("a+b"));
        assert_eq!(url_decoded("100%"), None);
        assert_eq!(url_decoded("%zz"), None);
        assert_eq!(url_decoded(""), None);
        assert!(matches!(
            try_url_decoded("ab%4"),
            Err(Error::InvalidPercentEncoding { position: 2 })
        ));
    }

    #[test]
    fn test_url_decode_rejects_signed_hex() {
        // from_str_radix accepts a leading sign, escapes do not
        assert!(matches!(
            try_url_decoded("%+F"),
            Err(Error::InvalidPercentEncoding { position: 0 })
        ));
        assert!(matches!(
            try_url_decoded("a%-1"),
            Err(Error::InvalidPercentEncoding { position: 1 })
        ));
        assert_eq!(url_decoded("%+F"), None);
        assert_eq!(url_decoded("%2B%2f").as_deref(), Some("+/"));
    }

    #[test]
    fn test_url_round_trip_unicode() {
        let text = "Grüße, 世界 & 👍";
        let encoded = url_encoded(text).unwrap();
        assert!(encoded.is_ascii());
        assert_eq!(url_decoded(&encoded).as_deref(), Some(text));
    }

    #[test]
    fn test_ascii_encoded() {
        assert_eq!(ascii_encoded("Hi!", false), Some(vec![72, 105, 33]));
        assert_eq!(ascii_encoded("", false), Some(vec![0]));
        assert_eq!(ascii_encoded("Hä", false), None);
        assert_eq!(ascii_encoded("Hä", true), Some(vec![72]));
    }

    #[test]
    fn test_ascii_decoded() {
        assert_eq!(
            ascii_decoded("72 105", false),
            Some(vec!["H".to_string(), "i".to_string()])
        );
        assert_eq!(ascii_decoded("72 200", false), None);
        assert_eq!(ascii_decoded("72 x 105", true), Some(vec!["H".into(), "i".into()]));
        assert_eq!(ascii_decoded("", false), Some(Vec::new()));
    }

    #[test]
    fn test_from_ascii() {
        assert_eq!(from_ascii(&[72, 105], false).as_deref(), Some("Hi"));
        assert_eq!(from_ascii(&[72, -1, 105], false), None);
        assert_eq!(from_ascii(&[72, 128, 105], true).as_deref(), Some("Hi"));
        assert_eq!(from_ascii(&[], false).as_deref(), Some(""));
    }

    #[test]
    fn test_unicode_scalars() {
        assert_eq!(unicode_encoded("aä😀"), vec![97, 228, 128_512]);
        assert!(unicode_encoded("").is_empty());
        assert_eq!(
            unicode_decoded("97 228 128512"),
            Some(vec!["a".to_string(), "ä".to_string(), "😀".to_string()])
        );
        // Surrogates are not scalar values.
        assert_eq!(unicode_decoded("55296"), None);
        assert_eq!(unicode_decoded("abc"), None);
        assert_eq!(unicode_decoded(""), Some(Vec::new()));
    }
}
