//! Typed values parsed out of text.
//!
//! Every `*_value` function returns `None` when the text does not represent
//! the requested type. The `try_*` forms return the underlying [`Error`] and
//! are what the `Option` forms report through [`crate::event`] before
//! discarding.

use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

use crate::error::{Error, Result};
use crate::event::discard;

/// Decimal and grouping separators used when parsing floating point text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberLocale {
    pub decimal: char,
    pub grouping: Option<char>,
}

impl NumberLocale {
    /// `1234.5`
    pub const POSIX: Self = Self {
        decimal: '.',
        grouping: None,
    };
    /// `1.234,5`
    pub const GERMAN: Self = Self {
        decimal: ',',
        grouping: Some('.'),
    };
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::POSIX
    }
}

/// `true|1|right` or `false|0|wrong`, ignoring case and surrounding
/// whitespace.
#[must_use]
pub fn bool_value(text: &str) -> Option<bool> {
    match text.trim().to_lowercase().as_str() {
        "true" | "1" | "right" => Some(true),
        "false" | "0" | "wrong" => Some(false),
        _ => None,
    }
}

/// Parse a float after rewriting `locale` separators to the POSIX form.
pub fn try_float_value(text: &str, locale: NumberLocale) -> Result<f64> {
    let trimmed = text.trim();
    let mut normalized = String::with_capacity(trimmed.len());
    for c in trimmed.chars() {
        if Some(c) == locale.grouping {
            continue;
        }
        if c == locale.decimal {
            normalized.push('.');
        } else if c.is_ascii_digit() || matches!(c, '+' | '-' | 'e' | 'E') {
            normalized.push(c);
        } else {
            return Err(Error::InvalidNumber(text.to_string()));
        }
    }
    normalized
        .parse::<f64>()
        .map_err(|_| Error::InvalidNumber(text.to_string()))
}

#[must_use]
pub fn f64_value(text: &str, locale: NumberLocale) -> Option<f64> {
    discard("f64_value", try_float_value(text, locale))
}

#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn f32_value(text: &str, locale: NumberLocale) -> Option<f32> {
    let value = f64_value(text, locale)?;
    let narrowed = value as f32;
    narrowed.is_finite().then_some(narrowed)
}

/// Parse an integer, falling back to a float truncated toward zero.
///
/// `"42"` and `"42.9"` both give `42`; `"-1"` is rejected for unsigned
/// targets, as is any value outside the target's range.
pub fn try_integer_value<T>(text: &str) -> Result<T>
where
    T: FromStr + TryFrom<i128>,
{
    let trimmed = text.trim();
    if let Ok(value) = trimmed.parse::<T>() {
        return Ok(value);
    }
    let invalid = || Error::InvalidNumber(text.to_string());
    let float = try_float_value(trimmed, NumberLocale::POSIX)?.trunc();
    #[allow(clippy::cast_precision_loss)]
    let in_range = float.is_finite() && float >= i128::MIN as f64 && float < i128::MAX as f64;
    if !in_range {
        return Err(invalid());
    }
    #[allow(clippy::cast_possible_truncation)]
    let wide = float as i128;
    T::try_from(wide).map_err(|_| invalid())
}

#[must_use]
pub fn integer_value<T>(text: &str) -> Option<T>
where
    T: FromStr + TryFrom<i128>,
{
    discard("integer_value", try_integer_value(text))
}

/// `HH:MM:SS`
pub fn try_time_value(text: &str) -> Result<NaiveTime> {
    Ok(NaiveTime::parse_from_str(text.trim(), "%H:%M:%S")?)
}

#[must_use]
pub fn time_value(text: &str) -> Option<NaiveTime> {
    discard("time_value", try_time_value(text))
}

/// `YYYY-MM-DD`
pub fn try_date_value(text: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")?)
}

#[must_use]
pub fn date_value(text: &str) -> Option<NaiveDate> {
    discard("date_value", try_date_value(text))
}

/// `YYYY-MM-DD HH:MM:SS`
pub fn try_date_time_value(text: &str) -> Result<NaiveDateTime> {
    Ok(NaiveDateTime::parse_from_str(
        text.trim(),
        "%Y-%m-%d %H:%M:%S",
    )?)
}

#[must_use]
pub fn date_time_value(text: &str) -> Option<NaiveDateTime> {
    discard("date_time_value", try_date_time_value(text))
}

/// Parse with a chrono strftime `format`. Formats without a time part
/// resolve to midnight.
pub fn try_date_with_format(text: &str, format: &str) -> Result<NaiveDateTime> {
    match NaiveDateTime::parse_from_str(text, format) {
        Ok(value) => Ok(value),
        Err(full) => NaiveDate::parse_from_str(text, format)
            .map(|date| date.and_time(NaiveTime::MIN))
            .map_err(|_| Error::InvalidDate(full)),
    }
}

#[must_use]
pub fn date_with_format(text: &str, format: &str) -> Option<NaiveDateTime> {
    discard("date_with_format", try_date_with_format(text, format))
}

/// Components of a URL reference.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UrlParts {
    pub scheme: Option<String>,
    pub host: Option<String>,
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl UrlParts {
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.scheme
            .as_deref()
            .is_some_and(|scheme| scheme.eq_ignore_ascii_case("file"))
    }
}

// RFC 3986 appendix B, with the scheme restricted to its grammar.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:([A-Za-z][A-Za-z0-9+.\-]*):)?(?://([^/?#]*))?([^?#]*)(?:\?([^#]*))?(?:#(.*))?$")
        .expect("URL pattern is valid")
});

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("email pattern is valid")
});

/// Split a URL reference into its components.
///
/// Empty text and text containing whitespace or control characters is not a
/// URL.
#[must_use]
pub fn url_value(text: &str) -> Option<UrlParts> {
    if text.is_empty() || text.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return None;
    }
    let caps = URL_PATTERN.captures(text)?;
    let owned = |i: usize| caps.get(i).map(|m| m.as_str().to_string());
    Some(UrlParts {
        scheme: owned(1),
        host: owned(2),
        path: owned(3).unwrap_or_default(),
        query: owned(4),
        fragment: owned(5),
    })
}

#[must_use]
pub fn is_valid_url(text: &str) -> bool {
    url_value(text).is_some()
}

#[must_use]
pub fn is_valid_schemed_url(text: &str) -> bool {
    url_value(text).is_some_and(|url| url.scheme.is_some())
}

fn has_scheme(text: &str, expected: &str) -> bool {
    url_value(text).is_some_and(|url| {
        url.scheme
            .as_deref()
            .is_some_and(|scheme| scheme.eq_ignore_ascii_case(expected))
    })
}

#[must_use]
pub fn is_valid_http_url(text: &str) -> bool {
    has_scheme(text, "http")
}

#[must_use]
pub fn is_valid_https_url(text: &str) -> bool {
    has_scheme(text, "https")
}

#[must_use]
pub fn is_valid_file_url(text: &str) -> bool {
    url_value(text).is_some_and(|url| url.is_file())
}

/// True when `text` contains something shaped like `name@domain.tld`.
#[must_use]
pub fn is_valid_email(text: &str) -> bool {
    !text.is_empty() && EMAIL_PATTERN.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_value() {
        assert_eq!(bool_value(" TRUE "), Some(true));
        assert_eq!(bool_value("1"), Some(true));
        assert_eq!(bool_value("Right"), Some(true));
        assert_eq!(bool_value("false"), Some(false));
        assert_eq!(bool_value("0"), Some(false));
        assert_eq!(bool_value("wrong"), Some(false));
        assert_eq!(bool_value("yes"), None);
        assert_eq!(bool_value(""), None);
    }

    #[test]
    fn test_integer_value() {
        assert_eq!(integer_value::<i32>("42"), Some(42));
        assert_eq!(integer_value::<i32>(" -7 "), Some(-7));
        assert_eq!(integer_value::<i32>("42.9"), Some(42));
        assert_eq!(integer_value::<i32>("-42.9"), Some(-42));
        assert_eq!(integer_value::<i8>("300"), None);
        assert_eq!(integer_value::<u8>("-1"), None);
        assert_eq!(integer_value::<u64>("1e3"), Some(1000));
        assert_eq!(integer_value::<usize>("abc"), None);
        assert_eq!(integer_value::<i64>("inf"), None);
        assert_eq!(integer_value::<i64>(""), None);
    }

    #[test]
    fn test_float_value_locales() {
        assert_eq!(f64_value("1234.5", NumberLocale::POSIX), Some(1234.5));
        assert_eq!(f64_value("1.234,5", NumberLocale::GERMAN), Some(1234.5));
        assert_eq!(f64_value("1,5", NumberLocale::POSIX), None);
        assert_eq!(f64_value("-0,25", NumberLocale::GERMAN), Some(-0.25));
        assert_eq!(f64_value("NaN", NumberLocale::POSIX), None);
        assert_eq!(f32_value("2.5", NumberLocale::default()), Some(2.5));
        assert_eq!(f32_value("1e300", NumberLocale::POSIX), None);
    }

    #[test]
    fn test_date_and_time() {
        let time = time_value("13:45:10").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(13, 45, 10).unwrap());
        assert!(time_value("25:00:00").is_none());

        let date = date_value("2017-02-28").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2017, 2, 28).unwrap());
        assert!(date_value("2017-02-30").is_none());

        let dt = date_time_value("2017-02-28 08:00:01").unwrap();
        assert_eq!(dt.to_string(), "2017-02-28 08:00:01");
        assert!(date_time_value("2017-02-28").is_none());
    }

    #[test]
    fn test_date_with_format() {
        let dt = date_with_format("28.02.2017", "%d.%m.%Y").unwrap();
        assert_eq!(dt.to_string(), "2017-02-28 00:00:00");
        let dt = date_with_format("02/28/17 09:05", "%m/%d/%y %H:%M").unwrap();
        assert_eq!(dt.to_string(), "2017-02-28 09:05:00");
        assert!(date_with_format("yesterday", "%d.%m.%Y").is_none());
        assert!(matches!(
            try_date_with_format("x", "%Y"),
            Err(Error::InvalidDate(_))
        ));
    }

    #[test]
    fn test_url_value() {
        let url = url_value("https://example.com/a/b?x=1#top").unwrap();
        assert_eq!(url.scheme.as_deref(), Some("https"));
        assert_eq!(url.host.as_deref(), Some("example.com"));
        assert_eq!(url.path, "/a/b");
        assert_eq!(url.query.as_deref(), Some("x=1"));
        assert_eq!(url.fragment.as_deref(), Some("top"));

        let relative = url_value("docs/index.html").unwrap();
        assert_eq!(relative.scheme, None);
        assert_eq!(relative.path, "docs/index.html");

        assert!(url_value("").is_none());
        assert!(url_value("not a url").is_none());
    }

    #[test]
    fn test_url_predicates() {
        assert!(is_valid_url("example.com"));
        assert!(!is_valid_schemed_url("example.com"));
        assert!(is_valid_schemed_url("ftp://example.com"));
        assert!(is_valid_http_url("http://example.com"));
        assert!(!is_valid_http_url("https://example.com"));
        assert!(is_valid_https_url("HTTPS://example.com"));
        assert!(is_valid_file_url("file:///tmp/a.txt"));
        assert!(!is_valid_file_url("/tmp/a.txt"));
    }

    #[test]
    fn test_email() {
        assert!(is_valid_email("john.doe@example.com"));
        assert!(is_valid_email("a+b@sub.example.org"));
        assert!(!is_valid_email("john.doe@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email(""));
    }
}
