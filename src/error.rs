//! Error types for ringtext.
//!
//! Indexing and search never fail. Errors only describe conversions that
//! cannot represent their input and clipboard access; the public conversion
//! surface turns them into `None`.

use std::fmt;
use std::string::FromUtf8Error;

/// Result type alias for ringtext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for ringtext operations.
#[derive(Debug)]
pub enum Error {
    /// Payload is not valid base64.
    InvalidBase64(base64::DecodeError),
    /// Decoded bytes are not valid UTF-8.
    InvalidUtf8(FromUtf8Error),
    /// Malformed `%XX` escape in a percent-encoded string.
    InvalidPercentEncoding { position: usize },
    /// Value is not an ASCII ordinal (0..=127) or not a number at all.
    InvalidAscii(String),
    /// Value is not a Unicode scalar value.
    InvalidScalar(String),
    /// Text does not match the expected date/time format.
    InvalidDate(chrono::ParseError),
    /// Text is not a number in the requested representation.
    InvalidNumber(String),
    /// Clipboard backend failure.
    Clipboard(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBase64(e) => write!(f, "invalid base64: {e}"),
            Self::InvalidUtf8(e) => write!(f, "invalid UTF-8: {e}"),
            Self::InvalidPercentEncoding { position } => {
                write!(f, "invalid percent encoding at byte {position}")
            }
            Self::InvalidAscii(value) => write!(f, "not an ASCII value: {value}"),
            Self::InvalidScalar(value) => write!(f, "not a Unicode scalar value: {value}"),
            Self::InvalidDate(e) => write!(f, "invalid date/time: {e}"),
            Self::InvalidNumber(value) => write!(f, "not a number: {value}"),
            Self::Clipboard(msg) => write!(f, "clipboard error: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidBase64(e) => Some(e),
            Self::InvalidUtf8(e) => Some(e),
            Self::InvalidDate(e) => Some(e),
            _ => None,
        }
    }
}

impl From<base64::DecodeError> for Error {
    fn from(e: base64::DecodeError) -> Self {
        Self::InvalidBase64(e)
    }
}

impl From<chrono::ParseError> for Error {
    fn from(e: chrono::ParseError) -> Self {
        Self::InvalidDate(e)
    }
}

impl From<FromUtf8Error> for Error {
    fn from(e: FromUtf8Error) -> Self {
        Self::InvalidUtf8(e)
    }
}
