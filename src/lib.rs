//! `ringtext` - grapheme-aware string extensions
//!
//! Characters are extended grapheme clusters throughout: `"e\u{301}"` and
//! `"👍🏽"` each count as one. On top of that the crate provides:
//!
//! - ring indexing through [`RingText`]: out-of-range indices saturate in
//!   bounded mode and wrap around in infinite mode, and ranges written
//!   backwards read the text in reverse;
//! - overlap-aware, optionally case-insensitive substring search;
//! - character classification, conversion, encoding and case/shape
//!   transforms;
//! - the [`StrExt`] / [`StringExt`] method surface over all of the above.
//!
//! # Example
//!
//! ```
//! use ringtext::{RingText, StrExt};
//!
//! let ring = RingText::new("abcd");
//! assert_eq!(ring.substring(-1..=4, true), "dabcda");
//! assert_eq!(ring.substring(3..=0, false), "dcba");
//!
//! assert_eq!("aaaa".indexes_of("aa", true, true), vec![0, 1, 2]);
//! assert_eq!("Crème Brûlée".slugified(), "Creme-Brulee");
//! ```

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::module_name_repetitions)] // text::TextRange etc
#![allow(clippy::missing_errors_doc)] // try_* functions document their errors on the enum
#![allow(clippy::missing_panics_doc)] // only constant regexes panic
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::format_push_string)] // format! with push_str is fine
#![allow(clippy::return_self_not_must_use)] // StringExt chains return &mut String

pub mod clipboard;
pub mod convert;
pub mod encoding;
pub mod error;
pub mod event;
pub mod ext;
pub mod random;
pub mod text;
pub mod transform;
pub mod unicode;

// Re-export core types at crate root
pub use clipboard::{ClipboardService, MemoryClipboard, copy_to_clipboard};
pub use convert::{NumberLocale, UrlParts};
pub use error::{Error, Result};
pub use event::{LogLevel, clear_log_callback, emit_log, set_log_callback};
pub use ext::{StrExt, StringExt};
pub use random::random_alphanumeric;
pub use text::{RangeRequest, RingText, TextRange};
pub use transform::PadSide;
pub use unicode::{CharClass, WidthMethod, set_width_method};

#[cfg(feature = "system-clipboard")]
pub use clipboard::SystemClipboard;
