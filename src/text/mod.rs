//! Grapheme-indexed text access and search.
//!
//! Key types and functions:
//!
//! - [`RingText`]: bounds-safe and wraparound character/range access
//! - [`TextRange`]: the range forms accepted by [`RingText::substring`]
//! - [`indexes_of`] / [`count`]: overlap-aware substring search
//! - [`inspect`]: words, lines, frequency and repetition
//!
//! # Examples
//!
//! ```
//! use ringtext::text::{RingText, count, indexes_of};
//!
//! let ring = RingText::new("abcdefg");
//! assert_eq!(ring.chunks(3, 0..=6), vec!["abc", "def", "g"]);
//! assert_eq!(ring.character_from_right(0, false), "g");
//!
//! assert_eq!(count("aaaa", "aa", true, true), 3);
//! assert_eq!(count("aaaa", "aa", false, true), 2);
//! assert_eq!(indexes_of("testest", "test", true, true), vec![0, 3]);
//! ```

pub mod inspect;
mod range;
mod ring;
mod search;

pub use range::{RangeRequest, TextRange};
pub use ring::{RingText, character_array, last_index, length};
pub use search::{contains, count, ends_with, indexes_of, starts_with};

pub(crate) use range::to_index;
pub(crate) use search::{find_all, folded};
