//! Unicode utilities: grapheme segmentation, display width, normalization
//! and character classification.

pub mod classify;
pub(crate) mod grapheme;
pub mod normalize;
pub(crate) mod width;

pub use classify::{CharClass, char_classes, is_emoji, is_punctuation};
pub use grapheme::{
    GraphemeIterator, grapheme_bounds, grapheme_count, grapheme_indices, graphemes,
    is_ascii_only, reverse_graphemes,
};
pub use normalize::{compare_normalized, normalize_nfc, normalize_nfd, strip_diacritics};
pub use width::{
    WidthMethod, display_width, display_width_char_with_method, display_width_with_method,
    set_width_method, width_method,
};
