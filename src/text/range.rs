//! Range requests over grapheme indices.
//!
//! Requests may be negative, past the end, or written backwards. They are
//! reduced to an inclusive `(lower, upper)` pair before any clamping or
//! wrapping happens.

use std::ops::{Range, RangeInclusive};

/// An inclusive, possibly reversed pair of grapheme indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeRequest {
    /// First index as written by the caller.
    pub lower: isize,
    /// Last index as written by the caller (inclusive).
    pub upper: isize,
}

impl RangeRequest {
    #[must_use]
    pub const fn new(lower: isize, upper: isize) -> Self {
        Self { lower, upper }
    }

    /// True when the caller wrote the bounds backwards.
    #[must_use]
    pub const fn is_reversed(&self) -> bool {
        self.lower > self.upper
    }

    /// Bounds in ascending order.
    #[must_use]
    pub fn ordered(&self) -> (isize, isize) {
        (self.lower.min(self.upper), self.lower.max(self.upper))
    }
}

/// Anything that can address a range of graphemes.
///
/// `a..=b` maps to `(a, b)`. A half-open `a..b` maps to `(a, b - 1)`, so
/// `5..2` is the reversed request `(5, 1)`. An empty half-open range such as
/// `3..3` addresses nothing and converts to `None`, so reads through it
/// return `""`. It is not the reversed pair `(3, 2)` that `end - 1` would give.
pub trait TextRange {
    fn to_request(&self) -> Option<RangeRequest>;
}

impl TextRange for RangeInclusive<isize> {
    fn to_request(&self) -> Option<RangeRequest> {
        Some(RangeRequest::new(*self.start(), *self.end()))
    }
}

impl TextRange for Range<isize> {
    fn to_request(&self) -> Option<RangeRequest> {
        if self.start == self.end {
            return None;
        }
        Some(RangeRequest::new(self.start, self.end.saturating_sub(1)))
    }
}

impl TextRange for (isize, isize) {
    fn to_request(&self) -> Option<RangeRequest> {
        Some(RangeRequest::new(self.0, self.1))
    }
}

impl TextRange for RangeRequest {
    fn to_request(&self) -> Option<RangeRequest> {
        Some(*self)
    }
}

impl<T: TextRange + ?Sized> TextRange for &T {
    fn to_request(&self) -> Option<RangeRequest> {
        (**self).to_request()
    }
}

/// Convert a `usize` position to the signed index space, saturating.
#[must_use]
pub fn to_index(value: usize) -> isize {
    isize::try_from(value).unwrap_or(isize::MAX)
}
