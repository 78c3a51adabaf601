// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::Range;

/// A validated, non-empty byte range into the base text.
///
/// Invariants:
///
/// - `start < end`
/// - `end` is within the text bounds
/// - `start` and `end` lie on UTF-8 codepoint boundaries
///
/// `TextRange` does not encode which text it was validated against. Ranges handed out by a
/// [`StyledText`](crate::StyledText) always belong to that value's own text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextRange {
    start: usize,
    end: usize,
}

#[allow(
    clippy::len_without_is_empty,
    reason = "A `TextRange` is never empty."
)]
impl TextRange {
    /// Returns a validated `TextRange` for the provided text, or `None` if the range would be
    /// dropped by the composer.
    ///
    /// ```
    /// use styled_text_builder::TextRange;
    ///
    /// assert!(TextRange::new("Hello!", 0..5).is_some());
    /// assert!(TextRange::new("Hello!", 3..3).is_none());
    /// assert!(TextRange::new("Hello!", 0..7).is_none());
    /// ```
    #[inline]
    pub fn new(text: &str, range: Range<usize>) -> Option<Self> {
        validate_range(text, &range).ok()
    }

    /// Creates a `TextRange` without validation.
    ///
    /// This is intended for internal callers that already maintain range invariants.
    #[inline]
    pub(crate) const fn new_unchecked(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The start byte offset.
    #[must_use]
    #[inline]
    pub const fn start(self) -> usize {
        self.start
    }

    /// The end byte offset (exclusive).
    #[must_use]
    #[inline]
    pub const fn end(self) -> usize {
        self.end
    }

    /// The length of the range in bytes. Never zero.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if `offset` falls inside this half-open range.
    #[must_use]
    #[inline]
    pub const fn contains(self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Returns this range as a `Range<usize>`.
    #[must_use]
    #[inline]
    pub fn as_range(self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<TextRange> for Range<usize> {
    #[inline]
    fn from(value: TextRange) -> Self {
        value.as_range()
    }
}

/// Why a resolved range was dropped instead of becoming an attribution.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum RangeRejection {
    /// `start == end`.
    Empty,
    /// `start > end`.
    Reversed,
    /// `end` is past the end of the text.
    OutOfBounds,
    /// An endpoint splits a UTF-8 codepoint.
    NotOnCharBoundary,
}

impl fmt::Display for RangeRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Empty => "empty range",
            Self::Reversed => "start > end",
            Self::OutOfBounds => "out of bounds",
            Self::NotOnCharBoundary => "not on UTF-8 boundary",
        })
    }
}

#[inline]
pub(crate) fn validate_range(text: &str, range: &Range<usize>) -> Result<TextRange, RangeRejection> {
    if range.start > range.end {
        return Err(RangeRejection::Reversed);
    }
    if range.start == range.end {
        return Err(RangeRejection::Empty);
    }
    if range.end > text.len() {
        return Err(RangeRejection::OutOfBounds);
    }
    if !text.is_char_boundary(range.start) || !text.is_char_boundary(range.end) {
        return Err(RangeRejection::NotOnCharBoundary);
    }
    Ok(TextRange {
        start: range.start,
        end: range.end,
    })
}
