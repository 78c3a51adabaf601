// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selector → byte range resolution.
//!
//! Resolution is purely mechanical: it may yield ranges that the composer later drops
//! (only [`Selector::ByIndices`] can produce those, since every match lies inside the text).

use core::ops::Range;

use smallvec::SmallVec;

use crate::Selector;

/// The ranges one selector resolves to, in left-to-right order.
pub type ResolvedRanges = SmallVec<[Range<usize>; 4]>;

impl Selector {
    /// Resolves this selector against `text`.
    ///
    /// - [`ByIndices`](Self::ByIndices) yields its range unchanged.
    /// - [`ByOccurrence`](Self::ByOccurrence) yields the `n`-th literal match, or nothing if
    ///   there are fewer than `n` matches or `n == 0`.
    /// - [`AllOccurrences`](Self::AllOccurrences) yields every literal match.
    /// - [`ByPattern`](Self::ByPattern) yields every regex match, with the regex engine's
    ///   leftmost-first, non-overlapping semantics.
    ///
    /// Literal searches resume one character after the start of the previous match, so a
    /// self-overlapping needle reports overlapping matches (`"aa"` in `"aaa"` matches at 0
    /// and 1). An empty needle never matches.
    ///
    /// ```
    /// use styled_text_builder::Selector;
    ///
    /// let text = "apple banana apple cherry apple";
    /// let all: Vec<_> = Selector::all("apple").resolve(text).into_iter().collect();
    /// assert_eq!(all, [0..5, 13..18, 26..31]);
    ///
    /// let second: Vec<_> = Selector::nth("apple", 2).resolve(text).into_iter().collect();
    /// assert_eq!(second, [13..18]);
    /// ```
    pub fn resolve(&self, text: &str) -> ResolvedRanges {
        match self {
            Self::ByIndices(range) => {
                let mut out = ResolvedRanges::new();
                out.push(range.clone());
                out
            }
            Self::ByOccurrence { needle, n } => {
                let Some(skip) = n.checked_sub(1) else {
                    return ResolvedRanges::new();
                };
                occurrences(text, needle).nth(skip).into_iter().collect()
            }
            Self::AllOccurrences(needle) => occurrences(text, needle).collect(),
            Self::ByPattern(pattern) => pattern
                .regex()
                .find_iter(text)
                .map(|m| m.range())
                .collect(),
        }
    }
}

/// Iterates over literal matches of `needle` in `text`, left to right.
///
/// After a match at `start`, the search resumes at the next character boundary after `start`
/// (not at the end of the match), so matches may overlap.
fn occurrences<'a>(text: &'a str, needle: &'a str) -> impl Iterator<Item = Range<usize>> + 'a {
    let mut cursor = 0;
    core::iter::from_fn(move || {
        if needle.is_empty() {
            return None;
        }
        let start = cursor + text.get(cursor..)?.find(needle)?;
        let step = text[start..].chars().next().map_or(1, char::len_utf8);
        cursor = start + step;
        Some(start..start + needle.len())
    })
}
