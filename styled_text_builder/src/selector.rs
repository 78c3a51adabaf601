// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use core::fmt;
use core::ops::Range;

use regex::Regex;

use crate::Error;

/// Describes which part of the base text a rule targets.
///
/// Selectors are plain data; they are interpreted against the text only when the builder is
/// built. See [`Selector::resolve`] for the exact matching behavior of each variant.
#[derive(Clone, Debug, PartialEq)]
pub enum Selector {
    /// An explicit half-open byte range.
    ///
    /// The range is not checked here: an empty, reversed, out-of-bounds, or mid-codepoint range
    /// simply contributes nothing.
    ByIndices(Range<usize>),
    /// The `n`-th (1-based) match of a literal substring.
    ByOccurrence {
        /// The literal text to look for.
        needle: Arc<str>,
        /// Which match to select, starting at 1.
        n: usize,
    },
    /// Every match of a literal substring.
    AllOccurrences(Arc<str>),
    /// Every match of a regular expression.
    ByPattern(Pattern),
}

impl Selector {
    /// Selects the byte range `range`.
    pub fn indices(range: Range<usize>) -> Self {
        Self::ByIndices(range)
    }

    /// Selects the first match of `needle`.
    pub fn first(needle: &str) -> Self {
        Self::nth(needle, 1)
    }

    /// Selects the `n`-th (1-based) match of `needle`.
    pub fn nth(needle: &str, n: usize) -> Self {
        Self::ByOccurrence {
            needle: Arc::from(needle),
            n,
        }
    }

    /// Selects every match of `needle`.
    pub fn all(needle: &str) -> Self {
        Self::AllOccurrences(Arc::from(needle))
    }

    /// Selects every match of the regular expression `pattern`.
    ///
    /// Fails immediately if `pattern` does not compile.
    pub fn pattern(pattern: &str) -> Result<Self, Error> {
        Pattern::new(pattern).map(Self::ByPattern)
    }
}

impl From<Range<usize>> for Selector {
    fn from(range: Range<usize>) -> Self {
        Self::ByIndices(range)
    }
}

impl From<Pattern> for Selector {
    fn from(pattern: Pattern) -> Self {
        Self::ByPattern(pattern)
    }
}

/// A compiled regular expression used by [`Selector::ByPattern`].
///
/// Compilation happens when the pattern is created, so a malformed expression is reported
/// when the rule is written rather than when the text is built.
#[derive(Clone)]
pub struct Pattern(Regex);

impl Pattern {
    /// Compiles `pattern`.
    ///
    /// ```
    /// use styled_text_builder::{ErrorKind, Pattern};
    ///
    /// assert!(Pattern::new(r"\d+").is_ok());
    /// assert_eq!(Pattern::new("(").unwrap_err().kind(), ErrorKind::InvalidPattern);
    /// ```
    pub fn new(pattern: &str) -> Result<Self, Error> {
        Regex::new(pattern)
            .map(Self)
            .map_err(|err| Error::invalid_pattern(pattern, err))
    }

    /// The source text of the expression.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.0
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Self(regex)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.as_str()).finish()
    }
}
