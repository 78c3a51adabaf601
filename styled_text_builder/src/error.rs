// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::sync::Arc;

/// Error type for rule construction.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the source of the pattern that was rejected.
/// Range problems never produce an `Error`: out-of-range or degenerate ranges are dropped
/// when a [`StyledTextBuilder`](crate::StyledTextBuilder) is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The pattern source that failed to compile.
    pattern: Arc<str>,

    /// The underlying regular expression error.
    inner: Box<regex::Error>,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The pattern source that was rejected.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub(crate) fn invalid_pattern(pattern: &str, inner: regex::Error) -> Self {
        Self {
            kind: ErrorKind::InvalidPattern,
            pattern: Arc::from(pattern),
            inner: Box::new(inner),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::InvalidPattern => {
                write!(f, "invalid pattern `{}`: {}", self.pattern, self.inner)
            }
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&*self.inner)
    }
}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A regular expression selector could not be compiled.
    InvalidPattern,
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};
    use alloc::string::ToString;
    use core::error::Error as _;

    #[test]
    fn invalid_pattern_reports_source() {
        let inner = regex::Regex::new("(unclosed").unwrap_err();
        let err = Error::invalid_pattern("(unclosed", inner);
        assert_eq!(err.kind(), ErrorKind::InvalidPattern);
        assert_eq!(err.pattern(), "(unclosed");
        assert!(err.source().is_some(), "regex error should be the source");
        assert!(err.to_string().starts_with("invalid pattern `(unclosed`"));
    }
}
