// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative span styling and click regions for plain text.
//!
//! A [`StyledTextBuilder`] collects **rules** against an immutable base text. Each rule pairs a
//! [`Selector`] (which characters) with [`StyleAttributes`] (what to apply). Building resolves
//! every rule against the text and returns a [`StyledText`]: the unchanged text, an ordered list
//! of [`StyleAttribution`]s, and the [`InteractiveRegion`]s whose click handlers can be looked
//! up by offset.
//!
//! - [`Selector`] targets an index range, the n-th or every occurrence of a literal substring,
//!   or every match of a regular expression.
//! - [`style`] defines the attribute vocabulary. Colors are [`peniko::Color`].
//! - [`StyleExt`] offers one-call shortcuts on `str` (`bold`, `highlight`, `colorize`,
//!   `clickable`).
//!
//! ## Indices
//!
//! All ranges are **byte indices** into UTF-8 text. A resolved range is kept only if it is
//! non-empty, lies within the text, and both ends fall on character boundaries. Anything else
//! is dropped silently (with a `trace` log record); it is never an error.
//!
//! ## Overlaps
//!
//! Rules apply in the order they were added. Where attributions overlap, each attribute takes
//! the value of the latest rule that sets it; attributes a later rule leaves unset are
//! inherited from earlier ones. Where interactive regions overlap, a tap fires only the handler
//! of the latest rule. [`StyledText::resolved_runs`] performs the merge for renderers.
//!
//! ## Errors and logging
//!
//! The only failure is a malformed regular expression, reported by
//! [`StyledTextBuilder::style_regex`] or [`Pattern::new`] when the rule is written. The crate
//! emits records through the [`log`] facade and never installs a logger.
//!
//! ## Example
//!
//! ```
//! use core::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! use peniko::color::palette::css;
//! use styled_text_builder::{FontWeight, StyleAttributes, StyledTextBuilder};
//!
//! let clicks = Arc::new(AtomicUsize::new(0));
//! let counter = clicks.clone();
//!
//! let mut builder = StyledTextBuilder::new("Email: test@example.com, or click here");
//! builder
//!     .style_range(0..5, StyleAttributes::new().weight(FontWeight::BOLD))
//!     .style_regex(r"[a-z]+@[a-z]+\.[a-z]+", StyleAttributes::new().color(css::BLUE))?
//!     .style_text(
//!         "here",
//!         StyleAttributes::new().on_click(move || {
//!             counter.fetch_add(1, Ordering::SeqCst);
//!         }),
//!     );
//! let text = builder.build();
//!
//! assert_eq!(text.attributions().len(), 3);
//! assert_eq!(text.style_at(10).color, Some(css::BLUE));
//! assert!(text.dispatch(35));
//! assert!(!text.dispatch(10));
//! assert_eq!(clicks.load(Ordering::SeqCst), 1);
//! # Ok::<(), styled_text_builder::Error>(())
//! ```

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

pub mod style;

mod builder;
mod compose;
mod error;
mod registry;
mod resolve;
mod rule;
mod runs;
mod segments;
mod selector;
mod shortcuts;
mod text;
mod text_range;

#[cfg(test)]
mod tests;

pub use builder::StyledTextBuilder;
pub use compose::StyleAttribution;
pub use error::{Error, ErrorKind};
pub use registry::{InteractiveRegion, RegionId};
pub use resolve::ResolvedRanges;
pub use rule::Rule;
pub use runs::{CoalescedRuns, ResolvedRuns, StyleRun};
pub use selector::{Pattern, Selector};
pub use shortcuts::StyleExt;
pub use text::StyledText;
pub use text_range::TextRange;

pub use style::{
    Callback, FontFamily, FontSize, FontStyle, FontWeight, GenericFamily, StyleAttributes,
    TextDecoration,
};
