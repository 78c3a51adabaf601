// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Span composition: rules → ordered attributions + clickable matches.

use alloc::vec::Vec;

use crate::text_range::validate_range;
use crate::{Callback, Rule, StyleAttributes, TextRange};

/// One rule's attributes applied to one concrete range.
///
/// Attributions are produced in declaration order (and left to right within a rule). Applying
/// them in that order, last value wins per attribute per character, yields the final style.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleAttribution {
    range: TextRange,
    style: StyleAttributes,
    rule: usize,
}

impl StyleAttribution {
    /// The byte range this attribution covers.
    #[inline]
    pub fn range(&self) -> TextRange {
        self.range
    }

    /// The attributes applied over [`range`](Self::range).
    #[inline]
    pub fn style(&self) -> &StyleAttributes {
        &self.style
    }

    /// Declaration order of the rule that produced this attribution.
    #[inline]
    pub fn rule(&self) -> usize {
        self.rule
    }
}

/// A valid range whose rule carries a click handler.
#[derive(Clone, Debug)]
pub(crate) struct ClickableMatch {
    pub(crate) rule: usize,
    /// Index of the match among its rule's resolved ranges.
    pub(crate) ordinal: usize,
    pub(crate) range: TextRange,
    pub(crate) callback: Callback,
}

#[derive(Debug, Default)]
pub(crate) struct Composition {
    pub(crate) attributions: Vec<StyleAttribution>,
    pub(crate) clickables: Vec<ClickableMatch>,
}

/// Resolves every rule against `text`, in declaration order.
///
/// Ranges that are empty, reversed, out of bounds, or split a codepoint are dropped; a rule
/// that resolves to nothing contributes nothing. Neither case is an error.
pub(crate) fn compose(text: &str, rules: &[Rule]) -> Composition {
    let mut out = Composition::default();
    for rule in rules {
        let ranges = rule.selector().resolve(text);
        if ranges.is_empty() {
            log::trace!("rule {}: no match", rule.order());
            continue;
        }
        for (ordinal, raw) in ranges.into_iter().enumerate() {
            let range = match validate_range(text, &raw) {
                Ok(range) => range,
                Err(reason) => {
                    log::trace!(
                        "rule {}: dropping range {}..{}: {reason}",
                        rule.order(),
                        raw.start,
                        raw.end
                    );
                    continue;
                }
            };
            out.attributions.push(StyleAttribution {
                range,
                style: rule.style().clone(),
                rule: rule.order(),
            });
            if let Some(callback) = &rule.style().on_click {
                out.clickables.push(ClickableMatch {
                    rule: rule.order(),
                    ordinal,
                    range,
                    callback: callback.clone(),
                });
            }
        }
    }
    out
}
