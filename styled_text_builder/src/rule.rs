// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Selector, StyleAttributes};

/// A selector paired with the attributes it applies.
///
/// The declaration order is the rule's position in its builder. Later rules override earlier
/// ones attribute by attribute, and win click dispatch where regions overlap.
#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    selector: Selector,
    style: StyleAttributes,
    order: usize,
}

impl Rule {
    pub(crate) fn new(selector: Selector, style: StyleAttributes, order: usize) -> Self {
        Self {
            selector,
            style,
            order,
        }
    }

    /// The part of the text this rule targets.
    #[inline]
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// The attributes this rule applies.
    #[inline]
    pub fn style(&self) -> &StyleAttributes {
        &self.style
    }

    /// Zero-based declaration order within the builder.
    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }
}
