// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ops::Range;

use crate::compose::compose;
use crate::registry::register;
use crate::{Error, Rule, Selector, StyleAttributes, StyledText};

/// Accumulates styling rules against a base text.
///
/// Rules are kept in the order they are added; that order decides which attribute wins where
/// rules overlap and which click handler fires where regions overlap. [`build`](Self::build)
/// does not consume the builder: more rules can be added and the builder built again, and each
/// [`StyledText`] reflects exactly the rules added before its own `build` call.
///
/// A builder is plain mutable state. Sharing one between threads requires external locking.
///
/// ```
/// use peniko::color::palette::css;
/// use styled_text_builder::{FontSize, FontWeight, StyleAttributes, StyledTextBuilder};
///
/// let mut builder = StyledTextBuilder::new("Hello World! This is a test.");
/// builder
///     .style_text("Hello", StyleAttributes::new().color(css::RED).weight(FontWeight::BOLD))
///     .style_text("World", StyleAttributes::new().color(css::BLUE).size(FontSize::Px(20.0)))
///     .style_text("test", StyleAttributes::new().background(css::YELLOW));
/// let text = builder.build();
///
/// assert_eq!(text.as_str(), "Hello World! This is a test.");
/// assert_eq!(text.attributions().len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct StyledTextBuilder {
    text: Arc<str>,
    rules: Vec<Rule>,
}

impl StyledTextBuilder {
    /// Creates a builder with no rules.
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self {
            text: text.into(),
            rules: Vec::new(),
        }
    }

    /// The base text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The rules added so far, in declaration order.
    #[inline]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Appends a rule. Never fails and never touches earlier rules.
    pub fn add_rule(&mut self, selector: impl Into<Selector>, style: StyleAttributes) -> &mut Self {
        let order = self.rules.len();
        self.rules.push(Rule::new(selector.into(), style, order));
        self
    }

    /// Styles the byte range `range`.
    ///
    /// A range that is empty, out of bounds, or splits a character has no effect.
    pub fn style_range(&mut self, range: Range<usize>, style: StyleAttributes) -> &mut Self {
        self.add_rule(Selector::ByIndices(range), style)
    }

    /// Styles the first occurrence of `needle`.
    pub fn style_text(&mut self, needle: &str, style: StyleAttributes) -> &mut Self {
        self.add_rule(Selector::first(needle), style)
    }

    /// Styles the `n`-th (1-based) occurrence of `needle`.
    pub fn style_nth(&mut self, needle: &str, n: usize, style: StyleAttributes) -> &mut Self {
        self.add_rule(Selector::nth(needle, n), style)
    }

    /// Styles every occurrence of `needle`.
    pub fn style_all(&mut self, needle: &str, style: StyleAttributes) -> &mut Self {
        self.add_rule(Selector::all(needle), style)
    }

    /// Styles every match of the regular expression `pattern`.
    ///
    /// A malformed pattern is rejected here and no rule is added.
    pub fn style_regex(&mut self, pattern: &str, style: StyleAttributes) -> Result<&mut Self, Error> {
        let selector = Selector::pattern(pattern)?;
        Ok(self.add_rule(selector, style))
    }

    /// Resolves the current rules and returns an independent [`StyledText`].
    pub fn build(&self) -> StyledText {
        let composition = compose(&self.text, &self.rules);
        let registry = register(self.text.len(), composition.clickables);
        log::debug!(
            "built styled text: {} rules, {} attributions, {} interactive regions over {} bytes",
            self.rules.len(),
            composition.attributions.len(),
            registry.regions.len(),
            self.text.len()
        );
        StyledText::new(self.text.clone(), composition.attributions, registry)
    }
}
