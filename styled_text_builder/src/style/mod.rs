// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style vocabulary for span attributions.
//!
//! [`StyleAttributes`] is a record of independently optional attributes. An absent attribute
//! means "do not override": when attributions overlap, each attribute slot takes the value of
//! the most recent attribution that sets it (see [`StyleAttributes::merge`]).
//!
//! Colors are [`peniko::Color`] values, so the `peniko` palette can be used directly:
//!
//! ```
//! use peniko::color::palette::css;
//! use styled_text_builder::{FontWeight, StyleAttributes};
//!
//! let style = StyleAttributes::new().color(css::RED).weight(FontWeight::BOLD);
//! assert_eq!(style.weight, Some(FontWeight::BOLD));
//! ```

mod callback;
mod values;

pub use callback::Callback;
pub use values::{FontFamily, FontSize, FontStyle, FontWeight, GenericFamily, TextDecoration};

use peniko::Color;

/// Visual attributes plus an optional click handler for a span of text.
///
/// Every field is independently optional. `None` never erases a value set by an earlier
/// attribution covering the same characters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleAttributes {
    /// Foreground (glyph) color.
    pub color: Option<Color>,
    /// Font size.
    pub size: Option<FontSize>,
    /// Font weight.
    pub weight: Option<FontWeight>,
    /// Font slant.
    pub style: Option<FontStyle>,
    /// Font family.
    pub family: Option<FontFamily>,
    /// Underline / strikethrough.
    pub decoration: Option<TextDecoration>,
    /// Background color behind the glyphs.
    pub background: Option<Color>,
    /// Click handler. Ranges whose rule carries one become interactive regions.
    pub on_click: Option<Callback>,
}

impl StyleAttributes {
    /// Creates an empty set of attributes (nothing overridden).
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the foreground color.
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the font size.
    #[must_use]
    pub fn size(mut self, size: FontSize) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the font weight.
    #[must_use]
    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Sets the font slant.
    #[must_use]
    pub fn font_style(mut self, style: FontStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Sets the font family.
    #[must_use]
    pub fn family(mut self, family: impl Into<FontFamily>) -> Self {
        self.family = Some(family.into());
        self
    }

    /// Sets the text decoration.
    #[must_use]
    pub fn decoration(mut self, decoration: TextDecoration) -> Self {
        self.decoration = Some(decoration);
        self
    }

    /// Sets the background color.
    #[must_use]
    pub fn background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }

    /// Sets the click handler.
    #[must_use]
    pub fn on_click(mut self, callback: impl Into<Callback>) -> Self {
        self.on_click = Some(callback.into());
        self
    }

    /// Returns `true` if no attribute and no click handler is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Layers `later` on top of `self`, attribute by attribute.
    ///
    /// Each attribute present in `later` replaces the one in `self`; attributes absent in
    /// `later` leave `self` untouched.
    ///
    /// ```
    /// use peniko::color::palette::css;
    /// use styled_text_builder::{FontWeight, StyleAttributes};
    ///
    /// let mut style = StyleAttributes::new().color(css::RED);
    /// style.merge(&StyleAttributes::new().weight(FontWeight::BOLD));
    /// assert_eq!(style.color, Some(css::RED));
    /// assert_eq!(style.weight, Some(FontWeight::BOLD));
    /// ```
    pub fn merge(&mut self, later: &Self) {
        override_slot(&mut self.color, &later.color);
        override_slot(&mut self.size, &later.size);
        override_slot(&mut self.weight, &later.weight);
        override_slot(&mut self.style, &later.style);
        override_slot(&mut self.family, &later.family);
        override_slot(&mut self.decoration, &later.decoration);
        override_slot(&mut self.background, &later.background);
        override_slot(&mut self.on_click, &later.on_click);
    }

    /// Returns the result of layering `later` on top of `self`.
    #[must_use]
    pub fn merged(&self, later: &Self) -> Self {
        let mut out = self.clone();
        out.merge(later);
        out
    }
}

#[inline]
fn override_slot<T: Clone>(slot: &mut Option<T>, later: &Option<T>) {
    if let Some(value) = later {
        *slot = Some(value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peniko::color::palette::css;

    #[test]
    fn merge_keeps_absent_attributes() {
        let mut base = StyleAttributes::new()
            .color(css::RED)
            .decoration(TextDecoration::UNDERLINE);
        base.merge(&StyleAttributes::new().weight(FontWeight::BOLD));
        assert_eq!(base.color, Some(css::RED));
        assert_eq!(base.weight, Some(FontWeight::BOLD));
        assert_eq!(base.decoration, Some(TextDecoration::UNDERLINE));
    }

    #[test]
    fn merge_overrides_present_attributes() {
        let base = StyleAttributes::new()
            .color(css::RED)
            .size(FontSize::Px(12.0));
        let merged = base.merged(&StyleAttributes::new().color(css::BLUE));
        assert_eq!(merged.color, Some(css::BLUE));
        assert_eq!(merged.size, Some(FontSize::Px(12.0)));
        // `merged` leaves the receiver alone.
        assert_eq!(base.color, Some(css::RED));
    }

    #[test]
    fn explicit_none_decoration_clears_underline() {
        let merged = StyleAttributes::new()
            .decoration(TextDecoration::UNDERLINE)
            .merged(&StyleAttributes::new().decoration(TextDecoration::NONE));
        assert_eq!(merged.decoration, Some(TextDecoration::NONE));
    }

    #[test]
    fn merge_carries_click_handler() {
        let callback = Callback::new(|| {});
        let merged = StyleAttributes::new()
            .color(css::BLUE)
            .merged(&StyleAttributes::new().on_click(callback.clone()));
        assert_eq!(merged.on_click, Some(callback));
    }

    #[test]
    fn empty_attributes() {
        assert!(StyleAttributes::new().is_empty());
        assert!(!StyleAttributes::new().family(GenericFamily::Monospace).is_empty());
        assert!(!StyleAttributes::new().on_click(|| {}).is_empty());
    }
}
