// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-rule shortcuts on string slices.

use peniko::Color;
use peniko::color::palette::css;

use crate::{Callback, FontWeight, StyleAttributes, StyledText, StyledTextBuilder, TextDecoration};

/// Convenience constructors for common single-rule styles.
///
/// Each shortcut styles the **first** occurrence of `needle` and builds immediately.
///
/// ```
/// use peniko::color::palette::css;
/// use styled_text_builder::{FontWeight, StyleExt};
///
/// let text = "Make this bold text stand out".bold("bold text");
/// assert_eq!(text.attributions()[0].range().as_range(), 10..19);
/// assert_eq!(text.style_at(12).weight, Some(FontWeight::BOLD));
///
/// let text = "Color this red text".colorize("red", css::RED);
/// assert_eq!(text.style_at(11).color, Some(css::RED));
/// ```
pub trait StyleExt {
    /// Starts a builder over this text.
    fn styled(&self) -> StyledTextBuilder;

    /// Makes the first occurrence of `needle` bold.
    fn bold(&self, needle: &str) -> StyledText {
        self.styled()
            .style_text(needle, StyleAttributes::new().weight(FontWeight::BOLD))
            .build()
    }

    /// Paints `color` behind the first occurrence of `needle`.
    fn highlight(&self, needle: &str, color: Color) -> StyledText {
        self.styled()
            .style_text(needle, StyleAttributes::new().background(color))
            .build()
    }

    /// Highlights the first occurrence of `needle` in yellow.
    fn highlight_default(&self, needle: &str) -> StyledText {
        self.highlight(needle, css::YELLOW)
    }

    /// Colors the first occurrence of `needle`.
    fn colorize(&self, needle: &str, color: Color) -> StyledText {
        self.styled()
            .style_text(needle, StyleAttributes::new().color(color))
            .build()
    }

    /// Turns the first occurrence of `needle` into a blue, underlined link firing `on_click`.
    ///
    /// The handler is reachable through [`StyledText::callbacks`] and
    /// [`StyledText::dispatch`].
    fn clickable(&self, needle: &str, on_click: impl Into<Callback>) -> StyledText {
        self.styled()
            .style_text(
                needle,
                StyleAttributes::new()
                    .color(css::BLUE)
                    .decoration(TextDecoration::UNDERLINE)
                    .on_click(on_click),
            )
            .build()
    }
}

impl StyleExt for str {
    fn styled(&self) -> StyledTextBuilder {
        StyledTextBuilder::new(self)
    }
}
