// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

/// Visual weight class of a font, typically on a scale from 1.0 to 1000.0.
///
/// In CSS, this corresponds to the `font-weight` property.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct FontWeight(f32);

impl FontWeight {
    /// Weight value of 100.
    pub const THIN: Self = Self(100.0);

    /// Weight value of 300.
    pub const LIGHT: Self = Self(300.0);

    /// Weight value of 400. This is the default value.
    pub const NORMAL: Self = Self(400.0);

    /// Weight value of 500.
    pub const MEDIUM: Self = Self(500.0);

    /// Weight value of 600.
    pub const SEMI_BOLD: Self = Self(600.0);

    /// Weight value of 700.
    pub const BOLD: Self = Self(700.0);

    /// Weight value of 900.
    pub const BLACK: Self = Self(900.0);

    /// Creates a new weight value.
    pub const fn new(weight: f32) -> Self {
        Self(weight)
    }

    /// Returns the underlying weight value.
    pub const fn value(self) -> f32 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Slant of a font.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum FontStyle {
    /// `normal`.
    #[default]
    Normal,
    /// `italic`.
    Italic,
    /// `oblique` with an optional angle in degrees.
    ///
    /// If `None`, the renderer's default oblique angle is used.
    Oblique(Option<f32>),
}

/// A font size.
///
/// Relative sizes are resolved by the renderer against its own base size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FontSize {
    /// An absolute size in logical pixels.
    Px(f32),
    /// A size relative to the renderer's base font size.
    Em(f32),
}

/// Generic font families, named after CSS.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GenericFamily {
    /// Glyphs have finishing strokes, flared or tapering ends, or have actual serifed endings.
    Serif,
    /// Glyphs have stroke endings that are plain.
    SansSerif,
    /// All glyphs have the same fixed width.
    Monospace,
    /// Glyphs look more like handwritten pen or brush writing than printed letter work.
    Cursive,
    /// Glyphs are taken from the default user interface font on a given platform.
    SystemUi,
}

/// A font family: either a specific named family or a generic one.
///
/// <https://developer.mozilla.org/en-US/docs/Web/CSS/font-family>
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// Named font family, such as `"Fira Sans"`.
    Named(Arc<str>),
    /// Generic font family.
    Generic(GenericFamily),
}

impl FontFamily {
    /// Creates a named font family.
    pub fn named(name: &str) -> Self {
        Self::Named(Arc::from(name))
    }
}

impl From<GenericFamily> for FontFamily {
    fn from(f: GenericFamily) -> Self {
        Self::Generic(f)
    }
}

impl From<&str> for FontFamily {
    fn from(s: &str) -> Self {
        Self::named(s)
    }
}

/// Line decorations drawn with the text.
///
/// Underline and strikethrough combine into a single value, so a decoration set by a later
/// rule replaces the whole decoration of an earlier one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextDecoration {
    /// Draw a line below the text.
    pub underline: bool,
    /// Draw a line through the text.
    pub strikethrough: bool,
}

impl TextDecoration {
    /// No decoration. Useful for clearing a decoration set by an earlier rule.
    pub const NONE: Self = Self {
        underline: false,
        strikethrough: false,
    };

    /// Underline only.
    pub const UNDERLINE: Self = Self {
        underline: true,
        strikethrough: false,
    };

    /// Strikethrough only.
    pub const LINE_THROUGH: Self = Self {
        underline: false,
        strikethrough: true,
    };

    /// Returns the union of both decorations.
    ///
    /// ```
    /// use styled_text_builder::TextDecoration;
    ///
    /// let both = TextDecoration::UNDERLINE.combine(TextDecoration::LINE_THROUGH);
    /// assert!(both.underline && both.strikethrough);
    /// ```
    #[must_use]
    pub const fn combine(self, other: Self) -> Self {
        Self {
            underline: self.underline || other.underline,
            strikethrough: self.strikethrough || other.strikethrough,
        }
    }

    /// Returns `true` if no line is drawn.
    pub const fn is_none(self) -> bool {
        !self.underline && !self.strikethrough
    }
}
