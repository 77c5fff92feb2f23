//! Color type.
//!
//! Shapes store colors the way small display frameworks hand them around: a
//! packed 24-bit `0xRRGGBB` integer. [`Color`] converts to and from
//! `embedded_graphics_core`'s [`Rgb888`] at the drawing boundary.

use embedded_graphics_core::pixelcolor::{Rgb888, RgbColor};

/// Mask of the bits that carry color information.
const RGB_MASK: u32 = 0x00FF_FFFF;

// ============================================================================
// Color
// ============================================================================

/// A 24-bit RGB color packed as `0xRRGGBB`.
///
/// Bits above the low 24 are discarded on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u32", into = "u32"))]
pub struct Color(u32);

impl Color {
    pub const BLACK: Color = Color(0x000000);
    pub const WHITE: Color = Color(0xFFFFFF);
    pub const RED: Color = Color(0xFF0000);
    pub const GREEN: Color = Color(0x00FF00);
    pub const BLUE: Color = Color(0x0000FF);
    pub const MAGENTA: Color = Color(0xFF00FF);

    /// Create a color from a packed `0xRRGGBB` value.
    pub const fn new(rgb: u32) -> Self {
        Self(rgb & RGB_MASK)
    }

    /// Create a color from separate channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// The packed `0xRRGGBB` value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }
}

impl From<u32> for Color {
    fn from(rgb: u32) -> Self {
        Color::new(rgb)
    }
}

impl From<Color> for u32 {
    fn from(c: Color) -> Self {
        c.raw()
    }
}

impl From<Color> for Rgb888 {
    fn from(c: Color) -> Self {
        Rgb888::new(c.r(), c.g(), c.b())
    }
}

impl From<Rgb888> for Color {
    fn from(c: Rgb888) -> Self {
        Color::from_rgb(c.r(), c.g(), c.b())
    }
}

// ============================================================================
// Tests
// ============================================================================
