//! Positionable indexed-color drawable.
//!
//! A [`Sprite`] is the unit a display stack composites: a [`Bitmap`] of
//! palette indices, the [`Palette`] that resolves them, and a position. It
//! implements `embedded_graphics_core`'s [`Drawable`], so any
//! `DrawTarget<Color = Rgb888>` (a framebuffer, a display driver, a mock)
//! can render it. Pixels whose palette slot is transparent are skipped.

use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{Dimensions, Point, Size};
use embedded_graphics_core::pixelcolor::Rgb888;
use embedded_graphics_core::primitives::Rectangle;
use embedded_graphics_core::{Drawable, Pixel};

use crate::bitmap::Bitmap;
use crate::color::Color;
use crate::palette::Palette;

/// Bitmap + palette + position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    bitmap: Bitmap,
    palette: Palette,
    position: Point,
}

impl Sprite {
    pub fn new(bitmap: Bitmap, palette: Palette, position: Point) -> Self {
        Self {
            bitmap,
            palette,
            position,
        }
    }

    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Mutable palette access. The bitmap itself is never exposed mutably.
    pub fn palette_mut(&mut self) -> &mut Palette {
        &mut self.palette
    }

    /// Top-left corner in the parent's coordinate space.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Visible color at local coordinate `(x, y)`.
    ///
    /// `None` outside the bitmap or where the pixel's slot is transparent.
    pub fn pixel_color(&self, x: i32, y: i32) -> Option<Color> {
        let index = self.bitmap.get(x, y)?;
        self.palette.get(index as usize)
    }

    /// Iterate the visible pixels in the parent's coordinate space.
    pub fn visible_pixels(&self) -> impl Iterator<Item = Pixel<Rgb888>> + '_ {
        let origin = self.position;
        self.bitmap.pixels().filter_map(move |(x, y, index)| {
            self.palette
                .get(index as usize)
                .map(|c| Pixel(origin + Point::new(x as i32, y as i32), c.into()))
        })
    }
}

impl Dimensions for Sprite {
    fn bounding_box(&self) -> Rectangle {
        Rectangle::new(
            self.position,
            Size::new(self.bitmap.width(), self.bitmap.height()),
        )
    }
}

impl Drawable for Sprite {
    type Color = Rgb888;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        target.draw_iter(self.visible_pixels())
    }
}

// ============================================================================
// Tests
// ============================================================================
