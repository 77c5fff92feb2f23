//! Rounded rectangle shape.
//!
//! A rounded rectangle whose top-left corner is at `(x, y)` with size
//! `width`×`height`, each corner rounded by a circular arc of radius `r`.
//! The outline stroke is drawn inward and never changes the outer bounds.
//!
//! The shape is rasterized once, at construction, into a 3-index bitmap:
//!
//! | index | meaning     |
//! |-------|-------------|
//! | 0     | transparent |
//! | 1     | outline     |
//! | 2     | fill        |
//!
//! Afterwards only the palette and the position change: toggling the fill
//! or outline color rewrites a palette slot and never repaints pixels.
//!
//! # Example
//!
//! ```
//! use display_shapes::color::Color;
//! use display_shapes::round_rect::{RoundRect, RoundRectStyle};
//!
//! let style = RoundRectStyle::default()
//!     .with_fill(Color::BLACK)
//!     .with_outline(Color::MAGENTA)
//!     .with_stroke(6);
//! let rect = RoundRect::from_parts(10, 10, 61, 81, 10, style).unwrap();
//! assert_eq!(rect.outline(), Some(Color::MAGENTA));
//! ```

use embedded_graphics_core::geometry::Point;
use log::debug;

use crate::bitmap::Bitmap;
use crate::color::Color;
use crate::corner_arc::{to_coord, ArcMode, CornerArcs};
use crate::error::ShapeError;
use crate::palette::Palette;
use crate::sprite::Sprite;

/// Palette index of pixels outside the shape.
pub const TRANSPARENT_INDEX: u8 = 0;
/// Palette index of outline pixels.
pub const OUTLINE_INDEX: u8 = 1;
/// Palette index of fill pixels.
pub const FILL_INDEX: u8 = 2;

const PALETTE_LEN: usize = 3;

// ============================================================================
// Geometry & style
// ============================================================================

/// Size and corner radius of a rounded rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundRectGeometry {
    pub width: u32,
    pub height: u32,
    pub radius: u32,
}

impl RoundRectGeometry {
    pub fn new(width: u32, height: u32, radius: u32) -> Self {
        Self {
            width,
            height,
            radius,
        }
    }

    /// Check that the shape is non-empty and the corners fit.
    pub fn validate(&self) -> Result<(), ShapeError> {
        let invalid = |reason| ShapeError::InvalidGeometry {
            width: self.width,
            height: self.height,
            radius: self.radius,
            reason,
        };
        if self.width == 0 || self.height == 0 {
            return Err(invalid("width and height must be at least 1"));
        }
        if i32::try_from(self.width.max(self.height)).is_err() {
            return Err(invalid("width and height must not exceed i32::MAX"));
        }
        if u64::from(self.radius) * 2 > u64::from(self.width.min(self.height)) {
            return Err(invalid("corner radius exceeds half the shorter side"));
        }
        Ok(())
    }
}

/// Fill color, outline color and outline stroke width.
///
/// The default has no fill, no outline and a stroke of 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RoundRectStyle {
    pub fill: Option<Color>,
    pub outline: Option<Color>,
    pub stroke: u32,
}

impl Default for RoundRectStyle {
    fn default() -> Self {
        Self {
            fill: None,
            outline: None,
            stroke: 1,
        }
    }
}

impl RoundRectStyle {
    pub fn with_fill(mut self, fill: impl Into<Color>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn with_outline(mut self, outline: impl Into<Color>) -> Self {
        self.outline = Some(outline.into());
        self
    }

    pub fn with_stroke(mut self, stroke: u32) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn validate(&self) -> Result<(), ShapeError> {
        if self.stroke == 0 {
            return Err(ShapeError::InvalidStroke {
                stroke: self.stroke,
            });
        }
        Ok(())
    }
}

// ============================================================================
// RoundRect
// ============================================================================

/// A rasterized rounded rectangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRect {
    geometry: RoundRectGeometry,
    stroke: u32,
    sprite: Sprite,
}

impl RoundRect {
    /// Validate and rasterize a rounded rectangle at `position`.
    pub fn new(
        position: Point,
        geometry: RoundRectGeometry,
        style: RoundRectStyle,
    ) -> Result<Self, ShapeError> {
        geometry.validate()?;
        style.validate()?;

        debug!(
            "round rect {}x{} r={} stroke={} at ({}, {})",
            geometry.width, geometry.height, geometry.radius, style.stroke, position.x, position.y
        );

        let (bitmap, palette) = rasterize(&geometry, &style);
        Ok(Self {
            geometry,
            stroke: style.stroke,
            sprite: Sprite::new(bitmap, palette, position),
        })
    }

    /// Shorthand for [`RoundRect::new`] taking plain integers.
    pub fn from_parts(
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        r: u32,
        style: RoundRectStyle,
    ) -> Result<Self, ShapeError> {
        Self::new(
            Point::new(x, y),
            RoundRectGeometry::new(width, height, r),
            style,
        )
    }

    pub fn geometry(&self) -> &RoundRectGeometry {
        &self.geometry
    }

    pub fn stroke(&self) -> u32 {
        self.stroke
    }

    pub fn bitmap(&self) -> &Bitmap {
        self.sprite.bitmap()
    }

    pub fn palette(&self) -> &Palette {
        self.sprite.palette()
    }

    /// The drawable handle the compositing layer renders.
    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    pub fn into_sprite(self) -> Sprite {
        self.sprite
    }

    /// Current fill color, `None` when the fill is transparent.
    pub fn fill(&self) -> Option<Color> {
        self.palette().get(FILL_INDEX as usize)
    }

    /// Set or clear the fill color. The fill region is fixed at construction.
    pub fn set_fill(&mut self, fill: Option<Color>) {
        set_slot(self.sprite.palette_mut(), FILL_INDEX, fill);
    }

    /// Current outline color, `None` when the outline is transparent.
    pub fn outline(&self) -> Option<Color> {
        self.palette().get(OUTLINE_INDEX as usize)
    }

    /// Set or clear the outline color.
    pub fn set_outline(&mut self, outline: Option<Color>) {
        set_slot(self.sprite.palette_mut(), OUTLINE_INDEX, outline);
    }

    pub fn position(&self) -> Point {
        self.sprite.position()
    }

    pub fn set_position(&mut self, position: Point) {
        self.sprite.set_position(position);
    }

    pub fn x(&self) -> i32 {
        self.position().x
    }

    pub fn set_x(&mut self, x: i32) {
        let y = self.y();
        self.set_position(Point::new(x, y));
    }

    pub fn y(&self) -> i32 {
        self.position().y
    }

    pub fn set_y(&mut self, y: i32) {
        let x = self.x();
        self.set_position(Point::new(x, y));
    }
}

fn set_slot(palette: &mut Palette, index: u8, color: Option<Color>) {
    match color {
        Some(c) => palette.set(index as usize, c),
        None => palette.make_transparent(index as usize),
    }
}

/// Paint the shape into a fresh bitmap. Geometry and style must be valid.
///
/// Fill is painted before the outline so outline pixels always win.
fn rasterize(geometry: &RoundRectGeometry, style: &RoundRectStyle) -> (Bitmap, Palette) {
    let (w, h) = (to_coord(geometry.width), to_coord(geometry.height));
    let r = to_coord(geometry.radius);
    let arcs = CornerArcs::new(geometry.radius, geometry.width, geometry.height);

    let mut bitmap = Bitmap::new(geometry.width, geometry.height);
    let mut palette = Palette::new(PALETTE_LEN);
    palette.make_transparent(TRANSPARENT_INDEX as usize);

    match style.fill {
        Some(fill) => {
            // Center band, full width, between the corner rows.
            bitmap.fill_rect(0, r, w, h - r, FILL_INDEX);
            arcs.paint(&mut bitmap, FILL_INDEX, ArcMode::Fill);
            palette.set(FILL_INDEX as usize, fill);
        }
        None => palette.make_transparent(FILL_INDEX as usize),
    }

    match style.outline {
        Some(outline) => {
            palette.set(OUTLINE_INDEX as usize, outline);
            // A stroke as wide as the longer side already covers the shape.
            let stroke = style.stroke.min(geometry.width.max(geometry.height));
            let s = to_coord(stroke);
            // Flat sides. Strokes wider than half the shape clip to it.
            bitmap.fill_rect(r, 0, w - r, s, OUTLINE_INDEX);
            bitmap.fill_rect(r, h - s, w - r, h, OUTLINE_INDEX);
            bitmap.fill_rect(0, r, s, h - r, OUTLINE_INDEX);
            bitmap.fill_rect(w - s, r, w, h - r, OUTLINE_INDEX);
            arcs.paint(&mut bitmap, OUTLINE_INDEX, ArcMode::Stroke(stroke));
        }
        None => palette.make_transparent(OUTLINE_INDEX as usize),
    }

    (bitmap, palette)
}

// ============================================================================
// Tests
// ============================================================================
