//! Quarter-circle corner rasterizer.
//!
//! Integer midpoint circle stepping (no floating point, no trigonometry)
//! over one octant, mirrored into the four corners of a rectangle. The arc
//! center is fixed at `(r, r)`; the right-hand and bottom corners are reached
//! by adding `x_offset = width - 2r - 1` and `y_offset = height - 2r - 1`.
//!
//! Two painting modes are supported:
//!
//! - [`ArcMode::Fill`] sweeps the rounded ends of the shape one scanline pair
//!   per step. The left-hand corners emit full horizontal spans; the
//!   right-hand corners close the last column of each span.
//! - [`ArcMode::Stroke`] paints `stroke` pixels inward from the arc along
//!   both axes, approximating a constant-width ring.

use crate::bitmap::Bitmap;

// ============================================================================
// MidpointCircle
// ============================================================================

/// Midpoint circle interpolator.
///
/// Yields the `(x, y)` positions of one octant, starting just after
/// `(0, r)` and stopping once `x >= y`. The caller mirrors each step into
/// the quadrants it needs. A zero radius yields nothing.
#[derive(Debug, Clone)]
pub struct MidpointCircle {
    f: i32,
    ddf_x: i32,
    ddf_y: i32,
    x: i32,
    y: i32,
}

impl MidpointCircle {
    pub fn new(r: i32) -> Self {
        Self {
            f: 1 - r,
            ddf_x: 1,
            ddf_y: -2 * r,
            x: 0,
            y: r,
        }
    }
}

impl Iterator for MidpointCircle {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.x >= self.y {
            return None;
        }
        if self.f >= 0 {
            self.y -= 1;
            self.ddf_y += 2;
            self.f += self.ddf_y;
        }
        self.x += 1;
        self.ddf_x += 2;
        self.f += self.ddf_x;
        Some((self.x, self.y))
    }
}

// ============================================================================
// Corner dispatch
// ============================================================================

/// One corner of the rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::BottomLeft,
        Corner::TopLeft,
        Corner::BottomRight,
        Corner::TopRight,
    ];
}

/// How the arc is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcMode {
    Fill,
    Stroke(u32),
}

/// Saturating `u32` to bitmap coordinate conversion.
pub(crate) fn to_coord(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

/// Paints the four rounded corners of a `width`×`height` shape with corner
/// radius `r`.
///
/// The geometry must satisfy `2r <= min(width, height) <= i32::MAX`.
/// Stroke lines past `max(width, height)` can never land inside the shape,
/// so wider strokes are clamped there; the rest are clipped by the bitmap.
#[derive(Debug, Clone, Copy)]
pub struct CornerArcs {
    r: i32,
    x_offset: i32,
    y_offset: i32,
    max_stroke: i32,
}

impl CornerArcs {
    pub fn new(r: u32, width: u32, height: u32) -> Self {
        debug_assert!(u64::from(r) * 2 <= u64::from(width.min(height)));
        let (r, width, height) = (to_coord(r), to_coord(width), to_coord(height));
        Self {
            r,
            x_offset: width - 2 * r - 1,
            y_offset: height - 2 * r - 1,
            max_stroke: width.max(height),
        }
    }

    /// Paint all four corners with palette index `color`.
    pub fn paint(&self, bitmap: &mut Bitmap, color: u8, mode: ArcMode) {
        for (x, y) in MidpointCircle::new(self.r) {
            for corner in Corner::ALL {
                self.paint_step(bitmap, corner, x, y, color, mode);
            }
        }
    }

    fn paint_step(
        &self,
        bitmap: &mut Bitmap,
        corner: Corner,
        x: i32,
        y: i32,
        color: u8,
        mode: ArcMode,
    ) {
        let (x0, y0) = (self.r, self.r);
        let (xo, yo) = (self.x_offset, self.y_offset);
        // Right-hand corners only ever draw the arc edge; in fill mode that
        // closes the spans emitted by the left-hand corners.
        let stroke = match mode {
            ArcMode::Fill => 1,
            ArcMode::Stroke(s) => to_coord(s).min(self.max_stroke),
        };

        match (corner, mode) {
            (Corner::BottomLeft, ArcMode::Fill) => {
                bitmap.copy_hspan(x0 - y, x0 + y + xo, y0 + x + yo, color);
                bitmap.copy_hspan(x0 - x, x0 + x + xo, y0 + y + yo, color);
            }
            (Corner::BottomLeft, ArcMode::Stroke(_)) => {
                for line in 0..stroke {
                    bitmap.set(x0 - y + line, y0 + x + yo, color);
                    bitmap.set(x0 - x, y0 + y + yo - line, color);
                }
            }
            (Corner::TopLeft, ArcMode::Fill) => {
                bitmap.copy_hspan(x0 - y, x0 + y + xo, y0 - x, color);
                bitmap.copy_hspan(x0 - x, x0 + x + xo, y0 - y, color);
            }
            (Corner::TopLeft, ArcMode::Stroke(_)) => {
                for line in 0..stroke {
                    bitmap.set(x0 - y + line, y0 - x, color);
                    bitmap.set(x0 - x, y0 - y + line, color);
                }
            }
            (Corner::BottomRight, _) => {
                for line in 0..stroke {
                    bitmap.set(x0 + x + xo, y0 + y + yo - line, color);
                    bitmap.set(x0 + y + xo - line, y0 + x + yo, color);
                }
            }
            (Corner::TopRight, _) => {
                for line in 0..stroke {
                    bitmap.set(x0 + x + xo, y0 - y + line, color);
                    bitmap.set(x0 + y + xo - line, y0 - x, color);
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
