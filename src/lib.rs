//! # display-shapes
//!
//! Indexed-color shape rasterization for small pixel displays.
//!
//! Shapes are rasterized once into a bitmap of palette indices. A display
//! stack composites them as sprites: the bitmap stays fixed, while palette
//! colors and the sprite position can change every frame at no cost.
//!
//! ## Architecture
//!
//! 1. **Geometry & style** — validated size, corner radius, colors, stroke
//! 2. **Rasterizer** — flat fills plus midpoint-circle corner arcs
//! 3. **Bitmap + Palette** — indices 0 (transparent), 1 (outline), 2 (fill)
//! 4. **Sprite** — positioned drawable for any `embedded-graphics` target
//!
//! ```
//! use display_shapes::color::Color;
//! use display_shapes::round_rect::{RoundRect, RoundRectStyle, FILL_INDEX};
//!
//! let style = RoundRectStyle::default().with_fill(Color::BLACK);
//! let rect = RoundRect::from_parts(80, 20, 41, 41, 0, style).unwrap();
//! assert_eq!(rect.bitmap().count(FILL_INDEX), 41 * 41);
//! ```

pub mod bitmap;
pub mod color;
pub mod corner_arc;
pub mod error;
pub mod palette;
pub mod round_rect;
pub mod sprite;

pub use color::Color;
pub use error::ShapeError;
pub use round_rect::{RoundRect, RoundRectGeometry, RoundRectStyle};
pub use sprite::Sprite;
