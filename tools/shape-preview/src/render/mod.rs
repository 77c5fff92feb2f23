// Scene rendering for the preview tool.
//
// Every scene draws onto a white background the size of a small TFT panel.

use display_shapes::{Color, RoundRect, RoundRectStyle, ShapeError};
use embedded_graphics_core::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics_core::Drawable;

use crate::Framebuffer;

pub const SCREEN_WIDTH: u32 = 320;
pub const SCREEN_HEIGHT: u32 = 240;

/// Render a named scene.
///
/// Returns `None` if the scene name is not recognized.
pub fn render_scene(name: &str, params: &[i64]) -> Option<Result<Framebuffer, ShapeError>> {
    let shapes = match name {
        "simpletest" => simpletest(),
        "roundrect" => roundrect(params),
        _ => return None,
    };
    Some(shapes.map(|shapes| compose(&shapes)))
}

/// List all available scene names.
pub fn available_scenes() -> &'static [&'static str] {
    &["simpletest", "roundrect"]
}

fn compose(shapes: &[RoundRect]) -> Framebuffer {
    let mut fb = Framebuffer::filled(SCREEN_WIDTH, SCREEN_HEIGHT, Rgb888::WHITE);
    for shape in shapes {
        shape
            .sprite()
            .draw(&mut fb)
            .unwrap_or_else(|never| match never {});
    }
    fb
}

/// The demonstration layout: a black rounded rectangle with a thick magenta
/// outline in the top-left of the screen.
fn simpletest() -> Result<Vec<RoundRect>, ShapeError> {
    let style = RoundRectStyle::default()
        .with_fill(Color::BLACK)
        .with_outline(Color::MAGENTA)
        .with_stroke(6);
    Ok(vec![RoundRect::from_parts(10, 10, 61, 81, 10, style)?])
}

/// A single rounded rectangle from `x y width height r stroke` params.
///
/// Missing params fall back to the demonstration shape.
fn roundrect(params: &[i64]) -> Result<Vec<RoundRect>, ShapeError> {
    let p = |i: usize, default: i64| params.get(i).copied().unwrap_or(default);
    let dim = |i: usize, default: i64| p(i, default).clamp(0, i64::from(u32::MAX)) as u32;
    let style = RoundRectStyle::default()
        .with_fill(Color::BLACK)
        .with_outline(Color::MAGENTA)
        .with_stroke(dim(5, 1));
    let rect = RoundRect::from_parts(
        p(0, 10) as i32,
        p(1, 10) as i32,
        dim(2, 61),
        dim(3, 81),
        dim(4, 10),
        style,
    )?;
    Ok(vec![rect])
}
