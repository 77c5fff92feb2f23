//! End-to-end rasterization checks on published rounded-rectangle scenarios.

use display_shapes::round_rect::{FILL_INDEX, OUTLINE_INDEX, TRANSPARENT_INDEX};
use display_shapes::{Color, RoundRect, RoundRectStyle, ShapeError};

fn style(fill: Option<u32>, outline: Option<u32>, stroke: u32) -> RoundRectStyle {
    RoundRectStyle {
        fill: fill.map(Color::new),
        outline: outline.map(Color::new),
        stroke,
    }
}

fn assert_mirror_symmetric(rect: &RoundRect) {
    let b = rect.bitmap();
    let (w, h) = (b.width() as i32, b.height() as i32);
    for y in 0..h {
        for x in 0..w {
            let v = b.get(x, y);
            assert_eq!(v, b.get(w - 1 - x, y), "horizontal mirror at ({x},{y})");
            assert_eq!(v, b.get(x, h - 1 - y), "vertical mirror at ({x},{y})");
        }
    }
}

/// Every row's painted pixels form one run: nothing transparent is left
/// strictly inside the rounded boundary.
fn assert_rows_solid(rect: &RoundRect) {
    let b = rect.bitmap();
    for y in 0..b.height() {
        let row = b.row(y);
        let first = row.iter().position(|&v| v != TRANSPARENT_INDEX);
        let last = row.iter().rposition(|&v| v != TRANSPARENT_INDEX);
        if let (Some(first), Some(last)) = (first, last) {
            assert!(
                row[first..=last].iter().all(|&v| v != TRANSPARENT_INDEX),
                "hole in row {y}"
            );
        }
    }
}

#[test]
fn square_without_radius_is_plain_fill() {
    let rect = RoundRect::from_parts(0, 0, 41, 41, 0, style(Some(0x000000), None, 1)).unwrap();
    assert_eq!(rect.bitmap().count(FILL_INDEX), 41 * 41);
    assert_eq!(rect.bitmap().count(OUTLINE_INDEX), 0);
    assert_eq!(rect.fill(), Some(Color::BLACK));
    assert_eq!(rect.outline(), None);
}

#[test]
fn zero_radius_outline_has_only_flat_edges() {
    let rect = RoundRect::from_parts(0, 0, 10, 6, 0, style(None, Some(0xFFFFFF), 2)).unwrap();
    let b = rect.bitmap();
    for y in 0..6 {
        for x in 0..10 {
            let on_edge = !(2..8).contains(&x) || !(2..4).contains(&y);
            let expected = if on_edge { OUTLINE_INDEX } else { TRANSPARENT_INDEX };
            assert_eq!(b.get(x, y), Some(expected), "({x},{y})");
        }
    }
}

#[test]
fn outlined_round_rect_matches_reference_counts() {
    let rect = RoundRect::from_parts(
        10,
        10,
        61,
        81,
        10,
        style(Some(0x000000), Some(0xFF00FF), 6),
    )
    .unwrap();
    let b = rect.bitmap();
    assert_eq!(b.count(TRANSPARENT_INDEX), 92);
    assert_eq!(b.count(OUTLINE_INDEX), 1472);
    assert_eq!(b.count(FILL_INDEX), 3377);

    // Corners are cut, the center is fill, flat edges carry the full stroke.
    assert_eq!(b.get(0, 0), Some(TRANSPARENT_INDEX));
    assert_eq!(b.get(60, 80), Some(TRANSPARENT_INDEX));
    assert_eq!(b.get(30, 40), Some(FILL_INDEX));
    for line in 0..6 {
        assert_eq!(b.get(30, line), Some(OUTLINE_INDEX));
        assert_eq!(b.get(30, 80 - line), Some(OUTLINE_INDEX));
        assert_eq!(b.get(line, 40), Some(OUTLINE_INDEX));
        assert_eq!(b.get(60 - line, 40), Some(OUTLINE_INDEX));
    }
    assert_eq!(b.get(30, 6), Some(FILL_INDEX));
    assert_eq!(b.get(6, 40), Some(FILL_INDEX));

    assert_rows_solid(&rect);
    assert_mirror_symmetric(&rect);
}

#[test]
fn outline_shares_the_fill_boundary() {
    // Transparent pixels are the same whether the boundary is painted by
    // the fill or by a one-pixel outline.
    let filled = RoundRect::from_parts(0, 0, 61, 81, 10, style(Some(0), None, 1)).unwrap();
    let both = RoundRect::from_parts(0, 0, 61, 81, 10, style(Some(0), Some(0xFF), 1)).unwrap();
    assert_eq!(filled.bitmap().count(TRANSPARENT_INDEX), 92);
    assert_eq!(both.bitmap().count(TRANSPARENT_INDEX), 92);
}

#[test]
fn fill_area_tracks_continuous_area() {
    let rect = RoundRect::from_parts(0, 0, 61, 81, 10, style(Some(0), None, 1)).unwrap();
    let count = rect.bitmap().count(FILL_INDEX);
    assert_eq!(count, 4849);

    for (w, h, r) in [(61u32, 81u32, 10u32), (100, 40, 20), (33, 47, 16), (64, 64, 7)] {
        let rect = RoundRect::from_parts(0, 0, w, h, r, style(Some(0), None, 1)).unwrap();
        let count = rect.bitmap().count(FILL_INDEX) as f64;
        let (w, h, r) = (w as f64, h as f64, r as f64);
        let area = w * h - (4.0 - std::f64::consts::PI) * r * r;
        assert!(
            (count - area).abs() <= 2.0 * r + 2.0,
            "{w}x{h} r={r}: {count} pixels vs area {area}"
        );
        assert_rows_solid(&rect);
        assert_mirror_symmetric(&rect);
    }
}

#[test]
fn outline_pixels_never_show_fill() {
    let outline_only =
        RoundRect::from_parts(0, 0, 61, 81, 10, style(None, Some(0xFF00FF), 6)).unwrap();
    let both =
        RoundRect::from_parts(0, 0, 61, 81, 10, style(Some(0), Some(0xFF00FF), 6)).unwrap();
    let a = outline_only.bitmap();
    let b = both.bitmap();
    assert_eq!(a.count(OUTLINE_INDEX), 1472);
    for ((_, _, outline), (x, y, combined)) in a.pixels().zip(b.pixels()) {
        if outline == OUTLINE_INDEX {
            assert_eq!(combined, OUTLINE_INDEX, "({x},{y}) lost its outline");
        }
    }
}

#[test]
fn construction_is_deterministic() {
    let s = style(Some(0x123456), Some(0x654321), 3);
    let a = RoundRect::from_parts(5, 5, 50, 30, 8, s).unwrap();
    let b = RoundRect::from_parts(5, 5, 50, 30, 8, s).unwrap();
    assert_eq!(a.bitmap(), b.bitmap());
    assert_eq!(a, b);
}

#[test]
fn fill_toggle_does_not_repaint() {
    let mut rect =
        RoundRect::from_parts(0, 0, 61, 81, 10, style(Some(0), Some(0xFF00FF), 6)).unwrap();
    let before = rect.bitmap().clone();
    rect.set_fill(None);
    assert_eq!(rect.fill(), None);
    rect.set_fill(Some(Color::new(0xFF0000)));
    assert_eq!(rect.fill(), Some(Color::RED));
    assert_eq!(rect.bitmap(), &before);
    assert_eq!(rect.bitmap().count(FILL_INDEX), 3377);
}

#[test]
fn stroke_wider_than_half_the_shape_saturates_it() {
    let rect = RoundRect::from_parts(0, 0, 10, 10, 2, style(Some(0x000000), Some(0xFF00FF), 8))
        .unwrap();
    let b = rect.bitmap();
    assert_eq!(b.count(OUTLINE_INDEX), 96);
    assert_eq!(b.count(FILL_INDEX), 0);
    // Only the single outermost corner pixels stay clear.
    for (x, y) in [(0, 0), (9, 0), (0, 9), (9, 9)] {
        assert_eq!(b.get(x, y), Some(TRANSPARENT_INDEX), "({x},{y})");
    }
    assert_mirror_symmetric(&rect);
    assert_rows_solid(&rect);

    // At the full side length even the corner pixels are covered.
    let rect = RoundRect::from_parts(0, 0, 10, 10, 2, style(Some(0x000000), Some(0xFF00FF), 10))
        .unwrap();
    assert_eq!(rect.bitmap().count(OUTLINE_INDEX), 100);
    assert_mirror_symmetric(&rect);
}

#[test]
fn oversized_radius_is_rejected() {
    let err = RoundRect::from_parts(0, 0, 8, 8, 5, style(Some(0), Some(0xFF), 1)).unwrap_err();
    assert!(matches!(
        err,
        ShapeError::InvalidGeometry {
            width: 8,
            height: 8,
            radius: 5,
            ..
        }
    ));
}

#[test]
fn zero_stroke_is_rejected() {
    let err = RoundRect::from_parts(0, 0, 20, 20, 4, style(None, Some(0xFF), 0)).unwrap_err();
    assert_eq!(err, ShapeError::InvalidStroke { stroke: 0 });
}
