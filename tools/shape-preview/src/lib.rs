// Scene preview and regression comparison for display-shapes.
//
// Provides an RGB framebuffer draw target, BMP I/O and buffer comparison.

use std::fs::File;
use std::io::{self, Read as IoRead, Write as IoWrite};
use std::path::Path;

use core::convert::Infallible;
use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{OriginDimensions, Size};
use embedded_graphics_core::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics_core::Pixel;

// ============================================================================
// Framebuffer
// ============================================================================

/// An RGB framebuffer, row-major, top-to-bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    /// RGB pixel data. Length = width * height * 3.
    pub data: Vec<u8>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width as usize * height as usize * 3],
        }
    }

    /// Create a framebuffer filled with `color`.
    pub fn filled(width: u32, height: u32, color: Rgb888) -> Self {
        let mut fb = Self::new(width, height);
        for px in fb.data.chunks_exact_mut(3) {
            px.copy_from_slice(&[color.r(), color.g(), color.b()]);
        }
        fb
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let i = (y as usize * self.width as usize + x as usize) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for Framebuffer {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Infallible>
    where
        I: IntoIterator<Item = Pixel<Rgb888>>,
    {
        for Pixel(p, c) in pixels {
            if p.x < 0 || p.y < 0 || p.x as u32 >= self.width || p.y as u32 >= self.height {
                continue;
            }
            let i = (p.y as usize * self.width as usize + p.x as usize) * 3;
            self.data[i..i + 3].copy_from_slice(&[c.r(), c.g(), c.b()]);
        }
        Ok(())
    }
}

// ============================================================================
// Comparison
// ============================================================================

/// Result of comparing two framebuffers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareResult {
    pub total_pixels: u64,
    pub different_pixels: u64,
    /// First differing pixel, scanning left-to-right, top-to-bottom.
    pub first_diff: Option<(u32, u32)>,
}

impl CompareResult {
    pub fn identical(&self) -> bool {
        self.different_pixels == 0
    }
}

impl std::fmt::Display for CompareResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.identical() {
            return write!(f, "IDENTICAL: {} pixels match", self.total_pixels);
        }
        write!(
            f,
            "DIFFERENT: {}/{} pixels differ",
            self.different_pixels, self.total_pixels
        )?;
        if let Some((x, y)) = self.first_diff {
            write!(f, ", first at ({}, {})", x, y)?;
        }
        Ok(())
    }
}

/// Compare two framebuffers pixel by pixel.
///
/// Buffers of different sizes are an error: a preview that changed size is
/// never a match.
pub fn compare_buffers(a: &Framebuffer, b: &Framebuffer) -> io::Result<CompareResult> {
    if a.width != b.width || a.height != b.height {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "size mismatch: {}x{} vs {}x{}",
                a.width, a.height, b.width, b.height
            ),
        ));
    }

    let mut different_pixels = 0u64;
    let mut first_diff = None;
    for (i, (pa, pb)) in a.data.chunks_exact(3).zip(b.data.chunks_exact(3)).enumerate() {
        if pa != pb {
            different_pixels += 1;
            if first_diff.is_none() {
                let i = i as u32;
                first_diff = Some((i % a.width, i / a.width));
            }
        }
    }

    Ok(CompareResult {
        total_pixels: u64::from(a.width) * u64::from(a.height),
        different_pixels,
        first_diff,
    })
}

/// Highlight differences: matching pixels dark gray, differing pixels red.
pub fn generate_diff_image(a: &Framebuffer, b: &Framebuffer) -> Framebuffer {
    let mut diff = Framebuffer::new(a.width, a.height);
    for ((out, pa), pb) in diff
        .data
        .chunks_exact_mut(3)
        .zip(a.data.chunks_exact(3))
        .zip(b.data.chunks_exact(3))
    {
        let v: [u8; 3] = if pa == pb { [40, 40, 40] } else { [255, 0, 0] };
        out.copy_from_slice(&v);
    }
    diff
}

// ============================================================================
// BMP I/O (24-bit BGR, top-down)
// ============================================================================

const BMP_HEADER_LEN: u32 = 14 + 40;

fn bmp_row_size(width: u32) -> u32 {
    (width * 3 + 3) & !3
}

/// Save a framebuffer as a 24-bit top-down BMP.
pub fn save_bmp(path: &Path, fb: &Framebuffer) -> io::Result<()> {
    let mut f = File::create(path)?;
    f.write_all(&encode_bmp(fb))
}

/// Encode a framebuffer as 24-bit top-down BMP bytes.
pub fn encode_bmp(fb: &Framebuffer) -> Vec<u8> {
    let row_size = bmp_row_size(fb.width);
    let image_size = row_size * fb.height;
    let mut out = Vec::with_capacity((BMP_HEADER_LEN + image_size) as usize);

    // File header
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(BMP_HEADER_LEN + image_size).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]);
    out.extend_from_slice(&BMP_HEADER_LEN.to_le_bytes());

    // BITMAPINFOHEADER
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&fb.width.to_le_bytes());
    out.extend_from_slice(&(-(fb.height as i32)).to_le_bytes()); // top-down
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&24u16.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // BI_RGB
    out.extend_from_slice(&image_size.to_le_bytes());
    out.extend_from_slice(&[0u8; 16]);

    let pad = (row_size - fb.width * 3) as usize;
    for y in 0..fb.height {
        for x in 0..fb.width {
            let [r, g, b] = fb.pixel(x, y);
            out.extend_from_slice(&[b, g, r]);
        }
        out.extend(std::iter::repeat(0u8).take(pad));
    }
    out
}

/// Load a 24- or 32-bit uncompressed BMP.
pub fn load_bmp(path: &Path) -> io::Result<Framebuffer> {
    let mut data = Vec::new();
    File::open(path)?.read_to_end(&mut data)?;
    decode_bmp(&data)
}

/// Decode 24- or 32-bit uncompressed BMP bytes.
pub fn decode_bmp(data: &[u8]) -> io::Result<Framebuffer> {
    let invalid = |msg: &str| io::Error::new(io::ErrorKind::InvalidData, msg.to_string());

    if data.len() < BMP_HEADER_LEN as usize || &data[0..2] != b"BM" {
        return Err(invalid("not a BMP file"));
    }

    let pixel_offset = u32::from_le_bytes([data[10], data[11], data[12], data[13]]) as usize;
    let w = i32::from_le_bytes([data[18], data[19], data[20], data[21]]);
    let h = i32::from_le_bytes([data[22], data[23], data[24], data[25]]);
    let bpp = u16::from_le_bytes([data[28], data[29]]) as usize;
    if bpp != 24 && bpp != 32 {
        return Err(invalid("only 24- and 32-bit BMPs are supported"));
    }

    let width = w.unsigned_abs();
    let height = h.unsigned_abs();
    let top_down = h < 0;
    let bytes_pp = bpp / 8;
    // Header fields are untrusted; a crafted size must not overflow.
    let row_stride = (width as usize)
        .checked_mul(bytes_pp)
        .and_then(|row| row.checked_add(3))
        .map(|row| row & !3);
    let pixel_end = row_stride
        .and_then(|stride| stride.checked_mul(height as usize))
        .and_then(|len| len.checked_add(pixel_offset));
    let (Some(row_stride), Some(pixel_end)) = (row_stride, pixel_end) else {
        return Err(invalid("BMP dimensions overflow"));
    };
    if data.len() < pixel_end {
        return Err(invalid("truncated BMP pixel data"));
    }

    let mut fb = Framebuffer::new(width, height);
    for y in 0..height as usize {
        let src_y = if top_down { y } else { height as usize - 1 - y };
        let row = pixel_offset + src_y * row_stride;
        for x in 0..width as usize {
            let si = row + x * bytes_pp;
            let di = (y * width as usize + x) * 3;
            fb.data[di] = data[si + 2];
            fb.data[di + 1] = data[si + 1];
            fb.data[di + 2] = data[si];
        }
    }
    Ok(fb)
}

// ============================================================================
// Scene rendering (re-exported from render module)
// ============================================================================

pub mod render;

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics_core::geometry::Point;

    #[test]
    fn test_bmp_keeps_pixels() {
        let mut fb = Framebuffer::filled(5, 3, Rgb888::WHITE);
        fb.draw_iter([Pixel(Point::new(4, 2), Rgb888::new(1, 2, 3))])
            .unwrap();
        let bytes = encode_bmp(&fb);
        // 5 pixels * 3 bytes = 15, padded to 16 per row.
        assert_eq!(bytes.len(), 54 + 16 * 3);
        let back = decode_bmp(&bytes).unwrap();
        assert_eq!(back, fb);
        assert_eq!(back.pixel(4, 2), [1, 2, 3]);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_bmp(b"not a bitmap").is_err());
    }

    #[test]
    fn test_decode_rejects_oversized_header() {
        let mut bytes = encode_bmp(&Framebuffer::new(1, 1));
        bytes[18..22].copy_from_slice(&i32::MAX.to_le_bytes());
        bytes[22..26].copy_from_slice(&i32::MIN.to_le_bytes());
        let err = decode_bmp(&bytes).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        let mut bytes = encode_bmp(&Framebuffer::new(1, 1));
        bytes[10..14].copy_from_slice(&u32::MAX.to_le_bytes());
        let err = decode_bmp(&bytes).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_draw_clips() {
        let mut fb = Framebuffer::new(2, 2);
        fb.draw_iter([Pixel(Point::new(-1, 5), Rgb888::WHITE)])
            .unwrap();
        assert!(fb.data.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_compare() {
        let a = Framebuffer::filled(4, 4, Rgb888::BLACK);
        let mut b = a.clone();
        assert!(compare_buffers(&a, &b).unwrap().identical());

        b.draw_iter([Pixel(Point::new(2, 1), Rgb888::RED)]).unwrap();
        let result = compare_buffers(&a, &b).unwrap();
        assert_eq!(result.different_pixels, 1);
        assert_eq!(result.first_diff, Some((2, 1)));
        assert_eq!(generate_diff_image(&a, &b).pixel(2, 1), [255, 0, 0]);

        let c = Framebuffer::new(3, 4);
        assert!(compare_buffers(&a, &c).is_err());
    }
}
