//! Indexed bitmap — row-major grid of palette indices.
//!
//! Modeled on the row accessor of a rendering buffer: pixels live in one
//! contiguous `Vec<u8>`, row `y` starts at `y * width`. Unlike a raw
//! rendering buffer, writes take signed coordinates and are clipped to the
//! grid, so rasterizers can emit arc pixels without pre-checking each one.

/// A width×height grid of palette indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Bitmap {
    /// Create a bitmap with every pixel set to index 0.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Read the index at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        self.offset(x, y).map(|i| self.data[i])
    }

    /// Write `value` at `(x, y)`. Writes outside the grid are ignored.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, value: u8) {
        if let Some(i) = self.offset(x, y) {
            self.data[i] = value;
        }
    }

    /// Write `value` to the half-open span `[x1, x2)` of row `y`, clipped.
    pub fn copy_hspan(&mut self, x1: i32, x2: i32, y: i32, value: u8) {
        if y < 0 || y as u32 >= self.height {
            return;
        }
        let x1 = x1.max(0);
        let x2 = x2.min(self.width as i32);
        if x1 >= x2 {
            return;
        }
        let start = y as usize * self.width as usize;
        self.data[start + x1 as usize..start + x2 as usize].fill(value);
    }

    /// Write `value` to every pixel of the half-open box `[x1, x2) × [y1, y2)`,
    /// clipped.
    pub fn fill_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, value: u8) {
        for y in y1.max(0)..y2.min(self.height as i32) {
            self.copy_hspan(x1, x2, y, value);
        }
    }

    /// Row `y` as a slice.
    ///
    /// # Panics
    /// If `y >= height`.
    pub fn row(&self, y: u32) -> &[u8] {
        assert!(
            y < self.height,
            "row {} out of bounds (height={})",
            y,
            self.height
        );
        let w = self.width as usize;
        &self.data[y as usize * w..(y as usize + 1) * w]
    }

    /// All pixels, row-major.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Number of pixels holding `value`.
    pub fn count(&self, value: u8) -> usize {
        self.data.iter().filter(|&&v| v == value).count()
    }

    /// Iterate `(x, y, index)` over every pixel, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, u8)> + '_ {
        let w = self.width.max(1);
        self.data
            .iter()
            .enumerate()
            .map(move |(i, &v)| (i as u32 % w, i as u32 / w, v))
    }
}

// ============================================================================
// Tests
// ============================================================================
