//! Indexed color palette.
//!
//! A palette maps the small integers stored in a [`Bitmap`](crate::bitmap::Bitmap)
//! to colors. Each slot holds a color and a transparent flag; making a slot
//! transparent keeps the stored color; assigning a color makes it opaque again.

use crate::color::Color;

/// One palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaletteSlot {
    pub color: Color,
    pub transparent: bool,
}

/// Ordered list of color slots addressed by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    slots: Vec<PaletteSlot>,
}

impl Palette {
    /// Create a palette with `len` opaque black slots.
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![PaletteSlot::default(); len],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Assign a color to slot `index` and make it opaque.
    ///
    /// # Panics
    /// If `index` is out of range.
    pub fn set(&mut self, index: usize, color: Color) {
        self.slots[index] = PaletteSlot {
            color,
            transparent: false,
        };
    }

    /// Mark slot `index` transparent, keeping its stored color.
    pub fn make_transparent(&mut self, index: usize) {
        self.slots[index].transparent = true;
    }

    pub fn is_transparent(&self, index: usize) -> bool {
        self.slots[index].transparent
    }

    /// The raw slot at `index`, or `None` if out of range.
    pub fn slot(&self, index: usize) -> Option<&PaletteSlot> {
        self.slots.get(index)
    }

    /// The visible color of slot `index`.
    ///
    /// Returns `None` if the slot is transparent or out of range.
    pub fn get(&self, index: usize) -> Option<Color> {
        self.slots
            .get(index)
            .filter(|s| !s.transparent)
            .map(|s| s.color)
    }
}
