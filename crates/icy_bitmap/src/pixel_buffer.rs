use crate::{BitmapError, Color, Result};

/// A grid of `height` rows with `width` colors each.
///
/// Rows are kept in the order they are stored in the file, for bottom-up bitmaps
/// row 0 is the bottom scanline of the picture.
///
/// There are two write paths:
/// - [`PixelBuffer::checked_set`] fails with an index error when out of range.
/// - [`PixelBuffer::clipped_set`] silently drops writes outside the buffer, used by the brushes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: i32,
    height: i32,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    /// # Panics
    ///
    /// Panics if a dimension is negative.
    pub fn new(width: i32, height: i32) -> Self {
        Self::filled(width, height, Color::BLACK)
    }

    /// # Panics
    ///
    /// Panics if a dimension is negative.
    pub fn filled(width: i32, height: i32, color: Color) -> Self {
        assert!(width >= 0 && height >= 0, "invalid pixel buffer size {width}x{height}");
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    pub(crate) fn from_pixels(width: i32, height: i32, pixels: Vec<Color>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self { width, height, pixels }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn is_valid(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && row < self.height && col < self.width
    }

    fn index(&self, row: i32, col: i32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    fn out_of_range(&self, row: i32, col: i32) -> BitmapError {
        BitmapError::PixelOutOfRange {
            row,
            col,
            width: self.width,
            height: self.height,
        }
    }

    pub fn checked_get(&self, row: i32, col: i32) -> Result<Color> {
        if !self.is_valid(row, col) {
            return Err(self.out_of_range(row, col));
        }
        Ok(self.pixels[self.index(row, col)])
    }

    pub fn checked_set(&mut self, row: i32, col: i32, color: Color) -> Result<()> {
        if !self.is_valid(row, col) {
            return Err(self.out_of_range(row, col));
        }
        let idx = self.index(row, col);
        self.pixels[idx] = color;
        Ok(())
    }

    /// Sets the pixel if it is inside the buffer. Returns `true` if a pixel was written.
    pub fn clipped_set(&mut self, row: i32, col: i32, color: Color) -> bool {
        if !self.is_valid(row, col) {
            return false;
        }
        let idx = self.index(row, col);
        self.pixels[idx] = color;
        true
    }

    /// # Panics
    ///
    /// Panics if `row` is out of range.
    pub fn row(&self, row: usize) -> &[Color] {
        let w = self.width as usize;
        &self.pixels[row * w..(row + 1) * w]
    }

    /// # Panics
    ///
    /// Panics if `row` is out of range.
    pub fn row_mut(&mut self, row: usize) -> &mut [Color] {
        let w = self.width as usize;
        &mut self.pixels[row * w..(row + 1) * w]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        // chunks_exact panics on 0, an empty buffer has no rows anyways
        self.pixels.chunks_exact(self.width.max(1) as usize)
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }
}
