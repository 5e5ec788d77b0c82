//! Drawing primitives for 24 bit pixel buffers
//!
//! Everything here clips silently: pixels outside the target are skipped, drawing never fails.
//!
//! Coordinates of lines and shapes follow the editor commands: `y` selects the column
//! and `x` selects the row of the buffer. [`point::draw_point`] takes a plain row/column pair.
//!
//! # Example
//! ```
//! use icy_bitmap::{Color, PixelBuffer, brushes::{DrawContext, draw_line}};
//!
//! let mut buffer = PixelBuffer::new(20, 20);
//! let ctx = DrawContext::new(Color::new(255, 0, 0), 1);
//! draw_line(&mut buffer, &ctx, 0, 0, 10, 5);
//! ```

pub mod line;
pub mod point;
pub mod rectangle;
pub mod triangle;

pub use line::{draw_line, floor_div_round, get_line_points};
pub use point::draw_point;
pub use rectangle::draw_rectangle;
pub use triangle::draw_triangle;

use crate::{Bitmap, Color, PixelBuffer};

/// A trait for targets that can be drawn on
pub trait DrawTarget {
    /// Number of columns
    fn width(&self) -> i32;

    /// Number of rows
    fn height(&self) -> i32;

    /// Set a pixel, positions outside of the target are ignored.
    /// Returns `true` if the pixel was written.
    fn clipped_set(&mut self, row: i32, col: i32, color: Color) -> bool;
}

impl DrawTarget for PixelBuffer {
    fn width(&self) -> i32 {
        PixelBuffer::width(self)
    }

    fn height(&self) -> i32 {
        PixelBuffer::height(self)
    }

    fn clipped_set(&mut self, row: i32, col: i32, color: Color) -> bool {
        PixelBuffer::clipped_set(self, row, col, color)
    }
}

impl DrawTarget for Bitmap {
    fn width(&self) -> i32 {
        Bitmap::width(self)
    }

    fn height(&self) -> i32 {
        Bitmap::height(self)
    }

    fn clipped_set(&mut self, row: i32, col: i32, color: Color) -> bool {
        self.buffer_mut().clipped_set(row, col, color)
    }
}

/// Context for drawing operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawContext {
    /// The color to draw with
    pub color: Color,

    /// Side length of the square drawn for every point of a line.
    /// 0 or less draws nothing.
    pub stroke_width: i32,
}

impl DrawContext {
    pub fn new(color: Color, stroke_width: i32) -> Self {
        Self { color, stroke_width }
    }

    /// Distance from the center of a point to the first row/column it covers.
    pub(crate) fn half_stroke(&self) -> i64 {
        i64::from(self.stroke_width) / 2
    }
}
