//! Rectangle outlines

use super::{line::draw_line, DrawContext, DrawTarget};

/// Draw a rectangle outline as four lines.
///
/// `width` extends along `y` (columns) and `height` along `x` (rows), the corners are
/// (`y1`, `x1`), (`y1 + width`, `x1`), (`y1`, `x1 + height`) and (`y1 + width`, `x1 + height`).
/// Negative sizes mirror the rectangle.
pub fn draw_rectangle<T: DrawTarget + ?Sized>(target: &mut T, ctx: &DrawContext, y1: i32, x1: i32, width: i32, height: i32) {
    let y2 = y1.saturating_add(width);
    let x2 = x1.saturating_add(height);

    draw_line(target, ctx, y1, x1, y2, x1);
    draw_line(target, ctx, y1, x1, y1, x2);
    draw_line(target, ctx, y2, x1, y2, x2);
    draw_line(target, ctx, y1, x2, y2, x2);
}
