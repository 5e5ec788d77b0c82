use super::{line::draw_line, DrawContext, DrawTarget};

/// Draw the outline of the triangle spanned by three (`y`, `x`) vertices.
pub fn draw_triangle<T: DrawTarget + ?Sized>(target: &mut T, ctx: &DrawContext, y1: i32, x1: i32, y2: i32, x2: i32, y3: i32, x3: i32) {
    draw_line(target, ctx, y1, x1, y2, x2);
    draw_line(target, ctx, y1, x1, y3, x3);
    draw_line(target, ctx, y3, x3, y2, x2);
}
