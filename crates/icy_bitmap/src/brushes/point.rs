//! Square stroke points

use super::{DrawContext, DrawTarget};

/// Fill the `stroke_width` × `stroke_width` square around (`row`, `col`).
///
/// Covers rows `row - w/2 .. row - w/2 + w` and the same span of columns (truncating division).
/// Cells outside the target are skipped. Returns the number of pixels written.
pub fn draw_point<T: DrawTarget + ?Sized>(target: &mut T, ctx: &DrawContext, row: i32, col: i32) -> usize {
    let w = i64::from(ctx.stroke_width);
    if w <= 0 {
        return 0;
    }
    let half = ctx.half_stroke();
    let top = i64::from(row) - half;
    let left = i64::from(col) - half;

    // only walk the part of the square that overlaps the target
    let rows = top.max(0)..(top + w).min(i64::from(target.height()));
    let cols = left.max(0)..(left + w).min(i64::from(target.width()));

    let mut written = 0;
    for r in rows {
        for c in cols.clone() {
            if target.clipped_set(r as i32, c as i32, ctx.color) {
                written += 1;
            }
        }
    }
    written
}
