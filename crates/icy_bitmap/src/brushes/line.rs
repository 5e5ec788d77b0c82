//! Line drawing
//!
//! Lines step along the axis with the larger span of the bounding box and interpolate the
//! other axis with integer division that always rounds towards negative infinity.
//! For lines with a negative slope the interpolated offset is applied from the maximum
//! coordinate of the minor axis instead of the minimum.

use std::ops::RangeInclusive;

use super::{point::draw_point, DrawContext, DrawTarget};
use crate::Position;

/// Integer division rounding towards negative infinity.
///
/// Truncating division is corrected by one when the quotient is negative and has a remainder.
///
/// # Panics
///
/// Panics if `b` is 0.
pub fn floor_div_round(a: i128, b: i128) -> i128 {
    let q = a / b;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        q - 1
    } else {
        q
    }
}

/// Walks the interior points of the line (endpoints excluded).
///
/// `col_range` and `row_range` limit the stepping axis so far away parts of long lines aren't visited.
/// `plot` receives (row, col).
fn walk_line(
    y1: i64,
    x1: i64,
    y2: i64,
    x2: i64,
    col_range: RangeInclusive<i64>,
    row_range: RangeInclusive<i64>,
    mut plot: impl FnMut(i64, i64),
) {
    let (ymin, ymax) = (y1.min(y2), y1.max(y2));
    let (xmin, xmax) = (x1.min(x2), x1.max(x2));
    let dy = y2 - y1;
    let dx = x2 - x1;
    let negative_slope = dx.signum() * dy.signum() < 0;

    if ymax - ymin > xmax - xmin {
        // dy != 0 here
        let start = (ymin + 1).max(*col_range.start());
        let end = (ymax - 1).min(*col_range.end());
        for y in start..=end {
            let offset = floor_div_round(i128::from(y - ymin) * i128::from(dx), i128::from(dy)) as i64;
            let x = if negative_slope { xmax + offset } else { xmin + offset };
            plot(x, y);
        }
    } else if xmax > xmin {
        let start = (xmin + 1).max(*row_range.start());
        let end = (xmax - 1).min(*row_range.end());
        for x in start..=end {
            let offset = floor_div_round(i128::from(x - xmin) * i128::from(dy), i128::from(dx)) as i64;
            let y = if negative_slope { ymax + offset } else { ymin + offset };
            plot(x, y);
        }
    }
}

/// All points the line from (`y1`, `x1`) to (`y2`, `x2`) covers, endpoints first.
pub fn get_line_points(y1: i32, x1: i32, y2: i32, x2: i32) -> Vec<Position> {
    let mut points = vec![Position::new(x1, y1)];
    if (y1, x1) != (y2, x2) {
        points.push(Position::new(x2, y2));
    }
    walk_line(
        y1.into(),
        x1.into(),
        y2.into(),
        x2.into(),
        i64::MIN..=i64::MAX,
        i64::MIN..=i64::MAX,
        |row, col| points.push(Position::new(row as i32, col as i32)),
    );
    points
}

/// Draw a line from (`y1`, `x1`) to (`y2`, `x2`), `y` being the column and `x` the row.
///
/// Both endpoints are drawn as points, then every step on the dominant axis in between.
pub fn draw_line<T: DrawTarget + ?Sized>(target: &mut T, ctx: &DrawContext, y1: i32, x1: i32, y2: i32, x2: i32) {
    draw_point(target, ctx, x1, y1);
    draw_point(target, ctx, x2, y2);

    let w = i64::from(ctx.stroke_width);
    if w <= 0 {
        return;
    }
    // a point at c covers c - w/2 ..= c - w/2 + w - 1
    let half = ctx.half_stroke();
    let col_range = (half - w + 1)..=(i64::from(target.width()) - 1 + half);
    let row_range = (half - w + 1)..=(i64::from(target.height()) - 1 + half);

    walk_line(y1.into(), x1.into(), y2.into(), x2.into(), col_range, row_range, |row, col| {
        // the minor axis stays between the endpoints, so it fits into i32
        draw_point(target, ctx, row as i32, col as i32);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_div_round() {
        assert_eq!(floor_div_round(6, 3), 2);
        assert_eq!(floor_div_round(7, 3), 2);
        assert_eq!(floor_div_round(-7, 3), -3);
        assert_eq!(floor_div_round(7, -3), -3);
        assert_eq!(floor_div_round(-7, -3), 2);
        assert_eq!(floor_div_round(-6, 3), -2);
        assert_eq!(floor_div_round(0, -5), 0);
        assert_eq!(floor_div_round(-3, 5), -1);
        assert_eq!(floor_div_round(-12, 5), -3);
    }

    #[test]
    fn test_single_point() {
        assert_eq!(get_line_points(3, 3, 3, 3), vec![Position::new(3, 3)]);
    }

    #[test]
    fn test_horizontal_line() {
        // constant row, y walks the columns
        let points = get_line_points(0, 2, 5, 2);
        assert_eq!(points.len(), 6);
        assert_eq!(points[0], Position::new(2, 0));
        assert_eq!(points[1], Position::new(2, 5));
        assert!(points.iter().all(|p| p.row == 2));
    }

    #[test]
    fn test_vertical_line() {
        let points = get_line_points(4, 0, 4, 5);
        assert_eq!(points.len(), 6);
        assert!(points.iter().all(|p| p.col == 4));
    }

    #[test]
    fn test_adjacent_points() {
        assert_eq!(get_line_points(0, 0, 1, 0), vec![Position::new(0, 0), Position::new(0, 1)]);
        assert_eq!(get_line_points(0, 0, 1, 1), vec![Position::new(0, 0), Position::new(1, 1)]);
    }

    #[test]
    fn test_long_line_is_clamped() {
        let mut buf = crate::PixelBuffer::new(4, 4);
        let ctx = DrawContext::new(crate::Color::WHITE, 1);
        draw_line(&mut buf, &ctx, i32::MIN, 0, i32::MAX, 0);
        for col in 0..4 {
            assert_eq!(buf.checked_get(0, col).unwrap(), crate::Color::WHITE);
        }
        assert_eq!(buf.checked_get(1, 0).unwrap(), crate::Color::BLACK);
    }
}
