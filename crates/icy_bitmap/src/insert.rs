use crate::{BitmapError, PixelBuffer, Result};

/// Paste `image` into `target` with its first pixel at column `y`, row `x`.
///
/// Each row copies `min(image.width, target.width - y)` pixels, rows falling below the last
/// target row are dropped. Returns the number of rows copied.
///
/// # Errors
///
/// Fails with an index error, leaving `target` untouched, if `y` or `x` is negative or
/// `y` lies beyond the right edge of the target.
pub fn insert(target: &mut PixelBuffer, image: &PixelBuffer, y: i32, x: i32) -> Result<usize> {
    if y < 0 || x < 0 || y > target.width() {
        return Err(BitmapError::InsertOutOfRange {
            y,
            x,
            width: target.width(),
            height: target.height(),
        });
    }
    let line_size = image.width().min(target.width() - y) as usize;
    let rows = image.height().min(target.height().saturating_sub(x)).max(0) as usize;
    let col = y as usize;

    for i in 0..rows {
        let src = &image.row(i)[..line_size];
        target.row_mut(i + x as usize)[col..col + line_size].copy_from_slice(src);
    }
    log::debug!("inserted {}x{} image at column {y}, row {x}: {rows} rows of {line_size} pixels", image.width(), image.height());
    Ok(rows)
}
