#![allow(dead_code)]

use icy_bitmap::{Color, PixelBuffer, Position};

/// Shows the codec's log output with `RUST_LOG=debug cargo test`.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds a 24 bit bitmap file by hand, independent of the crate's writer.
/// Every pixel gets a distinct value, padding bytes are zero.
pub fn make_bmp(width: i32, height: i32) -> Vec<u8> {
    make_bmp_with_gap(width, height, &[])
}

pub fn make_bmp_with_gap(width: i32, height: i32, gap: &[u8]) -> Vec<u8> {
    let padding = (4 - (width as usize * 3) % 4) % 4;
    let size_image = (width as usize * 3 + padding) * height as usize;
    let offset = 54 + gap.len();

    let mut data = Vec::new();
    data.extend(b"BM");
    data.extend(((offset + size_image) as u32).to_le_bytes());
    data.extend(0xBEEFu16.to_le_bytes()); // reserved, must survive a round trip
    data.extend(0u16.to_le_bytes());
    data.extend((offset as u32).to_le_bytes());

    data.extend(40u32.to_le_bytes());
    data.extend(width.to_le_bytes());
    data.extend(height.to_le_bytes());
    data.extend(1u16.to_le_bytes());
    data.extend(24u16.to_le_bytes());
    data.extend(0u32.to_le_bytes());
    data.extend((size_image as u32).to_le_bytes());
    data.extend(2835i32.to_le_bytes());
    data.extend(2835i32.to_le_bytes());
    data.extend(0u32.to_le_bytes());
    data.extend(0u32.to_le_bytes());
    data.extend(gap);

    for row in 0..height {
        for col in 0..width {
            data.extend(pixel_bytes(row, col));
        }
        data.resize(data.len() + padding, 0);
    }
    data
}

/// b, g, r bytes of the test pattern pixel at (row, col)
pub fn pixel_bytes(row: i32, col: i32) -> [u8; 3] {
    [(row * 16 + col) as u8, row as u8 + 1, col as u8 + 101]
}

/// Positions not equal to the background color, row major.
pub fn set_pixels(buf: &PixelBuffer, background: Color) -> Vec<Position> {
    let mut result = Vec::new();
    for row in 0..buf.height() {
        for col in 0..buf.width() {
            if buf.checked_get(row, col).unwrap() != background {
                result.push(Position::new(row, col));
            }
        }
    }
    result
}

pub fn positions(list: &[(i32, i32)]) -> Vec<Position> {
    let mut result: Vec<Position> = list.iter().map(|p| Position::from(*p)).collect();
    result.sort();
    result
}
