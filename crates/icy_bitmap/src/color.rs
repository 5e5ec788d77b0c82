use serde::{Deserialize, Serialize};

/// Size of one pixel in the 24 bit pixel array.
pub const BYTES_PER_PIXEL: usize = 3;

/// A 24 bit color. Field order matches the on disk pixel layout (blue, green, red).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub b: u8,
    pub g: u8,
    pub r: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { b, g, r }
    }

    /// Reads one pixel in file order (b, g, r).
    pub fn from_bgr(bytes: [u8; BYTES_PER_PIXEL]) -> Self {
        Color {
            b: bytes[0],
            g: bytes[1],
            r: bytes[2],
        }
    }

    /// Pixel bytes in file order (b, g, r).
    pub fn to_bgr(self) -> [u8; BYTES_PER_PIXEL] {
        [self.b, self.g, self.r]
    }
}
