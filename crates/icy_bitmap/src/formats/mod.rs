use std::{fs, path::Path};

mod bmp;
pub mod header;

pub use bmp::{row_padding, scanline_len};
pub use header::{FileHeader, InfoHeader};

use crate::{BitmapError, Color, PixelBuffer, Result};
use header::{BMP_ID, HEADER_LEN, INFO_HEADER_LEN};

/// 72 dpi
const DEFAULT_PELS_PER_METER: i32 = 2835;

/// A decoded 24 bit bitmap.
///
/// Header fields are kept exactly as read and written back verbatim on save.
/// Neither `bf_size` nor `size_image` get recomputed from the pixel buffer, drawing never
/// changes the dimensions so they stay valid for files that were valid on load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    file_header: FileHeader,
    info_header: InfoHeader,
    /// Everything between the info header and the pixel array (v4/v5 header tails, masks, ICC data).
    gap: Vec<u8>,
    buffer: PixelBuffer,
}

impl Bitmap {
    /// Creates a bitmap with consistent headers filled with `color`.
    pub fn new(width: i32, height: i32, color: Color) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(BitmapError::InvalidDimensions { width, height });
        }
        let size_image = scanline_len(width) * height as usize;
        let (Ok(size_image), Ok(bf_size)) = (u32::try_from(size_image), u32::try_from(size_image + HEADER_LEN)) else {
            return Err(BitmapError::InvalidDimensions { width, height });
        };
        Ok(Self {
            file_header: FileHeader {
                bf_type: BMP_ID,
                bf_size,
                bf_reserved1: 0,
                bf_reserved2: 0,
                bf_off_bits: HEADER_LEN as u32,
            },
            info_header: InfoHeader {
                bi_size: INFO_HEADER_LEN as u32,
                width,
                height,
                planes: 1,
                bit_count: 24,
                compression: 0,
                size_image,
                x_pels_per_meter: DEFAULT_PELS_PER_METER,
                y_pels_per_meter: DEFAULT_PELS_PER_METER,
                clr_used: 0,
                clr_important: 0,
            },
            gap: Vec::new(),
            buffer: PixelBuffer::filled(width, height, color),
        })
    }

    /// Decodes a bitmap from its file contents.
    ///
    /// # Errors
    ///
    /// Returns a format error if the data is truncated, not a bitmap, or not an uncompressed 24 bit image.
    pub fn load(data: &[u8]) -> Result<Self> {
        bmp::load_bmp(data)
    }

    /// Serializes the headers verbatim followed by the padded scanlines.
    pub fn save(&self) -> Result<Vec<u8>> {
        bmp::save_bmp(self)
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let data = fs::read(path).map_err(|err| BitmapError::read_file(path, err))?;
        log::info!("Reading {} ({} bytes)", path.display(), data.len());
        Self::load(&data)
    }

    /// The whole file is serialized before the destination is touched.
    pub fn save_file(&self, path: &Path) -> Result<usize> {
        let data = self.save()?;
        fs::write(path, &data).map_err(|err| BitmapError::write_file(path, err))?;
        log::info!("Wrote {} ({} bytes)", path.display(), data.len());
        Ok(data.len())
    }

    pub fn file_header(&self) -> &FileHeader {
        &self.file_header
    }

    pub fn info_header(&self) -> &InfoHeader {
        &self.info_header
    }

    pub fn width(&self) -> i32 {
        self.buffer.width()
    }

    pub fn height(&self) -> i32 {
        self.buffer.height()
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut PixelBuffer {
        &mut self.buffer
    }
}
