use super::{
    header::{FileHeader, InfoHeader, BMP_ID, FILE_HEADER_LEN, HEADER_LEN},
    Bitmap,
};
use crate::{BitmapError, Color, PixelBuffer, Result, BYTES_PER_PIXEL};

// http://fileformats.archiveteam.org/wiki/BMP
// 24 bit uncompressed only. Scanlines are padded with zeros to a multiple of 4 bytes.

const SUPPORTED_BIT_COUNT: u16 = 24;
const BI_RGB: u32 = 0;

/// Number of zero bytes appended to each scanline of an image `width` pixels wide.
pub fn row_padding(width: i32) -> usize {
    let row_bytes = width.max(0) as usize * BYTES_PER_PIXEL;
    (4 - row_bytes % 4) % 4
}

/// Length of a scanline on disk including its padding.
pub fn scanline_len(width: i32) -> usize {
    width.max(0) as usize * BYTES_PER_PIXEL + row_padding(width)
}

/// Offset of the end of the pixel array, `None` if it doesn't fit into the address space.
fn pixel_data_end(offset: usize, width: i32, height: i32) -> Option<usize> {
    scanline_len(width).checked_mul(height.max(0) as usize)?.checked_add(offset)
}

pub(crate) fn load_bmp(data: &[u8]) -> Result<Bitmap> {
    if data.len() < HEADER_LEN {
        return Err(BitmapError::FileTooShort { len: data.len() });
    }
    let file_header = FileHeader::read(data)?;
    if file_header.bf_type != BMP_ID {
        return Err(BitmapError::IdMismatch { found: [data[0], data[1]] });
    }
    let info_header = InfoHeader::read(&data[FILE_HEADER_LEN..])?;

    let width = info_header.width;
    let height = info_header.height;
    if width <= 0 || height <= 0 {
        return Err(BitmapError::InvalidDimensions { width, height });
    }
    if info_header.bit_count != SUPPORTED_BIT_COUNT {
        return Err(BitmapError::UnsupportedBitCount {
            bit_count: info_header.bit_count,
        });
    }
    if info_header.compression != BI_RGB {
        return Err(BitmapError::UnsupportedCompression {
            compression: info_header.compression,
        });
    }

    let offset = file_header.bf_off_bits as usize;
    if offset < HEADER_LEN {
        return Err(BitmapError::InvalidPixelOffset {
            offset: file_header.bf_off_bits,
        });
    }
    if file_header.bf_size as usize > data.len() {
        return Err(BitmapError::Truncated {
            expected: file_header.bf_size as usize,
            actual: data.len(),
        });
    }
    let end = pixel_data_end(offset, width, height).unwrap_or(usize::MAX);
    if data.len() < end {
        return Err(BitmapError::Truncated {
            expected: end,
            actual: data.len(),
        });
    }
    if data.len() > end {
        log::warn!("ignoring {} trailing bytes after the pixel array", data.len() - end);
    }
    if file_header.bf_size as usize != end {
        log::warn!("header file size {} doesn't match the pixel layout ({end} bytes), keeping it", file_header.bf_size);
    }

    let padding = row_padding(width);
    log::debug!("loading {width}x{height} bitmap, pixel data at {offset}, {padding} padding bytes per row");

    let stride = scanline_len(width);
    let row_bytes = stride - padding;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for scanline in data[offset..end].chunks_exact(stride) {
        pixels.extend(scanline[..row_bytes].chunks_exact(BYTES_PER_PIXEL).map(|p| Color::from_bgr([p[0], p[1], p[2]])));
    }

    Ok(Bitmap {
        file_header,
        info_header,
        gap: data[HEADER_LEN..offset].to_vec(),
        buffer: PixelBuffer::from_pixels(width, height, pixels),
    })
}

pub(crate) fn save_bmp(bitmap: &Bitmap) -> Result<Vec<u8>> {
    let buffer = &bitmap.buffer;
    let offset = HEADER_LEN + bitmap.gap.len();
    let padding = row_padding(buffer.width());
    let end = pixel_data_end(offset, buffer.width(), buffer.height()).unwrap_or(offset);

    let mut result = Vec::with_capacity(end);
    bitmap.file_header.write(&mut result)?;
    bitmap.info_header.write(&mut result)?;
    result.extend(&bitmap.gap);
    for row in buffer.rows().take(buffer.height() as usize) {
        for color in row {
            result.extend(color.to_bgr());
        }
        result.resize(result.len() + padding, 0);
    }

    debug_assert_eq!(result.len(), end);
    log::debug!("serialized {}x{} bitmap: {} bytes", buffer.width(), buffer.height(), result.len());
    Ok(result)
}
