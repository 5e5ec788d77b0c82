use std::io::Write;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::{BitmapError, Result};

pub const FILE_HEADER_LEN: usize = 14;
pub const INFO_HEADER_LEN: usize = 40;
/// Both fixed headers, the smallest valid pixel data offset.
pub const HEADER_LEN: usize = FILE_HEADER_LEN + INFO_HEADER_LEN;

/// "BM" read as little endian u16
pub const BMP_ID: u16 = 0x4D42;

/// BITMAPFILEHEADER
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    /// begins with b"BM"
    pub bf_type: u16,
    /// Size of the whole file as claimed by the writer. Passed through unchanged.
    pub bf_size: u32,
    pub bf_reserved1: u16,
    pub bf_reserved2: u16,
    /// Offset of the pixel array from the start of the file.
    pub bf_off_bits: u32,
}

/// BITMAPINFOHEADER
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoHeader {
    pub bi_size: u32,
    pub width: i32,
    /// Positive for bottom-up bitmaps, which is the only supported layout.
    pub height: i32,
    pub planes: u16,
    pub bit_count: u16,
    pub compression: u32,
    /// Passed through unchanged.
    pub size_image: u32,
    pub x_pels_per_meter: i32,
    pub y_pels_per_meter: i32,
    pub clr_used: u32,
    pub clr_important: u32,
}

impl FileHeader {
    pub fn read(mut data: &[u8]) -> Result<Self> {
        if data.len() < FILE_HEADER_LEN {
            return Err(BitmapError::FileTooShort { len: data.len() });
        }
        Ok(Self {
            bf_type: data.read_u16::<LittleEndian>()?,
            bf_size: data.read_u32::<LittleEndian>()?,
            bf_reserved1: data.read_u16::<LittleEndian>()?,
            bf_reserved2: data.read_u16::<LittleEndian>()?,
            bf_off_bits: data.read_u32::<LittleEndian>()?,
        })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_u16::<LittleEndian>(self.bf_type)?;
        writer.write_u32::<LittleEndian>(self.bf_size)?;
        writer.write_u16::<LittleEndian>(self.bf_reserved1)?;
        writer.write_u16::<LittleEndian>(self.bf_reserved2)?;
        writer.write_u32::<LittleEndian>(self.bf_off_bits)?;
        Ok(())
    }
}

impl InfoHeader {
    pub fn read(mut data: &[u8]) -> Result<Self> {
        if data.len() < INFO_HEADER_LEN {
            return Err(BitmapError::FileTooShort { len: data.len() });
        }
        Ok(Self {
            bi_size: data.read_u32::<LittleEndian>()?,
            width: data.read_i32::<LittleEndian>()?,
            height: data.read_i32::<LittleEndian>()?,
            planes: data.read_u16::<LittleEndian>()?,
            bit_count: data.read_u16::<LittleEndian>()?,
            compression: data.read_u32::<LittleEndian>()?,
            size_image: data.read_u32::<LittleEndian>()?,
            x_pels_per_meter: data.read_i32::<LittleEndian>()?,
            y_pels_per_meter: data.read_i32::<LittleEndian>()?,
            clr_used: data.read_u32::<LittleEndian>()?,
            clr_important: data.read_u32::<LittleEndian>()?,
        })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_u32::<LittleEndian>(self.bi_size)?;
        writer.write_i32::<LittleEndian>(self.width)?;
        writer.write_i32::<LittleEndian>(self.height)?;
        writer.write_u16::<LittleEndian>(self.planes)?;
        writer.write_u16::<LittleEndian>(self.bit_count)?;
        writer.write_u32::<LittleEndian>(self.compression)?;
        writer.write_u32::<LittleEndian>(self.size_image)?;
        writer.write_i32::<LittleEndian>(self.x_pels_per_meter)?;
        writer.write_i32::<LittleEndian>(self.y_pels_per_meter)?;
        writer.write_u32::<LittleEndian>(self.clr_used)?;
        writer.write_u32::<LittleEndian>(self.clr_important)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: [u8; HEADER_LEN] = [
        b'B', b'M', 0x46, 0, 0, 0, 0, 0, 0, 0, 0x36, 0, 0, 0, // file header
        0x28, 0, 0, 0, 2, 0, 0, 0, 2, 0, 0, 0, 1, 0, 24, 0, // size, width, height, planes, bits
        0, 0, 0, 0, 0x10, 0, 0, 0, 0x13, 0x0B, 0, 0, 0x13, 0x0B, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ];

    #[test]
    fn test_read_headers() {
        let file = FileHeader::read(&HEADER).unwrap();
        assert_eq!(file.bf_type, BMP_ID);
        assert_eq!(file.bf_size, 70);
        assert_eq!(file.bf_off_bits, 54);

        let info = InfoHeader::read(&HEADER[FILE_HEADER_LEN..]).unwrap();
        assert_eq!(info.bi_size, 40);
        assert_eq!(info.width, 2);
        assert_eq!(info.height, 2);
        assert_eq!(info.planes, 1);
        assert_eq!(info.bit_count, 24);
        assert_eq!(info.size_image, 16);
        assert_eq!(info.x_pels_per_meter, 2835);
    }

    #[test]
    fn test_write_is_verbatim() {
        let file = FileHeader::read(&HEADER).unwrap();
        let info = InfoHeader::read(&HEADER[FILE_HEADER_LEN..]).unwrap();
        let mut out = Vec::new();
        file.write(&mut out).unwrap();
        assert_eq!(out.len(), FILE_HEADER_LEN);
        info.write(&mut out).unwrap();
        assert_eq!(out, HEADER);
    }

    #[test]
    fn test_short_header() {
        assert!(matches!(FileHeader::read(&HEADER[..13]), Err(BitmapError::FileTooShort { len: 13 })));
        assert!(matches!(InfoHeader::read(&HEADER[..39]), Err(BitmapError::FileTooShort { len: 39 })));
    }
}
