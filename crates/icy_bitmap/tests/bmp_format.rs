use icy_bitmap::{Bitmap, BitmapError, Color, ErrorKind};
use pretty_assertions::assert_eq;

mod common;
use common::{init_logging, make_bmp, make_bmp_with_gap, pixel_bytes};

#[test]
fn test_round_trip_all_paddings() {
    // width 4 → 0 padding bytes, 5 → 1, 6 → 2, 7 → 3
    for width in [4, 5, 6, 7] {
        for height in [1, 2, 5] {
            let data = make_bmp(width, height);
            let bitmap = Bitmap::load(&data).unwrap();
            assert_eq!(bitmap.save().unwrap(), data, "{width}x{height}");
        }
    }
}

#[test]
fn test_pixels_in_file_order() {
    let data = make_bmp(5, 3);
    let bitmap = Bitmap::load(&data).unwrap();
    assert_eq!(bitmap.width(), 5);
    assert_eq!(bitmap.height(), 3);
    // row 0 is the first scanline in the file, no flipping
    for row in 0..3 {
        for col in 0..5 {
            assert_eq!(bitmap.buffer().checked_get(row, col).unwrap(), Color::from_bgr(pixel_bytes(row, col)));
        }
    }
}

#[test]
fn test_headers_pass_through() {
    let data = make_bmp(6, 2);
    let mut bitmap = Bitmap::load(&data).unwrap();
    assert_eq!(bitmap.file_header().bf_reserved1, 0xBEEF);
    assert_eq!(bitmap.file_header().bf_size as usize, data.len());
    assert_eq!(bitmap.info_header().size_image, 40);

    bitmap.buffer_mut().fill(Color::WHITE);
    let saved = bitmap.save().unwrap();
    assert_eq!(saved.len(), data.len());
    assert_eq!(&saved[..54], &data[..54]);
    // 6 white pixels then 2 zero padding bytes
    assert_eq!(&saved[54..72], &[255; 18][..]);
    assert_eq!(&saved[72..74], &[0, 0][..]);
}

#[test]
fn test_header_gap_is_kept() {
    let gap = [1, 2, 3, 4, 5, 6, 7, 8];
    let data = make_bmp_with_gap(3, 2, &gap);
    let bitmap = Bitmap::load(&data).unwrap();
    assert_eq!(bitmap.file_header().bf_off_bits, 62);
    assert_eq!(bitmap.buffer().checked_get(0, 0).unwrap(), Color::from_bgr(pixel_bytes(0, 0)));
    assert_eq!(bitmap.save().unwrap(), data);
}

#[test]
fn test_trailing_bytes_are_dropped() {
    init_logging();
    let data = make_bmp(4, 2);
    let mut longer = data.clone();
    longer.extend([9, 9, 9]);
    let bitmap = Bitmap::load(&longer).unwrap();
    assert_eq!(bitmap.save().unwrap(), data);
}

#[test]
fn test_small_declared_size_is_kept() {
    init_logging();
    let mut data = make_bmp(4, 2);
    data[2..6].copy_from_slice(&60u32.to_le_bytes());
    let bitmap = Bitmap::load(&data).unwrap();
    assert_eq!(bitmap.file_header().bf_size, 60);
    assert_eq!(bitmap.save().unwrap(), data);
}

#[test]
fn test_saved_length_matches_layout() {
    for width in 1..=9 {
        let bitmap = Bitmap::new(width, 3, Color::WHITE).unwrap();
        let padding = icy_bitmap::row_padding(width);
        assert_eq!(bitmap.save().unwrap().len(), 54 + 3 * (width as usize * 3 + padding));
    }
}

#[test]
fn test_short_file() {
    let data = make_bmp(4, 4);
    for len in [0, 2, 14, 53] {
        let err = Bitmap::load(&data[..len]).unwrap_err();
        assert!(matches!(err, BitmapError::FileTooShort { .. }), "{len}: {err}");
        assert_eq!(err.kind(), ErrorKind::Format);
    }
}

#[test]
fn test_truncated_pixel_data() {
    let data = make_bmp(5, 4);
    let err = Bitmap::load(&data[..data.len() - 1]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(matches!(err, BitmapError::Truncated { .. }));
}

#[test]
fn test_truncated_to_declared_size() {
    // bf_size claims more data than there is, even though the pixels are complete
    let mut data = make_bmp(4, 1);
    data[2..6].copy_from_slice(&1000u32.to_le_bytes());
    let err = Bitmap::load(&data).unwrap_err();
    assert!(matches!(err, BitmapError::Truncated { expected: 1000, .. }));
}

#[test]
fn test_bad_magic() {
    let mut data = make_bmp(4, 1);
    data[0] = b'P';
    data[1] = b'K';
    let err = Bitmap::load(&data).unwrap_err();
    assert!(matches!(err, BitmapError::IdMismatch { found: [b'P', b'K'] }));
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn test_invalid_dimensions() {
    for (width, height) in [(0, 1), (1, 0), (-4, 2), (4, -2)] {
        let mut data = make_bmp(4, 2);
        data[18..22].copy_from_slice(&i32::to_le_bytes(width));
        data[22..26].copy_from_slice(&i32::to_le_bytes(height));
        let err = Bitmap::load(&data).unwrap_err();
        assert!(matches!(err, BitmapError::InvalidDimensions { .. }), "{width}x{height}: {err}");
    }
}

#[test]
fn test_unsupported_variants() {
    let mut data = make_bmp(4, 2);
    data[28..30].copy_from_slice(&32u16.to_le_bytes());
    assert!(matches!(Bitmap::load(&data).unwrap_err(), BitmapError::UnsupportedBitCount { bit_count: 32 }));

    let mut data = make_bmp(4, 2);
    data[30..34].copy_from_slice(&1u32.to_le_bytes());
    assert!(matches!(Bitmap::load(&data).unwrap_err(), BitmapError::UnsupportedCompression { compression: 1 }));

    let mut data = make_bmp(4, 2);
    data[10..14].copy_from_slice(&20u32.to_le_bytes());
    assert!(matches!(Bitmap::load(&data).unwrap_err(), BitmapError::InvalidPixelOffset { offset: 20 }));
}

#[test]
fn test_file_round_trip() {
    let dir = std::env::temp_dir().join(format!("icy_bitmap_format_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("round_trip.bmp");

    let data = make_bmp(7, 3);
    let bitmap = Bitmap::load(&data).unwrap();
    assert_eq!(bitmap.save_file(&path).unwrap(), data.len());
    assert_eq!(std::fs::read(&path).unwrap(), data);
    assert_eq!(Bitmap::load_file(&path).unwrap(), bitmap);

    let err = Bitmap::load_file(&dir.join("missing.bmp")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    let err = bitmap.save_file(&dir.join("no_such_dir").join("out.bmp")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);

    std::fs::remove_dir_all(&dir).unwrap();
}
