//! Unified error types for icy_bitmap

use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`BitmapError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed, truncated or unsupported bitmap data.
    Format,
    /// Out of range buffer access outside the clipping draw paths.
    Index,
    /// Failure of the underlying storage medium.
    Io,
    /// Operation needs state the session doesn't have yet.
    Session,
}

/// Main error type for icy_bitmap operations
#[derive(Debug, Error)]
pub enum BitmapError {
    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read file '{path}': {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },

    #[error("Failed to write file '{path}': {source}")]
    WriteFile { path: PathBuf, source: std::io::Error },

    // === Format Errors ===
    #[error("File too short to be valid ({len} bytes)")]
    FileTooShort { len: usize },

    #[error("Invalid file ID, expected 'BM' got {found:02X?}")]
    IdMismatch { found: [u8; 2] },

    #[error("Invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("Unsupported bit count: {bit_count} (only 24 bit images are supported)")]
    UnsupportedBitCount { bit_count: u16 },

    #[error("Unsupported compression method: {compression}")]
    UnsupportedCompression { compression: u32 },

    #[error("Pixel data offset {offset} points into the header")]
    InvalidPixelOffset { offset: u32 },

    #[error("Truncated data: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    // === Index Errors ===
    #[error("Pixel ({row}, {col}) out of range ({width}x{height})")]
    PixelOutOfRange { row: i32, col: i32, width: i32, height: i32 },

    #[error("Insert position (y: {y}, x: {x}) out of range for {width}x{height} image")]
    InsertOutOfRange { y: i32, x: i32, width: i32, height: i32 },

    // === Session Errors ===
    #[error("No image loaded")]
    NoImageLoaded,
}

/// Result type alias for icy_bitmap operations
pub type Result<T> = std::result::Result<T, BitmapError>;

impl BitmapError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) | Self::ReadFile { .. } | Self::WriteFile { .. } => ErrorKind::Io,
            Self::FileTooShort { .. }
            | Self::IdMismatch { .. }
            | Self::InvalidDimensions { .. }
            | Self::UnsupportedBitCount { .. }
            | Self::UnsupportedCompression { .. }
            | Self::InvalidPixelOffset { .. }
            | Self::Truncated { .. } => ErrorKind::Format,
            Self::PixelOutOfRange { .. } | Self::InsertOutOfRange { .. } => ErrorKind::Index,
            Self::NoImageLoaded => ErrorKind::Session,
        }
    }

    /// Create a read file error
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile { path: path.into(), source }
    }

    /// Create a write file error
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFile { path: path.into(), source }
    }
}
