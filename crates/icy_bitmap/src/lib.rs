#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::too_many_arguments,
    clippy::module_name_repetitions,
    clippy::return_self_not_must_use
)]
//! Codec and drawing engine for uncompressed 24 bit bitmaps.

mod color;
pub use color::*;

mod error;
pub use error::*;

mod position;
pub use position::*;

mod pixel_buffer;
pub use pixel_buffer::*;

pub mod formats;
pub use formats::{row_padding, scanline_len, Bitmap, FileHeader, InfoHeader};

pub mod brushes;

mod insert;
pub use insert::insert;

mod session;
pub use session::*;
