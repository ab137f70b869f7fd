//! Sample decoding module
//!
//! This module maps the header's pixel type and byte order onto fixed-width
//! typed decoding of raw raster bytes.

mod decoder;
pub mod types;

pub use decoder::SampleDecoder;
pub use types::{ByteOrder, SampleFormat};
