//! Raster row I/O module
//!
//! Bounded sequential reads of decoded samples and sequential writes of 8-bit rows.

mod reader;
mod writer;

pub use reader::BilRowReader;
pub use writer::MaskWriter;
