//! BIL header module
//!
//! This module decodes the plain-text `.hdr` companion of a BIL raster into a
//! [`RasterDescriptor`] and rewrites headers for derived rasters.

mod parser;
mod rewrite;
pub mod types;

pub use parser::{header_path_for, parse_header, read_header, read_header_text};
pub use rewrite::HeaderRewriter;
pub use types::{Dialect, EsriGeoreference, RasterDescriptor};
