//! Raster statistics module
//!
//! Scans a raster in fixed-size chunks of rows and reports its minimum, maximum
//! and inferred background value.

mod background;
mod scanner;
pub mod types;


pub use background::{BackgroundInference, infer_background};
pub use scanner::RasterScanner;
pub use types::{RasterStatistics, ScanConfig, ScanConfigBuilder};
