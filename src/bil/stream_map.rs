//! Threshold classification module
//!
//! Streams a source raster row by row and writes a binary 0/1 mask raster of
//! identical geometry together with a rewritten header.

mod pipeline;
pub mod types;


pub use pipeline::StreamMapPipeline;
pub use types::{StreamMapConfig, StreamMapConfigBuilder, StreamMapSummary};
