//! BIL raster processing module
//!
//! This module provides streaming access to single-band "Band Interleaved by Line"
//! rasters, with separate modules for header decoding, sample decoding, row I/O,
//! threshold classification and statistics scanning.

pub mod common;
pub mod header;
pub mod sample;
pub mod raster;
pub mod stream_map;
pub mod scan;

pub use common::{
    BilError,
    Result,
    ProgressObserver,
    TracingObserver,
};

pub use header::{
    Dialect,
    EsriGeoreference,
    HeaderRewriter,
    RasterDescriptor,
    header_path_for,
    parse_header,
    read_header,
};

pub use sample::{
    ByteOrder,
    SampleDecoder,
    SampleFormat,
};

pub use raster::{
    BilRowReader,
    MaskWriter,
};

pub use stream_map::{
    StreamMapConfig,
    StreamMapConfigBuilder,
    StreamMapPipeline,
    StreamMapSummary,
};

pub use scan::{
    BackgroundInference,
    RasterScanner,
    RasterStatistics,
    ScanConfig,
    ScanConfigBuilder,
    infer_background,
};
