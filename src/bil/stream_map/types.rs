//! Classification configuration types

/// Configuration for threshold classification
#[derive(Debug, Clone)]
pub struct StreamMapConfig {
    /// Cells with a value greater than or equal to this are flagged with 1
    pub threshold: f64,
    /// Whether `classify_file` writes a rewritten header next to the output
    pub write_header: bool,
}

impl Default for StreamMapConfig {
    fn default() -> Self {
        Self {
            threshold: 1.0,
            write_header: true,
        }
    }
}

impl StreamMapConfig {
    pub fn builder() -> StreamMapConfigBuilder {
        StreamMapConfigBuilder::default()
    }
}

/// Builder for StreamMapConfig
#[derive(Default)]
pub struct StreamMapConfigBuilder {
    threshold: Option<f64>,
    write_header: Option<bool>,
}

impl StreamMapConfigBuilder {
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn write_header(mut self, enable: bool) -> Self {
        self.write_header = Some(enable);
        self
    }

    pub fn build(self) -> StreamMapConfig {
        let default = StreamMapConfig::default();
        StreamMapConfig {
            threshold: self.threshold.unwrap_or(default.threshold),
            write_header: self.write_header.unwrap_or(default.write_header),
        }
    }
}

/// Outcome of one classification run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamMapSummary {
    /// Rows written to the mask raster
    pub rows_written: usize,
    /// Declared rows that could not be read in full and were skipped
    pub rows_skipped: usize,
    /// Cells set to 1
    pub cells_flagged: usize,
}
