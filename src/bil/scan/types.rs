//! Scan configuration and result types

/// Configuration for statistics scanning
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Number of rows decoded per read; bounds scanner memory to
    /// `chunk_rows * cols` samples
    pub chunk_rows: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self { chunk_rows: 100 }
    }
}

impl ScanConfig {
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }
}

/// Builder for ScanConfig
#[derive(Default)]
pub struct ScanConfigBuilder {
    chunk_rows: Option<usize>,
}

impl ScanConfigBuilder {
    pub fn chunk_rows(mut self, rows: usize) -> Self {
        self.chunk_rows = Some(rows);
        self
    }

    pub fn build(self) -> ScanConfig {
        let default = ScanConfig::default();
        ScanConfig {
            chunk_rows: self.chunk_rows.unwrap_or(default.chunk_rows),
        }
    }
}

/// Summary statistics of one raster
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterStatistics {
    /// Smallest sample, or the smallest non-background sample when a
    /// background was inferred
    pub min: f64,
    /// Largest sample
    pub max: f64,
    /// Inferred background (no-data) value
    pub background: Option<f64>,
    /// Set when every sample equals the background, in which case `min`
    /// reports the background itself
    pub indeterminate: bool,
}

impl RasterStatistics {
    /// Background value, with NaN standing in for "no background".
    pub fn background_or_nan(&self) -> f64 {
        self.background.unwrap_or(f64::NAN)
    }
}
