use std::io::Read;
use std::path::Path;

use tracing::{info, instrument, warn};

use crate::bil::{
    common::{
        error::{BilError, Result},
        observer::{ProgressObserver, TracingObserver},
    },
    header::{RasterDescriptor, read_header},
    raster::BilRowReader,
    sample::SampleDecoder,
    scan::{
        background::infer_background,
        types::{RasterStatistics, ScanConfig},
    },
};

/// Running extremes across chunks.
struct Extremes {
    min: f64,
    max: f64,
    second_min: Option<f64>,
    samples: usize,
}

impl Extremes {
    fn new() -> Self {
        Self {
            min: f64::MAX,
            max: -f64::MAX,
            second_min: None,
            samples: 0,
        }
    }

    /// Folds one chunk in. The second minimum only considers values above the
    /// running minimum as it stands after this chunk's minimum is applied.
    fn update(&mut self, chunk: &[f64]) {
        let mut valid = chunk.iter().copied().filter(|v| !v.is_nan()).peekable();
        if valid.peek().is_none() {
            return;
        }

        for value in valid {
            self.min = self.min.min(value);
            self.max = self.max.max(value);
            self.samples += 1;
        }

        let min = self.min;
        if let Some(above) = chunk.iter().copied().filter(|&v| v > min).reduce(f64::min) {
            self.second_min = Some(self.second_min.map_or(above, |second| second.min(above)));
        }
    }
}

pub struct RasterScanner<O: ProgressObserver> {
    observer: O,
    config: ScanConfig,
}

impl RasterScanner<TracingObserver> {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            observer: TracingObserver,
            config,
        }
    }
}

impl<O: ProgressObserver> RasterScanner<O> {
    pub fn with_observer(observer: O, config: ScanConfig) -> Self {
        Self { observer, config }
    }

    /// Sample counts of each chunk: full chunks of `chunk_rows` rows followed
    /// by one partial chunk for the remaining rows.
    fn chunk_sizes(&self, descriptor: &RasterDescriptor) -> Result<impl Iterator<Item = usize>> {
        let chunk_rows = self.config.chunk_rows;
        let full_chunks = descriptor.rows / chunk_rows;
        let remainder = descriptor.rows % chunk_rows;

        let full_samples = if full_chunks > 0 { descriptor.samples_in_rows(chunk_rows)? } else { 0 };
        let tail = if remainder > 0 { Some(descriptor.samples_in_rows(remainder)?) } else { None };

        Ok(std::iter::repeat_n(full_samples, full_chunks).chain(tail))
    }

    #[instrument(skip_all, fields(rows = descriptor.rows, cols = descriptor.cols))]
    pub fn scan<R: Read>(&self, descriptor: &RasterDescriptor, input: R) -> Result<RasterStatistics> {
        if self.config.chunk_rows == 0 {
            return Err(BilError::InvalidGeometry("chunk_rows must be positive".to_string()));
        }

        let decoder = SampleDecoder::new(descriptor.sample_format()?, descriptor.byte_order)?;
        let chunk_sizes = self.chunk_sizes(descriptor)?;
        let mut reader = BilRowReader::new(input, decoder);
        let mut samples = Vec::new();
        let mut extremes = Extremes::new();

        for (index, wanted) in chunk_sizes.enumerate() {
            let read = reader.read_samples(wanted, &mut samples)?;
            extremes.update(&samples);
            self.observer.chunk_scanned(index, read);

            if read < wanted {
                warn!(
                    chunk = index,
                    expected = wanted,
                    read,
                    "Raster shorter than declared; scan stopped early"
                );
                break;
            }
        }

        if extremes.samples == 0 {
            return Err(BilError::EmptyRaster);
        }

        let inference = infer_background(extremes.min, extremes.second_min);
        if inference.indeterminate {
            warn!(
                background = extremes.min,
                "No sample exceeds the background value; minimum is indeterminate"
            );
        }

        self.observer.finished("scan");
        Ok(RasterStatistics {
            min: inference.min,
            max: extremes.max,
            background: inference.background,
            indeterminate: inference.indeterminate,
        })
    }

    #[instrument(skip(self, path))]
    pub fn scan_file<P: AsRef<Path>>(&self, path: P) -> Result<RasterStatistics> {
        let path = path.as_ref();
        info!(input = %path.display(), chunk_rows = self.config.chunk_rows, "Scanning raster");

        let descriptor = read_header(path)?;
        let file = std::fs::File::open(path)
            .map_err(|e| BilError::InputReadError(format!("{}: {}", path.display(), e)))?;
        let stats = self.scan(&descriptor, std::io::BufReader::new(file))?;

        info!(
            min = stats.min,
            max = stats.max,
            background = stats.background_or_nan(),
            "Scan complete"
        );
        Ok(stats)
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ScanConfig) {
        self.config = config;
    }
}
