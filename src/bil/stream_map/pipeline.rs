use std::io::{BufWriter, Read, Write};
use std::path::Path;

use tracing::{info, instrument, warn};

use crate::bil::{
    common::{
        error::{BilError, Result},
        observer::{ProgressObserver, TracingObserver},
    },
    header::{HeaderRewriter, RasterDescriptor, header_path_for, parse_header, read_header_text},
    raster::{BilRowReader, MaskWriter},
    sample::SampleDecoder,
    stream_map::types::{StreamMapConfig, StreamMapSummary},
};

pub struct StreamMapPipeline<O: ProgressObserver> {
    observer: O,
    config: StreamMapConfig,
}

impl StreamMapPipeline<TracingObserver> {
    pub fn new(config: StreamMapConfig) -> Self {
        Self {
            observer: TracingObserver,
            config,
        }
    }
}

impl<O: ProgressObserver> StreamMapPipeline<O> {
    pub fn with_observer(observer: O, config: StreamMapConfig) -> Self {
        Self { observer, config }
    }

    /// Resolves the decoder and checks that one row is addressable.
    fn decoder_for(descriptor: &RasterDescriptor) -> Result<SampleDecoder> {
        descriptor.samples_in_rows(1)?;
        SampleDecoder::new(descriptor.sample_format()?, descriptor.byte_order)
    }

    /// Classifies the raster data in `input`, described by `descriptor`, and
    /// writes one mask row per complete source row to `output`.
    #[instrument(skip_all, fields(rows = descriptor.rows, cols = descriptor.cols))]
    pub fn classify<R: Read>(
        &self,
        descriptor: &RasterDescriptor,
        input: R,
        output: &mut dyn Write,
    ) -> Result<StreamMapSummary> {
        let decoder = Self::decoder_for(descriptor)?;
        self.stream_rows(descriptor, BilRowReader::new(input, decoder), output)
    }

    fn stream_rows<R: Read>(
        &self,
        descriptor: &RasterDescriptor,
        mut reader: BilRowReader<R>,
        output: &mut dyn Write,
    ) -> Result<StreamMapSummary> {
        let _span = tracing::info_span!("classify_rows", threshold = self.config.threshold).entered();

        let cols = descriptor.cols;
        let threshold = self.config.threshold;
        let mut mask = Vec::new();
        let mut samples = Vec::new();
        let mut writer = MaskWriter::new(output);
        let mut summary = StreamMapSummary::default();

        for row in 0..descriptor.rows {
            if reader.read_samples(cols, &mut samples)? < cols {
                summary.rows_skipped += 1;
                self.observer.row_classified(row, 0, false);
                continue;
            }

            let mut flagged = 0;
            mask.clear();
            if samples.iter().any(|&value| value >= threshold) {
                for &value in &samples {
                    let hit = value >= threshold;
                    mask.push(u8::from(hit));
                    flagged += usize::from(hit);
                }
            } else {
                mask.resize(cols, 0);
            }
            writer.write_row(&mask)?;

            summary.cells_flagged += flagged;
            self.observer.row_classified(row, flagged, true);
        }

        summary.rows_written = writer.rows_written();
        writer.finish()?;

        if summary.rows_skipped > 0 {
            warn!(
                skipped = summary.rows_skipped,
                declared = descriptor.rows,
                "Source raster shorter than declared; truncated rows skipped"
            );
        }

        self.observer.finished("stream_map");
        Ok(summary)
    }

    /// Classifies `input_path` into `output_path` and, when enabled, writes the
    /// rewritten header next to the output.
    ///
    /// The header is parsed and the sample format resolved before the output
    /// file is created. An output whose path or header path coincides with the
    /// source's is rejected. A failed write may leave a partial output file behind.
    #[instrument(skip(self, input_path, output_path))]
    pub fn classify_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<StreamMapSummary> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            threshold = self.config.threshold,
            "Classifying raster"
        );

        let (header_text, descriptor) = {
            let _span = tracing::info_span!("read_header").entered();
            let text = read_header_text(input_path)?;
            let descriptor = parse_header(&text)?;
            (text, descriptor)
        };
        let decoder = Self::decoder_for(&descriptor)?;

        if input_path == output_path
            || (self.config.write_header && header_path_for(output_path) == header_path_for(input_path))
        {
            return Err(BilError::OutputWriteError(format!(
                "{} would overwrite the source raster or its header",
                output_path.display()
            )));
        }

        let reader = BilRowReader::open(input_path, decoder)?;
        let summary = {
            let mut output_file = std::fs::File::create(output_path).map(BufWriter::new).map_err(|e| {
                BilError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
            self.stream_rows(&descriptor, reader, &mut output_file)?
        };

        if self.config.write_header {
            let _span = tracing::info_span!("rewrite_header").entered();
            let header_path = header_path_for(output_path);
            let rewritten = HeaderRewriter::for_binary_mask(descriptor.cols).apply(&header_text);
            std::fs::write(&header_path, rewritten).map_err(|e| {
                BilError::OutputWriteError(format!("{}: {}", header_path.display(), e))
            })?;
        }

        info!(
            rows_written = summary.rows_written,
            rows_skipped = summary.rows_skipped,
            cells_flagged = summary.cells_flagged,
            "Classification complete"
        );
        Ok(summary)
    }

    pub fn config(&self) -> &StreamMapConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: StreamMapConfig) {
        self.config = config;
    }
}
