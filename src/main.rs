use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use bil_stream_rs::bil::{RasterScanner, ScanConfig, StreamMapConfig, StreamMapPipeline, read_header};
use bil_stream_rs::logger;

#[derive(Parser)]
#[command(name = "bil-stream")]
#[command(version, about = "Streaming tools for single-band BIL rasters", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the decoded header of a BIL raster
    Header {
        /// BIL raster; its sibling .hdr file is read
        input: PathBuf,
    },
    /// Write a 0/1 mask of cells at or above a threshold
    StreamMap {
        /// Source BIL raster
        input: PathBuf,
        /// Output BIL raster; a header is written next to it
        output: PathBuf,
        /// Minimum value flagged as 1
        #[arg(short, long)]
        threshold: f64,
    },
    /// Report minimum, maximum and background value
    Scan {
        /// BIL raster to scan
        input: PathBuf,
        /// Rows decoded per read
        #[arg(long, default_value_t = 100)]
        chunk_rows: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    match cli.command {
        Commands::Header { input } => {
            let descriptor = read_header(&input)
                .with_context(|| format!("reading header for {}", input.display()))?;

            info!(
                dialect = descriptor.dialect.name(),
                rows = descriptor.rows,
                cols = descriptor.cols,
                bands = descriptor.band_count,
                bits = descriptor.bits_per_sample,
                byte_order = ?descriptor.byte_order,
                nodata = ?descriptor.no_data_value,
                "Header"
            );
            match descriptor.sample_format() {
                Ok(sample_format) => info!(?sample_format, "Sample format"),
                Err(e) => info!(error = %e, "Sample format"),
            }
            if let Some(georef) = descriptor.georeference() {
                info!(
                    ulx = georef.origin_x,
                    uly = georef.origin_y,
                    xdim = georef.pixel_size_x,
                    ydim = georef.pixel_size_y,
                    "Georeference"
                );
            }
        }
        Commands::StreamMap { input, output, threshold } => {
            let config = StreamMapConfig::builder().threshold(threshold).build();
            let pipeline = StreamMapPipeline::new(config);
            pipeline
                .classify_file(&input, &output)
                .with_context(|| format!("classifying {}", input.display()))?;
        }
        Commands::Scan { input, chunk_rows } => {
            let config = ScanConfig::builder().chunk_rows(chunk_rows).build();
            let stats = RasterScanner::new(config)
                .scan_file(&input)
                .with_context(|| format!("scanning {}", input.display()))?;

            info!(
                min = stats.min,
                max = stats.max,
                background = stats.background_or_nan(),
                indeterminate = stats.indeterminate,
                "Results"
            );
        }
    }

    Ok(())
}
