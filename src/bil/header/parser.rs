use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::bil::common::error::{BilError, Result};
use crate::bil::header::types::{Dialect, EsriGeoreference, RasterDescriptor};
use crate::bil::sample::{ByteOrder, SampleFormat};

/// Path of the header belonging to `bil_path`: same stem, `hdr` extension.
pub fn header_path_for(bil_path: &Path) -> PathBuf {
    bil_path.with_extension("hdr")
}

/// Reads the raw text of the header next to `bil_path`.
pub fn read_header_text(bil_path: &Path) -> Result<String> {
    let header_path = header_path_for(bil_path);
    std::fs::read_to_string(&header_path)
        .map_err(|e| BilError::HeaderReadError(format!("{}: {}", header_path.display(), e)))
}

/// Reads and parses the header next to `bil_path`.
pub fn read_header(bil_path: &Path) -> Result<RasterDescriptor> {
    let text = read_header_text(bil_path)?;
    parse_header(&text)
}

/// Value token following the first line whose leading token is `label`.
fn directive<'a>(text: &'a str, label: &str) -> Option<&'a str> {
    text.lines().find_map(|line| {
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some(first) if first == label => tokens.next(),
            _ => None,
        }
    })
}

fn required<'a>(text: &'a str, label: &'static str) -> Result<&'a str> {
    directive(text, label).ok_or(BilError::MissingField(label))
}

fn parse_value<T: std::str::FromStr>(label: &'static str, value: &str) -> Result<T> {
    value.parse().map_err(|_| BilError::InvalidField {
        field: label,
        value: value.to_string(),
    })
}

fn required_value<T: std::str::FromStr>(text: &str, label: &'static str) -> Result<T> {
    parse_value(label, required(text, label)?)
}

fn resolve_esri_format(token: Option<&str>, bits: u32) -> Option<SampleFormat> {
    match token? {
        "SIGNEDINT" => Some(SampleFormat::SignedInt { bits }),
        "UNSIGNEDINT" => Some(SampleFormat::UnsignedInt { bits }),
        "FLOAT" => Some(SampleFormat::Float { bits: if bits == 32 { 32 } else { 64 } }),
        _ => None,
    }
}

/// Parses header text into a [`RasterDescriptor`].
///
/// Directives may appear in any order; labels are case-sensitive. The ESRI
/// dialect is selected when a `ULXMAP` token is present anywhere in the text.
pub fn parse_header(text: &str) -> Result<RasterDescriptor> {
    let byte_order_token = directive(text, "BYTEORDER");
    let byte_order = byte_order_token.map(ByteOrder::from_token).unwrap_or_default();
    let intel_byte_order_declared = byte_order_token.is_some_and(|t| t.starts_with('I'));

    let rows: usize = required_value(text, "NROWS")?;
    let cols: usize = required_value(text, "NCOLS")?;
    let band_count: usize = required_value(text, "NBANDS")?;
    let bits_per_sample: u32 = required_value(text, "NBITS")?;

    let no_data_value = directive(text, "NODATA")
        .map(|value| parse_value::<f64>("NODATA", value))
        .transpose()?;

    if rows == 0 || cols == 0 || band_count == 0 {
        return Err(BilError::InvalidGeometry(format!(
            "rows={}, cols={}, bands={}",
            rows, cols, band_count
        )));
    }

    if bits_per_sample == 0 || bits_per_sample % 8 != 0 {
        return Err(BilError::InvalidGeometry(format!(
            "bit depth {} is not a positive multiple of 8",
            bits_per_sample
        )));
    }

    let is_esri = text.split_whitespace().any(|token| token == "ULXMAP");

    let (dialect, sample_format, pixel_type_token) = if is_esri {
        let georef = EsriGeoreference {
            origin_x: required_value(text, "ULXMAP")?,
            origin_y: required_value(text, "ULYMAP")?,
            pixel_size_x: required_value(text, "XDIM")?,
            pixel_size_y: required_value(text, "YDIM")?,
        };
        let token = directive(text, "PIXELTYPE");
        let format = resolve_esri_format(token, bits_per_sample);
        if format.is_none() {
            warn!(pixel_type = ?token, "Unresolved ESRI pixel type");
        }
        (Dialect::Esri(georef), format, token.map(str::to_string))
    } else {
        // ERDAS pixel type detection is not implemented; samples are read as f32.
        if bits_per_sample != 32 {
            warn!(bits_per_sample, "ERDAS header assumed to hold 32-bit float samples");
        }
        (Dialect::Erdas, Some(SampleFormat::Float { bits: 32 }), None)
    };

    if band_count > 1 {
        warn!(band_count, "Multi-band raster; rows are read as consecutive samples");
    }

    debug!(
        rows,
        cols,
        band_count,
        bits_per_sample,
        dialect = dialect.name(),
        "Parsed BIL header"
    );

    Ok(RasterDescriptor {
        rows,
        cols,
        band_count,
        bits_per_sample,
        bytes_per_sample: (bits_per_sample / 8) as usize,
        byte_order,
        dialect,
        no_data_value,
        sample_format,
        pixel_type_token,
        intel_byte_order_declared,
    })
}
