//! Raster descriptor types

use crate::bil::common::error::{BilError, Result};
use crate::bil::sample::{ByteOrder, SampleFormat};

/// Georeferencing carried only by ESRI-dialect headers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EsriGeoreference {
    /// `ULXMAP`: x coordinate of the centre of the upper-left cell
    pub origin_x: f64,
    /// `ULYMAP`: y coordinate of the centre of the upper-left cell
    pub origin_y: f64,
    /// `XDIM`
    pub pixel_size_x: f64,
    /// `YDIM`
    pub pixel_size_y: f64,
}

/// Header vocabulary a descriptor was decoded from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dialect {
    Esri(EsriGeoreference),
    Erdas,
}

impl Dialect {
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Esri(_) => "ESRI",
            Dialect::Erdas => "ERDAS",
        }
    }
}

/// Decoded geometry and encoding of one BIL raster.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterDescriptor {
    pub rows: usize,
    pub cols: usize,
    pub band_count: usize,
    pub bits_per_sample: u32,
    pub bytes_per_sample: usize,
    pub byte_order: ByteOrder,
    pub dialect: Dialect,
    pub no_data_value: Option<f64>,
    pub(crate) sample_format: Option<SampleFormat>,
    pub(crate) pixel_type_token: Option<String>,
    pub(crate) intel_byte_order_declared: bool,
}

impl RasterDescriptor {
    /// Resolved sample encoding.
    ///
    /// Fails with [`BilError::UnresolvedPixelType`] when an ESRI header has a
    /// missing or unrecognised `PIXELTYPE`; callers must check this before
    /// reading raster data.
    pub fn sample_format(&self) -> Result<SampleFormat> {
        self.sample_format
            .ok_or_else(|| BilError::UnresolvedPixelType(self.pixel_type_token.clone()))
    }

    pub fn georeference(&self) -> Option<&EsriGeoreference> {
        match &self.dialect {
            Dialect::Esri(georef) => Some(georef),
            Dialect::Erdas => None,
        }
    }

    pub fn is_little_endian(&self) -> bool {
        self.byte_order == ByteOrder::LittleEndian
    }

    /// 0 when `BYTEORDER` starts with `I`, otherwise 1.
    pub fn legacy_byte_order_flag(&self) -> u8 {
        if self.intel_byte_order_declared { 0 } else { 1 }
    }

    /// Number of samples held by `rows` rows.
    ///
    /// Fails with [`BilError::InvalidGeometry`] when the count, or its size in
    /// bytes at the resolved sample width, does not fit in memory addressing.
    pub fn samples_in_rows(&self, rows: usize) -> Result<usize> {
        let byte_width = self.sample_format()?.byte_width();
        rows.checked_mul(self.cols)
            .filter(|samples| {
                samples
                    .checked_mul(byte_width)
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
            })
            .ok_or_else(|| {
                BilError::InvalidGeometry(format!(
                    "{} rows of {} columns at {} bytes per sample exceed addressable memory",
                    rows, self.cols, byte_width
                ))
            })
    }
}
