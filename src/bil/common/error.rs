use thiserror::Error;

#[derive(Error, Debug)]
pub enum BilError {
    #[error("Missing mandatory header field: {0}")]
    MissingField(&'static str),

    #[error("Invalid value for header field {field}: {value:?}")]
    InvalidField { field: &'static str, value: String },

    #[error("Invalid raster geometry: {0}")]
    InvalidGeometry(String),

    #[error("Unresolved pixel type: {0:?}")]
    UnresolvedPixelType(Option<String>),

    #[error("Unsupported sample format: {kind} with {bits} bits")]
    UnsupportedSampleFormat { kind: &'static str, bits: u32 },

    #[error("Failed to read header file: {0}")]
    HeaderReadError(String),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Raster contains no usable samples")]
    EmptyRaster,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BilError>;
