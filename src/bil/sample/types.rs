//! Sample encoding types

/// Numeric encoding of one raster cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    /// Two's complement integer of the given width
    SignedInt { bits: u32 },
    /// Unsigned integer of the given width
    UnsignedInt { bits: u32 },
    /// IEEE 754 float, 32 or 64 bits
    Float { bits: u32 },
}

impl SampleFormat {
    pub fn bits(&self) -> u32 {
        match *self {
            SampleFormat::SignedInt { bits }
            | SampleFormat::UnsignedInt { bits }
            | SampleFormat::Float { bits } => bits,
        }
    }

    pub fn byte_width(&self) -> usize {
        (self.bits() / 8) as usize
    }

    /// The `PIXELTYPE` token describing this format in an ESRI header.
    pub fn pixel_type_token(&self) -> &'static str {
        match self {
            SampleFormat::SignedInt { .. } => "SIGNEDINT",
            SampleFormat::UnsignedInt { .. } => "UNSIGNEDINT",
            SampleFormat::Float { .. } => "FLOAT",
        }
    }
}

/// Byte order of multi-byte samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    /// `BYTEORDER I` (Intel)
    #[default]
    LittleEndian,
    /// `BYTEORDER M` (Motorola)
    BigEndian,
}

impl ByteOrder {
    pub fn from_token(token: &str) -> Self {
        if token.starts_with('M') {
            ByteOrder::BigEndian
        } else {
            ByteOrder::LittleEndian
        }
    }
}
