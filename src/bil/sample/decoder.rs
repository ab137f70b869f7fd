use byteorder::{BigEndian, LittleEndian};

use crate::bil::common::error::{BilError, Result};
use crate::bil::sample::types::{ByteOrder, SampleFormat};

/// Decodes raw raster bytes into `f64` samples.
///
/// The decoder is validated once at construction, so every format it holds has
/// a fixed-width representation and decoding itself cannot fail.
#[derive(Debug, Clone, Copy)]
pub struct SampleDecoder {
    format: SampleFormat,
    order: ByteOrder,
}

impl SampleDecoder {
    pub fn new(format: SampleFormat, order: ByteOrder) -> Result<Self> {
        let supported = match format {
            SampleFormat::SignedInt { bits } | SampleFormat::UnsignedInt { bits } => {
                matches!(bits, 8 | 16 | 32 | 64)
            }
            SampleFormat::Float { bits } => matches!(bits, 32 | 64),
        };

        if !supported {
            return Err(BilError::UnsupportedSampleFormat {
                kind: format.pixel_type_token(),
                bits: format.bits(),
            });
        }

        Ok(Self { format, order })
    }

    pub fn byte_width(&self) -> usize {
        self.format.byte_width()
    }

    /// Appends one sample per complete `byte_width()` group in `bytes` to `out`.
    /// A trailing partial sample is ignored.
    pub fn decode_into(&self, bytes: &[u8], out: &mut Vec<f64>) {
        match self.order {
            ByteOrder::LittleEndian => self.decode_with::<LittleEndian>(bytes, out),
            ByteOrder::BigEndian => self.decode_with::<BigEndian>(bytes, out),
        }
    }

    fn decode_with<B: byteorder::ByteOrder>(&self, bytes: &[u8], out: &mut Vec<f64>) {
        let chunks = bytes.chunks_exact(self.byte_width());
        out.reserve(chunks.len());

        match self.format {
            SampleFormat::SignedInt { bits: 8 } => out.extend(chunks.map(|c| c[0] as i8 as f64)),
            SampleFormat::SignedInt { bits: 16 } => out.extend(chunks.map(|c| B::read_i16(c) as f64)),
            SampleFormat::SignedInt { bits: 32 } => out.extend(chunks.map(|c| B::read_i32(c) as f64)),
            SampleFormat::SignedInt { .. } => out.extend(chunks.map(|c| B::read_i64(c) as f64)),
            SampleFormat::UnsignedInt { bits: 8 } => out.extend(chunks.map(|c| c[0] as f64)),
            SampleFormat::UnsignedInt { bits: 16 } => out.extend(chunks.map(|c| B::read_u16(c) as f64)),
            SampleFormat::UnsignedInt { bits: 32 } => out.extend(chunks.map(|c| B::read_u32(c) as f64)),
            SampleFormat::UnsignedInt { .. } => out.extend(chunks.map(|c| B::read_u64(c) as f64)),
            SampleFormat::Float { bits: 32 } => out.extend(chunks.map(|c| B::read_f32(c) as f64)),
            SampleFormat::Float { .. } => out.extend(chunks.map(|c| B::read_f64(c))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_odd_widths() {
        let result = SampleDecoder::new(SampleFormat::SignedInt { bits: 24 }, ByteOrder::LittleEndian);
        assert!(matches!(
            result.unwrap_err(),
            BilError::UnsupportedSampleFormat { kind: "SIGNEDINT", bits: 24 }
        ));

        let result = SampleDecoder::new(SampleFormat::Float { bits: 16 }, ByteOrder::LittleEndian);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_signed_little_endian() {
        let decoder = SampleDecoder::new(SampleFormat::SignedInt { bits: 16 }, ByteOrder::LittleEndian).unwrap();
        let mut out = Vec::new();
        decoder.decode_into(&[0xFF, 0xFF, 0x02, 0x01], &mut out);
        assert_eq!(out, vec![-1.0, 258.0]);
    }

    #[test]
    fn test_decode_unsigned_big_endian() {
        let decoder = SampleDecoder::new(SampleFormat::UnsignedInt { bits: 16 }, ByteOrder::BigEndian).unwrap();
        let mut out = Vec::new();
        decoder.decode_into(&[0x01, 0x02, 0xFF, 0xFF], &mut out);
        assert_eq!(out, vec![258.0, 65535.0]);
    }

    #[test]
    fn test_decode_float32_drops_partial_tail() {
        let decoder = SampleDecoder::new(SampleFormat::Float { bits: 32 }, ByteOrder::LittleEndian).unwrap();
        let mut bytes = 2.5f32.to_le_bytes().to_vec();
        bytes.extend_from_slice(&[0x00, 0x01]);

        let mut out = Vec::new();
        decoder.decode_into(&bytes, &mut out);
        assert_eq!(out, vec![2.5]);
    }

    #[test]
    fn test_decode_int8() {
        let decoder = SampleDecoder::new(SampleFormat::SignedInt { bits: 8 }, ByteOrder::BigEndian).unwrap();
        let mut out = Vec::new();
        decoder.decode_into(&[0x80, 0x7F], &mut out);
        assert_eq!(out, vec![-128.0, 127.0]);
    }
}
