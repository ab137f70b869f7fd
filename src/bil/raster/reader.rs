use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::bil::common::error::{BilError, Result};
use crate::bil::sample::SampleDecoder;

/// Sequential reader yielding decoded samples from a BIL data stream.
///
/// Only the bytes of the current request are buffered, so memory use is bounded
/// by the largest `count` passed to [`read_samples`](Self::read_samples).
pub struct BilRowReader<R: Read> {
    inner: R,
    decoder: SampleDecoder,
    bytes: Vec<u8>,
}

impl BilRowReader<BufReader<File>> {
    pub fn open(path: &Path, decoder: SampleDecoder) -> Result<Self> {
        let file = File::open(path)
            .map_err(|e| BilError::InputReadError(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "Opened BIL raster");
        Ok(Self::new(BufReader::new(file), decoder))
    }
}

impl<R: Read> BilRowReader<R> {
    pub fn new(inner: R, decoder: SampleDecoder) -> Self {
        Self {
            inner,
            decoder,
            bytes: Vec::new(),
        }
    }

    /// Replaces the contents of `out` with up to `count` decoded samples and
    /// returns how many were decoded. Fewer than `count` means the stream ended.
    ///
    /// The byte buffer grows with the data actually read, so a header declaring
    /// more samples than the stream holds does not allocate the declared size.
    pub fn read_samples(&mut self, count: usize, out: &mut Vec<f64>) -> Result<usize> {
        let wanted = count.checked_mul(self.decoder.byte_width()).ok_or_else(|| {
            BilError::InvalidGeometry(format!("{} samples exceed addressable memory", count))
        })?;

        self.bytes.clear();
        (&mut self.inner).take(wanted as u64).read_to_end(&mut self.bytes)?;

        out.clear();
        self.decoder.decode_into(&self.bytes, out);
        Ok(out.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bil::sample::{ByteOrder, SampleFormat};
    use std::io::Cursor;

    /// Hands out at most `step` bytes per read call.
    struct Trickle {
        data: Cursor<Vec<u8>>,
        step: usize,
    }

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            let len = buf.len().min(self.step);
            self.data.read(&mut buf[..len])
        }
    }

    fn u16_decoder() -> SampleDecoder {
        SampleDecoder::new(SampleFormat::UnsignedInt { bits: 16 }, ByteOrder::LittleEndian).unwrap()
    }

    #[test]
    fn test_reads_rows_sequentially() {
        let bytes: Vec<u8> = [1u16, 2, 3, 4, 5, 6].iter().flat_map(|v| v.to_le_bytes()).collect();
        let mut reader = BilRowReader::new(Cursor::new(bytes), u16_decoder());
        let mut row = Vec::new();

        assert_eq!(reader.read_samples(2, &mut row).unwrap(), 2);
        assert_eq!(row, vec![1.0, 2.0]);
        assert_eq!(reader.read_samples(2, &mut row).unwrap(), 2);
        assert_eq!(row, vec![3.0, 4.0]);
        assert_eq!(reader.read_samples(4, &mut row).unwrap(), 2);
        assert_eq!(row, vec![5.0, 6.0]);
        assert_eq!(reader.read_samples(2, &mut row).unwrap(), 0);
        assert!(row.is_empty());
    }

    #[test]
    fn test_short_reads_are_accumulated() {
        let bytes: Vec<u8> = [7u16, 8, 9].iter().flat_map(|v| v.to_le_bytes()).collect();
        let source = Trickle { data: Cursor::new(bytes), step: 1 };
        let mut reader = BilRowReader::new(source, u16_decoder());
        let mut row = Vec::new();

        assert_eq!(reader.read_samples(3, &mut row).unwrap(), 3);
        assert_eq!(row, vec![7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_oversized_request_is_rejected() {
        let mut reader = BilRowReader::new(Cursor::new(vec![0u8; 4]), u16_decoder());
        let mut row = Vec::new();

        let result = reader.read_samples(usize::MAX / 2 + 1, &mut row);
        assert!(matches!(result.unwrap_err(), BilError::InvalidGeometry(_)));
    }

    #[test]
    fn test_large_request_on_short_stream() {
        let mut reader = BilRowReader::new(Cursor::new(vec![1u8, 0, 2, 0]), u16_decoder());
        let mut row = Vec::new();

        assert_eq!(reader.read_samples(1 << 40, &mut row).unwrap(), 2);
        assert_eq!(row, vec![1.0, 2.0]);
    }

    #[test]
    fn test_open_missing_file() {
        let result = BilRowReader::open(Path::new("/nonexistent/raster.bil"), u16_decoder());
        assert!(matches!(result.err(), Some(BilError::InputReadError(_))));
    }
}
