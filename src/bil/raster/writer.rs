use std::io::Write;

use crate::bil::common::error::Result;

/// Sequential writer of 8-bit raster rows.
pub struct MaskWriter<W: Write> {
    inner: W,
    rows_written: usize,
}

impl<W: Write> MaskWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            rows_written: 0,
        }
    }

    pub fn write_row(&mut self, row: &[u8]) -> Result<()> {
        self.inner.write_all(row)?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flushes buffered rows and returns the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
