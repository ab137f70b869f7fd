//! Progress reporting hooks for the streaming stages.
//!
//! Observers are notified at fixed checkpoints (per row, per chunk, per run)
//! and never influence the processing itself.

use tracing::{debug, trace};

/// Receives progress notifications from the classifier and the scanner.
///
/// Every method has an empty default so implementors only override the
/// checkpoints they care about.
pub trait ProgressObserver {
    /// Called once per source row. `flagged` is the number of cells at or
    /// above the threshold; `written` is false when the row was truncated and
    /// skipped.
    fn row_classified(&self, _row: usize, _flagged: usize, _written: bool) {}

    /// Called once per scanned chunk with the number of samples decoded.
    fn chunk_scanned(&self, _chunk: usize, _samples: usize) {}

    /// Called once when an operation completes successfully.
    fn finished(&self, _operation: &'static str) {}
}

/// Default observer forwarding checkpoints to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ProgressObserver for TracingObserver {
    fn row_classified(&self, row: usize, flagged: usize, written: bool) {
        trace!(row, flagged, written, "Row classified");
    }

    fn chunk_scanned(&self, chunk: usize, samples: usize) {
        trace!(chunk, samples, "Chunk scanned");
    }

    fn finished(&self, operation: &'static str) {
        debug!(operation, "Operation finished");
    }
}
