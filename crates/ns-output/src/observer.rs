//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use ns_sim::{ModelView, SimObserver};

use crate::row::capture;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes the initial state and every committed tick
/// to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `model.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `model.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn record(&mut self, model: &dyn ModelView) {
        let (summary, snapshots) = capture(model);
        let result = self.writer.write_tick_summary(&summary);
        self.store_err(result);
        if !snapshots.is_empty() {
            let result = self.writer.write_snapshots(&snapshots);
            self.store_err(result);
        }
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            tracing::warn!(error = %e, "output write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_start(&mut self, model: &dyn ModelView) {
        self.record(model);
    }

    fn on_tick_end(&mut self, model: &dyn ModelView) {
        self.record(model);
    }

    fn on_sim_end(&mut self, _model: &dyn ModelView) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
