//! `RenderOutputObserver<W>` — bridges `RenderObserver` to an `OutputWriter`.

use bf_field::{ArrayFactorProfile, IntensityField};
use bf_sim::RenderObserver;
use tracing::debug;

use crate::row::{FieldSampleRow, ProfileRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`RenderObserver`] that writes every field and profile it receives to
/// any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `RenderObserver`
/// methods have no return value.  After `sim.render()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct RenderOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> RenderOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files afterwards).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> RenderObserver for RenderOutputObserver<W> {
    fn on_field(&mut self, field: &IntensityField) {
        let rows = FieldSampleRow::from_field(field);
        debug!(rows = rows.len(), "writing intensity field");
        let result = self.writer.write_field_rows(&rows);
        self.store_err(result);
    }

    fn on_profile(&mut self, profile: &ArrayFactorProfile) {
        let rows = ProfileRow::from_profile(profile);
        debug!(rows = rows.len(), "writing array-factor profile");
        let result = self.writer.write_profile_rows(&rows);
        self.store_err(result);
    }

    fn on_finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
