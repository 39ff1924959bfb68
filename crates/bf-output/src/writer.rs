//! The `OutputWriter` trait implemented by all backend writers.

use crate::{FieldSampleRow, OutputResult, ProfileRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`RenderOutputObserver::take_error`][crate::RenderOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of intensity-map samples.
    fn write_field_rows(&mut self, rows: &[FieldSampleRow]) -> OutputResult<()>;

    /// Write a batch of array-factor samples.
    fn write_profile_rows(&mut self, rows: &[ProfileRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
