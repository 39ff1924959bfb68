//! Peak normalization shared by the field and array-factor outputs.

use bf_core::{BfError, BfResult};
use tracing::warn;

/// Divide every value by the slice's own maximum, returning that maximum.
///
/// Afterwards the peak sample is exactly `1.0` and all samples lie in
/// `[0, 1]` (inputs are squared magnitudes, hence non-negative).
///
/// # Errors
/// [`BfError::DegenerateConfiguration`] if the slice is empty or its maximum
/// is zero, or if any sample is NaN or infinite.  The slice is left
/// untouched in that case.
pub fn normalize_in_place(values: &mut [f64]) -> BfResult<f64> {
    if let Some(bad) = values.iter().position(|v| !v.is_finite()) {
        warn!(samples = values.len(), index = bad, "refusing to normalize non-finite samples");
        return Err(BfError::DegenerateConfiguration(format!(
            "sample {bad} of {} is {}",
            values.len(),
            values[bad]
        )));
    }
    let max = values.iter().copied().fold(0.0f64, f64::max);
    if !(max > 0.0) || !max.is_finite() {
        warn!(samples = values.len(), max, "refusing to normalize a degenerate output");
        return Err(BfError::DegenerateConfiguration(format!(
            "cannot normalize {} samples with maximum {max}",
            values.len()
        )));
    }
    for v in values.iter_mut() {
        *v /= max;
    }
    Ok(max)
}
