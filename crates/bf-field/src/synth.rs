//! Field synthesizer: coherent superposition of spherical waves from every
//! element of every configured array.

use bf_core::{ArrayConfig, BfError, BfResult, SimulatorState};
use bf_geometry::{ElementPosition, positions_for};
use num_complex::Complex64;
use tracing::{debug, warn};

use crate::{GridSpec, IntensityField, normalize_in_place};

// ── Steered elements ──────────────────────────────────────────────────────────

/// An element position paired with its far-field steering delay.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SteeredElement {
    pub position: ElementPosition,
    /// `−k · x · sin(steering angle)` in radians.
    pub phase:    f64,
}

/// Flatten `arrays` into steered elements under `state`'s wavenumber and
/// steering angle, preserving array order then element order.
pub fn steered_elements(state: &SimulatorState, arrays: &[ArrayConfig]) -> Vec<SteeredElement> {
    arrays
        .iter()
        .flat_map(positions_for)
        .map(|position| SteeredElement {
            position,
            phase: state.phase_shift(position.x),
        })
        .collect()
}

// ── Synthesis ─────────────────────────────────────────────────────────────────

/// Compute the normalized intensity over `spec` for every array in `state`.
///
/// For each grid point `p` the complex amplitude is
/// `Σ_e exp(i · (k · |p − e| + φ_e))`; intensity is `|Σ|²` divided by the
/// grid maximum.
///
/// # Errors
/// - [`BfError::InvalidParameter`] if `spec` has a zero resolution,
///   non-finite bounds, or a width that overflows.
/// - [`BfError::DegenerateConfiguration`] if no arrays are configured or the
///   field vanishes everywhere or contains non-finite samples.
pub fn synthesize_field(state: &SimulatorState, spec: &GridSpec) -> BfResult<IntensityField> {
    spec.validate()?;

    let elements = steered_elements(state, state.arrays());
    if elements.is_empty() {
        warn!("field requested with no arrays configured");
        return Err(BfError::DegenerateConfiguration(
            "no arrays configured; the field is identically zero".to_owned(),
        ));
    }

    let x_axis = spec.x_axis();
    let y_axis = spec.y_axis();
    let k = state.wavenumber();
    debug!(
        nx = spec.nx,
        ny = spec.ny,
        elements = elements.len(),
        arrays = state.arrays().len(),
        "synthesizing intensity field"
    );

    let mut values = vec![0.0f64; spec.len()];
    fill_rows(&mut values, &x_axis, &y_axis, &elements, k);

    let raw_peak = normalize_in_place(&mut values)?;

    Ok(IntensityField { x_axis, y_axis, values, raw_peak })
}

/// `|Σ|²` at a single point.
#[inline]
fn intensity_at(px: f64, py: f64, elements: &[SteeredElement], k: f64) -> f64 {
    elements
        .iter()
        .map(|e| Complex64::cis(k * e.position.distance_to(px, py) + e.phase))
        .sum::<Complex64>()
        .norm_sqr()
}

#[cfg(not(feature = "parallel"))]
fn fill_rows(values: &mut [f64], x_axis: &[f64], y_axis: &[f64], elements: &[SteeredElement], k: f64) {
    fill_rows_sequential(values, x_axis, y_axis, elements, k);
}

#[cfg(feature = "parallel")]
fn fill_rows(values: &mut [f64], x_axis: &[f64], y_axis: &[f64], elements: &[SteeredElement], k: f64) {
    fill_rows_parallel(values, x_axis, y_axis, elements, k);
}

#[cfg_attr(feature = "parallel", allow(dead_code))]
pub(crate) fn fill_rows_sequential(
    values: &mut [f64],
    x_axis: &[f64],
    y_axis: &[f64],
    elements: &[SteeredElement],
    k: f64,
) {
    for (row, &py) in values.chunks_mut(x_axis.len()).zip(y_axis) {
        for (v, &px) in row.iter_mut().zip(x_axis) {
            *v = intensity_at(px, py, elements, k);
        }
    }
}

/// Row-parallel twin of [`fill_rows_sequential`]; each sample is reduced in
/// the same order, so the output is bit-identical.
#[cfg(feature = "parallel")]
pub(crate) fn fill_rows_parallel(
    values: &mut [f64],
    x_axis: &[f64],
    y_axis: &[f64],
    elements: &[SteeredElement],
    k: f64,
) {
    use rayon::prelude::*;

    values
        .par_chunks_mut(x_axis.len())
        .zip(y_axis.par_iter())
        .for_each(|(row, &py)| {
            for (v, &px) in row.iter_mut().zip(x_axis) {
                *v = intensity_at(px, py, elements, k);
            }
        });
}
