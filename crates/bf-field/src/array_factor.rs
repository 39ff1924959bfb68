//! Array-factor evaluator: the steered angular pattern of the first array.

use bf_core::{BfError, BfResult, SimulatorState};
use bf_geometry::positions_for;
use num_complex::Complex64;
use tracing::{debug, warn};

use crate::{linspace, normalize_in_place};

/// Default number of profile samples: 1° steps over [-90°, 90°].
pub const DEFAULT_PROFILE_SAMPLES: usize = 181;

/// `count` evenly spaced observation angles over [-90°, 90°].
pub fn profile_angles(count: usize) -> Vec<f64> {
    linspace(-90.0, 90.0, count)
}

/// Unnormalized `|Σ|²` for each angle (degrees), using only the first
/// configured array.
///
/// Each angle is evaluated independently, so reordering `angles` reorders
/// the output and nothing else.
///
/// # Errors
/// [`BfError::DegenerateConfiguration`] if no arrays are configured.
pub fn array_factor_raw(state: &SimulatorState, angles: &[f64]) -> BfResult<Vec<f64>> {
    let Some(first) = state.arrays().first() else {
        warn!("array factor requested with no arrays configured");
        return Err(BfError::DegenerateConfiguration(
            "array factor needs at least one array".to_owned(),
        ));
    };

    let k = state.wavenumber();
    // (k·x, φ) per element; k·x is shared by both phase terms.
    let terms: Vec<(f64, f64)> = positions_for(first)
        .into_iter()
        .map(|p| (k * p.x, state.phase_shift(p.x)))
        .collect();
    debug!(angles = angles.len(), elements = terms.len(), "evaluating array factor");

    Ok(angles
        .iter()
        .map(|angle| {
            let s = angle.to_radians().sin();
            terms
                .iter()
                .map(|&(kx, phase)| Complex64::cis(kx * s + phase))
                .sum::<Complex64>()
                .norm_sqr()
        })
        .collect())
}

/// Normalized array factor over `angles`.
///
/// # Errors
/// [`BfError::DegenerateConfiguration`] if no arrays are configured, or if
/// `angles` is empty.
pub fn array_factor(state: &SimulatorState, angles: &[f64]) -> BfResult<ArrayFactorProfile> {
    let mut values = array_factor_raw(state, angles)?;
    let raw_peak = normalize_in_place(&mut values)?;
    Ok(ArrayFactorProfile {
        angles: angles.to_vec(),
        values,
        raw_peak,
    })
}

/// A normalized angular profile indexed by the caller's angle sequence.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrayFactorProfile {
    /// Observation angles in degrees, as supplied.
    pub angles:   Vec<f64>,
    /// Normalized values in `[0, 1]`, one per angle.
    pub values:   Vec<f64>,
    /// Largest raw `|Σ|²` before normalization.
    pub raw_peak: f64,
}

impl ArrayFactorProfile {
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Angle of the first sample holding the maximum.
    pub fn peak_angle(&self) -> Option<f64> {
        self.values
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1).then(b.0.cmp(&a.0)))
            .map(|(i, _)| self.angles[i])
    }

    /// Iterate over `(angle, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.angles.iter().copied().zip(self.values.iter().copied())
    }
}
