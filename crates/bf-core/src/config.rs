//! Whole-scenario configuration.

use crate::{ArrayConfig, BfResult, SimulatorState};

/// Default field-grid resolution per axis.
pub const DEFAULT_RESOLUTION: usize = 200;

/// Top-level simulator configuration.
///
/// Typically built in code or deserialized (with the `serde` feature) by the
/// application crate and handed to the simulator builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Operating frequency in Hz.  Must be positive.
    pub frequency_hz: f64,

    /// Steering angle in degrees from broadside.
    pub steering_angle_deg: f64,

    /// Sub-arrays, in order.  The array-factor profile reads only the first.
    pub arrays: Vec<ArrayConfig>,

    /// Field grid samples as `(nx, ny)`.  Default: 200 × 200.
    #[cfg_attr(feature = "serde", serde(default = "default_resolution"))]
    pub resolution: (usize, usize),
}

impl SimConfig {
    /// Validate the frequency and derive the runtime state.
    pub fn to_state(&self) -> BfResult<SimulatorState> {
        SimulatorState::new(self.frequency_hz, self.steering_angle_deg, self.arrays.clone())
    }
}

/// Start-up values of the interactive application: 100 kHz, broadside, one
/// straight two-element array at 5 cm.
impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frequency_hz:       100e3,
            steering_angle_deg: 0.0,
            arrays:             vec![ArrayConfig::from_parts(2, 0.05, 0.0)],
            resolution:         default_resolution(),
        }
    }
}

fn default_resolution() -> (usize, usize) {
    (DEFAULT_RESOLUTION, DEFAULT_RESOLUTION)
}
