//! Fluent builder for constructing a [`Simulator`].

use bf_core::config::DEFAULT_RESOLUTION;
use bf_core::{ArrayConfig, BfResult, SimConfig, SimulatorState};
use tracing::debug;

use crate::simulator::{Simulator, validate_resolution};

/// Fluent builder for [`Simulator`].
///
/// # Required inputs
///
/// - operating frequency in Hz (validated at [`build`][Self::build])
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default        |
/// |------------------------|----------------|
/// | `.steering_angle(deg)` | `0.0`          |
/// | `.array(cfg)`          | no arrays      |
/// | `.arrays(v)`           | no arrays      |
/// | `.resolution(nx, ny)`  | `200 × 200`    |
///
/// A simulator with no arrays builds fine; field and profile requests then
/// fail with `DegenerateConfiguration` until an array is added.
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimulatorBuilder::new(2.4e9)
///     .steering_angle(15.0)
///     .array(ArrayConfig::linear(8, 0.0625)?)
///     .array(ArrayConfig::new(8, 0.0625, 40.0)?)
///     .build()?;
/// ```
pub struct SimulatorBuilder {
    frequency:      f64,
    steering_angle: f64,
    arrays:         Vec<ArrayConfig>,
    resolution:     (usize, usize),
}

impl SimulatorBuilder {
    /// Start a builder at `frequency` Hz.
    pub fn new(frequency: f64) -> Self {
        Self {
            frequency,
            steering_angle: 0.0,
            arrays:         Vec::new(),
            resolution:     (DEFAULT_RESOLUTION, DEFAULT_RESOLUTION),
        }
    }

    /// Start from a full [`SimConfig`].
    pub fn from_config(config: SimConfig) -> Self {
        Self {
            frequency:      config.frequency_hz,
            steering_angle: config.steering_angle_deg,
            arrays:         config.arrays,
            resolution:     config.resolution,
        }
    }

    /// Steering angle in degrees from broadside.
    pub fn steering_angle(mut self, degrees: f64) -> Self {
        self.steering_angle = degrees;
        self
    }

    /// Append one sub-array.
    pub fn array(mut self, config: ArrayConfig) -> Self {
        self.arrays.push(config);
        self
    }

    /// Append several sub-arrays in order.
    pub fn arrays(mut self, configs: impl IntoIterator<Item = ArrayConfig>) -> Self {
        self.arrays.extend(configs);
        self
    }

    /// Field grid samples per axis.
    pub fn resolution(mut self, nx: usize, ny: usize) -> Self {
        self.resolution = (nx, ny);
        self
    }

    /// Validate inputs, derive wavelength and wavenumber, and return a
    /// ready [`Simulator`].
    pub fn build(self) -> BfResult<Simulator> {
        let (nx, ny) = self.resolution;
        validate_resolution(nx, ny)?;
        let state = SimulatorState::new(self.frequency, self.steering_angle, self.arrays)?;
        debug!(
            frequency = state.frequency(),
            wavelength = state.wavelength(),
            steering_angle = state.steering_angle(),
            arrays = state.arrays().len(),
            "simulator built"
        );
        Ok(Simulator::from_parts(state, self.resolution))
    }
}
