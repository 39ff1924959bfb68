//! The `Simulator` struct: owns the parameter state and answers requests.

use bf_core::{ArrayConfig, BfError, BfResult, SimConfig, SimulatorState};
use bf_field::{
    ArrayFactorProfile, DEFAULT_PROFILE_SAMPLES, GridSpec, IntensityField, array_factor,
    array_factor_raw, profile_angles, synthesize_field,
};
use bf_geometry::{ElementPosition, positions_for};
use tracing::debug;

use crate::RenderObserver;

/// The beamforming engine.
///
/// Holds the frequency, steering angle, and ordered sub-arrays, plus the
/// field-grid resolution used by [`intensity_field`][Self::intensity_field].
/// Every output is computed fresh from the current state; nothing is cached.
///
/// Create via [`SimulatorBuilder`][crate::SimulatorBuilder] or
/// [`Simulator::from_config`].
#[derive(Clone, Debug)]
pub struct Simulator {
    state:      SimulatorState,
    resolution: (usize, usize),
}

impl Simulator {
    pub(crate) fn from_parts(state: SimulatorState, resolution: (usize, usize)) -> Self {
        Self { state, resolution }
    }

    /// Validate `config` and build a simulator from it.
    pub fn from_config(config: &SimConfig) -> BfResult<Self> {
        crate::SimulatorBuilder::from_config(config.clone()).build()
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// Read-only view of the parameter state.
    #[inline]
    pub fn state(&self) -> &SimulatorState {
        &self.state
    }

    #[inline]
    pub fn frequency(&self) -> f64 {
        self.state.frequency()
    }

    #[inline]
    pub fn wavelength(&self) -> f64 {
        self.state.wavelength()
    }

    #[inline]
    pub fn wavenumber(&self) -> f64 {
        self.state.wavenumber()
    }

    #[inline]
    pub fn steering_angle(&self) -> f64 {
        self.state.steering_angle()
    }

    #[inline]
    pub fn arrays(&self) -> &[ArrayConfig] {
        self.state.arrays()
    }

    /// Field grid samples as `(nx, ny)`.
    #[inline]
    pub fn resolution(&self) -> (usize, usize) {
        self.resolution
    }

    /// Snapshot the current parameters as a [`SimConfig`].
    pub fn config(&self) -> SimConfig {
        SimConfig {
            frequency_hz:       self.state.frequency(),
            steering_angle_deg: self.state.steering_angle(),
            arrays:             self.state.arrays().to_vec(),
            resolution:         self.resolution,
        }
    }

    /// Element positions of array `index`, derived on demand.
    pub fn element_positions(&self, index: usize) -> BfResult<Vec<ElementPosition>> {
        let config = self.array_at(index)?;
        Ok(positions_for(config))
    }

    // ── Parameter mutators ────────────────────────────────────────────────

    /// Replace the operating frequency; wavelength and wavenumber follow.
    ///
    /// # Errors
    /// [`BfError::InvalidParameter`] if `frequency <= 0`.
    pub fn set_frequency(&mut self, frequency: f64) -> BfResult<()> {
        self.state.set_frequency(frequency)
    }

    /// Replace the steering angle in degrees.  Not range-checked.
    pub fn set_steering_angle(&mut self, steering_angle: f64) {
        self.state.set_steering_angle(steering_angle);
    }

    /// Append a sub-array and return its index.
    pub fn add_array(&mut self, config: ArrayConfig) -> usize {
        let arrays = self.state.arrays_mut();
        arrays.push(config);
        debug!(index = arrays.len() - 1, %config, "array added");
        arrays.len() - 1
    }

    /// Replace array `index` wholesale, returning the previous description.
    pub fn replace_array(&mut self, index: usize, config: ArrayConfig) -> BfResult<ArrayConfig> {
        self.array_at(index)?;
        let old = std::mem::replace(&mut self.state.arrays_mut()[index], config);
        debug!(index, %config, "array replaced");
        Ok(old)
    }

    /// Remove array `index`, shifting later arrays down.
    pub fn remove_array(&mut self, index: usize) -> BfResult<ArrayConfig> {
        self.array_at(index)?;
        let old = self.state.arrays_mut().remove(index);
        debug!(index, "array removed");
        Ok(old)
    }

    /// Change the field-grid resolution used by `intensity_field`.
    pub fn set_resolution(&mut self, nx: usize, ny: usize) -> BfResult<()> {
        validate_resolution(nx, ny)?;
        self.resolution = (nx, ny);
        Ok(())
    }

    // ── Computations ──────────────────────────────────────────────────────

    /// Normalized intensity over `x_range × y_range` at the configured
    /// resolution (200 × 200 unless changed), summing every array.
    pub fn intensity_field(&self, x_range: (f64, f64), y_range: (f64, f64)) -> BfResult<IntensityField> {
        let (nx, ny) = self.resolution;
        self.intensity_field_with(&GridSpec::with_resolution(x_range, y_range, nx, ny))
    }

    /// Normalized intensity over an explicit grid.
    pub fn intensity_field_with(&self, spec: &GridSpec) -> BfResult<IntensityField> {
        synthesize_field(&self.state, spec)
    }

    /// Normalized array factor of the first array at each angle (degrees).
    pub fn array_factor(&self, angles: &[f64]) -> BfResult<ArrayFactorProfile> {
        array_factor(&self.state, angles)
    }

    /// Unnormalized `|Σ|²` of the first array at each angle (degrees).
    pub fn array_factor_raw(&self, angles: &[f64]) -> BfResult<Vec<f64>> {
        array_factor_raw(&self.state, angles)
    }

    /// Normalized array factor over [-90°, 90°] in 1° steps.
    pub fn beam_profile(&self) -> BfResult<ArrayFactorProfile> {
        self.array_factor(&profile_angles(DEFAULT_PROFILE_SAMPLES))
    }

    /// Compute the field over the given region and the default beam profile,
    /// then hand both to `observer`.
    ///
    /// Nothing is delivered if either computation fails.
    pub fn render<O: RenderObserver>(
        &self,
        x_range:  (f64, f64),
        y_range:  (f64, f64),
        observer: &mut O,
    ) -> BfResult<()> {
        let field = self.intensity_field(x_range, y_range)?;
        let profile = self.beam_profile()?;
        observer.on_field(&field);
        observer.on_profile(&profile);
        observer.on_finish();
        Ok(())
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn array_at(&self, index: usize) -> BfResult<&ArrayConfig> {
        self.state
            .arrays()
            .get(index)
            .ok_or_else(|| BfError::invalid("array index", index, "no array at this index"))
    }
}

pub(crate) fn validate_resolution(nx: usize, ny: usize) -> BfResult<()> {
    if nx == 0 || ny == 0 {
        return Err(BfError::invalid(
            "resolution",
            format!("{nx}x{ny}"),
            "grid needs at least one sample per axis",
        ));
    }
    Ok(())
}
