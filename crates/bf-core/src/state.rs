//! Process-wide simulator parameters and their derived constants.
//!
//! # Design
//!
//! `frequency`, `wavelength`, and `wavenumber` are private and only change
//! together inside [`SimulatorState::set_frequency`]:
//!
//!   wavelength = SPEED_OF_LIGHT / frequency
//!   wavenumber = 2π / wavelength
//!
//! A `&SimulatorState` therefore never exposes a stale wavenumber, and the
//! borrow checker keeps mutation (`&mut self`) from overlapping with any
//! in-flight computation holding `&self`.

use std::f64::consts::PI;

use tracing::debug;

use crate::{ArrayConfig, BfError, BfResult};

/// Propagation speed in m/s.  Deliberately the round 3×10⁸, not the exact
/// speed of light.
pub const SPEED_OF_LIGHT: f64 = 3e8;

/// Frequency, steering angle, and configured arrays.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulatorState {
    frequency:      f64,
    wavelength:     f64,
    wavenumber:     f64,
    /// Steering angle in degrees.  Not range-checked: values past ±90°
    /// alias but stay well-defined.
    steering_angle: f64,
    arrays:         Vec<ArrayConfig>,
}

impl SimulatorState {
    /// Build a state, validating `frequency` and deriving wavelength and
    /// wavenumber.
    pub fn new(frequency: f64, steering_angle: f64, arrays: Vec<ArrayConfig>) -> BfResult<Self> {
        let (wavelength, wavenumber) = derive_wave_constants(frequency)?;
        Ok(Self {
            frequency,
            wavelength,
            wavenumber,
            steering_angle,
            arrays,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Operating frequency in Hz.
    #[inline]
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Wavelength in metres.
    #[inline]
    pub fn wavelength(&self) -> f64 {
        self.wavelength
    }

    /// Wavenumber `k` in rad/m.
    #[inline]
    pub fn wavenumber(&self) -> f64 {
        self.wavenumber
    }

    /// Steering angle in degrees.
    #[inline]
    pub fn steering_angle(&self) -> f64 {
        self.steering_angle
    }

    /// `sin(steering_angle)`, shared by every per-element phase shift.
    #[inline]
    pub fn steering_sin(&self) -> f64 {
        self.steering_angle.to_radians().sin()
    }

    /// Far-field steering delay for an element at abscissa `x`:
    /// `-k * x * sin(steering_angle)`.
    #[inline]
    pub fn phase_shift(&self, x: f64) -> f64 {
        -(self.wavenumber * x) * self.steering_sin()
    }

    #[inline]
    pub fn arrays(&self) -> &[ArrayConfig] {
        &self.arrays
    }

    #[inline]
    pub fn arrays_mut(&mut self) -> &mut Vec<ArrayConfig> {
        &mut self.arrays
    }

    // ── Mutators ──────────────────────────────────────────────────────────

    /// Replace the operating frequency and recompute wavelength and
    /// wavenumber.  On error the state is left untouched.
    ///
    /// # Errors
    /// [`BfError::InvalidParameter`] if `frequency` is not a positive finite
    /// number.
    pub fn set_frequency(&mut self, frequency: f64) -> BfResult<()> {
        let (wavelength, wavenumber) = derive_wave_constants(frequency)?;
        self.frequency = frequency;
        self.wavelength = wavelength;
        self.wavenumber = wavenumber;
        debug!(frequency, wavelength, wavenumber, "operating frequency updated");
        Ok(())
    }

    /// Replace the steering angle (degrees).  No derived state.
    pub fn set_steering_angle(&mut self, steering_angle: f64) {
        self.steering_angle = steering_angle;
        debug!(steering_angle, "steering angle updated");
    }
}

/// `(wavelength, wavenumber)` for `frequency`, or `InvalidParameter`.
fn derive_wave_constants(frequency: f64) -> BfResult<(f64, f64)> {
    if !(frequency > 0.0) || !frequency.is_finite() {
        return Err(BfError::invalid("frequency", frequency, "must be a positive finite value in Hz"));
    }
    let wavelength = SPEED_OF_LIGHT / frequency;
    Ok((wavelength, 2.0 * PI / wavelength))
}
