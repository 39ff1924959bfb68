//! Render observer trait — the seam to whatever draws the results.

use bf_field::{ArrayFactorProfile, IntensityField};

/// Callbacks invoked by [`Simulator::render`][crate::Simulator::render]
/// once the field and profile have been computed.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers receive borrowed, freshly
/// computed outputs; they never see simulator internals.
///
/// # Example — peak printer
///
/// ```rust,ignore
/// struct PeakPrinter;
///
/// impl RenderObserver for PeakPrinter {
///     fn on_profile(&mut self, profile: &ArrayFactorProfile) {
///         println!("main lobe at {:?}°", profile.peak_angle());
///     }
/// }
/// ```
pub trait RenderObserver {
    /// Called with the normalized intensity map.
    fn on_field(&mut self, _field: &IntensityField) {}

    /// Called with the normalized array-factor profile.
    fn on_profile(&mut self, _profile: &ArrayFactorProfile) {}

    /// Called once after both outputs have been delivered.
    fn on_finish(&mut self) {}
}

/// A [`RenderObserver`] that does nothing.
pub struct NoopObserver;

impl RenderObserver for NoopObserver {}
