//! Element coordinates for linear and arc-curved arrays.

use std::fmt;

use bf_core::{ArrayConfig, BfResult};

/// A single element's location in the array plane, in metres.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementPosition {
    pub x: f64,
    pub y: f64,
}

impl ElementPosition {
    pub const ORIGIN: ElementPosition = ElementPosition { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `(px, py)`.
    #[inline]
    pub fn distance_to(self, px: f64, py: f64) -> f64 {
        (px - self.x).hypot(py - self.y)
    }
}

impl fmt::Display for ElementPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.y)
    }
}

/// Element positions for a validated array.  Output length always equals
/// `config.num_elements()`.
///
/// - Linear (`curvature == 0`): `x_i = i·d − (n−1)·d/2`, `y_i = 0`.
/// - Curved: radius `R = (n−1)·d / θ` with `θ` the curvature in radians;
///   element `i` sits at angle `φ_i = −θ/2 + i·θ/(n−1)` and position
///   `(R·cos φ_i − R, R·sin φ_i)`, so the arc's midpoint is the origin.
///   A single curved element is a zero-length arc at the origin.
///   Curvatures too small to give a finite radius fall back to the linear
///   layout.
pub fn positions_for(config: &ArrayConfig) -> Vec<ElementPosition> {
    let n = config.num_elements();
    let spacing = config.spacing();
    let span = config.curvature_degree().to_radians();
    let radius = config.aperture() / span;

    // Subnormal curvatures underflow the arc radius to infinity; such an
    // arc is indistinguishable from a straight line.
    if config.is_linear() || span == 0.0 || !radius.is_finite() {
        let half = (n - 1) as f64 * spacing / 2.0;
        return (0..n)
            .map(|i| ElementPosition::new(i as f64 * spacing - half, 0.0))
            .collect();
    }

    if n == 1 {
        return vec![ElementPosition::ORIGIN];
    }

    let step = span / (n - 1) as f64;

    (0..n)
        .map(|i| {
            let angle = -span / 2.0 + i as f64 * step;
            ElementPosition::new(radius * angle.cos() - radius, radius * angle.sin())
        })
        .collect()
}

/// Validate raw parameters and return the element positions.
///
/// # Errors
/// [`bf_core::BfError::InvalidParameter`] under the same rules as
/// [`ArrayConfig::new`].
pub fn element_positions(
    num_elements:     usize,
    spacing:          f64,
    curvature_degree: f64,
) -> BfResult<Vec<ElementPosition>> {
    let config = ArrayConfig::new(num_elements, spacing, curvature_degree)?;
    Ok(positions_for(&config))
}
