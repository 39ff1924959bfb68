//! Physical sub-array description.

use std::fmt;

use crate::{BfError, BfResult};

/// One physical sub-array: element count, inter-element spacing, and the
/// angular span of the arc the elements sit on.
///
/// Immutable once built.  Editing an array means building a new
/// `ArrayConfig` and replacing the old one wholesale.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ArrayConfigRecord"))]
pub struct ArrayConfig {
    num_elements:     usize,
    spacing:          f64,
    curvature_degree: f64,
}

impl ArrayConfig {
    /// Validate and build an array description.
    ///
    /// # Errors
    /// [`BfError::InvalidParameter`] if `num_elements < 1`, `spacing` is not
    /// a positive finite number, or `curvature_degree` is not finite.
    pub fn new(num_elements: usize, spacing: f64, curvature_degree: f64) -> BfResult<Self> {
        if num_elements < 1 {
            return Err(BfError::invalid("num_elements", num_elements, "an array needs at least one element"));
        }
        if !(spacing > 0.0) || !spacing.is_finite() {
            return Err(BfError::invalid("spacing", spacing, "must be a positive finite distance in metres"));
        }
        if !curvature_degree.is_finite() {
            return Err(BfError::invalid("curvature_degree", curvature_degree, "must be finite"));
        }
        Ok(Self { num_elements, spacing, curvature_degree })
    }

    /// Skip validation for compile-time constants known to be valid.
    pub(crate) const fn from_parts(num_elements: usize, spacing: f64, curvature_degree: f64) -> Self {
        Self { num_elements, spacing, curvature_degree }
    }

    /// Straight array along the x-axis.
    #[inline]
    pub fn linear(num_elements: usize, spacing: f64) -> BfResult<Self> {
        Self::new(num_elements, spacing, 0.0)
    }

    #[inline]
    pub fn num_elements(&self) -> usize {
        self.num_elements
    }

    /// Inter-element spacing in metres (arc length for curved arrays).
    #[inline]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Total angular span of the arc in degrees; `0` means a straight line.
    #[inline]
    pub fn curvature_degree(&self) -> f64 {
        self.curvature_degree
    }

    #[inline]
    pub fn is_linear(&self) -> bool {
        self.curvature_degree == 0.0
    }

    /// Total length along the array, `(n - 1) * spacing`.
    #[inline]
    pub fn aperture(&self) -> f64 {
        (self.num_elements - 1) as f64 * self.spacing
    }
}

impl fmt::Display for ArrayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} elements @ {} m, curvature {}°",
            self.num_elements, self.spacing, self.curvature_degree
        )
    }
}

// ── Serde validation shim ─────────────────────────────────────────────────────

/// Unvalidated wire form; deserialization goes through [`ArrayConfig::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ArrayConfigRecord {
    num_elements:     usize,
    spacing:          f64,
    #[serde(default)]
    curvature_degree: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<ArrayConfigRecord> for ArrayConfig {
    type Error = BfError;

    fn try_from(r: ArrayConfigRecord) -> BfResult<Self> {
        ArrayConfig::new(r.num_elements, r.spacing, r.curvature_degree)
    }
}
