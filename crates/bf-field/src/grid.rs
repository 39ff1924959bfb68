//! Sample-grid description and axis generation.

use bf_core::config::DEFAULT_RESOLUTION;
use bf_core::{BfError, BfResult};

/// `n` evenly spaced samples from `start` to `end` inclusive.
///
/// A single sample yields `[start]`; the last of several samples is `end`
/// exactly.  `n == 0` yields an empty vector.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut v: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            v[n - 1] = end;
            v
        }
    }
}

/// A rectangular region of the array plane and how densely to sample it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSpec {
    /// `(min, max)` in metres along x.
    pub x_range: (f64, f64),
    /// `(min, max)` in metres along y.
    pub y_range: (f64, f64),
    /// Samples along x (grid columns).
    pub nx: usize,
    /// Samples along y (grid rows).
    pub ny: usize,
}

impl GridSpec {
    /// A `200 × 200` grid over the given ranges.
    pub fn new(x_range: (f64, f64), y_range: (f64, f64)) -> Self {
        Self::with_resolution(x_range, y_range, DEFAULT_RESOLUTION, DEFAULT_RESOLUTION)
    }

    pub fn with_resolution(x_range: (f64, f64), y_range: (f64, f64), nx: usize, ny: usize) -> Self {
        Self { x_range, y_range, nx, ny }
    }

    /// Total number of grid samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.nx * self.ny
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reject zero resolutions, non-finite range bounds, and ranges whose
    /// width overflows.
    pub fn validate(&self) -> BfResult<()> {
        if self.nx == 0 {
            return Err(BfError::invalid("nx", self.nx, "grid needs at least one column"));
        }
        if self.ny == 0 {
            return Err(BfError::invalid("ny", self.ny, "grid needs at least one row"));
        }
        let bounds = [self.x_range.0, self.x_range.1, self.y_range.0, self.y_range.1];
        if let Some(bad) = bounds.into_iter().find(|v| !v.is_finite()) {
            return Err(BfError::invalid("range", bad, "grid bounds must be finite"));
        }
        let widths = [self.x_range.1 - self.x_range.0, self.y_range.1 - self.y_range.0];
        if let Some(bad) = widths.into_iter().find(|w| !w.is_finite()) {
            return Err(BfError::invalid("range width", bad, "grid extent overflows f64"));
        }
        Ok(())
    }

    pub fn x_axis(&self) -> Vec<f64> {
        linspace(self.x_range.0, self.x_range.1, self.nx)
    }

    pub fn y_axis(&self) -> Vec<f64> {
        linspace(self.y_range.0, self.y_range.1, self.ny)
    }
}
