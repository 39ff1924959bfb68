//! Dense, normalized intensity map returned by the field synthesizer.

/// A row-major intensity grid plus the sample coordinates of its axes.
///
/// Row `j` corresponds to `y_axis[j]`, column `i` to `x_axis[i]`, so the
/// sample at `(x_axis[i], y_axis[j])` is `values[j * nx + i]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntensityField {
    pub x_axis: Vec<f64>,
    pub y_axis: Vec<f64>,
    /// Normalized intensity in `[0, 1]`, length `nx * ny`.
    pub values: Vec<f64>,
    /// Largest raw `|Σ|²` before normalization.
    pub raw_peak: f64,
}

impl IntensityField {
    #[inline]
    pub fn nx(&self) -> usize {
        self.x_axis.len()
    }

    #[inline]
    pub fn ny(&self) -> usize {
        self.y_axis.len()
    }

    /// Sample at grid row `row` (y index) and column `col` (x index), or
    /// `None` if either index is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if col >= self.nx() || row >= self.ny() {
            return None;
        }
        self.values.get(row * self.nx() + col).copied()
    }

    /// Iterate over rows, lowest y first.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.nx().max(1))
    }

    /// Copy into a nested `Vec` (one inner `Vec` per row), the shape most
    /// plotting front-ends expect.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    /// Iterate over `(x, y, intensity)` triples in row-major order.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        let nx = self.nx();
        self.values.iter().enumerate().map(move |(idx, &v)| {
            (self.x_axis[idx % nx], self.y_axis[idx / nx], v)
        })
    }

    /// Coordinates of the first sample equal to the maximum (`1.0`).
    pub fn peak(&self) -> Option<(f64, f64)> {
        let nx = self.nx();
        let (idx, _) = self
            .values
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1).then(b.0.cmp(&a.0)))?;
        Some((self.x_axis[idx % nx], self.y_axis[idx / nx]))
    }
}
