//! `bf-geometry` — turns an [`ArrayConfig`] into 2-D element coordinates.
//!
//! Positions are derived on every request and never cached: an array is
//! fully described by `(num_elements, spacing, curvature_degree)` and the
//! placement is a pure function of those three numbers.
//!
//! # Layouts
//!
//! | Curvature | Placement                                                   |
//! |-----------|-------------------------------------------------------------|
//! | `0`       | x-axis, centred on the origin, `spacing` apart              |
//! | `≠ 0`     | circular arc of length `(n-1)·spacing` spanning `curvature` |
//!
//! [`ArrayConfig`]: bf_core::ArrayConfig

pub mod position;


pub use position::{ElementPosition, element_positions, positions_for};
