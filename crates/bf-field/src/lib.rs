//! `bf-field` — the numerical heart of the simulator.
//!
//! # Pipeline
//!
//! ```text
//! SimulatorState ──► element positions (bf-geometry)
//!                      │
//!                      ├─► synthesize_field  Σ exp(i·(k·|p − e| + φ_e))  over a 2-D grid
//!                      │                      → |Σ|² / max
//!                      │
//!                      └─► array_factor      Σ exp(i·(k·x_e·sin θ + φ_e)) per angle θ
//!                                             (first array only) → |Σ|² / max
//!
//! φ_e = −k · x_e · sin(steering angle)
//! ```
//!
//! Both outputs are normalized by their own maximum.  A zero maximum is
//! reported as [`BfError::DegenerateConfiguration`] rather than leaking NaN.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Synthesizes field rows on Rayon's thread pool.         |
//!
//! [`BfError::DegenerateConfiguration`]: bf_core::BfError::DegenerateConfiguration

pub mod array_factor;
pub mod field;
pub mod grid;
pub mod normalize;
pub mod synth;

#[cfg(test)]
mod tests;

pub use array_factor::{
    ArrayFactorProfile, DEFAULT_PROFILE_SAMPLES, array_factor, array_factor_raw, profile_angles,
};
pub use field::IntensityField;
pub use grid::{GridSpec, linspace};
pub use normalize::normalize_in_place;
pub use synth::{SteeredElement, steered_elements, synthesize_field};
