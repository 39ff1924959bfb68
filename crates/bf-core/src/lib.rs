//! `bf-core` — foundational types for the `rust_bf` beamforming simulator.
//!
//! This crate is a dependency of every other `bf-*` crate.  It has no `bf-*`
//! dependencies and minimal external ones (`thiserror`, `tracing`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`array`]  | `ArrayConfig` — one validated physical sub-array           |
//! | [`state`]  | `SimulatorState`, `SPEED_OF_LIGHT`, parameter mutators     |
//! | [`config`] | `SimConfig` — whole-scenario configuration with defaults   |
//! | [`units`]  | `FrequencyUnit`, `format_frequency`                        |
//! | [`error`]  | `BfError`, `BfResult`                                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public config types. |

pub mod array;
pub mod config;
pub mod error;
pub mod state;
pub mod units;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use array::ArrayConfig;
pub use config::SimConfig;
pub use error::{BfError, BfResult};
pub use state::{SimulatorState, SPEED_OF_LIGHT};
pub use units::{FrequencyUnit, format_frequency};
