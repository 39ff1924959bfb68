//! `bf-sim` — the simulator facade consumed by presentation layers.
//!
//! # Request flow
//!
//! ```text
//! SimulatorBuilder / SimConfig ──► Simulator (owns SimulatorState)
//!   set_frequency / set_steering_angle / add_array / replace_array   (&mut self)
//!   intensity_field / array_factor / beam_profile                    (&self)
//!   render(x_range, y_range, &mut impl RenderObserver)
//!        ├─ observer.on_field(&IntensityField)
//!        ├─ observer.on_profile(&ArrayFactorProfile)
//!        └─ observer.on_finish()
//! ```
//!
//! Mutators take `&mut self` and computations `&self`, so a configuration
//! cannot change underneath an in-flight computation.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Field synthesis on Rayon's thread pool.                |
//! | `serde`    | Serde derives on config and output types.              |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use bf_core::ArrayConfig;
//! use bf_sim::{NoopObserver, SimulatorBuilder};
//!
//! let mut sim = SimulatorBuilder::new(100e3)
//!     .array(ArrayConfig::linear(2, 0.05)?)
//!     .build()?;
//! sim.set_steering_angle(20.0);
//! let field = sim.intensity_field((-10.0, 10.0), (0.0, 10.0))?;
//! let profile = sim.beam_profile()?;
//! ```

pub mod builder;
pub mod error;
pub mod loader;
pub mod observer;
pub mod simulator;


pub use builder::SimulatorBuilder;
pub use error::{LoaderError, LoaderResult};
pub use loader::{load_arrays_csv, load_arrays_reader};
pub use observer::{NoopObserver, RenderObserver};
pub use simulator::Simulator;
