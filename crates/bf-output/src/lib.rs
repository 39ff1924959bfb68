//! `bf-output` — persistence for computed fields and beam profiles.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend | Files created                                   |
//! |-----------|---------|-------------------------------------------------|
//! | *(none)*  | CSV     | `intensity_field.csv`, `array_factor.csv`       |
//! | `sqlite`  | SQLite  | `output.db`                                     |
//!
//! Both implement [`OutputWriter`] and are driven by
//! [`RenderOutputObserver`], which implements `bf_sim::RenderObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bf_output::{CsvWriter, RenderOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = RenderOutputObserver::new(writer);
//! sim.render((-10.0, 10.0), (0.0, 10.0), &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::RenderOutputObserver;
pub use row::{FieldSampleRow, ProfileRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
