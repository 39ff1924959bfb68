//! CSV scenario loader.
//!
//! # CSV format
//!
//! One row per sub-array, in array order.  `curvature_degree` may be left
//! empty for a straight array.
//!
//! ```csv
//! num_elements,spacing,curvature_degree
//! 8,0.05,0
//! 8,0.05,45
//! 4,0.1,
//! ```
//!
//! Every row is validated through [`ArrayConfig::new`]; the first bad row
//! aborts the load with its line number.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use bf_core::ArrayConfig;

use crate::{LoaderError, LoaderResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ArrayRecord {
    num_elements:     usize,
    spacing:          f64,
    curvature_degree: Option<f64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load sub-array descriptions from a CSV file.
pub fn load_arrays_csv(path: &Path) -> LoaderResult<Vec<ArrayConfig>> {
    let file = std::fs::File::open(path)?;
    load_arrays_reader(file)
}

/// Like [`load_arrays_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for scenarios embedded
/// in a binary.
pub fn load_arrays_reader<R: Read>(reader: R) -> LoaderResult<Vec<ArrayConfig>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers().map_err(parse_error)?.clone();
    let mut record = csv::StringRecord::new();
    let mut arrays = Vec::new();

    while csv_reader.read_record(&mut record).map_err(parse_error)? {
        let line = record.position().map_or(0, |p| p.line());
        let row: ArrayRecord = record.deserialize(Some(&headers)).map_err(parse_error)?;
        let config = ArrayConfig::new(row.num_elements, row.spacing, row.curvature_degree.unwrap_or(0.0))
            .map_err(|source| LoaderError::InvalidArray { line, source })?;
        arrays.push(config);
    }
    Ok(arrays)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_error(e: csv::Error) -> LoaderError {
    LoaderError::Parse {
        line:    e.position().map_or(0, |p| p.line()),
        message: e.to_string(),
    }
}
