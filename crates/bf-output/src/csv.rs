//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `intensity_field.csv`
//! - `array_factor.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{FieldSampleRow, OutputError, OutputResult, ProfileRow};

/// Writes simulator output to two CSV files.
pub struct CsvWriter {
    field:    Writer<File>,
    profile:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut field = Writer::from_path(dir.join("intensity_field.csv"))?;
        field.write_record(["x_m", "y_m", "intensity"])?;

        let mut profile = Writer::from_path(dir.join("array_factor.csv"))?;
        profile.write_record(["angle_deg", "value"])?;

        Ok(Self {
            field,
            profile,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_field_rows(&mut self, rows: &[FieldSampleRow]) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished);
        }
        for row in rows {
            self.field.write_record(&[
                row.x_m.to_string(),
                row.y_m.to_string(),
                row.intensity.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_profile_rows(&mut self, rows: &[ProfileRow]) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished);
        }
        for row in rows {
            self.profile.write_record(&[row.angle_deg.to_string(), row.value.to_string()])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.field.flush()?;
        self.profile.flush()?;
        Ok(())
    }
}
