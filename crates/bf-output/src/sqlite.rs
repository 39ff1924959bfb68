//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `intensity_field` and `array_factor`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{FieldSampleRow, OutputError, OutputResult, ProfileRow};

/// Writes simulator output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS intensity_field (
                 x_m       REAL NOT NULL,
                 y_m       REAL NOT NULL,
                 intensity REAL NOT NULL
             );
             CREATE TABLE IF NOT EXISTS array_factor (
                 angle_deg REAL NOT NULL,
                 value     REAL NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_field_rows(&mut self, rows: &[FieldSampleRow]) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished);
        }
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO intensity_field (x_m, y_m, intensity) VALUES (?1, ?2, ?3)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![row.x_m, row.y_m, row.intensity])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_profile_rows(&mut self, rows: &[ProfileRow]) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished);
        }
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO array_factor (angle_deg, value) VALUES (?1, ?2)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![row.angle_deg, row.value])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
