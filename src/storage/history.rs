//! Append-only yard history file
//!
//! Every entry and exit is appended as `Fecha_Hora,Camion,Conductor,Movimiento`.
//! The file is only ever read for display; it is never replayed into the yard
//! stack.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::YardError;
use crate::models::YardMovement;

/// Header line of the history file
pub const HISTORY_HEADER: &str = "Fecha_Hora,Camion,Conductor,Movimiento";

/// One line of the history file, split into its four columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub timestamp: String,
    pub truck_id: String,
    pub driver_name: String,
    pub movement: String,
}

impl HistoryRow {
    /// Split a line at its first three commas
    ///
    /// The movement column keeps whatever follows the third comma, so a
    /// driver name containing a comma shifts the remaining columns.
    pub fn parse(line: &str) -> Self {
        let (timestamp, rest) = line.split_once(',').unwrap_or((line, ""));
        let (truck_id, rest) = rest.split_once(',').unwrap_or((rest, ""));
        let (driver_name, movement) = rest.split_once(',').unwrap_or((rest, ""));

        Self {
            timestamp: timestamp.to_string(),
            truck_id: truck_id.to_string(),
            driver_name: driver_name.to_string(),
            movement: movement.to_string(),
        }
    }
}

/// Handles the yard history file
pub struct HistoryLog {
    path: PathBuf,
}

impl HistoryLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Append a movement, writing the header first if the file did not exist
    pub fn append(&self, movement: &YardMovement) -> Result<(), YardError> {
        let is_new = !self.path.exists();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| YardError::Storage(format!("Failed to open yard history: {}", e)))?;

        if is_new {
            writeln!(file, "{}", HISTORY_HEADER)
                .map_err(|e| YardError::Storage(format!("Failed to write yard history: {}", e)))?;
        }

        writeln!(file, "{}", movement.to_history_line())
            .map_err(|e| YardError::Storage(format!("Failed to write yard history: {}", e)))?;

        file.flush()
            .map_err(|e| YardError::Storage(format!("Failed to flush yard history: {}", e)))?;

        Ok(())
    }

    /// Read every recorded movement in chronological order
    ///
    /// Returns `None` when nothing has been recorded yet.
    pub fn read_all(&self) -> Result<Option<Vec<HistoryRow>>, YardError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let file = File::open(&self.path)
            .map_err(|e| YardError::Storage(format!("Failed to open yard history: {}", e)))?;

        let mut rows = Vec::new();
        for (line_num, line) in BufReader::new(file).lines().enumerate().skip(1) {
            let line = line.map_err(|e| {
                YardError::Storage(format!(
                    "Failed to read yard history line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }
            rows.push(HistoryRow::parse(line));
        }

        Ok(Some(rows))
    }

    /// Number of raw lines in the file, header included
    pub fn line_count(&self) -> Result<usize, YardError> {
        if !self.path.exists() {
            return Ok(0);
        }

        let file = File::open(&self.path)
            .map_err(|e| YardError::Storage(format!("Failed to open yard history: {}", e)))?;

        Ok(BufReader::new(file).lines().count())
    }
}
