//! Flat CSV file utilities
//!
//! The record files are plain comma separated text without any quoting:
//! fields are split on every literal comma and written verbatim. A free-text
//! field containing a comma will therefore shift the columns of its row; the
//! files stay byte-compatible with the ones the yard office already keeps.

use std::fs::{self, File, OpenOptions};
use std::path::Path;

use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};

use crate::error::YardError;

/// Read every data row of a CSV file, skipping the header line
///
/// A missing file yields no rows. Rows may have different lengths. Bytes
/// that are not valid UTF-8 are replaced rather than failing the row.
pub fn read_rows<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>, YardError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_path(path)
        .map_err(|e| YardError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut rows = Vec::new();
    for (line_num, record) in reader.byte_records().enumerate() {
        let record = record.map_err(|e| {
            YardError::Storage(format!(
                "Failed to read {} row {}: {}",
                path.display(),
                line_num + 1,
                e
            ))
        })?;
        rows.push(
            record
                .iter()
                .map(|field| String::from_utf8_lossy(field).into_owned())
                .collect(),
        );
    }

    Ok(rows)
}

/// Overwrite a CSV file with a header and the given rows
///
/// The rows are written to a temporary file first and renamed over the
/// target, so a failed write leaves the previous contents in place.
pub fn write_rows<P: AsRef<Path>>(
    path: P,
    header: &[String],
    rows: &[Vec<String>],
) -> Result<(), YardError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            YardError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| YardError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = WriterBuilder::new()
        .flexible(true)
        .quote_style(QuoteStyle::Never)
        .from_writer(file);

    writer
        .write_record(header)
        .map_err(|e| YardError::Storage(format!("Failed to write header: {}", e)))?;
    for row in rows {
        writer
            .write_record(row)
            .map_err(|e| YardError::Storage(format!("Failed to write row: {}", e)))?;
    }

    let file = writer
        .into_inner()
        .map_err(|e| YardError::Storage(format!("Failed to flush data: {}", e)))?;
    file.sync_all()
        .map_err(|e| YardError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        YardError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Append one row, writing `header` first when the file is missing or empty
pub fn append_row<P: AsRef<Path>>(path: P, header: &[String], row: &[String]) -> Result<(), YardError> {
    let path = path.as_ref();

    let needs_header = fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| YardError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut writer = WriterBuilder::new()
        .flexible(true)
        .quote_style(QuoteStyle::Never)
        .from_writer(file);

    if needs_header {
        writer
            .write_record(header)
            .map_err(|e| YardError::Storage(format!("Failed to write header: {}", e)))?;
    }
    writer
        .write_record(row)
        .map_err(|e| YardError::Storage(format!("Failed to write row: {}", e)))?;
    writer
        .flush()
        .map_err(|e| YardError::Storage(format!("Failed to flush data: {}", e)))?;

    Ok(())
}

/// Format a value the way every record file stores it
pub fn format_decimal(value: f64) -> String {
    format!("{:.2}", value)
}
