//! Record store for the fleet CSV files
//!
//! One generic store serves the revenue, workshop and mileage files; the
//! column layout comes from each record kind's schema.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use crate::error::YardError;
use crate::models::{sum_values, YardRecord};

use super::csv_io::{append_row, format_decimal, read_rows, write_rows};

/// Load/save access to one record file
pub struct RecordStore<R> {
    path: PathBuf,
    _record: PhantomData<R>,
}

impl<R: YardRecord> RecordStore<R> {
    /// Create a store backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _record: PhantomData,
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every record in file order
    ///
    /// A missing file is an empty store. Unparsable numbers become `0.0`
    /// without dropping the row.
    pub fn load(&self) -> Result<Vec<R>, YardError> {
        Ok(read_rows(&self.path)?
            .into_iter()
            .map(parse_record::<R>)
            .collect())
    }

    /// Overwrite the file with `records`
    ///
    /// Variable-width kinds size the header from the first record.
    pub fn save_all(&self, records: &[R]) -> Result<(), YardError> {
        let value_count = records.first().map(|r| r.values().len()).unwrap_or(1);
        let header = R::SCHEMA.header(value_count);
        let rows: Vec<Vec<String>> = records.iter().map(record_row).collect();

        write_rows(&self.path, &header, &rows).map_err(|e| {
            YardError::Storage(format!(
                "Could not overwrite {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    /// Append a single record to the end of the file
    pub fn append(&self, record: &R) -> Result<(), YardError> {
        let header = R::SCHEMA.header(record.values().len());
        append_row(&self.path, &header, &record_row(record))
    }
}

/// Fields of one record as written to disk
fn record_row<R: YardRecord>(record: &R) -> Vec<String> {
    let mut row: Vec<String> = record.text_fields().into_iter().map(str::to_string).collect();
    row.extend(record.values().iter().copied().map(format_decimal));
    row.push(format_decimal(record.total()));
    row
}

fn parse_decimal(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Build a record from the raw fields of one line
fn parse_record<R: YardRecord>(fields: Vec<String>) -> R {
    let text_count = R::SCHEMA.text_columns.len();
    let mut fields = fields.into_iter();

    let text: Vec<String> = (0..text_count)
        .map(|_| fields.next().unwrap_or_default())
        .collect();
    let numeric: Vec<String> = fields.collect();

    let (value_fields, total_field) = match R::SCHEMA.fixed_values {
        // Fixed width: up to N values, the next field is the total
        Some(n) => {
            let take = numeric.len().min(n);
            (&numeric[..take], numeric.get(n))
        }
        // Variable width: the last field is always the total
        None => match numeric.split_last() {
            Some((total, values)) => (values, Some(total)),
            None => (&numeric[..0], None),
        },
    };

    let values: Vec<f64> = value_fields
        .iter()
        .map(|f| parse_decimal(f).unwrap_or(0.0))
        .collect();
    let total = total_field
        .and_then(|f| parse_decimal(f))
        .unwrap_or_else(|| sum_values(&values));

    R::from_parts(text, values, total)
}
