//! Shared shape of the three fleet record lists
//!
//! Revenue, workshop and mileage records all look the same on disk: one or
//! more text columns, a run of decimal values and a trailing total. The
//! [`YardRecord`] trait exposes that shape so storage and list operations are
//! written once; each kind carries a [`RecordSchema`] describing its columns.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;

/// Which list a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Revenue,
    Workshop,
    Mileage,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Revenue => write!(f, "Revenue"),
            RecordKind::Workshop => write!(f, "Workshop"),
            RecordKind::Mileage => write!(f, "Mileage"),
        }
    }
}

/// O(n²) algorithm applied to the values of a freshly entered record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrySort {
    /// Bubble sort, largest value first
    BubbleDescending,
    /// Selection sort, smallest value first
    SelectionAscending,
    /// Insertion sort, smallest value first
    InsertionAscending,
}

impl EntrySort {
    /// Menu title for the flow that uses this algorithm
    pub fn method_name(&self) -> &'static str {
        match self {
            EntrySort::BubbleDescending => "BUBBLE SORT",
            EntrySort::SelectionAscending => "SELECTION SORT",
            EntrySort::InsertionAscending => "INSERTION SORT",
        }
    }
}

/// Column layout and behaviour of one record kind
#[derive(Debug, Clone, Copy)]
pub struct RecordSchema {
    pub kind: RecordKind,
    /// Header names of the leading text columns, in file order
    pub text_columns: &'static [&'static str],
    /// Header prefix of the value columns (`Dia_` -> `Dia_1`, `Dia_2`, ...)
    pub value_prefix: &'static str,
    /// Short label used when prompting for or displaying one value
    pub value_label: &'static str,
    /// Set when every record has exactly this many values
    pub fixed_values: Option<usize>,
    /// Human name of the text field used together with the truck id as a key
    pub key_label: &'static str,
    /// Human name of the secondary text field
    pub secondary_label: &'static str,
    pub entry_sort: EntrySort,
}

impl RecordSchema {
    /// Build the header row for a file holding `value_count` value columns
    ///
    /// Fixed-width kinds ignore `value_count`.
    pub fn header(&self, value_count: usize) -> Vec<String> {
        let count = self.fixed_values.unwrap_or(value_count);
        let mut header: Vec<String> = self.text_columns.iter().map(|c| c.to_string()).collect();
        header.extend((1..=count).map(|i| format!("{}{}", self.value_prefix, i)));
        header.push("Total".to_string());
        header
    }
}

/// Sum of a value sequence
pub fn sum_values(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// A record stored in one of the fleet CSV files
pub trait YardRecord: Clone + fmt::Debug + Serialize + DeserializeOwned {
    /// Column layout of this kind
    const SCHEMA: RecordSchema;

    /// Build a record from already parsed columns
    ///
    /// `text` holds exactly one entry per `SCHEMA.text_columns`.
    fn from_parts(text: Vec<String>, values: Vec<f64>, total: f64) -> Self;

    /// Text columns in file order
    fn text_fields(&self) -> Vec<&str>;

    /// Truck number
    fn identifier(&self) -> &str;

    /// Driver or supervisor name
    fn secondary(&self) -> &str;

    fn set_secondary(&mut self, value: String);

    /// Workshop name, only present on workshop records
    fn tertiary(&self) -> Option<&str> {
        None
    }

    fn values(&self) -> &[f64];

    fn values_mut(&mut self) -> &mut Vec<f64>;

    fn total(&self) -> f64;

    fn set_total(&mut self, total: f64);

    /// Restore `total == sum(values)`
    fn recompute_total(&mut self) {
        let total = sum_values(self.values());
        self.set_total(total);
    }

    /// Text field paired with the truck id to locate a record
    ///
    /// Workshop records are keyed by workshop name, the others by driver.
    fn match_key(&self) -> &str {
        self.tertiary().unwrap_or_else(|| self.secondary())
    }

    /// Exact match on (truck id, key field)
    fn matches_key(&self, identifier: &str, key: &str) -> bool {
        self.identifier() == identifier && self.match_key() == key
    }

    /// Exact match of a free search term against any text field
    fn matches_query(&self, query: &str) -> bool {
        self.identifier() == query
            || self.secondary() == query
            || self.tertiary().is_some_and(|t| t == query)
    }

    /// Identifier used in audit entries and messages
    fn audit_id(&self) -> String {
        format!("{}/{}", self.identifier(), self.match_key())
    }
}
