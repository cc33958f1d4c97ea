//! Truck yard movements
//!
//! A movement is either a truck entering the yard or leaving it. Entries sit
//! on the yard stack until the matching exit; both kinds are appended to the
//! history file.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp format used in the history file
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Direction of a yard movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementKind {
    #[serde(rename = "ENTRADA")]
    Entry,
    #[serde(rename = "SALIDA")]
    Exit,
}

impl MovementKind {
    /// Value written to the `Movimiento` column
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::Entry => "ENTRADA",
            MovementKind::Exit => "SALIDA",
        }
    }
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One truck entering or leaving the yard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YardMovement {
    pub truck_id: String,
    pub driver_name: String,
    pub kind: MovementKind,
    /// Local time, `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,
}

impl YardMovement {
    /// Create a movement stamped with the current local time
    pub fn now(truck_id: impl Into<String>, driver_name: impl Into<String>, kind: MovementKind) -> Self {
        Self {
            truck_id: truck_id.into(),
            driver_name: driver_name.into(),
            kind,
            timestamp: current_timestamp(),
        }
    }

    /// Line written to the history file (no trailing newline)
    pub fn to_history_line(&self) -> String {
        format!(
            "{},{},{},{}",
            self.timestamp, self.truck_id, self.driver_name, self.kind
        )
    }
}

/// Current local time in history format
pub fn current_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_history_line() {
        let movement = YardMovement {
            truck_id: "T100".to_string(),
            driver_name: "Ana".to_string(),
            kind: MovementKind::Entry,
            timestamp: "2025-03-01 08:15:00".to_string(),
        };
        assert_eq!(movement.to_history_line(), "2025-03-01 08:15:00,T100,Ana,ENTRADA");
    }

    #[test]
    fn test_timestamp_format() {
        let movement = YardMovement::now("T1", "Luis", MovementKind::Exit);
        assert!(NaiveDateTime::parse_from_str(&movement.timestamp, TIMESTAMP_FORMAT).is_ok());
        assert_eq!(movement.kind.to_string(), "SALIDA");
    }
}
