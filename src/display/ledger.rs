//! Yard display formatting

use crate::models::YardMovement;
use crate::services::YARD_CAPACITY;
use crate::storage::HistoryRow;

/// "Trucks in yard" line shown by the yard menu
pub fn format_yard_status(depth: usize) -> String {
    format!("Trucks in yard: {} of {}", depth, YARD_CAPACITY)
}

/// One movement as confirmed to the user
pub fn format_movement(movement: &YardMovement) -> String {
    format!(
        "{}  {}  truck {} (driver: {})",
        movement.timestamp, movement.kind, movement.truck_id, movement.driver_name
    )
}

/// Format the yard history as a table
pub fn format_history(rows: &[HistoryRow]) -> String {
    if rows.is_empty() {
        return "The yard history has no movements.\n".to_string();
    }

    let truck_width = rows.iter().map(|r| r.truck_id.len()).max().unwrap_or(5).max(5);
    let driver_width = rows
        .iter()
        .map(|r| r.driver_name.len())
        .max()
        .unwrap_or(6)
        .max(6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<19}  {:<truck_width$}  {:<driver_width$}  {}\n",
        "Date/Time",
        "Truck",
        "Driver",
        "Movement",
        truck_width = truck_width,
        driver_width = driver_width,
    ));
    output.push_str(&format!(
        "{:-<19}  {:-<truck_width$}  {:-<driver_width$}  {:-<8}\n",
        "",
        "",
        "",
        "",
        truck_width = truck_width,
        driver_width = driver_width,
    ));

    for row in rows {
        output.push_str(&format!(
            "{:<19}  {:<truck_width$}  {:<driver_width$}  {}\n",
            row.timestamp,
            row.truck_id,
            row.driver_name,
            row.movement,
            truck_width = truck_width,
            driver_width = driver_width,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status() {
        assert_eq!(format_yard_status(3), "Trucks in yard: 3 of 5");
    }

    #[test]
    fn test_history_table() {
        let rows = vec![
            HistoryRow::parse("2025-01-01 08:00:00,T100,Ana,ENTRADA"),
            HistoryRow::parse("2025-01-01 09:30:00,T100,Ana,SALIDA"),
        ];
        let table = format_history(&rows);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Date/Time"));
        assert!(lines[2].contains("T100"));
        assert!(lines[3].ends_with("SALIDA"));
    }

    #[test]
    fn test_empty_history() {
        assert!(format_history(&[]).contains("no movements"));
    }
}
