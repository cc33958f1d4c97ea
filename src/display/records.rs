//! Record list display formatting
//!
//! Tables use the same column names as the CSV header. Rows with fewer
//! values than the widest record are padded with `-`.

use crate::models::YardRecord;
use crate::storage::csv_io::format_decimal;

const MISSING: &str = "-";

/// Number of value columns a table over `records` needs
fn value_columns<R: YardRecord>(records: &[R]) -> usize {
    R::SCHEMA
        .fixed_values
        .unwrap_or_else(|| records.iter().map(|r| r.values().len()).max().unwrap_or(0))
}

fn record_cells<R: YardRecord>(record: &R, value_columns: usize) -> Vec<String> {
    let mut cells: Vec<String> = record.text_fields().iter().map(|s| s.to_string()).collect();
    cells.extend((0..value_columns).map(|i| {
        record
            .values()
            .get(i)
            .map(|v| format_decimal(*v))
            .unwrap_or_else(|| MISSING.to_string())
    }));
    cells.push(format_decimal(record.total()));
    cells
}

/// Format a record list as a table
pub fn format_record_table<R: YardRecord>(records: &[R]) -> String {
    if records.is_empty() {
        return format!("No {} records found.\n", R::SCHEMA.kind.to_string().to_lowercase());
    }

    let columns = value_columns(records);
    let header = R::SCHEMA.header(columns);
    let rows: Vec<Vec<String>> = records.iter().map(|r| record_cells(r, columns)).collect();
    let text_count = R::SCHEMA.text_columns.len();

    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(i, title)| {
            rows.iter()
                .map(|row| row.get(i).map_or(0, |c| c.chars().count()))
                .max()
                .unwrap_or(0)
                .max(title.chars().count())
        })
        .collect();

    let render = |cells: &[String]| -> String {
        let line: Vec<String> = cells
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (cell, &width))| {
                if i < text_count {
                    format!("{:<width$}", cell, width = width)
                } else {
                    format!("{:>width$}", cell, width = width)
                }
            })
            .collect();
        format!("{}\n", line.join("  ").trim_end())
    };

    let mut output = String::new();
    output.push_str(&render(&header));

    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    output.push_str(&format!("{}\n", separator.join("  ")));

    for row in &rows {
        output.push_str(&render(row));
    }

    output.push_str(&format!("\n{} record(s)\n", records.len()));
    output
}

/// One search hit, numbered from 1
pub fn format_search_hit<R: YardRecord>(position: usize, record: &R) -> String {
    let mut parts = vec![format!("Truck: {}", record.identifier())];
    parts.push(format!("{}: {}", R::SCHEMA.secondary_label, record.secondary()));
    if let Some(workshop) = record.tertiary() {
        parts.push(format!("Workshop: {}", workshop));
    }
    let values: Vec<String> = record.values().iter().map(|v| format_decimal(*v)).collect();
    parts.push(format!("Values: [{}]", values.join(", ")));
    parts.push(format!("Total: {}", format_decimal(record.total())));

    format!("{}. {}", position, parts.join(" | "))
}

/// Values of a freshly entered record, in stored order, followed by the total
pub fn format_entry_summary<R: YardRecord>(record: &R) -> String {
    let mut output = format!(
        "Values sorted with {}:\n",
        R::SCHEMA.entry_sort.method_name().to_lowercase()
    );
    for (i, value) in record.values().iter().enumerate() {
        let label = format!("{} {}:", R::SCHEMA.value_label, i + 1);
        output.push_str(&format!("  {:<12} {:>12}\n", label, format_decimal(*value)));
    }
    output.push_str(&format!("  {:<12} {:>12}\n", "Total:", format_decimal(record.total())));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MileageRecord, RevenueRecord, WorkshopRecord};

    #[test]
    fn test_empty_table() {
        let records: Vec<MileageRecord> = Vec::new();
        assert_eq!(format_record_table(&records), "No mileage records found.\n");
    }

    #[test]
    fn test_table_pads_missing_values() {
        let records = vec![
            MileageRecord::new("T1", "Ana", vec![10.0, 20.0, 30.0]),
            MileageRecord::new("T2", "Luis", vec![5.0]),
        ];

        let table = format_record_table(&records);
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[0].starts_with("Camion"));
        assert!(lines[0].contains("Km_Dia_3"));
        assert!(lines[0].ends_with("Total"));
        assert!(lines[3].contains("5.00"));
        assert_eq!(lines[3].matches(" -").count(), 2);
        assert!(table.contains("2 record(s)"));
    }

    #[test]
    fn test_accented_names_keep_columns_aligned() {
        let records = vec![
            MileageRecord::new("T1", "Muñoz", vec![10.0]),
            MileageRecord::new("T2", "Munoz", vec![20.0]),
        ];

        let table = format_record_table(&records);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[2].chars().count(), lines[3].chars().count());
        let column = |line: &str, value: &str| line.find(value).map(|i| line[..i].chars().count());
        assert_eq!(column(lines[2], "10.00"), column(lines[3], "20.00"));
    }

    #[test]
    fn test_revenue_table_always_has_seven_days() {
        let records = vec![RevenueRecord::new("T1", "Ana", vec![1.0, 2.0])];
        let table = format_record_table(&records);

        assert!(table.contains("Dia_7"));
        assert!(table.contains("3.00"));
    }

    #[test]
    fn test_search_hit_includes_workshop() {
        let record = WorkshopRecord::new("T1", "Pedro", "TallerX", vec![100.0, 50.0]);
        let line = format_search_hit(1, &record);

        assert!(line.starts_with("1. Truck: T1"));
        assert!(line.contains("Supervisor: Pedro"));
        assert!(line.contains("Workshop: TallerX"));
        assert!(line.contains("Total: 150.00"));
    }

    #[test]
    fn test_entry_summary() {
        let record = RevenueRecord::new("T1", "Ana", vec![70.0, 10.0]);
        let summary = format_entry_summary(&record);

        assert!(summary.starts_with("Values sorted with bubble sort:"));
        assert!(summary.contains("Dia 1:"));
        assert!(summary.contains("70.00"));
        assert!(summary.contains("80.00"));
    }
}
