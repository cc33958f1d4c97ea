//! Daily revenue record
//!
//! One week of revenue for a truck and its driver, always seven values.

use serde::{Deserialize, Serialize};

use super::record::{sum_values, EntrySort, RecordKind, RecordSchema, YardRecord};

/// Number of daily revenue values per record
pub const REVENUE_DAYS: usize = 7;

/// Weekday labels used when the revenue belongs to the current week
pub const WEEKDAYS: [&str; REVENUE_DAYS] = [
    "Lunes",
    "Martes",
    "Miercoles",
    "Jueves",
    "Viernes",
    "Sabado",
    "Domingo",
];

/// Revenue collected by one truck over a week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueRecord {
    pub truck_id: String,
    pub driver: String,
    pub daily_revenue: Vec<f64>,
    pub total: f64,
}

impl RevenueRecord {
    /// Create a record whose total is the sum of its values
    pub fn new(truck_id: impl Into<String>, driver: impl Into<String>, daily_revenue: Vec<f64>) -> Self {
        let total = sum_values(&daily_revenue);
        Self {
            truck_id: truck_id.into(),
            driver: driver.into(),
            daily_revenue,
            total,
        }
    }

    /// Label for day `index` (0-based)
    pub fn day_label(index: usize, current_week: bool) -> String {
        match WEEKDAYS.get(index) {
            Some(name) if current_week => name.to_string(),
            _ => format!("Dia {}", index + 1),
        }
    }
}

impl YardRecord for RevenueRecord {
    const SCHEMA: RecordSchema = RecordSchema {
        kind: RecordKind::Revenue,
        text_columns: &["Camion", "Chofer"],
        value_prefix: "Dia_",
        value_label: "Dia",
        fixed_values: Some(REVENUE_DAYS),
        key_label: "driver",
        secondary_label: "Driver",
        entry_sort: EntrySort::BubbleDescending,
    };

    fn from_parts(text: Vec<String>, values: Vec<f64>, total: f64) -> Self {
        let mut text = text.into_iter();
        Self {
            truck_id: text.next().unwrap_or_default(),
            driver: text.next().unwrap_or_default(),
            daily_revenue: values,
            total,
        }
    }

    fn text_fields(&self) -> Vec<&str> {
        vec![&self.truck_id, &self.driver]
    }

    fn identifier(&self) -> &str {
        &self.truck_id
    }

    fn secondary(&self) -> &str {
        &self.driver
    }

    fn set_secondary(&mut self, value: String) {
        self.driver = value;
    }

    fn values(&self) -> &[f64] {
        &self.daily_revenue
    }

    fn values_mut(&mut self) -> &mut Vec<f64> {
        &mut self.daily_revenue
    }

    fn total(&self) -> f64 {
        self.total
    }

    fn set_total(&mut self, total: f64) {
        self.total = total;
    }
}
