//! Mileage record

use serde::{Deserialize, Serialize};

use super::record::{sum_values, EntrySort, RecordKind, RecordSchema, YardRecord};

/// Kilometres driven per day by a truck and its driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MileageRecord {
    pub truck_id: String,
    pub driver: String,
    pub daily_km: Vec<f64>,
    pub total: f64,
}

impl MileageRecord {
    pub fn new(truck_id: impl Into<String>, driver: impl Into<String>, daily_km: Vec<f64>) -> Self {
        let total = sum_values(&daily_km);
        Self {
            truck_id: truck_id.into(),
            driver: driver.into(),
            daily_km,
            total,
        }
    }
}

impl YardRecord for MileageRecord {
    const SCHEMA: RecordSchema = RecordSchema {
        kind: RecordKind::Mileage,
        text_columns: &["Camion", "Chofer"],
        value_prefix: "Km_Dia_",
        value_label: "Dia",
        fixed_values: None,
        key_label: "driver",
        secondary_label: "Driver",
        entry_sort: EntrySort::InsertionAscending,
    };

    fn from_parts(text: Vec<String>, values: Vec<f64>, total: f64) -> Self {
        let mut text = text.into_iter();
        Self {
            truck_id: text.next().unwrap_or_default(),
            driver: text.next().unwrap_or_default(),
            daily_km: values,
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
        &self.daily_km
    }

    fn values_mut(&mut self) -> &mut Vec<f64> {
        &mut self.daily_km
    }

    fn total(&self) -> f64 {
        self.total
    }

    fn set_total(&mut self, total: f64) {
        self.total = total;
    }
}
