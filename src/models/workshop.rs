//! Workshop cost record
//!
//! Repair costs of one truck at one workshop, one value per visit.

use serde::{Deserialize, Serialize};

use super::record::{sum_values, EntrySort, RecordKind, RecordSchema, YardRecord};

/// Costs a truck accumulated at a workshop during the month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkshopRecord {
    pub truck_id: String,
    /// Person in charge of the truck while it was in the workshop
    pub supervisor: String,
    pub workshop: String,
    pub costs: Vec<f64>,
    pub total: f64,
}

impl WorkshopRecord {
    pub fn new(
        truck_id: impl Into<String>,
        supervisor: impl Into<String>,
        workshop: impl Into<String>,
        costs: Vec<f64>,
    ) -> Self {
        let total = sum_values(&costs);
        Self {
            truck_id: truck_id.into(),
            supervisor: supervisor.into(),
            workshop: workshop.into(),
            costs,
            total,
        }
    }
}

impl YardRecord for WorkshopRecord {
    const SCHEMA: RecordSchema = RecordSchema {
        kind: RecordKind::Workshop,
        text_columns: &["Camion", "Encargado", "Taller"],
        value_prefix: "Costo_",
        value_label: "Costo",
        fixed_values: None,
        key_label: "workshop",
        secondary_label: "Supervisor",
        entry_sort: EntrySort::SelectionAscending,
    };

    fn from_parts(text: Vec<String>, values: Vec<f64>, total: f64) -> Self {
        let mut text = text.into_iter();
        Self {
            truck_id: text.next().unwrap_or_default(),
            supervisor: text.next().unwrap_or_default(),
            workshop: text.next().unwrap_or_default(),
            costs: values,
            total,
        }
    }

    fn text_fields(&self) -> Vec<&str> {
        vec![&self.truck_id, &self.supervisor, &self.workshop]
    }

    fn identifier(&self) -> &str {
        &self.truck_id
    }

    fn secondary(&self) -> &str {
        &self.supervisor
    }

    fn set_secondary(&mut self, value: String) {
        self.supervisor = value;
    }

    fn tertiary(&self) -> Option<&str> {
        Some(&self.workshop)
    }

    fn values(&self) -> &[f64] {
        &self.costs
    }

    fn values_mut(&mut self) -> &mut Vec<f64> {
        &mut self.costs
    }

    fn total(&self) -> f64 {
        self.total
    }

    fn set_total(&mut self, total: f64) {
        self.total = total;
    }
}
