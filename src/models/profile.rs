//! Company, driver and transport unit profiles
//!
//! These are captured and printed by the intake screens; only the company
//! profile is persisted (as part of the settings file).

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

/// Calendar year used for age and seniority calculations
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Company shown under "company info"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub name: String,
    pub auditor: String,
    pub specialist_one: String,
    pub specialist_two: String,
    pub slogan: String,
    /// Year the company started operating
    pub start_year: i32,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            name: "Padilla y Montano SA de CV".to_string(),
            auditor: "Noemi Torrez Rubio".to_string(),
            specialist_one: "Dilhery Kenneth Padilla Ortega".to_string(),
            specialist_two: "Alexandra Hernandez Montano".to_string(),
            slogan: "Padilla y Montano: Liderando el camino.".to_string(),
            start_year: 2020,
        }
    }
}

impl CompanyProfile {
    /// Whole years since `start_year`
    pub fn years_operating(&self, this_year: i32) -> i32 {
        this_year - self.start_year
    }
}

/// Driver captured by the driver intake screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Driver {
    pub name: String,
    pub id: i64,
    pub age: i32,
    pub phone: String,
    pub postal_code: i64,
}

impl Driver {
    /// Age is derived from the birth year
    pub fn new(
        name: impl Into<String>,
        id: i64,
        birth_year: i32,
        phone: impl Into<String>,
        postal_code: i64,
        this_year: i32,
    ) -> Self {
        Self {
            name: name.into(),
            id,
            age: this_year - birth_year,
            phone: phone.into(),
            postal_code,
        }
    }
}

/// Truck captured by the transport unit intake screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportUnit {
    pub truck_id: i64,
    /// Plate number (digits only)
    pub plates: i64,
    pub color: String,
    pub model_year: i32,
    pub assigned_driver: String,
    pub years_with_company: i32,
}
