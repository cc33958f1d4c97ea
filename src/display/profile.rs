//! Profile display formatting
//!
//! Company, driver and transport unit cards.

use crate::models::{CompanyProfile, Driver, TransportUnit};

fn field(label: &str, value: impl std::fmt::Display) -> String {
    format!("  {:<22} {}\n", format!("{}:", label), value)
}

/// Company card, including years in operation
pub fn format_company(company: &CompanyProfile, this_year: i32) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", company.name));
    output.push_str(&format!("{}\n", "=".repeat(company.name.len())));
    output.push_str(&field("Auditor", &company.auditor));
    output.push_str(&field("Specialist", &company.specialist_one));
    output.push_str(&field("Specialist", &company.specialist_two));
    output.push_str(&field("Started operating", company.start_year));
    output.push_str(&field("Years operating", company.years_operating(this_year)));
    output.push_str(&format!("\n  \"{}\"\n", company.slogan));
    output
}

pub fn format_driver(driver: &Driver) -> String {
    let mut output = String::from("Driver\n------\n");
    output.push_str(&field("Name", &driver.name));
    output.push_str(&field("ID", driver.id));
    output.push_str(&field("Age", driver.age));
    output.push_str(&field("Phone", &driver.phone));
    output.push_str(&field("Postal code", driver.postal_code));
    output
}

pub fn format_unit(unit: &TransportUnit) -> String {
    let mut output = String::from("Transport unit\n--------------\n");
    output.push_str(&field("Truck", unit.truck_id));
    output.push_str(&field("Plates", unit.plates));
    output.push_str(&field("Color", &unit.color));
    output.push_str(&field("Model year", unit.model_year));
    output.push_str(&field("Assigned driver", &unit.assigned_driver));
    output.push_str(&field("Years with company", unit.years_with_company));
    output
}
