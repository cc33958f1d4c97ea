//! Company, driver and transport unit screens

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::display::{format_company, format_driver, format_unit};
use crate::error::YardResult;
use crate::models::profile::current_year;
use crate::models::{Driver, TransportUnit};

use super::prompt::Prompter;

/// Show the company card
///
/// A blank, zero or unparseable start year keeps the configured one.
pub fn company_info<I: BufRead, O: Write>(
    prompter: &mut Prompter<I, O>,
    settings: &Settings,
    this_year: i32,
) -> YardResult<()> {
    let mut company = settings.company.clone();

    let answer = prompter.text(&format!(
        "Year the company started operating [{}]: ",
        company.start_year
    ))?;
    match answer.parse::<i32>() {
        Ok(year) if year != 0 => company.start_year = year,
        _ => {}
    }

    prompter.say("")?;
    prompter.show(format_company(&company, this_year))
}

pub fn driver_intake<I: BufRead, O: Write>(prompter: &mut Prompter<I, O>) -> YardResult<Driver> {
    prompter.say("\n=== DRIVER DETAILS ===")?;
    let name = prompter.text("Full name: ")?;
    let id = prompter.integer("Employee ID: ")?;
    let birth_year = prompter.integer("Year of birth: ")? as i32;
    let phone = prompter.text("Phone: ")?;
    let postal_code = prompter.integer("Postal code: ")?;

    let driver = Driver::new(name, id, birth_year, phone, postal_code, current_year());
    prompter.say("")?;
    prompter.show(format_driver(&driver))?;
    Ok(driver)
}

pub fn unit_intake<I: BufRead, O: Write>(prompter: &mut Prompter<I, O>) -> YardResult<TransportUnit> {
    prompter.say("\n=== TRANSPORT UNIT ===")?;
    let unit = TransportUnit {
        truck_id: prompter.integer("Truck number: ")?,
        plates: prompter.integer("Plates (digits only): ")?,
        color: prompter.text("Color: ")?,
        model_year: prompter.integer("Model year: ")? as i32,
        assigned_driver: prompter.text("Assigned driver: ")?,
        years_with_company: prompter.integer("Years with the company: ")? as i32,
    };

    prompter.say("")?;
    prompter.show(format_unit(&unit))?;
    Ok(unit)
}
