//! Main menu

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::error::YardResult;
use crate::models::profile::current_year;
use crate::services::YardLedger;
use crate::storage::Storage;

use super::entry::run_sorting_menu;
use super::payroll::payroll_rollup;
use super::profiles::{company_info, driver_intake, unit_intake};
use super::prompt::Prompter;
use super::sales::sale_discount;
use super::yard::run_yard_menu;

/// Run the main menu until the user picks "exit"
///
/// The yard ledger lives for the whole session. Screen errors are printed
/// and the menu carries on; only closed input ends the loop early.
pub fn run<I: BufRead, O: Write>(
    prompter: &mut Prompter<I, O>,
    storage: &Storage,
    settings: &Settings,
) -> YardResult<()> {
    let mut ledger = YardLedger::new(storage);
    prompter.clear()?;

    loop {
        prompter.say(format_args!("\n=== {} ===", settings.company.name))?;
        prompter.say("1. Company information")?;
        prompter.say("2. Driver details")?;
        prompter.say("3. Transport unit details")?;
        prompter.say("4. Sale with discount")?;
        prompter.say("5. Payroll")?;
        prompter.say("6. Sorting and record lists")?;
        prompter.say("7. Truck yard")?;
        prompter.say("8. Exit")?;

        let result = match prompter.menu_choice("Select an option: ")? {
            1 => company_info(prompter, settings, current_year()),
            2 => driver_intake(prompter).map(|_| ()),
            3 => unit_intake(prompter).map(|_| ()),
            4 => sale_discount(prompter).map(|_| ()),
            5 => payroll_rollup(prompter).map(|_| ()),
            6 => {
                run_sorting_menu(prompter, storage)?;
                continue;
            }
            7 => {
                run_yard_menu(prompter, storage, &mut ledger)?;
                continue;
            }
            8 => {
                prompter.say(settings.company.slogan.as_str())?;
                prompter.say("Goodbye.")?;
                return Ok(());
            }
            _ => prompter.warn("invalid option"),
        };

        if let Err(e) = result {
            prompter.report(e)?;
        }
        prompter.pause()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::prompt::tests::{scripted, transcript};
    use crate::config::DataPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = DataPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_exit() {
        let (_temp_dir, storage) = create_test_storage();
        let mut p = scripted(&["8"]);

        run(&mut p, &storage, &Settings::default()).unwrap();
        assert!(transcript(&p).contains("Goodbye."));
    }

    #[test]
    fn test_invalid_option_then_exit() {
        let (_temp_dir, storage) = create_test_storage();
        let mut p = scripted(&["42", "", "8"]);

        run(&mut p, &storage, &Settings::default()).unwrap();
        assert!(transcript(&p).contains("Warning: invalid option"));
    }

    #[test]
    fn test_ledger_survives_leaving_yard_menu() {
        let (_temp_dir, storage) = create_test_storage();
        let mut p = scripted(&["7", "1", "T1", "Ana", "", "4", "7", "4", "8"]);

        run(&mut p, &storage, &Settings::default()).unwrap();
        assert!(transcript(&p).contains("Trucks in yard: 1 of 5"));
    }

    #[test]
    fn test_closed_input_is_reported() {
        let (_temp_dir, storage) = create_test_storage();
        let mut p = scripted(&["1"]);

        let err = run(&mut p, &storage, &Settings::default()).unwrap_err();
        assert!(err.is_input_closed());
    }
}
