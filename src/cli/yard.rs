//! Truck yard submenu

use std::io::{BufRead, Write};

use crate::display::{format_history, format_movement, format_yard_status};
use crate::error::{YardError, YardResult};
use crate::services::{Audited, YardLedger, YARD_CAPACITY};
use crate::storage::Storage;

use super::prompt::Prompter;

/// Run the yard submenu against the session's ledger
pub fn run_yard_menu<I: BufRead, O: Write>(
    prompter: &mut Prompter<I, O>,
    storage: &Storage,
    ledger: &mut YardLedger<'_>,
) -> YardResult<()> {
    loop {
        prompter.say("\n=== TRUCK YARD ===")?;
        prompter.say(format_yard_status(ledger.depth()))?;
        prompter.say("1. Register entry")?;
        prompter.say("2. Register exit")?;
        prompter.say("3. Show movement history")?;
        prompter.say("4. Back")?;

        match prompter.menu_choice("Select an option: ")? {
            1 => register_entry(prompter, ledger)?,
            2 => register_exit(prompter, ledger)?,
            3 => show_history(prompter, storage)?,
            4 => return Ok(()),
            _ => prompter.warn("invalid option")?,
        }

        prompter.pause()?;
    }
}

fn register_entry<I: BufRead, O: Write>(
    prompter: &mut Prompter<I, O>,
    ledger: &mut YardLedger<'_>,
) -> YardResult<()> {
    if ledger.is_full() {
        return prompter.report(YardError::YardFull {
            capacity: YARD_CAPACITY,
        });
    }

    let truck_id = prompter.text("Truck number: ")?;
    let driver = prompter.text("Driver: ")?;

    match ledger.push_entry(&truck_id, &driver) {
        Ok(entry) => {
            prompter.say(format_args!("Entry registered: {}", format_movement(&entry.value)))?;
            prompter.unaudited(entry.audit_error)
        }
        Err(e) => prompter.report(e),
    }
}

fn register_exit<I: BufRead, O: Write>(
    prompter: &mut Prompter<I, O>,
    ledger: &mut YardLedger<'_>,
) -> YardResult<()> {
    let Some(top) = ledger.peek() else {
        return prompter.report(YardError::YardEmpty);
    };
    prompter.say(format_args!(
        "Next truck out: {} (driver: {})",
        top.truck_id, top.driver_name
    ))?;

    let truck_id = prompter.text("Confirm truck number: ")?;
    let driver = prompter.text("Driver: ")?;

    match ledger.pop_exit(&truck_id, &driver) {
        Ok(Audited {
            value: receipt,
            audit_error,
        }) => {
            if receipt.mismatch {
                prompter.warn(format_args!(
                    "truck {} is not the last one in; {} was checked out",
                    receipt.exit.truck_id, receipt.departed.truck_id
                ))?;
            }
            prompter.say(format_args!("Exit registered: {}", format_movement(&receipt.exit)))?;
            prompter.unaudited(audit_error)
        }
        Err(e) => prompter.report(e),
    }
}

fn show_history<I: BufRead, O: Write>(
    prompter: &mut Prompter<I, O>,
    storage: &Storage,
) -> YardResult<()> {
    match storage.history.read_all() {
        Ok(Some(rows)) => prompter.show(format_history(&rows)),
        Ok(None) => prompter.say("No movements recorded yet."),
        Err(e) => prompter.report(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::prompt::tests::{scripted, transcript};
    use crate::config::{DataPaths, Settings};
    use std::fs;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = DataPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_history_before_any_movement() {
        let (_temp_dir, storage) = create_test_storage();
        let mut ledger = YardLedger::new(&storage);
        let mut p = scripted(&["3", "", "4"]);

        run_yard_menu(&mut p, &storage, &mut ledger).unwrap();
        assert!(transcript(&p).contains("No movements recorded yet."));
    }

    #[test]
    fn test_exit_on_empty_yard() {
        let (_temp_dir, storage) = create_test_storage();
        let mut ledger = YardLedger::new(&storage);
        let mut p = scripted(&["2", "", "4"]);

        run_yard_menu(&mut p, &storage, &mut ledger).unwrap();

        assert!(transcript(&p).contains("Error: Empty yard"));
        assert!(!storage.history.exists());
    }

    #[test]
    fn test_mismatched_exit_warns() {
        let (_temp_dir, storage) = create_test_storage();
        let mut ledger = YardLedger::new(&storage);
        let mut p = scripted(&[
            "1", "T100", "Ana", "", //
            "1", "T200", "Luis", "", //
            "2", "T999", "Luis", "", //
            "3", "", "4",
        ]);

        run_yard_menu(&mut p, &storage, &mut ledger).unwrap();

        let out = transcript(&p);
        assert!(out.contains("Next truck out: T200"));
        assert!(out.contains("Warning: truck T999 is not the last one in; T200 was checked out"));
        assert!(out.contains("Trucks in yard: 1 of 5"));
        assert!(out.contains("SALIDA"));
        assert_eq!(ledger.depth(), 1);
    }

    #[test]
    fn test_full_yard_skips_prompts() {
        let (_temp_dir, storage) = create_test_storage();
        let mut ledger = YardLedger::new(&storage);
        for i in 0..YARD_CAPACITY {
            ledger.push_entry(&format!("T{}", i), "Ana").unwrap();
        }
        let mut p = scripted(&["1", "", "4"]);

        run_yard_menu(&mut p, &storage, &mut ledger).unwrap();

        assert!(transcript(&p).contains("Error: Limit reached"));
        assert_eq!(ledger.depth(), YARD_CAPACITY);
    }

    #[test]
    fn test_unwritable_history_reports_error_and_keeps_yard() {
        let (_temp_dir, storage) = create_test_storage();
        let mut ledger = YardLedger::new(&storage);
        fs::create_dir(storage.history.path()).unwrap();
        let mut p = scripted(&["1", "T1", "Ana", "", "4"]);

        run_yard_menu(&mut p, &storage, &mut ledger).unwrap();

        let out = transcript(&p);
        assert!(out.contains("Error: Storage error: Failed to open yard history"));
        assert!(!out.contains("Entry registered"));
        assert_eq!(ledger.depth(), 0);
    }

    #[test]
    fn test_unwritable_audit_log_still_warns_on_mismatch() {
        let (_temp_dir, storage) = create_test_storage();
        let mut ledger = YardLedger::new(&storage);
        fs::create_dir(storage.paths().audit_log()).unwrap();
        let mut p = scripted(&["1", "T1", "Ana", "", "2", "T9", "X", "", "4"]);

        run_yard_menu(&mut p, &storage, &mut ledger).unwrap();

        let out = transcript(&p);
        assert!(out.contains("Entry registered"));
        assert!(out.contains("Warning: truck T9 is not the last one in; T1 was checked out"));
        assert!(out.contains("Exit registered"));
        assert_eq!(out.matches("Warning: change saved but not audited").count(), 2);
        assert_eq!(ledger.depth(), 0);
    }
}
