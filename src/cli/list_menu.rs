//! List console shared by the three record lists
//!
//! The list is reloaded from disk at the top of every iteration, so the
//! preview sort (option 6) never outlives the screen that shows it.

use std::io::{BufRead, Write};

use crate::display::{format_record_table, format_search_hit};
use crate::error::{YardError, YardResult};
use crate::models::{RecordKind, YardRecord};
use crate::services::{preview_sort, RecordService, RecordUpdate, SortDirection, SortField};
use crate::storage::{RecordStore, Storage};

use super::prompt::Prompter;

/// How the user left the list console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListExit {
    /// Option 2: go back to the entry flow for another record
    AddNew,
    /// Option 9
    MainMenu,
}

fn title(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Revenue => "TRUCK REVENUE",
        RecordKind::Workshop => "WORKSHOP COSTS",
        RecordKind::Mileage => "TRUCK MILEAGE",
    }
}

/// Run the list console until the user picks option 2 or 9
pub fn run_list_menu<R, I, O>(
    prompter: &mut Prompter<I, O>,
    storage: &Storage,
    store: &RecordStore<R>,
) -> YardResult<ListExit>
where
    R: YardRecord,
    I: BufRead,
    O: Write,
{
    let schema = R::SCHEMA;
    let service = RecordService::new(storage, store);

    loop {
        let mut records = match service.load() {
            Ok(records) => records,
            Err(e) => {
                prompter.report(e)?;
                Vec::new()
            }
        };

        prompter.say(format_args!("\n=== {} ===", title(schema.kind)))?;
        prompter.say("1. Show all records")?;
        prompter.say("2. Add a new record")?;
        prompter.say("3. Delete a record")?;
        prompter.say("4. Search")?;
        prompter.say("5. Update a record")?;
        prompter.say("6. Sort (preview)")?;
        prompter.say("7. Count records")?;
        prompter.say("8. Check if empty")?;
        prompter.say("9. Return to main menu")?;

        match prompter.menu_choice("Select an option: ")? {
            1 => prompter.show(format_record_table(&records))?,
            2 => return Ok(ListExit::AddNew),
            3 => delete_record(prompter, &service, &mut records)?,
            4 => search_records(prompter, &service, &records)?,
            5 => update_record(prompter, &service, &mut records)?,
            6 => sort_preview(prompter, &mut records)?,
            7 => prompter.say(format_args!("Total records: {}", service.count(&records)))?,
            8 => {
                if service.is_empty(&records) {
                    prompter.say("The list is empty.")?;
                } else {
                    prompter.say(format_args!(
                        "The list is not empty ({} record(s)).",
                        service.count(&records)
                    ))?;
                }
            }
            9 => return Ok(ListExit::MainMenu),
            _ => prompter.warn("invalid option")?,
        }

        prompter.pause()?;
    }
}

fn ask_key<R, I, O>(prompter: &mut Prompter<I, O>) -> YardResult<(String, String)>
where
    R: YardRecord,
    I: BufRead,
    O: Write,
{
    let identifier = prompter.text("Truck number: ")?;
    let key = prompter.text(&format!("{}: ", capitalize(R::SCHEMA.key_label)))?;
    Ok((identifier, key))
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn delete_record<R, I, O>(
    prompter: &mut Prompter<I, O>,
    service: &RecordService<'_, R>,
    records: &mut Vec<R>,
) -> YardResult<()>
where
    R: YardRecord,
    I: BufRead,
    O: Write,
{
    let (identifier, key) = ask_key::<R, _, _>(prompter)?;

    match service.delete(records, &identifier, &key) {
        Ok(removed) if removed.value == 0 => prompter.warn(YardError::record_not_found(
            "Record",
            format!("{}/{}", identifier, key),
        )),
        Ok(removed) => {
            prompter.say(format_args!("Removed {} record(s).", removed.value))?;
            prompter.unaudited(removed.audit_error)
        }
        Err(e) => prompter.report(e),
    }
}

fn search_records<R, I, O>(
    prompter: &mut Prompter<I, O>,
    service: &RecordService<'_, R>,
    records: &[R],
) -> YardResult<()>
where
    R: YardRecord,
    I: BufRead,
    O: Write,
{
    let query = prompter.text("Search for: ")?;
    let hits = service.search(records, &query);

    if hits.is_empty() {
        return prompter.say(format_args!("No records match '{}'.", query));
    }

    for (i, record) in hits.iter().enumerate() {
        prompter.say(format_search_hit(i + 1, *record))?;
    }
    prompter.say(format_args!("{} match(es) found.", hits.len()))
}

fn update_record<R, I, O>(
    prompter: &mut Prompter<I, O>,
    service: &RecordService<'_, R>,
    records: &mut [R],
) -> YardResult<()>
where
    R: YardRecord,
    I: BufRead,
    O: Write,
{
    let (identifier, key) = ask_key::<R, _, _>(prompter)?;

    let result = service.update_with(records, &identifier, &key, |current| {
        let mut values = Vec::with_capacity(current.values().len());
        for (i, old) in current.values().iter().enumerate() {
            values.push(prompter.decimal(&format!(
                "{} {} (was {:.2}): ",
                R::SCHEMA.value_label,
                i + 1,
                old
            ))?);
        }

        // Workshop records are keyed by workshop, which leaves the supervisor editable
        let secondary = match current.tertiary() {
            Some(_) => Some(prompter.text(&format!(
                "{} (was {}): ",
                R::SCHEMA.secondary_label,
                current.secondary()
            ))?),
            None => None,
        };

        Ok(RecordUpdate { values, secondary })
    });

    match result {
        Ok(Some(updated)) => {
            prompter.say(format_args!(
                "Record updated. New total: {:.2}",
                updated.value.total()
            ))?;
            prompter.unaudited(updated.audit_error)
        }
        Ok(None) => prompter.warn(YardError::record_not_found(
            "Record",
            format!("{}/{}", identifier, key),
        )),
        Err(e) => prompter.report(e),
    }
}

fn sort_preview<R, I, O>(prompter: &mut Prompter<I, O>, records: &mut [R]) -> YardResult<()>
where
    R: YardRecord,
    I: BufRead,
    O: Write,
{
    prompter.say("Sort by:")?;
    prompter.say("1. Truck number")?;
    prompter.say(format_args!("2. {}", capitalize(R::SCHEMA.key_label)))?;
    prompter.say("3. Total")?;

    let Some(field) = SortField::from_choice(prompter.menu_choice("Field: ")?) else {
        return prompter.warn("invalid sort field");
    };

    prompter.say("1. Ascending")?;
    prompter.say("2. Descending")?;
    let direction = SortDirection::from_choice(prompter.menu_choice("Order: ")?);

    preview_sort(records, field, direction);

    prompter.say(format_args!(
        "Sorted {} (preview only, the file keeps its order):",
        direction.label().to_lowercase()
    ))?;
    prompter.show(format_record_table(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::prompt::tests::{scripted, transcript};
    use crate::config::{DataPaths, Settings};
    use crate::models::{MileageRecord, WorkshopRecord};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = DataPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_return_to_main_menu() {
        let (_temp_dir, storage) = create_test_storage();
        let mut p = scripted(&["9"]);

        let exit = run_list_menu(&mut p, &storage, &storage.mileage).unwrap();
        assert_eq!(exit, ListExit::MainMenu);
    }

    #[test]
    fn test_add_new_leaves_console() {
        let (_temp_dir, storage) = create_test_storage();
        let mut p = scripted(&["2"]);

        let exit = run_list_menu(&mut p, &storage, &storage.revenue).unwrap();
        assert_eq!(exit, ListExit::AddNew);
    }

    #[test]
    fn test_invalid_option_warns_and_loops() {
        let (_temp_dir, storage) = create_test_storage();
        let mut p = scripted(&["abc", "", "9"]);

        run_list_menu(&mut p, &storage, &storage.mileage).unwrap();
        assert!(transcript(&p).contains("Warning: invalid option"));
    }

    #[test]
    fn test_delete_through_console() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .workshop
            .save_all(&[
                WorkshopRecord::new("T1", "Pedro", "TallerX", vec![100.0]),
                WorkshopRecord::new("T2", "Rosa", "TallerX", vec![80.0]),
            ])
            .unwrap();
        let mut p = scripted(&["3", "T1", "TallerX", "", "7", "", "9"]);

        run_list_menu(&mut p, &storage, &storage.workshop).unwrap();

        let out = transcript(&p);
        assert!(out.contains("Removed 1 record(s)."));
        assert!(out.contains("Total records: 1"));
        assert_eq!(storage.workshop.load().unwrap().len(), 1);
    }

    #[test]
    fn test_update_workshop_asks_supervisor() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .workshop
            .save_all(&[WorkshopRecord::new("T1", "Pedro", "TallerX", vec![100.0, 50.0])])
            .unwrap();
        let mut p = scripted(&["5", "T1", "TallerX", "10", "20", "Marta", "", "9"]);

        run_list_menu(&mut p, &storage, &storage.workshop).unwrap();

        let record = &storage.workshop.load().unwrap()[0];
        assert_eq!(record.supervisor, "Marta");
        assert_eq!(record.total, 30.0);
        assert!(transcript(&p).contains("New total: 30.00"));
    }

    #[test]
    fn test_update_missing_record_warns() {
        let (_temp_dir, storage) = create_test_storage();
        let mut p = scripted(&["5", "T9", "Ana", "", "9"]);

        run_list_menu(&mut p, &storage, &storage.mileage).unwrap();
        assert!(transcript(&p).contains("Warning: Record not found: T9/Ana"));
    }

    #[test]
    fn test_search_and_empty_check() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .mileage
            .save_all(&[
                MileageRecord::new("T1", "Ana", vec![10.0]),
                MileageRecord::new("T2", "Ana", vec![20.0]),
            ])
            .unwrap();
        let mut p = scripted(&["4", "Ana", "", "4", "Zoe", "", "8", "", "9"]);

        run_list_menu(&mut p, &storage, &storage.mileage).unwrap();

        let out = transcript(&p);
        assert!(out.contains("1. Truck: T1"));
        assert!(out.contains("2. Truck: T2"));
        assert!(out.contains("2 match(es) found."));
        assert!(out.contains("No records match 'Zoe'."));
        assert!(out.contains("The list is not empty (2 record(s))."));
    }

    #[test]
    fn test_sort_preview_leaves_file_order() {
        let (_temp_dir, storage) = create_test_storage();
        let records = vec![
            MileageRecord::new("T1", "Ana", vec![10.0]),
            MileageRecord::new("T2", "Luis", vec![300.0]),
        ];
        storage.mileage.save_all(&records).unwrap();
        let mut p = scripted(&["6", "3", "2", "", "6", "5", "", "9"]);

        run_list_menu(&mut p, &storage, &storage.mileage).unwrap();

        let out = transcript(&p);
        assert!(out.contains("Sorted descending"));
        assert!(out.contains("Warning: invalid sort field"));
        assert_eq!(storage.mileage.load().unwrap(), records);
    }
}
