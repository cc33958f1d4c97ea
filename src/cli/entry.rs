//! Record entry flows and the sorting submenu
//!
//! Each flow captures one record, stores it with its values sorted, then
//! opens the list console for that kind. Choosing "add a new record" there
//! comes back here for the next one.

use std::io::{BufRead, Write};

use crate::display::format_entry_summary;
use crate::error::YardResult;
use crate::models::{MileageRecord, RevenueRecord, WorkshopRecord, YardRecord};
use crate::models::revenue::REVENUE_DAYS;
use crate::services::RecordService;
use crate::storage::{RecordStore, Storage};

use super::list_menu::{run_list_menu, ListExit};
use super::prompt::Prompter;

/// Where an entry flow hands control back to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowExit {
    /// Back to the sorting submenu (nothing was captured)
    Submenu,
    MainMenu,
}

/// Sorting submenu: pick which list to add to
///
/// Returns once the user asks for the main menu.
pub fn run_sorting_menu<I: BufRead, O: Write>(
    prompter: &mut Prompter<I, O>,
    storage: &Storage,
) -> YardResult<()> {
    loop {
        prompter.say("\n=== SORTING ===")?;
        prompter.say("1. Truck revenue (bubble sort)")?;
        prompter.say("2. Workshop costs (selection sort)")?;
        prompter.say("3. Truck mileage (insertion sort)")?;
        prompter.say("4. Back")?;

        let exit = match prompter.menu_choice("Select an option: ")? {
            1 => run_entry_flow(prompter, storage, &storage.revenue, capture_revenue)?,
            2 => run_entry_flow(prompter, storage, &storage.workshop, capture_workshop)?,
            3 => run_entry_flow(prompter, storage, &storage.mileage, capture_mileage)?,
            4 => return Ok(()),
            _ => {
                prompter.warn("invalid option")?;
                FlowExit::Submenu
            }
        };

        if exit == FlowExit::MainMenu {
            return Ok(());
        }
    }
}

/// Capture, store and list records of one kind until the user leaves
///
/// `capture` returns `None` when the user gave nothing to store.
pub fn run_entry_flow<R, I, O, F>(
    prompter: &mut Prompter<I, O>,
    storage: &Storage,
    store: &RecordStore<R>,
    mut capture: F,
) -> YardResult<FlowExit>
where
    R: YardRecord,
    I: BufRead,
    O: Write,
    F: FnMut(&mut Prompter<I, O>) -> YardResult<Option<R>>,
{
    let service = RecordService::new(storage, store);

    loop {
        prompter.say(format_args!(
            "\n=== NEW {} RECORD ({}) ===",
            R::SCHEMA.kind.to_string().to_uppercase(),
            R::SCHEMA.entry_sort.method_name()
        ))?;

        let Some(record) = capture(prompter)? else {
            prompter.pause()?;
            return Ok(FlowExit::Submenu);
        };

        match service.add(record) {
            Ok(stored) => {
                prompter.show(format_entry_summary(&stored.value))?;
                prompter.say("Record saved.")?;
                prompter.unaudited(stored.audit_error)?;
            }
            Err(e) => prompter.report(e)?,
        }

        match run_list_menu(prompter, storage, store)? {
            ListExit::AddNew => continue,
            ListExit::MainMenu => return Ok(FlowExit::MainMenu),
        }
    }
}

fn capture_revenue<I: BufRead, O: Write>(
    prompter: &mut Prompter<I, O>,
) -> YardResult<Option<RevenueRecord>> {
    let truck_id = prompter.text("Truck number: ")?;
    let driver = prompter.text("Driver: ")?;
    let current_week = prompter.confirm("Is this the current week? (S/N): ")?;

    let mut revenue = Vec::with_capacity(REVENUE_DAYS);
    for day in 0..REVENUE_DAYS {
        let label = RevenueRecord::day_label(day, current_week);
        revenue.push(prompter.decimal(&format!("Revenue for {}: ", label))?);
    }

    Ok(Some(RevenueRecord::new(truck_id, driver, revenue)))
}

fn capture_workshop<I: BufRead, O: Write>(
    prompter: &mut Prompter<I, O>,
) -> YardResult<Option<WorkshopRecord>> {
    let truck_id = prompter.text("Truck number: ")?;
    let supervisor = prompter.text("Supervisor: ")?;
    let workshop = prompter.text("Workshop: ")?;

    let visits = prompter.count("Number of workshop visits this month: ")?;
    if visits <= 0 {
        prompter.say("The number of visits must be greater than zero.")?;
        return Ok(None);
    }

    let mut costs = Vec::new();
    for visit in 1..=visits {
        costs.push(prompter.decimal(&format!("Cost of visit {}: ", visit))?);
    }

    Ok(Some(WorkshopRecord::new(truck_id, supervisor, workshop, costs)))
}

fn capture_mileage<I: BufRead, O: Write>(
    prompter: &mut Prompter<I, O>,
) -> YardResult<Option<MileageRecord>> {
    let truck_id = prompter.text("Truck number: ")?;
    let driver = prompter.text("Driver: ")?;

    let days = prompter.count("Number of days driven: ")?;
    if days <= 0 {
        prompter.say("The number of days must be greater than zero.")?;
        return Ok(None);
    }

    let mut km = Vec::new();
    for day in 1..=days {
        km.push(prompter.decimal(&format!("Kilometres on day {}: ", day))?);
    }

    Ok(Some(MileageRecord::new(truck_id, driver, km)))
}
