//! Display formatting for terminal output
//!
//! Plain-text tables and cards built with `format!`; callers print them.

pub mod ledger;
pub mod profile;
pub mod records;
pub mod report;

pub use ledger::{format_history, format_movement, format_yard_status};
pub use profile::{format_company, format_driver, format_unit};
pub use records::{format_entry_summary, format_record_table, format_search_hit};
pub use report::{format_payroll, format_ticket};
