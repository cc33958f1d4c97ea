//! Service layer for truckyard
//!
//! Business logic on top of the storage layer: record list operations, the
//! yard ledger, and the payroll and discount calculators.

pub mod discount;
pub mod ledger;
pub mod outcome;
pub mod payroll;
pub mod records;
pub mod sorting;

pub use discount::{Discount, DiscountTicket};
pub use ledger::{ExitReceipt, YardLedger, YARD_CAPACITY};
pub use outcome::Audited;
pub use payroll::{rollup, PayrollLine, PayrollSummary};
pub use records::{preview_sort, RecordService, RecordUpdate, SortDirection, SortField};
