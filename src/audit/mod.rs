//! Audit logging system for truckyard
//!
//! Records every record append, update and delete, plus each truck entering
//! or leaving the yard, in an append-only JSONL log next to the data files.
//!
//! # Example
//!
//! ```rust,ignore
//! use truckyard::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let entry = AuditEntry::create(
//!     EntityType::Workshop,
//!     record.audit_id(),
//!     Some(record.supervisor.clone()),
//!     &record,
//! );
//! logger.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
