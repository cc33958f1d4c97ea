//! Storage layer for truckyard
//!
//! Flat CSV files: three record lists rewritten or appended in full, and an
//! append-only yard history. Nothing is cached between operations; every
//! call opens, uses and closes its file.

pub mod csv_io;
pub mod history;
pub mod records;

pub use history::{HistoryLog, HistoryRow, HISTORY_HEADER};
pub use records::RecordStore;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::{paths::DataPaths, settings::Settings};
use crate::error::YardError;
use crate::models::{MileageRecord, RevenueRecord, WorkshopRecord};

/// Main storage coordinator that provides access to every file
pub struct Storage {
    paths: DataPaths,
    pub revenue: RecordStore<RevenueRecord>,
    pub workshop: RecordStore<WorkshopRecord>,
    pub mileage: RecordStore<MileageRecord>,
    pub history: HistoryLog,
    pub audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: DataPaths, settings: &Settings) -> Result<Self, YardError> {
        paths.ensure_directories()?;

        let audit = if settings.audit_enabled {
            AuditLogger::new(paths.audit_log())
        } else {
            AuditLogger::disabled(paths.audit_log())
        };

        Ok(Self {
            revenue: RecordStore::new(paths.revenue_file()),
            workshop: RecordStore::new(paths.workshop_file()),
            mileage: RecordStore::new(paths.mileage_file()),
            history: HistoryLog::new(paths.yard_history_file()),
            audit,
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &DataPaths {
        &self.paths
    }

    /// Log a create operation to the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), YardError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Log an update operation to the audit log
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Result<(), YardError> {
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
        ))
    }

    /// Log a delete operation to the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), YardError> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }
}
