//! Record list service
//!
//! Search, update, delete and preview-sort over one record list. The same
//! service drives revenue, workshop and mileage records; behaviour that
//! differs per kind (key field, entry sort) comes from the record schema.

use std::cmp::Ordering;

use crate::audit::EntityType;
use crate::error::{YardError, YardResult};
use crate::models::YardRecord;
use crate::storage::{RecordStore, Storage};

use super::outcome::Audited;
use super::sorting::apply_entry_sort;

/// Column a preview sort orders by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// Truck number
    Identifier,
    /// Driver, or workshop name for workshop records
    Key,
    Total,
}

impl SortField {
    /// Map a menu choice (1-3)
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(SortField::Identifier),
            2 => Some(SortField::Key),
            3 => Some(SortField::Total),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// `1` is ascending, anything else descending
    pub fn from_choice(choice: i64) -> Self {
        if choice == 1 {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASCENDING",
            SortDirection::Descending => "DESCENDING",
        }
    }
}

/// Replacement data for a record being updated
#[derive(Debug, Clone, PartialEq)]
pub struct RecordUpdate {
    /// New value for every slot, same length as the current values
    pub values: Vec<f64>,
    /// New supervisor name (workshop records)
    pub secondary: Option<String>,
}

/// Service for one record list
pub struct RecordService<'a, R> {
    storage: &'a Storage,
    store: &'a RecordStore<R>,
}

impl<'a, R: YardRecord> RecordService<'a, R> {
    /// Create a service over `store`, auditing through `storage`
    pub fn new(storage: &'a Storage, store: &'a RecordStore<R>) -> Self {
        Self { storage, store }
    }

    fn entity_type() -> EntityType {
        R::SCHEMA.kind.into()
    }

    /// Load the list in file order
    pub fn load(&self) -> YardResult<Vec<R>> {
        self.store.load()
    }

    /// Append a freshly entered record
    ///
    /// The total is recomputed and the values are put in the kind's entry
    /// order before the line is written. Returns the record as stored.
    pub fn add(&self, mut record: R) -> YardResult<Audited<R>> {
        if record.identifier().trim().is_empty() {
            return Err(YardError::Validation("Truck number cannot be empty".into()));
        }

        record.recompute_total();
        apply_entry_sort(R::SCHEMA.entry_sort, record.values_mut());

        self.store.append(&record)?;

        let logged = self.storage.log_create(
            Self::entity_type(),
            record.audit_id(),
            Some(record.secondary().to_string()),
            &record,
        );

        Ok(Audited::new(record, logged))
    }

    pub fn count(&self, records: &[R]) -> usize {
        records.len()
    }

    pub fn is_empty(&self, records: &[R]) -> bool {
        records.is_empty()
    }

    /// Every record whose truck id, secondary or tertiary field equals `query`
    pub fn search<'r>(&self, records: &'r [R], query: &str) -> Vec<&'r R> {
        records.iter().filter(|r| r.matches_query(query)).collect()
    }

    /// Update the first record matching (identifier, key) and persist the list
    ///
    /// `edit` receives the current record and returns the replacement values.
    /// Returns `Ok(None)` when nothing matches; nothing is saved in that case.
    /// `records` only changes once the file has been rewritten.
    pub fn update_with<F>(
        &self,
        records: &mut [R],
        identifier: &str,
        key: &str,
        edit: F,
    ) -> YardResult<Option<Audited<R>>>
    where
        F: FnOnce(&R) -> YardResult<RecordUpdate>,
    {
        let Some(index) = records.iter().position(|r| r.matches_key(identifier, key)) else {
            return Ok(None);
        };

        let before = records[index].clone();
        let update = edit(&before)?;

        if update.values.len() != before.values().len() {
            return Err(YardError::Validation(format!(
                "Expected {} values, got {}",
                before.values().len(),
                update.values.len()
            )));
        }

        let mut after = before.clone();
        *after.values_mut() = update.values;
        if let Some(secondary) = update.secondary {
            after.set_secondary(secondary);
        }
        after.recompute_total();

        records[index] = after.clone();
        if let Err(e) = self.store.save_all(records) {
            records[index] = before;
            return Err(e);
        }

        let logged = self.storage.log_update(
            Self::entity_type(),
            after.audit_id(),
            Some(after.secondary().to_string()),
            &before,
            &after,
        );

        Ok(Some(Audited::new(after, logged)))
    }

    /// Remove every record matching (identifier, key)
    ///
    /// The list is saved only when something was removed, and `records` is
    /// left alone if that save fails. Returns how many records were removed.
    pub fn delete(
        &self,
        records: &mut Vec<R>,
        identifier: &str,
        key: &str,
    ) -> YardResult<Audited<usize>> {
        let (removed, kept): (Vec<R>, Vec<R>) = records
            .iter()
            .cloned()
            .partition(|r| r.matches_key(identifier, key));

        if removed.is_empty() {
            return Ok(Audited::new(0, Ok(())));
        }

        self.store.save_all(&kept)?;
        *records = kept;

        let mut logged = Ok(());
        for record in &removed {
            logged = logged.and(self.storage.log_delete(
                Self::entity_type(),
                record.audit_id(),
                Some(record.secondary().to_string()),
                record,
            ));
        }

        Ok(Audited::new(removed.len(), logged))
    }
}

/// Reorder a loaded list for display only
///
/// The order is never written back; the next load returns file order.
pub fn preview_sort<R: YardRecord>(records: &mut [R], field: SortField, direction: SortDirection) {
    records.sort_by(|a, b| {
        let ordering = compare(a, b, field);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

fn compare<R: YardRecord>(a: &R, b: &R, field: SortField) -> Ordering {
    match field {
        SortField::Identifier => a.identifier().cmp(b.identifier()),
        SortField::Key => a.match_key().cmp(b.match_key()),
        SortField::Total => a.total().total_cmp(&b.total()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::{DataPaths, Settings};
    use crate::models::{MileageRecord, RevenueRecord, WorkshopRecord};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = DataPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();
        (temp_dir, storage)
    }

    fn workshop_fixture(storage: &Storage) -> Vec<WorkshopRecord> {
        let records = vec![
            WorkshopRecord::new("T1", "Pedro", "TallerX", vec![100.0, 50.0]),
            WorkshopRecord::new("T2", "Rosa", "TallerX", vec![80.0]),
            WorkshopRecord::new("T1", "Juan", "TallerX", vec![10.0]),
        ];
        storage.workshop.save_all(&records).unwrap();
        records
    }

    #[test]
    fn test_add_sorts_values_and_appends() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RecordService::new(&storage, &storage.revenue);

        let record = RevenueRecord::new("T100", "Ana", vec![10.0, 70.0, 30.0, 20.0, 60.0, 40.0, 50.0]);
        let stored = service.add(record).unwrap().value;

        assert_eq!(
            stored.daily_revenue,
            vec![70.0, 60.0, 50.0, 40.0, 30.0, 20.0, 10.0]
        );
        assert_eq!(stored.total, 280.0);
        assert_eq!(service.load().unwrap(), vec![stored]);

        let audit = storage.audit.read_all().unwrap();
        assert_eq!(audit.len(), 1);
        assert_eq!(audit[0].operation, Operation::Create);
    }

    #[test]
    fn test_add_rejects_empty_truck_number() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RecordService::new(&storage, &storage.mileage);

        let result = service.add(MileageRecord::new("  ", "Ana", vec![1.0]));
        assert!(matches!(result, Err(YardError::Validation(_))));
        assert!(service.load().unwrap().is_empty());
    }

    #[test]
    fn test_search_matches_any_text_field() {
        let (_temp_dir, storage) = create_test_storage();
        let records = workshop_fixture(&storage);
        let service = RecordService::new(&storage, &storage.workshop);

        assert_eq!(service.search(&records, "T1").len(), 2);
        assert_eq!(service.search(&records, "Rosa").len(), 1);
        assert_eq!(service.search(&records, "TallerX").len(), 3);
        assert!(service.search(&records, "nobody").is_empty());
        assert_eq!(service.count(&records), 3);
        assert!(!service.is_empty(&records));
        assert!(service.is_empty(&[]));
    }

    #[test]
    fn test_delete_removes_all_matches_and_rewrites() {
        let (_temp_dir, storage) = create_test_storage();
        let mut records = workshop_fixture(&storage);
        let service = RecordService::new(&storage, &storage.workshop);

        let removed = service.delete(&mut records, "T1", "TallerX").unwrap().value;

        assert_eq!(removed, 2);
        assert_eq!(records.len(), 1);
        let reloaded = service.load().unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].truck_id, "T2");
        assert_eq!(storage.audit.entry_count().unwrap(), 2);
    }

    #[test]
    fn test_delete_not_found_leaves_file_alone() {
        let (_temp_dir, storage) = create_test_storage();
        let mut records = workshop_fixture(&storage);
        let service = RecordService::new(&storage, &storage.workshop);
        let before = std::fs::read_to_string(storage.workshop.path()).unwrap();

        // Workshop records are keyed by workshop, not supervisor
        let removed = service.delete(&mut records, "T1", "Pedro").unwrap().value;

        assert_eq!(removed, 0);
        assert_eq!(records.len(), 3);
        assert_eq!(std::fs::read_to_string(storage.workshop.path()).unwrap(), before);
    }

    #[test]
    fn test_update_recomputes_total_and_saves() {
        let (_temp_dir, storage) = create_test_storage();
        let mut records = workshop_fixture(&storage);
        let service = RecordService::new(&storage, &storage.workshop);

        let updated = service
            .update_with(&mut records, "T2", "TallerX", |current| {
                assert_eq!(current.supervisor, "Rosa");
                Ok(RecordUpdate {
                    values: vec![95.5],
                    secondary: Some("Marta".to_string()),
                })
            })
            .unwrap()
            .unwrap()
            .value;

        assert_eq!(updated.total, 95.5);
        assert_eq!(updated.supervisor, "Marta");
        let reloaded = service.load().unwrap();
        assert_eq!(reloaded[1], updated);
        assert_eq!(reloaded[0].total, 150.0);
    }

    #[test]
    fn test_update_not_found_does_not_call_edit() {
        let (_temp_dir, storage) = create_test_storage();
        let mut records = vec![MileageRecord::new("T1", "Ana", vec![5.0])];
        let service = RecordService::new(&storage, &storage.mileage);

        let result = service
            .update_with(&mut records, "T1", "Luis", |_| panic!("edit must not run"))
            .unwrap();

        assert!(result.is_none());
        assert!(!storage.mileage.path().exists());
    }

    #[test]
    fn test_update_rejects_wrong_value_count() {
        let (_temp_dir, storage) = create_test_storage();
        let mut records = vec![MileageRecord::new("T1", "Ana", vec![5.0, 6.0])];
        let service = RecordService::new(&storage, &storage.mileage);

        let result = service.update_with(&mut records, "T1", "Ana", |_| {
            Ok(RecordUpdate {
                values: vec![1.0],
                secondary: None,
            })
        });
        assert!(matches!(result, Err(YardError::Validation(_))));
    }

    #[test]
    fn test_failed_audit_keeps_saved_changes() {
        let (_temp_dir, storage) = create_test_storage();
        let mut records = workshop_fixture(&storage);
        let service = RecordService::new(&storage, &storage.workshop);
        std::fs::create_dir(storage.paths().audit_log()).unwrap();

        let added = service
            .add(WorkshopRecord::new("T3", "Ana", "TallerY", vec![5.0]))
            .unwrap();
        assert!(!added.is_audited());
        assert_eq!(service.load().unwrap().len(), 4);

        let removed = service.delete(&mut records, "T2", "TallerX").unwrap();
        assert_eq!(removed.value, 1);
        assert!(removed.audit_error.is_some());
        assert_eq!(service.load().unwrap().len(), 3);
    }

    #[test]
    fn test_failed_save_leaves_list_untouched() {
        let (_temp_dir, storage) = create_test_storage();
        let mut records = workshop_fixture(&storage);
        let service = RecordService::new(&storage, &storage.workshop);
        std::fs::remove_file(storage.workshop.path()).unwrap();
        std::fs::create_dir(storage.workshop.path()).unwrap();

        let result = service.update_with(&mut records, "T2", "TallerX", |_| {
            Ok(RecordUpdate {
                values: vec![1.0],
                secondary: None,
            })
        });
        assert!(result.is_err());
        assert_eq!(records[1].total, 80.0);

        assert!(service.delete(&mut records, "T1", "TallerX").is_err());
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_preview_sort_is_not_persisted() {
        let (_temp_dir, storage) = create_test_storage();
        let records = vec![
            MileageRecord::new("T1", "Ana", vec![10.0]),
            MileageRecord::new("T2", "Luis", vec![300.0]),
            MileageRecord::new("T3", "Rosa", vec![42.0]),
        ];
        storage.mileage.save_all(&records).unwrap();
        let service = RecordService::new(&storage, &storage.mileage);

        let mut loaded = service.load().unwrap();
        preview_sort(&mut loaded, SortField::Total, SortDirection::Descending);
        let order: Vec<&str> = loaded.iter().map(|r| r.truck_id.as_str()).collect();
        assert_eq!(order, vec!["T2", "T3", "T1"]);

        assert_eq!(service.load().unwrap(), records);
    }

    #[test]
    fn test_preview_sort_by_key_is_stable() {
        let mut records = vec![
            WorkshopRecord::new("T3", "A", "TallerB", vec![1.0]),
            WorkshopRecord::new("T1", "B", "TallerA", vec![2.0]),
            WorkshopRecord::new("T2", "C", "TallerB", vec![3.0]),
        ];

        preview_sort(&mut records, SortField::Key, SortDirection::Ascending);
        let order: Vec<&str> = records.iter().map(|r| r.truck_id.as_str()).collect();
        assert_eq!(order, vec!["T1", "T3", "T2"]);

        preview_sort(&mut records, SortField::Identifier, SortDirection::Descending);
        let order: Vec<&str> = records.iter().map(|r| r.truck_id.as_str()).collect();
        assert_eq!(order, vec!["T3", "T2", "T1"]);
    }

    #[test]
    fn test_sort_choices() {
        assert_eq!(SortField::from_choice(3), Some(SortField::Total));
        assert_eq!(SortField::from_choice(4), None);
        assert_eq!(SortDirection::from_choice(1), SortDirection::Ascending);
        assert_eq!(SortDirection::from_choice(0), SortDirection::Descending);
    }
}
