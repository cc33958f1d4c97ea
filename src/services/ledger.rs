//! Truck yard ledger
//!
//! Trucks enter and leave the yard through a single gate, so the last truck
//! in is the first truck out. The ledger holds at most [`YARD_CAPACITY`] open
//! entries for the current session; every movement is also appended to the
//! yard history file, which is never read back into the stack.

use crate::audit::{AuditEntry, Operation};
use crate::error::{YardError, YardResult};
use crate::models::{MovementKind, YardMovement};
use crate::storage::Storage;

use super::outcome::Audited;

/// Maximum number of trucks parked at once
pub const YARD_CAPACITY: usize = 5;

/// Result of checking a truck out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitReceipt {
    /// Entry that was at the top of the stack
    pub departed: YardMovement,
    /// Exit movement as recorded in the history
    pub exit: YardMovement,
    /// The confirmed truck id differs from the departed entry
    pub mismatch: bool,
}

/// Open yard entries for one session
pub struct YardLedger<'a> {
    storage: &'a Storage,
    stack: Vec<YardMovement>,
}

impl<'a> YardLedger<'a> {
    /// Start with an empty yard
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            stack: Vec::with_capacity(YARD_CAPACITY),
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_full(&self) -> bool {
        self.stack.len() >= YARD_CAPACITY
    }

    /// Most recent open entry, the next truck allowed out
    pub fn peek(&self) -> Option<&YardMovement> {
        self.stack.last()
    }

    /// Register a truck entering the yard
    ///
    /// The history line is written before the truck is stacked, so a failed
    /// write leaves the yard as it was.
    pub fn push_entry(
        &mut self,
        truck_id: &str,
        driver_name: &str,
    ) -> YardResult<Audited<YardMovement>> {
        if self.is_full() {
            return Err(YardError::YardFull {
                capacity: YARD_CAPACITY,
            });
        }

        let movement = YardMovement::now(truck_id, driver_name, MovementKind::Entry);
        self.storage.history.append(&movement)?;
        self.stack.push(movement.clone());

        let logged = self.audit(Operation::Entry, &movement, None);
        Ok(Audited::new(movement, logged))
    }

    /// Register the top truck leaving the yard
    ///
    /// The top entry always leaves, whatever `truck_id` says; a different id
    /// only sets [`ExitReceipt::mismatch`]. Nothing is popped unless the
    /// history line was written.
    pub fn pop_exit(
        &mut self,
        truck_id: &str,
        driver_name: &str,
    ) -> YardResult<Audited<ExitReceipt>> {
        let top = self.peek().ok_or(YardError::YardEmpty)?;

        let exit = YardMovement::now(truck_id, driver_name, MovementKind::Exit);
        let mismatch = top.truck_id != exit.truck_id;
        let note = mismatch.then(|| format!("last truck in was {}", top.truck_id));

        self.storage.history.append(&exit)?;
        let departed = self.stack.pop().ok_or(YardError::YardEmpty)?;

        let logged = self.audit(Operation::Exit, &exit, note);
        Ok(Audited::new(
            ExitReceipt {
                departed,
                exit,
                mismatch,
            },
            logged,
        ))
    }

    fn audit(
        &self,
        operation: Operation,
        movement: &YardMovement,
        note: Option<String>,
    ) -> YardResult<()> {
        let mut entry = AuditEntry::yard(
            operation,
            movement.truck_id.clone(),
            Some(movement.driver_name.clone()),
            movement,
        );
        if let Some(note) = note {
            entry = entry.with_note(note);
        }
        self.storage.audit.log(&entry)
    }
}
