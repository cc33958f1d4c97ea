//! Completed changes and the audit write that followed them

use crate::error::{YardError, YardResult};

/// A change that already happened, plus the outcome of auditing it
///
/// The change is kept even when the audit log could not be written; the
/// failure travels with it so the screen can warn about it.
#[derive(Debug)]
pub struct Audited<T> {
    pub value: T,
    pub audit_error: Option<YardError>,
}

impl<T> Audited<T> {
    pub fn new(value: T, logged: YardResult<()>) -> Self {
        Self {
            value,
            audit_error: logged.err(),
        }
    }

    pub fn is_audited(&self) -> bool {
        self.audit_error.is_none()
    }
}
