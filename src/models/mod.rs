//! Core data models for truckyard
//!
//! Record lists (revenue, workshop, mileage), yard movements and the
//! company/driver/unit profiles.

pub mod mileage;
pub mod movement;
pub mod profile;
pub mod record;
pub mod revenue;
pub mod workshop;

pub use mileage::MileageRecord;
pub use movement::{MovementKind, YardMovement};
pub use profile::{CompanyProfile, Driver, TransportUnit};
pub use record::{sum_values, EntrySort, RecordKind, RecordSchema, YardRecord};
pub use revenue::RevenueRecord;
pub use workshop::WorkshopRecord;
