//! truckyard - Terminal menu application for a small trucking company
//!
//! Keeps three CSV record lists (daily revenue, workshop costs, mileage),
//! logs trucks entering and leaving the yard, and offers a few intake and
//! calculator screens.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory and settings
//! - `error`: Custom error types
//! - `models`: Record kinds, yard movements and profiles
//! - `storage`: CSV files and the yard history
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `display`: Text tables
//! - `cli`: Interactive menus
//!
//! # Example
//!
//! ```rust,ignore
//! use truckyard::config::{DataPaths, Settings};
//! use truckyard::storage::Storage;
//!
//! let paths = DataPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, &settings)?;
//! let revenue = storage.revenue.load()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{YardError, YardResult};
