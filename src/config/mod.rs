//! Configuration module for truckyard
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::DataPaths;
pub use settings::Settings;
