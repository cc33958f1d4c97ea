//! Path management for truckyard
//!
//! The record files live side by side in a single data directory so that
//! existing `*_camiones.csv` files can be picked up in place.
//!
//! ## Path Resolution Order
//!
//! 1. `TRUCKYARD_DATA_DIR` environment variable (if set)
//! 2. The current working directory

use std::path::PathBuf;

use crate::error::YardError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "TRUCKYARD_DATA_DIR";

/// Manages all paths used by truckyard
#[derive(Debug, Clone)]
pub struct DataPaths {
    /// Directory holding the CSV files, settings and audit log
    base_dir: PathBuf,
}

impl DataPaths {
    /// Create a new DataPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new() -> Result<Self, YardError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            std::env::current_dir().map_err(|e| {
                YardError::Config(format!("Could not determine working directory: {}", e))
            })?
        };

        Ok(Self { base_dir })
    }

    /// Create DataPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Daily revenue records (bubble sort flow)
    pub fn revenue_file(&self) -> PathBuf {
        self.base_dir.join("ingresos_camiones.csv")
    }

    /// Workshop cost records (selection sort flow)
    pub fn workshop_file(&self) -> PathBuf {
        self.base_dir.join("taller_camiones.csv")
    }

    /// Mileage records (insertion sort flow)
    pub fn mileage_file(&self) -> PathBuf {
        self.base_dir.join("kilometraje_camiones.csv")
    }

    /// Yard entry/exit history
    pub fn yard_history_file(&self) -> PathBuf {
        self.base_dir.join("registro_camiones_pila.csv")
    }

    /// Ensure the data directory exists
    pub fn ensure_directories(&self) -> Result<(), YardError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| YardError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
