//! Storage layer for the budget planner
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. `Storage` owns the working ledger; nothing else holds it.

pub mod file_io;
pub mod ledger_file;

pub use file_io::{read_json_required, write_json_atomic};
pub use ledger_file::{load_ledger, save_ledger, LedgerDocument, SCHEMA_VERSION};

use std::path::Path;

use tracing::info;

use crate::config::paths::PlannerPaths;
use crate::error::BudgetError;
use crate::models::Ledger;

/// Owns the working ledger and the paths it is persisted under
pub struct Storage {
    paths: PlannerPaths,
    ledger: Ledger,
}

impl Storage {
    /// Create a new Storage instance with an empty ledger
    pub fn new(paths: PlannerPaths) -> Result<Self, BudgetError> {
        paths.ensure_directories()?;

        Ok(Self {
            paths,
            ledger: Ledger::new(),
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &PlannerPaths {
        &self.paths
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    /// Load the working ledger; a missing file means an empty ledger
    pub fn load_all(&mut self) -> Result<(), BudgetError> {
        let path = self.paths.ledger_file();
        if path.exists() {
            self.ledger = load_ledger(&path)?;
        } else {
            self.ledger = Ledger::new();
        }
        Ok(())
    }

    /// Save the working ledger
    pub fn save_all(&self) -> Result<(), BudgetError> {
        save_ledger(&self.ledger, self.paths.ledger_file())
    }

    /// Apply `change` to a copy of the working ledger and persist it
    ///
    /// The working ledger is replaced only after the copy is saved, so an
    /// error from `change` or from the save leaves it as it was.
    pub fn update<T, F>(&mut self, change: F) -> Result<T, BudgetError>
    where
        F: FnOnce(&mut Ledger) -> Result<T, BudgetError>,
    {
        let mut draft = self.ledger.clone();
        let output = change(&mut draft)?;
        save_ledger(&draft, self.paths.ledger_file())?;
        self.ledger = draft;
        Ok(output)
    }

    /// Write the working ledger to an arbitrary file
    pub fn export_to(&self, path: impl AsRef<Path>) -> Result<(), BudgetError> {
        let path = path.as_ref();
        save_ledger(&self.ledger, path)?;
        info!(path = %path.display(), "ledger exported");
        Ok(())
    }

    /// Replace the working ledger with the contents of `path`
    ///
    /// The working ledger is untouched unless the whole file loads.
    pub fn import_from(&mut self, path: impl AsRef<Path>) -> Result<(), BudgetError> {
        let path = path.as_ref();
        let loaded = load_ledger(path)?;
        save_ledger(&loaded, self.paths.ledger_file())?;
        self.ledger.replace_with(loaded);
        info!(path = %path.display(), "ledger imported");
        Ok(())
    }
}
