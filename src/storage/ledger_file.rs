//! Versioned on-disk ledger document
//!
//! The document holds the two top-level collections of a ledger with each
//! category embedding its expenses. Loading is all-or-nothing: a missing,
//! corrupt, foreign, or newer-schema file fails the whole call.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Category, Ledger, SavingsGoal};

use super::file_io::{read_json_required, write_json_atomic};

/// Schema version written by this build
pub const SCHEMA_VERSION: u32 = 1;

/// Serializable form of a ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerDocument {
    pub schema_version: u32,
    pub saved_at: DateTime<Utc>,
    pub categories: Vec<Category>,
    pub savings_goals: Vec<SavingsGoal>,
}

impl LedgerDocument {
    /// Snapshot a ledger
    pub fn from_ledger(ledger: &Ledger) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            saved_at: Utc::now(),
            categories: ledger.categories().to_vec(),
            savings_goals: ledger.savings_goals().to_vec(),
        }
    }

    /// Validate the document and turn it back into a ledger
    pub fn into_ledger(self) -> BudgetResult<Ledger> {
        if self.schema_version == 0 || self.schema_version > SCHEMA_VERSION {
            return Err(BudgetError::Storage(format!(
                "Unsupported ledger schema version {} (this build reads up to {})",
                self.schema_version, SCHEMA_VERSION
            )));
        }

        Ledger::from_parts(self.categories, self.savings_goals)
    }
}

/// Write `ledger` to `path` atomically
pub fn save_ledger(ledger: &Ledger, path: impl AsRef<Path>) -> BudgetResult<()> {
    let path = path.as_ref();
    write_json_atomic(path, &LedgerDocument::from_ledger(ledger))?;
    debug!(
        path = %path.display(),
        categories = ledger.categories().len(),
        goals = ledger.savings_goals().len(),
        "ledger saved"
    );
    Ok(())
}

/// Read a complete ledger from `path`
pub fn load_ledger(path: impl AsRef<Path>) -> BudgetResult<Ledger> {
    let path = path.as_ref();
    let document: LedgerDocument = read_json_required(path)?;
    let ledger = document.into_ledger()?;
    debug!(
        path = %path.display(),
        categories = ledger.categories().len(),
        goals = ledger.savings_goals().len(),
        "ledger loaded"
    );
    Ok(ledger)
}
