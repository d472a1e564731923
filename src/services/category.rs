//! Category service
//!
//! Creates and looks up categories on behalf of the CLI and TUI.

use crate::config::settings::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::models::Category;
use crate::storage::Storage;

use super::{clean_name, parse_amount};

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a mut Storage,
    settings: &'a Settings,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a mut Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Create a category from raw user input and persist it
    pub fn create(&mut self, name: &str, budget_limit: &str) -> BudgetResult<Category> {
        let name = clean_name("Category", name)?;
        let limit = parse_amount("budget limit", budget_limit, self.settings)?;

        if self.settings.unique_names && self.storage.ledger().find_category_by_name(name).is_some()
        {
            return Err(BudgetError::Duplicate {
                entity_type: "Category",
                identifier: name.to_string(),
            });
        }

        self.storage
            .update(|ledger| Ok(ledger.add_category(name, limit).clone()))
    }

    /// All categories in insertion order
    pub fn list(&self) -> &[Category] {
        self.storage.ledger().categories()
    }

    /// First category with this exact name
    pub fn find(&self, name: &str) -> BudgetResult<&Category> {
        self.storage
            .ledger()
            .find_category_by_name(name)
            .ok_or_else(|| BudgetError::category_not_found(name))
    }
}
