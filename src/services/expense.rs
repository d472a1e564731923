//! Expense service
//!
//! Logs expenses against categories and lists them for display.

use crate::config::settings::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Category, Expense};
use crate::storage::Storage;

use super::parse_amount;

/// Service for expense entry and listing
pub struct ExpenseService<'a> {
    storage: &'a mut Storage,
    settings: &'a Settings,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a mut Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Log an expense from raw user input and persist it
    ///
    /// The amount is parsed before the category is resolved, so a malformed
    /// amount is reported even when the category is also missing.
    pub fn add(&mut self, category_name: &str, amount: &str) -> BudgetResult<Expense> {
        let amount = parse_amount("amount", amount, self.settings)?;
        let category_name = category_name.trim();
        self.storage
            .update(|ledger| Ok(ledger.add_expense(category_name, amount)?.clone()))
    }

    /// Expenses with their categories, optionally limited to one category
    pub fn list(&self, category_name: Option<&str>) -> BudgetResult<Vec<(&Category, &Expense)>> {
        let ledger = self.storage.ledger();

        match category_name {
            Some(name) => {
                let category = ledger
                    .find_category_by_name(name)
                    .ok_or_else(|| BudgetError::category_not_found(name))?;
                Ok(category.expenses().iter().map(|e| (category, e)).collect())
            }
            None => Ok(ledger.expenses().collect()),
        }
    }
}
