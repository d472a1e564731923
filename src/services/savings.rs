//! Savings goal service

use crate::config::settings::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::models::SavingsGoal;
use crate::storage::Storage;

use super::{clean_name, parse_amount};

/// Service for savings goals and deposits
pub struct SavingsService<'a> {
    storage: &'a mut Storage,
    settings: &'a Settings,
}

impl<'a> SavingsService<'a> {
    /// Create a new savings service
    pub fn new(storage: &'a mut Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Create a savings goal from raw user input and persist it
    pub fn set_goal(&mut self, name: &str, target_amount: &str) -> BudgetResult<SavingsGoal> {
        let name = clean_name("Savings goal", name)?;
        let target = parse_amount("target amount", target_amount, self.settings)?;

        if self.settings.unique_names
            && self.storage.ledger().find_savings_goal_by_name(name).is_some()
        {
            return Err(BudgetError::Duplicate {
                entity_type: "Savings goal",
                identifier: name.to_string(),
            });
        }

        self.storage
            .update(|ledger| Ok(ledger.set_savings_goal(name, target).clone()))
    }

    /// Deposit into the first goal with this name and return its new state
    pub fn deposit(&mut self, name: &str, amount: &str) -> BudgetResult<SavingsGoal> {
        let amount = parse_amount("deposit amount", amount, self.settings)?;
        let name = name.trim();

        self.storage.update(|ledger| {
            if !ledger.deposit_to_savings(name, amount) {
                return Err(BudgetError::savings_goal_not_found(name));
            }
            ledger
                .find_savings_goal_by_name(name)
                .cloned()
                .ok_or_else(|| BudgetError::savings_goal_not_found(name))
        })
    }

    /// All savings goals in insertion order
    pub fn list(&self) -> &[SavingsGoal] {
        self.storage.ledger().savings_goals()
    }
}
