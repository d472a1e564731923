//! Savings goal model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::SavingsGoalId;
use super::money::Money;

/// A named savings target and the amount deposited toward it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsGoal {
    /// Unique identifier
    pub id: SavingsGoalId,

    /// Goal name (not required to be unique)
    pub name: String,

    /// Amount to reach
    pub target_amount: Money,

    /// Amount deposited so far
    #[serde(default)]
    pub current_amount: Money,
}

impl SavingsGoal {
    /// Create a goal with nothing deposited yet
    pub fn new(name: impl Into<String>, target_amount: Money) -> Self {
        Self {
            id: SavingsGoalId::new(),
            name: name.into(),
            target_amount,
            current_amount: Money::zero(),
        }
    }

    /// Add to the deposited amount. Negative deposits act as withdrawals.
    pub fn deposit(&mut self, amount: Money) {
        self.current_amount += amount;
    }

    pub fn is_goal_met(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    /// Amount still needed, never below zero
    pub fn remaining(&self) -> Money {
        let remaining = self.target_amount - self.current_amount;
        if remaining.is_negative() {
            Money::zero()
        } else {
            remaining
        }
    }

    /// Deposited fraction of the target
    pub fn progress(&self) -> f64 {
        if self.target_amount.is_positive() {
            (self.current_amount.as_f64() / self.target_amount.as_f64()).max(0.0)
        } else if self.is_goal_met() {
            1.0
        } else {
            0.0
        }
    }
}

impl fmt::Display for SavingsGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} / {}",
            self.name, self.current_amount, self.target_amount
        )
    }
}
