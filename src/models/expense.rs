//! Expense model
//!
//! A single dated amount attributed to one category. Expenses are created
//! through `Category::add_expense` and never change afterwards.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::ids::{CategoryId, ExpenseId};
use super::money::Money;

/// A dated expense entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// The category that owns this expense
    pub category_id: CategoryId,

    /// Amount spent (no sign constraint)
    pub amount: Money,

    /// Day the expense was recorded
    pub date: NaiveDate,
}

impl Expense {
    /// Create an expense dated today (local clock)
    pub(crate) fn new(category_id: CategoryId, amount: Money) -> Self {
        Self::dated(category_id, amount, Local::now().date_naive())
    }

    /// Create an expense with an explicit date
    pub(crate) fn dated(category_id: CategoryId, amount: Money, date: NaiveDate) -> Self {
        Self {
            id: ExpenseId::new(),
            category_id,
            amount,
            date,
        }
    }
}
