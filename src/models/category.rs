//! Category model
//!
//! A category is a named budget bucket with a spending limit. It owns its
//! expenses in entry order; totals are always derived, never stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::expense::Expense;
use super::ids::CategoryId;
use super::money::Money;

/// A budget category and the expenses logged against it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name (lookup key, first match wins)
    pub name: String,

    /// Spending limit for this category
    pub budget_limit: Money,

    /// When the category was created
    pub created_at: DateTime<Utc>,

    /// Owned expenses, in the order they were entered
    #[serde(default)]
    expenses: Vec<Expense>,
}

impl Category {
    /// Create a new category with no expenses
    pub fn new(name: impl Into<String>, budget_limit: Money) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            budget_limit,
            created_at: Utc::now(),
            expenses: Vec::new(),
        }
    }

    /// Record an expense dated today and return it
    ///
    /// Zero and negative amounts are accepted as-is.
    pub fn add_expense(&mut self, amount: Money) -> &Expense {
        let expense = Expense::new(self.id, amount);
        self.push(expense)
    }

    /// Record an expense on a specific date
    #[cfg(test)]
    pub(crate) fn add_expense_on(&mut self, amount: Money, date: chrono::NaiveDate) -> &Expense {
        let expense = Expense::dated(self.id, amount, date);
        self.push(expense)
    }

    fn push(&mut self, expense: Expense) -> &Expense {
        self.expenses.push(expense);
        &self.expenses[self.expenses.len() - 1]
    }

    /// Expenses in entry order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Sum of all expense amounts (zero when empty)
    pub fn total_expense(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Budget limit minus total expense; may be negative
    pub fn remaining_budget(&self) -> Money {
        self.budget_limit - self.total_expense()
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining_budget().is_negative()
    }

    /// Fraction of the limit already spent, if the limit is positive
    pub fn spent_fraction(&self) -> Option<f64> {
        if self.budget_limit.is_positive() {
            Some(self.total_expense().as_f64() / self.budget_limit.as_f64())
        } else {
            None
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.budget_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_new_category() {
        let category = Category::new("Food", Money::from_units(200));

        assert_eq!(category.name, "Food");
        assert_eq!(category.budget_limit, Money::from_units(200));
        assert!(category.expenses().is_empty());
        assert!(category.total_expense().is_zero());
        assert_eq!(category.remaining_budget(), Money::from_units(200));
    }

    #[test]
    fn test_add_expense_binds_to_category() {
        let mut category = Category::new("Food", Money::from_units(200));
        let id = category.id;

        let expense = category.add_expense(Money::from_units(50));
        assert_eq!(expense.category_id, id);
        assert_eq!(expense.amount, Money::from_units(50));
    }

    #[test]
    fn test_totals_follow_entries() {
        let mut category = Category::new("Food", Money::from_units(200));
        category.add_expense(Money::from_units(50));
        category.add_expense(Money::from_units(30));

        assert_eq!(category.total_expense(), Money::from_units(80));
        assert_eq!(category.remaining_budget(), Money::from_units(120));
        assert_eq!(category.spent_fraction(), Some(0.4));
    }

    #[test]
    fn test_totals_match_arithmetic_sum() {
        let amounts = [1234, -500, 0, 99, 100_000, -1];
        let mut category = Category::new("Misc", Money::from_cents(5000));
        for cents in amounts {
            category.add_expense(Money::from_cents(cents));
        }

        let sum: i64 = amounts.iter().sum();
        assert_eq!(category.total_expense().cents(), sum);
        assert_eq!(category.remaining_budget().cents(), 5000 - sum);
    }

    #[test]
    fn test_remaining_can_go_negative() {
        let mut category = Category::new("Fun", Money::from_units(10));
        category.add_expense(Money::from_units(25));

        assert_eq!(category.remaining_budget(), Money::from_units(-15));
        assert!(category.is_over_budget());
    }

    #[test]
    fn test_expenses_keep_entry_order() {
        let mut category = Category::new("Rent", Money::zero());
        let first = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let second = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        category.add_expense_on(Money::from_units(1), first);
        category.add_expense_on(Money::from_units(2), second);

        let dates: Vec<_> = category.expenses().iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![first, second]);
        assert_eq!(category.spent_fraction(), None);
    }

    #[test]
    fn test_serialization_embeds_expenses() {
        let mut category = Category::new("Food", Money::from_units(200));
        category.add_expense(Money::from_units(5));

        let json = serde_json::to_string(&category).unwrap();
        let restored: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, category);
    }
}
