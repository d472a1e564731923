//! Core data models for the budget planner
//!
//! The ledger owns categories and savings goals; categories own expenses.

pub mod category;
pub mod expense;
pub mod ids;
pub mod ledger;
pub mod money;
pub mod savings_goal;

pub use category::Category;
pub use expense::Expense;
pub use ids::{CategoryId, ExpenseId, SavingsGoalId};
pub use ledger::Ledger;
pub use money::{Money, MoneyParseError, MAX_PARSE_UNITS};
pub use savings_goal::SavingsGoal;
