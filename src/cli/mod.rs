//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod category;
pub mod chart;
pub mod expense;
pub mod savings;

pub use category::{handle_category_command, CategoryCommands};
pub use chart::{handle_chart_command, ChartArgs};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use savings::{handle_savings_command, SavingsCommands};
