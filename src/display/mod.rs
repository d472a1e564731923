//! Display formatting for terminal output
//!
//! Formats ledger data for the command line: tables for listings and a text
//! bar chart for the allocation report.

pub mod category;
pub mod chart;
pub mod expense;
pub mod savings;

pub use category::{format_category_details, format_category_list};
pub use chart::format_allocation_chart;
pub use expense::{format_expense_line, format_expense_list};
pub use savings::{format_goal_line, format_savings_list, goal_status};
