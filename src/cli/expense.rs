//! Expense CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::expense::{format_expense_line, format_expense_list};
use crate::error::BudgetResult;
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Log an expense against a category (dated today)
    Add {
        /// Category name (exact, case-sensitive)
        category: String,
        /// Amount (e.g., "12.50"; negative for refunds)
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// List expenses
    List {
        /// Only show expenses for this category
        #[arg(short, long)]
        category: Option<String>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> BudgetResult<()> {
    let mut service = ExpenseService::new(storage, settings);

    match cmd {
        ExpenseCommands::Add { category, amount } => {
            let expense = service.add(&category, &amount)?;
            println!(
                "Added expense {}",
                format_expense_line(category.trim(), &expense, settings)
            );
        }

        ExpenseCommands::List { category } => {
            let expenses = service.list(category.as_deref())?;
            print!("{}", format_expense_list(&expenses, settings));
        }
    }

    Ok(())
}
