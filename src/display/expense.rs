//! Expense display formatting

use tabled::settings::{object::Columns, Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::config::settings::Settings;
use crate::models::{Category, Expense};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format expenses, each shown with its category name
pub fn format_expense_list(expenses: &[(&Category, &Expense)], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows = expenses.iter().map(|(category, expense)| ExpenseRow {
        date: expense.date.format(&settings.date_format).to_string(),
        category: category.name.clone(),
        amount: expense.amount.format_with_symbol(&settings.currency_symbol),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::single(2)).with(Alignment::right()));
    format!("{}\n", table)
}

/// One-line summary of an expense, as shown after it is added
pub fn format_expense_line(category: &str, expense: &Expense, settings: &Settings) -> String {
    format!(
        "{}: {} on {}",
        category,
        expense.amount.format_with_symbol(&settings.currency_symbol),
        expense.date.format(&settings.date_format)
    )
}
