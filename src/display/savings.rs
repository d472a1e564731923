//! Savings goal display formatting

use tabled::settings::{object::Columns, Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::config::settings::Settings;
use crate::models::SavingsGoal;

#[derive(Tabled)]
struct SavingsRow {
    #[tabled(rename = "Goal")]
    name: String,
    #[tabled(rename = "Saved")]
    saved: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

/// Format savings goals as a table
pub fn format_savings_list(goals: &[SavingsGoal], settings: &Settings) -> String {
    if goals.is_empty() {
        return "No savings goals found.\n".to_string();
    }

    let symbol = settings.currency_symbol.as_str();
    let rows = goals.iter().map(|g| SavingsRow {
        name: g.name.clone(),
        saved: g.current_amount.format_with_symbol(symbol),
        target: g.target_amount.format_with_symbol(symbol),
        progress: format!("{:.1}%", g.progress() * 100.0),
        status: goal_status(g),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..4)).with(Alignment::right()));
    format!("{}\n", table)
}

/// Short status word for a goal
pub fn goal_status(goal: &SavingsGoal) -> &'static str {
    if goal.is_goal_met() {
        "met"
    } else {
        "saving"
    }
}

/// One-line summary of a goal after a deposit
pub fn format_goal_line(goal: &SavingsGoal, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    if goal.is_goal_met() {
        format!(
            "{}: {} of {} saved. Goal met!",
            goal.name,
            goal.current_amount.format_with_symbol(symbol),
            goal.target_amount.format_with_symbol(symbol)
        )
    } else {
        format!(
            "{}: {} of {} saved, {} to go",
            goal.name,
            goal.current_amount.format_with_symbol(symbol),
            goal.target_amount.format_with_symbol(symbol),
            goal.remaining().format_with_symbol(symbol)
        )
    }
}
