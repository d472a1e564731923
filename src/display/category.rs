//! Category display formatting

use tabled::settings::{object::Columns, Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::config::settings::Settings;
use crate::models::Category;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Expenses")]
    count: usize,
}

/// Format categories as a table with derived totals
pub fn format_category_list(categories: &[Category], settings: &Settings) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'budget-planner category add <name> <limit>' to create one.\n"
            .to_string();
    }

    let symbol = settings.currency_symbol.as_str();
    let rows = categories.iter().map(|c| CategoryRow {
        name: c.name.clone(),
        limit: c.budget_limit.format_with_symbol(symbol),
        spent: c.total_expense().format_with_symbol(symbol),
        remaining: c.remaining_budget().format_with_symbol(symbol),
        count: c.expenses().len(),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()));
    format!("{}\n", table)
}

/// Format one category and its expenses
pub fn format_category_details(category: &Category, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    let mut output = String::new();

    output.push_str(&format!("Category: {}\n", category.name));
    output.push_str(&format!("  ID:        {}\n", category.id));
    output.push_str(&format!(
        "  Limit:     {}\n",
        category.budget_limit.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Spent:     {}\n",
        category.total_expense().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Remaining: {}{}\n",
        category.remaining_budget().format_with_symbol(symbol),
        if category.is_over_budget() {
            " (over budget)"
        } else {
            ""
        }
    ));

    if category.expenses().is_empty() {
        output.push_str("  No expenses recorded.\n");
    } else {
        output.push_str("  Expenses:\n");
        for expense in category.expenses() {
            output.push_str(&format!(
                "    {}  {:>12}\n",
                expense.date.format(&settings.date_format),
                expense.amount.format_with_symbol(symbol)
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_empty_list() {
        let output = format_category_list(&[], &Settings::default());
        assert!(output.starts_with("No categories found."));
    }

    #[test]
    fn test_list_shows_totals() {
        let mut food = Category::new("Food", Money::from_units(200));
        food.add_expense(Money::from_units(50));
        food.add_expense(Money::from_units(30));

        let output = format_category_list(&[food], &Settings::default());
        assert!(output.contains("Food"));
        assert!(output.contains("$200.00"));
        assert!(output.contains("$80.00"));
        assert!(output.contains("$120.00"));
    }

    #[test]
    fn test_details_flag_overspending() {
        let mut fun = Category::new("Fun", Money::from_units(10));
        fun.add_expense(Money::from_units(15));

        let output = format_category_details(&fun, &Settings::default());
        assert!(output.contains("Remaining: -$5.00 (over budget)"));
        assert!(output.contains("Expenses:"));
    }

    #[test]
    fn test_details_use_currency_symbol() {
        let settings = Settings {
            currency_symbol: "€".into(),
            ..Settings::default()
        };
        let output = format_category_details(&Category::new("Food", Money::from_units(3)), &settings);
        assert!(output.contains("€3.00"));
        assert!(output.contains("No expenses recorded."));
    }
}
