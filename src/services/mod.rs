//! Service layer for the budget planner
//!
//! Services sit between the presentation layer and the ledger. They take raw
//! user strings, validate and parse them before anything is mutated, apply
//! the input policy from `Settings`, and persist after each change.

pub mod category;
pub mod expense;
pub mod savings;

pub use category::CategoryService;
pub use expense::ExpenseService;
pub use savings::SavingsService;

use crate::config::settings::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::models::Money;

/// Parse a user-entered amount, applying the negative-amount policy
pub(crate) fn parse_amount(field: &str, input: &str, settings: &Settings) -> BudgetResult<Money> {
    let amount = Money::parse(input)
        .map_err(|e| BudgetError::Validation(format!("Invalid {}: {}", field, e)))?;

    if settings.reject_negative_amounts && amount.is_negative() {
        return Err(BudgetError::Validation(format!(
            "{} cannot be negative: {}",
            capitalize(field),
            amount.format_with_symbol(&settings.currency_symbol)
        )));
    }

    Ok(amount)
}

/// Trim a user-entered name and reject it if blank
pub(crate) fn clean_name<'s>(entity: &str, input: &'s str) -> BudgetResult<&'s str> {
    let name = input.trim();
    if name.is_empty() {
        return Err(BudgetError::Validation(format!(
            "{} name cannot be empty",
            entity
        )));
    }
    Ok(name)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_accepts_negative_by_default() {
        let settings = Settings::default();
        assert_eq!(
            parse_amount("amount", "-5", &settings).unwrap(),
            Money::from_units(-5)
        );
    }

    #[test]
    fn test_parse_amount_policy() {
        let settings = Settings {
            reject_negative_amounts: true,
            ..Settings::default()
        };

        let err = parse_amount("budget limit", "-5", &settings).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Budget limit cannot be negative: -$5.00"
        );
        assert!(parse_amount("amount", "0", &settings).is_ok());
    }

    #[test]
    fn test_parse_amount_malformed() {
        let err = parse_amount("amount", "ten", &Settings::default()).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Invalid amount"));
    }

    #[test]
    fn test_parse_amount_rejects_oversized() {
        let err = parse_amount("amount", "90000000000000000", &Settings::default()).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_clean_name() {
        assert_eq!(clean_name("Category", "  Food ").unwrap(), "Food");
        assert!(clean_name("Category", "   ").unwrap_err().is_validation());
    }
}
