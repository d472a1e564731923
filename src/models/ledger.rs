//! The ledger aggregate
//!
//! The ledger owns every category (and through them every expense) and every
//! savings goal. All mutations go through it. Lookups by name are linear,
//! exact, case-sensitive, and return the first match.

use tracing::{info, warn};

use crate::error::{BudgetError, BudgetResult};

use super::category::Category;
use super::expense::Expense;
use super::money::Money;
use super::savings_goal::SavingsGoal;

/// Aggregate root holding categories and savings goals in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    categories: Vec<Category>,
    savings_goals: Vec<SavingsGoal>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from its two collections
    ///
    /// Fails if any expense names a category other than the one holding it.
    pub fn from_parts(
        categories: Vec<Category>,
        savings_goals: Vec<SavingsGoal>,
    ) -> BudgetResult<Self> {
        for category in &categories {
            if let Some(stray) = category
                .expenses()
                .iter()
                .find(|e| e.category_id != category.id)
            {
                return Err(BudgetError::Storage(format!(
                    "Expense {} is stored under category '{}' but belongs to {}",
                    stray.id, category.name, stray.category_id
                )));
            }
        }

        Ok(Self {
            categories,
            savings_goals,
        })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn savings_goals(&self) -> &[SavingsGoal] {
        &self.savings_goals
    }

    /// Append a new category and return it. Duplicate names are allowed.
    pub fn add_category(&mut self, name: impl Into<String>, budget_limit: Money) -> &Category {
        let category = Category::new(name, budget_limit);
        info!(category = %category.name, limit = %budget_limit, "category added");
        self.categories.push(category);
        &self.categories[self.categories.len() - 1]
    }

    /// First category whose name equals `name` exactly
    pub fn find_category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Log an expense against the first category named `category_name`
    ///
    /// On a lookup miss nothing is mutated and `BudgetError::NotFound` is
    /// returned.
    pub fn add_expense(&mut self, category_name: &str, amount: Money) -> BudgetResult<&Expense> {
        let Some(index) = self.categories.iter().position(|c| c.name == category_name) else {
            warn!(category = category_name, "category not found, expense dropped");
            return Err(BudgetError::category_not_found(category_name));
        };

        info!(category = category_name, amount = %amount, "expense added");
        Ok(self.categories[index].add_expense(amount))
    }

    /// Append a new savings goal and return it. No uniqueness check.
    pub fn set_savings_goal(&mut self, name: impl Into<String>, target_amount: Money) -> &SavingsGoal {
        let goal = SavingsGoal::new(name, target_amount);
        info!(goal = %goal.name, target = %target_amount, "savings goal set");
        self.savings_goals.push(goal);
        &self.savings_goals[self.savings_goals.len() - 1]
    }

    /// First savings goal whose name equals `name` exactly
    pub fn find_savings_goal_by_name(&self, name: &str) -> Option<&SavingsGoal> {
        self.savings_goals.iter().find(|g| g.name == name)
    }

    /// Deposit into the first goal named `name`
    ///
    /// Returns `false`, without mutating anything, when no goal matches.
    pub fn deposit_to_savings(&mut self, name: &str, amount: Money) -> bool {
        match self.savings_goals.iter_mut().find(|g| g.name == name) {
            Some(goal) => {
                goal.deposit(amount);
                info!(goal = name, amount = %amount, total = %goal.current_amount, "deposit recorded");
                true
            }
            None => {
                warn!(goal = name, "savings goal not found, deposit dropped");
                false
            }
        }
    }

    /// Every expense paired with its category, category by category in entry order
    pub fn expenses(&self) -> impl Iterator<Item = (&Category, &Expense)> + '_ {
        self.categories
            .iter()
            .flat_map(|c| c.expenses().iter().map(move |e| (c, e)))
    }

    pub fn expense_count(&self) -> usize {
        self.categories.iter().map(|c| c.expenses().len()).sum()
    }

    /// Sum of all category limits
    pub fn total_budget(&self) -> Money {
        self.categories.iter().map(|c| c.budget_limit).sum()
    }

    /// Sum of all expenses across categories
    pub fn total_spent(&self) -> Money {
        self.categories.iter().map(|c| c.total_expense()).sum()
    }

    /// Replace the whole graph with `other` (no merge)
    pub fn replace_with(&mut self, other: Ledger) {
        *self = other;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_category_appends_in_order() {
        let mut ledger = Ledger::new();
        ledger.add_category("Food", Money::from_units(200));
        ledger.add_category("Rent", Money::from_units(900));

        let names: Vec<_> = ledger.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Food", "Rent"]);
        assert_eq!(ledger.total_budget(), Money::from_units(1100));
    }

    #[test]
    fn test_find_returns_first_duplicate() {
        let mut ledger = Ledger::new();
        let first_id = ledger.add_category("Food", Money::from_units(100)).id;
        ledger.add_category("Food", Money::from_units(300));

        let found = ledger.find_category_by_name("Food").unwrap();
        assert_eq!(found.id, first_id);
        assert_eq!(ledger.find_category_by_name("Food").unwrap().id, first_id);
        assert_eq!(ledger.categories().len(), 2);
    }

    #[test]
    fn test_find_is_case_sensitive() {
        let mut ledger = Ledger::new();
        ledger.add_category("Food", Money::from_units(100));

        assert!(ledger.find_category_by_name("food").is_none());
        assert!(ledger.find_category_by_name("Food ").is_none());
    }

    #[test]
    fn test_add_expense_goes_to_first_match() {
        let mut ledger = Ledger::new();
        ledger.add_category("Food", Money::from_units(100));
        ledger.add_category("Food", Money::from_units(300));

        ledger.add_expense("Food", Money::from_units(20)).unwrap();

        assert_eq!(ledger.categories()[0].expenses().len(), 1);
        assert!(ledger.categories()[1].expenses().is_empty());
    }

    #[test]
    fn test_add_expense_miss_leaves_ledger_unchanged() {
        let mut ledger = Ledger::new();
        ledger.add_category("Food", Money::from_units(200));
        ledger.add_expense("Food", Money::from_units(50)).unwrap();
        let before = ledger.clone();

        let err = ledger
            .add_expense("Nonexistent", Money::from_units(10))
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(ledger, before);
        assert_eq!(ledger.expense_count(), 1);
    }

    #[test]
    fn test_deposit_to_savings() {
        let mut ledger = Ledger::new();
        ledger.set_savings_goal("Vacation", Money::from_units(500));

        assert!(ledger.deposit_to_savings("Vacation", Money::from_units(500)));
        assert!(ledger
            .find_savings_goal_by_name("Vacation")
            .unwrap()
            .is_goal_met());
    }

    #[test]
    fn test_deposit_miss_returns_false() {
        let mut ledger = Ledger::new();
        ledger.set_savings_goal("Vacation", Money::from_units(500));
        let before = ledger.clone();

        assert!(!ledger.deposit_to_savings("Car", Money::from_units(5)));
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_duplicate_goals_deposit_to_first() {
        let mut ledger = Ledger::new();
        ledger.set_savings_goal("Fund", Money::from_units(10));
        ledger.set_savings_goal("Fund", Money::from_units(20));

        ledger.deposit_to_savings("Fund", Money::from_units(5));

        assert_eq!(ledger.savings_goals()[0].current_amount, Money::from_units(5));
        assert!(ledger.savings_goals()[1].current_amount.is_zero());
    }

    #[test]
    fn test_expenses_iterate_category_then_entry_order() {
        let mut ledger = Ledger::new();
        ledger.add_category("A", Money::zero());
        ledger.add_category("B", Money::zero());
        ledger.add_expense("B", Money::from_cents(1)).unwrap();
        ledger.add_expense("A", Money::from_cents(2)).unwrap();
        ledger.add_expense("A", Money::from_cents(3)).unwrap();

        let seen: Vec<_> = ledger
            .expenses()
            .map(|(c, e)| (c.name.clone(), e.amount.cents()))
            .collect();
        assert_eq!(
            seen,
            vec![("A".into(), 2), ("A".into(), 3), ("B".into(), 1)]
        );
        assert_eq!(ledger.total_spent(), Money::from_cents(6));
    }

    #[test]
    fn test_from_parts_rejects_misfiled_expense() {
        let mut food = Category::new("Food", Money::zero());
        food.add_expense(Money::from_units(1));
        let mut rent = Category::new("Rent", Money::zero());
        rent.add_expense(Money::from_units(2));

        // Swap expense lists through serialization to misfile them
        let mut food_json = serde_json::to_value(&food).unwrap();
        let rent_json = serde_json::to_value(&rent).unwrap();
        food_json["expenses"] = rent_json["expenses"].clone();
        let misfiled: Category = serde_json::from_value(food_json).unwrap();

        let err = Ledger::from_parts(vec![misfiled], Vec::new()).unwrap_err();
        assert!(matches!(err, BudgetError::Storage(_)));
    }

    #[test]
    fn test_scenario() {
        let mut ledger = Ledger::new();
        ledger.add_category("Food", Money::from_units(200));
        ledger.add_expense("Food", Money::from_units(50)).unwrap();
        ledger.add_expense("Food", Money::from_units(30)).unwrap();

        let food = ledger.find_category_by_name("Food").unwrap();
        assert_eq!(food.total_expense(), Money::from_units(80));
        assert_eq!(food.remaining_budget(), Money::from_units(120));

        ledger.set_savings_goal("Vacation", Money::from_units(500));
        assert!(ledger.deposit_to_savings("Vacation", Money::from_units(500)));
        assert!(ledger.savings_goals()[0].is_goal_met());

        let before = ledger.clone();
        assert!(ledger
            .add_expense("Nonexistent", Money::from_units(10))
            .is_err());
        assert_eq!(ledger, before);
    }
}
