//! Allocation report
//!
//! Read-only chart data: category names and one value per category, as
//! parallel sequences, plus each category's share of the positive total.

use crate::config::settings::ChartMetric;
use crate::models::{Ledger, Money};

/// One category's slice of the chart
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationSlice {
    /// Category name
    pub name: String,
    /// Budget limit or total expense, depending on the metric
    pub value: Money,
    /// Share of the positive total, 0-100 (0 for non-positive values)
    pub percentage: f64,
}

/// Allocation of budget (or spending) across categories
#[derive(Debug, Clone)]
pub struct AllocationReport {
    /// What the values measure
    pub metric: ChartMetric,
    /// One slice per category, in ledger order
    pub slices: Vec<AllocationSlice>,
    /// Sum of positive values (the pie total)
    pub total: Money,
}

impl AllocationReport {
    /// Build the report from a ledger snapshot
    pub fn generate(ledger: &Ledger, metric: ChartMetric) -> Self {
        let values: Vec<(String, Money)> = ledger
            .categories()
            .iter()
            .map(|c| {
                let value = match metric {
                    ChartMetric::Budget => c.budget_limit,
                    ChartMetric::Spent => c.total_expense(),
                };
                (c.name.clone(), value)
            })
            .collect();

        let total: Money = values
            .iter()
            .map(|(_, v)| *v)
            .filter(|v| v.is_positive())
            .sum();

        let slices = values
            .into_iter()
            .map(|(name, value)| {
                let percentage = if total.is_positive() && value.is_positive() {
                    value.as_f64() / total.as_f64() * 100.0
                } else {
                    0.0
                };
                AllocationSlice {
                    name,
                    value,
                    percentage,
                }
            })
            .collect();

        Self {
            metric,
            slices,
            total,
        }
    }

    /// True when there is nothing positive to chart
    pub fn is_empty(&self) -> bool {
        !self.total.is_positive()
    }

    /// Category names, parallel to `values`
    pub fn labels(&self) -> Vec<&str> {
        self.slices.iter().map(|s| s.name.as_str()).collect()
    }

    /// Values, parallel to `labels`
    pub fn values(&self) -> Vec<Money> {
        self.slices.iter().map(|s| s.value).collect()
    }

    /// Largest value, used to scale bars
    pub fn max_value(&self) -> Money {
        self.slices
            .iter()
            .map(|s| s.value)
            .max()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.add_category("Food", Money::from_units(200));
        ledger.add_category("Rent", Money::from_units(600));
        ledger.add_category("Gifts", Money::zero());
        ledger.add_expense("Food", Money::from_units(50)).unwrap();
        ledger.add_expense("Gifts", Money::from_units(150)).unwrap();
        ledger
    }

    #[test]
    fn test_budget_metric() {
        let report = AllocationReport::generate(&sample_ledger(), ChartMetric::Budget);

        assert_eq!(report.labels(), vec!["Food", "Rent", "Gifts"]);
        assert_eq!(
            report.values(),
            vec![Money::from_units(200), Money::from_units(600), Money::zero()]
        );
        assert_eq!(report.total, Money::from_units(800));
        assert_eq!(report.slices[0].percentage, 25.0);
        assert_eq!(report.slices[1].percentage, 75.0);
        assert_eq!(report.slices[2].percentage, 0.0);
    }

    #[test]
    fn test_spent_metric() {
        let report = AllocationReport::generate(&sample_ledger(), ChartMetric::Spent);

        assert_eq!(
            report.values(),
            vec![Money::from_units(50), Money::zero(), Money::from_units(150)]
        );
        assert_eq!(report.slices[2].percentage, 75.0);
        assert_eq!(report.max_value(), Money::from_units(150));
    }

    #[test]
    fn test_negative_values_excluded_from_total() {
        let mut ledger = Ledger::new();
        ledger.add_category("Refunds", Money::from_units(-40));
        ledger.add_category("Food", Money::from_units(10));

        let report = AllocationReport::generate(&ledger, ChartMetric::Budget);
        assert_eq!(report.total, Money::from_units(10));
        assert_eq!(report.slices[0].percentage, 0.0);
        assert_eq!(report.slices[1].percentage, 100.0);
    }

    #[test]
    fn test_empty_ledger() {
        let report = AllocationReport::generate(&Ledger::new(), ChartMetric::Budget);
        assert!(report.is_empty());
        assert!(report.slices.is_empty());
        assert!(report.max_value().is_zero());
    }
}
