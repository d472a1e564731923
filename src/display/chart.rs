//! Text rendering of the allocation chart

use crate::config::settings::Settings;
use crate::reports::AllocationReport;

/// Width of the longest bar, in characters
const BAR_WIDTH: usize = 30;

/// Render the report as a horizontal bar chart with pie-style percentages
pub fn format_allocation_chart(report: &AllocationReport, settings: &Settings) -> String {
    if report.is_empty() {
        return "Please add categories with budgets before viewing the chart.\n".to_string();
    }

    let symbol = settings.currency_symbol.as_str();
    let name_width = report
        .slices
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0);
    let max = report.max_value().as_f64();

    let mut output = format!("{}\n\n", report.metric.label());
    for slice in &report.slices {
        let filled = if slice.value.is_positive() && max > 0.0 {
            ((slice.value.as_f64() / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        output.push_str(&format!(
            "{:<name_width$}  {:<bar_width$}  {:>12}  {:>5.1}%\n",
            slice.name,
            "█".repeat(filled.max(usize::from(slice.value.is_positive()))),
            slice.value.format_with_symbol(symbol),
            slice.percentage,
            name_width = name_width,
            bar_width = BAR_WIDTH,
        ));
    }
    output.push_str(&format!(
        "\nTotal: {}\n",
        report.total.format_with_symbol(symbol)
    ));

    output
}
