//! Chart CLI command

use clap::Args;

use crate::config::settings::{ChartMetric, Settings};
use crate::display::chart::format_allocation_chart;
use crate::error::BudgetResult;
use crate::reports::AllocationReport;
use crate::storage::Storage;

/// Arguments for the chart command
#[derive(Args)]
pub struct ChartArgs {
    /// Plot budget limits or total spending (defaults to the configured metric)
    #[arg(short, long, value_enum)]
    pub metric: Option<ChartMetric>,
}

/// Print the allocation chart
pub fn handle_chart_command(
    storage: &Storage,
    settings: &Settings,
    args: ChartArgs,
) -> BudgetResult<()> {
    let metric = args.metric.unwrap_or(settings.default_chart_metric);
    let report = AllocationReport::generate(storage.ledger(), metric);
    print!("{}", format_allocation_chart(&report, settings));
    Ok(())
}
