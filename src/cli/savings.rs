//! Savings goal CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::savings::{format_goal_line, format_savings_list};
use crate::error::BudgetResult;
use crate::services::SavingsService;
use crate::storage::Storage;

/// Savings subcommands
#[derive(Subcommand)]
pub enum SavingsCommands {
    /// Create a savings goal with a target amount
    Set {
        /// Goal name
        name: String,
        /// Target amount
        #[arg(allow_hyphen_values = true)]
        target: String,
    },

    /// Deposit toward a savings goal
    Deposit {
        /// Goal name (exact, case-sensitive)
        name: String,
        /// Amount to deposit (negative to withdraw)
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// List savings goals and their progress
    List,
}

/// Handle a savings command
pub fn handle_savings_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: SavingsCommands,
) -> BudgetResult<()> {
    let mut service = SavingsService::new(storage, settings);

    match cmd {
        SavingsCommands::Set { name, target } => {
            let goal = service.set_goal(&name, &target)?;
            println!("Created savings goal: {}", goal.name);
            println!(
                "  Target: {}",
                goal.target_amount
                    .format_with_symbol(&settings.currency_symbol)
            );
        }

        SavingsCommands::Deposit { name, amount } => {
            let goal = service.deposit(&name, &amount)?;
            println!("{}", format_goal_line(&goal, settings));
        }

        SavingsCommands::List => {
            print!("{}", format_savings_list(service.list(), settings));
        }
    }

    Ok(())
}
