use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use budget_planner::cli::{
    handle_category_command, handle_chart_command, handle_expense_command,
    handle_savings_command, CategoryCommands, ChartArgs, ExpenseCommands, SavingsCommands,
};
use budget_planner::config::{paths::PlannerPaths, settings::Settings};
use budget_planner::logging;
use budget_planner::storage::Storage;

#[derive(Parser)]
#[command(
    name = "budget-planner",
    author = "Kaylee Beyene",
    version,
    about = "Plan category budgets, track expenses and grow savings goals",
    long_about = "Budget Planner keeps a list of spending categories, each with a \
                  budget limit and the expenses recorded against it, plus savings \
                  goals you deposit into. Use the subcommands for scripting or \
                  'budget-planner tui' for the interactive interface."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Expense commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Savings(SavingsCommands),

    /// Show how the budget is allocated across categories
    Chart(ChartArgs),

    /// Write the ledger to a file
    Save {
        /// Destination file
        path: PathBuf,
    },

    /// Replace the ledger with the contents of a file
    Load {
        /// Source file
        path: PathBuf,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = PlannerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    if matches!(cli.command, Some(Commands::Tui)) {
        paths.ensure_directories()?;
        logging::init_file(&paths.log_file())?;
    } else {
        logging::init_stderr();
    }

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Tui) => {
            budget_planner::tui::run_tui(&mut storage, &settings)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&mut storage, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut storage, &settings, cmd)?;
        }
        Some(Commands::Savings(cmd)) => {
            handle_savings_command(&mut storage, &settings, cmd)?;
        }
        Some(Commands::Chart(args)) => {
            handle_chart_command(&storage, &settings, args)?;
        }
        Some(Commands::Save { path }) => {
            storage
                .export_to(&path)
                .with_context(|| format!("Failed to save to {}", path.display()))?;
            println!("Saved ledger to {}", path.display());
        }
        Some(Commands::Load { path }) => {
            storage
                .import_from(&path)
                .with_context(|| format!("Failed to load from {}", path.display()))?;
            let ledger = storage.ledger();
            println!("Loaded ledger from {}", path.display());
            println!(
                "  {} categories, {} expenses, {} savings goals",
                ledger.categories().len(),
                ledger.expense_count(),
                ledger.savings_goals().len()
            );
        }
        Some(Commands::Config) => {
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }
            println!("Budget Planner Configuration");
            println!("============================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Ledger file:     {}", paths.ledger_file().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Log file:        {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:         {}", settings.currency_symbol);
            println!("  Date format:             {}", settings.date_format);
            println!(
                "  Default chart metric:    {}",
                settings.default_chart_metric.label()
            );
            println!(
                "  Reject negative amounts: {}",
                settings.reject_negative_amounts
            );
            println!("  Unique names:            {}", settings.unique_names);
        }
        None => {
            println!("Budget Planner - category budgets, expenses and savings goals");
            println!();
            println!("Run 'budget-planner --help' for usage information.");
            println!("Run 'budget-planner tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
