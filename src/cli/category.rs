//! Category CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::category::{format_category_details, format_category_list};
use crate::error::BudgetResult;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Create a new category with a budget limit
    Add {
        /// Category name
        name: String,
        /// Budget limit (e.g., "200" or "199.99")
        #[arg(allow_hyphen_values = true)]
        limit: String,
    },

    /// List all categories with spent and remaining amounts
    List,

    /// Show a category and its expenses
    Show {
        /// Category name (exact, case-sensitive)
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: CategoryCommands,
) -> BudgetResult<()> {
    let mut service = CategoryService::new(storage, settings);

    match cmd {
        CategoryCommands::Add { name, limit } => {
            let category = service.create(&name, &limit)?;
            println!("Created category: {}", category.name);
            println!(
                "  Limit: {}",
                category
                    .budget_limit
                    .format_with_symbol(&settings.currency_symbol)
            );
        }

        CategoryCommands::List => {
            print!("{}", format_category_list(service.list(), settings));
        }

        CategoryCommands::Show { name } => {
            let category = service.find(&name)?;
            print!("{}", format_category_details(category, settings));
        }
    }

    Ok(())
}
