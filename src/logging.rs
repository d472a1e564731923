//! Tracing setup
//!
//! The filter comes from `BUDGET_PLANNER_LOG` (same syntax as `RUST_LOG`) and
//! defaults to warnings from this crate. Command-line runs log to stderr; the
//! TUI logs to a file because it owns the terminal.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::BudgetError;

/// Environment variable holding the tracing filter
pub const LOG_ENV: &str = "BUDGET_PLANNER_LOG";

const DEFAULT_DIRECTIVE: &str = "budget_planner=warn";

static TRACING_INIT: Once = Once::new();

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Log to stderr
pub fn init_stderr() {
    TRACING_INIT.call_once(|| {
        let _ = fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

/// Log to a file, appending
pub fn init_file(path: &Path) -> Result<(), BudgetError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| BudgetError::Io(format!("Failed to open log file {}: {}", path.display(), e)))?;

    TRACING_INIT.call_once(|| {
        let _ = fmt()
            .with_env_filter(env_filter())
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .try_init();
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_stderr();
        init_stderr();
        tracing::info!("tracing initialized twice without panicking");
    }
}
