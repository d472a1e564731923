//! Budget Planner - category budgets, expenses and savings goals
//!
//! This library provides the core of the budget planner: a ledger of
//! spending categories (each with a budget limit and the expenses recorded
//! against it) and savings goals, persisted as one versioned JSON document
//! and driven from either the command line or a terminal UI.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Money, categories, expenses, savings goals and the ledger
//! - `storage`: JSON file storage layer
//! - `services`: Input parsing and policy on top of the ledger
//! - `reports`: Chart data derived from the ledger
//! - `display`: Terminal formatting for listings and charts
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal interface
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_planner::config::{paths::PlannerPaths, settings::Settings};
//! use budget_planner::storage::Storage;
//!
//! let paths = PlannerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{BudgetError, BudgetResult};
