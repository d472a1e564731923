//! Terminal User Interface module
//!
//! A menu-driven TUI over the same ledger the CLI uses: a main menu,
//! form screens for categories, expenses and savings goals, and a bar
//! chart of how the budget is allocated.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
