//! Configuration module for the budget planner
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence
//! - Input policy preferences

pub mod paths;
pub mod settings;

pub use paths::PlannerPaths;
pub use settings::{ChartMetric, Settings};
