//! Reports module for the budget planner
//!
//! Read-only views computed from a ledger snapshot.

pub mod allocation;

pub use allocation::{AllocationReport, AllocationSlice};
