//! CLI command handlers for `GpaPolicy`.
//!
//! Each command is implemented in its own submodule and returns the process
//! exit code.

pub mod calc;
pub mod colleges;
pub mod config;
pub mod percentile;
pub mod profiles;
pub mod template;
