//! Library for `GpaPolicy`
//! Computes GPAs for one course list under several institutional policies at
//! once: standard unweighted and weighted, and the University of California
//! capped, uncapped and unweighted variants.

pub mod config;
pub mod core;
pub mod logger;

pub use crate::core::get_version;
