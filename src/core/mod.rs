//! Core GPA rules engine
//!
//! Grade scales, boost tables and profiles describe a policy; the standard
//! calculator and the UC engine apply one; the orchestrator runs a course list
//! through many. Everything here is pure and infallible except the file
//! boundary in [`input`] and the writers in [`report`].

pub mod boost;
pub mod calculator;
pub mod colleges;
pub mod input;
pub mod models;
pub mod orchestrator;
pub mod percentile;
pub mod profile;
pub mod report;
pub mod result;
pub mod scale;
pub mod schedule;
pub mod uc;

pub use boost::{BoostOverrides, BoostTable};
pub use orchestrator::{calculate_all, calculate_by_semester, calculate_cumulative};
pub use profile::{Profile, ProfileKind, ProfileRegistry};
pub use result::{CourseBreakdown, GpaResult, SemesterResult};

/// Returns the current version of the `GpaPolicy` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
