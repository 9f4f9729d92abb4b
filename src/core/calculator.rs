//! Standard GPA calculator
//!
//! Computes GPA for profiles without eligibility rules: every course counts,
//! each earns `min(scale points + category boost, max_gpa)` per credit.

use crate::core::boost::BoostOverrides;
use crate::core::models::Course;
use crate::core::profile::Profile;
use crate::core::result::{CourseBreakdown, GpaResult};

/// Calculate GPA for a course list under a standard profile.
///
/// # Arguments
/// * `courses` - Courses to include (may be empty)
/// * `profile` - Profile supplying scale, boosts and GPA ceiling
/// * `overrides` - Optional per-category boosts layered over the profile's table
///
/// # Returns
/// A result whose breakdown lists every course in input order, none excluded.
#[must_use]
pub fn calculate(
    courses: &[Course],
    profile: &Profile,
    overrides: Option<&BoostOverrides>,
) -> GpaResult {
    let boosts = overrides.map_or(profile.boosts, |o| profile.boosts.merged(o));

    let breakdown = courses
        .iter()
        .map(|course| CourseBreakdown::included(course, profile, boosts.boost(course.category)))
        .collect();

    GpaResult::from_breakdown(profile, breakdown)
}
