//! Percentile command handler

use gpa_policy::core::percentile::percentile_for_id;
use gpa_policy::core::report::ordinal;

/// The message printed for a GPA under a profile
///
/// # Errors
/// Returns an error if the profile has no national percentile table
pub fn describe(gpa: f64, profile_id: &str) -> Result<String, String> {
    percentile_for_id(profile_id, gpa)
        .map(|p| format!("A {gpa:.2} GPA ({profile_id}) is around the {} percentile", ordinal(p)))
        .ok_or_else(|| format!("No national percentile data for profile '{profile_id}'"))
}

/// Run the percentile command
pub fn run(gpa: f64, profile_id: &str) -> i32 {
    match describe(gpa, profile_id) {
        Ok(message) => {
            println!("{message}");
            0
        }
        Err(err) => {
            eprintln!("✗ {err}");
            1
        }
    }
}
