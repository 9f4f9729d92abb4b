//! Colleges command handler

use gpa_policy::core::colleges::{self, College, CollegeTier};

/// Colleges to list, optionally limited to one tier
#[must_use]
pub fn listed_colleges(tier: Option<CollegeTier>) -> Vec<&'static College> {
    match tier {
        Some(tier) => colleges::in_tier(tier).collect(),
        None => colleges::all().iter().collect(),
    }
}

/// One table row, with the comparison appended when a GPA is given
#[must_use]
pub fn format_row(college: &College, gpa: Option<f64>) -> String {
    let mut row = format!(
        "{:<42} {:<8} {:>5.2} {:>6.1}%",
        college.name, college.tier, college.avg_gpa, college.acceptance_rate
    );
    if let Some(gpa) = gpa {
        let comparison = college.compare(gpa);
        row.push_str(&format!("  {:+.2} {}", comparison.difference, comparison.standing));
    }
    row
}

/// Run the colleges command
pub fn run(tier: Option<CollegeTier>, gpa: Option<f64>) -> i32 {
    let listed = listed_colleges(tier);
    println!(
        "{:<42} {:<8} {:>5} {:>7}",
        "College", "Tier", "GPA", "Admit"
    );
    for college in listed {
        println!("{}", format_row(college, gpa));
    }
    0
}
