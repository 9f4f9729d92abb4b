//! Template command handler
//!
//! Writes a starter course file pre-filled with a typical schedule.

use crate::args::TemplateFormat;
use gpa_policy::core::input::{to_csv, to_toml};
use gpa_policy::core::models::GradeLevel;
use gpa_policy::core::schedule::starter_courses;
use gpa_policy::{error, info};
use std::fs;
use std::path::Path;

/// Render the starter course file
///
/// # Errors
/// Returns an error if the courses cannot be serialized
pub fn render(level: GradeLevel, semester: u8, format: TemplateFormat) -> Result<String, String> {
    let courses = starter_courses(level, semester);
    let rendered = match format {
        TemplateFormat::Toml => to_toml(&courses),
        TemplateFormat::Csv => to_csv(&courses),
    };
    rendered.map_err(|e| e.to_string())
}

/// Run the template command
pub fn run(level: GradeLevel, semester: u8, format: TemplateFormat, output: Option<&Path>) -> i32 {
    let content = match render(level, semester, format) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("✗ {err}");
            return 1;
        }
    };

    let Some(path) = output else {
        print!("{content}");
        return 0;
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("✗ Failed to create {}: {e}", parent.display());
            return 1;
        }
    }
    match fs::write(path, content) {
        Ok(()) => {
            info!("Template written to {}", path.display());
            println!("✓ Template written: {}", path.display());
            0
        }
        Err(e) => {
            error!("Failed to write template {}: {e}", path.display());
            eprintln!("✗ Failed to write {}: {e}", path.display());
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpa_policy::core::input::{parse_csv, parse_toml};

    #[test]
    fn test_toml_template_loads_back() {
        let content = render(GradeLevel::Eleventh, 1, TemplateFormat::Toml).unwrap();
        let courses = parse_toml(&content).unwrap();
        assert_eq!(courses, starter_courses(GradeLevel::Eleventh, 1));
    }

    #[test]
    fn test_csv_template_loads_back() {
        let content = render(GradeLevel::Twelfth, 2, TemplateFormat::Csv).unwrap();
        let courses = parse_csv(content.as_bytes()).unwrap();
        assert_eq!(courses.len(), starter_courses(GradeLevel::Twelfth, 2).len());
        assert!(courses.iter().all(|c| c.grade_level == Some(GradeLevel::Twelfth)));
    }
}
