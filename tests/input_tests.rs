//! Integration tests for loading course files from disk

use gpa_policy::core::input::{load_courses, to_csv, to_toml, InputError};
use gpa_policy::core::models::{CourseCategory, GradeLevel};
use gpa_policy::core::schedule::starter_courses;
use gpa_policy::core::{calculate_all, calculate_by_semester, ProfileKind, ProfileRegistry};
use std::fs;
use tempfile::TempDir;

#[test]
fn load_toml_file_and_calculate() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("junior.toml");
    fs::write(
        &path,
        r#"
[[course]]
name = "AP US History"
grade = "A"
category = "ap"
grade_level = 11

[[course]]
name = "Chemistry"
grade = "B"
grade_level = 11
"#,
    )
    .unwrap();

    let courses = load_courses(&path).expect("Failed to load courses");
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0].category, CourseCategory::AdvancedPlacement);

    let registry = ProfileRegistry::canonical();
    let weighted = registry.by_kind(ProfileKind::StandardWeighted).clone();
    let result = &calculate_all(&courses, &[weighted], None, false)[0];
    assert!((result.gpa - 4.0).abs() < f64::EPSILON);
}

#[test]
fn load_csv_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("sophomore.CSV");
    fs::write(
        &path,
        "name,grade,category,credits,grade_level\nGeometry,B+,honors,1,10\nBand,A,,0.5,10\n",
    )
    .unwrap();

    let courses = load_courses(&path).expect("Failed to load courses");
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[1].category, CourseCategory::Standard);
    assert_eq!(courses[1].grade_level, Some(GradeLevel::Tenth));
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("courses.json");
    fs::write(&path, "[]").unwrap();

    let err = load_courses(&path).unwrap_err();
    assert!(matches!(err, InputError::UnsupportedFormat(ref ext) if ext == "json"));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = load_courses(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, InputError::Io(_)));
}

#[test]
fn starter_files_load_back_from_disk() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let starters = starter_courses(GradeLevel::Tenth, 2);

    let toml_path = dir.path().join("starter.toml");
    fs::write(&toml_path, to_toml(&starters).unwrap()).unwrap();
    assert_eq!(load_courses(&toml_path).unwrap(), starters);

    let csv_path = dir.path().join("starter.csv");
    fs::write(&csv_path, to_csv(&starters).unwrap()).unwrap();
    assert_eq!(load_courses(&csv_path).unwrap(), starters);
}

#[test]
fn load_csv_transcript_and_calculate_by_semester() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("transcript.csv");
    fs::write(
        &path,
        "\
name,grade,category,semester,grade_level
English 9,A,,9-1,9
Algebra 1,B,,9-1,9
English 10,A-,honors,10-1,10
World History,B+,,10-1,10
",
    )
    .unwrap();

    let courses = load_courses(&path).expect("Failed to load courses");
    let registry = ProfileRegistry::canonical();
    let profiles = registry.profiles_for_system("uc");
    let semesters = calculate_by_semester(&courses, &profiles, None);

    assert_eq!(semesters.len(), 2);
    assert_eq!(semesters[0].label(), "Gr9S1");
    assert_eq!(semesters[1].label(), "Gr10S1");

    let freshman_capped = &semesters[0].results[0];
    assert_eq!(freshman_capped.profile_id, "uc-capped");
    assert!(freshman_capped.not_counted_by_policy);
    assert!((freshman_capped.gpa - 3.5).abs() < f64::EPSILON);

    let sophomore_capped = &semesters[1].results[0];
    assert!(!sophomore_capped.not_counted_by_policy);
    // UC scale drops +/-: A- = 4, B+ = 3, honors boost +1 on English 10
    assert!((sophomore_capped.gpa - 4.0).abs() < f64::EPSILON);
}
