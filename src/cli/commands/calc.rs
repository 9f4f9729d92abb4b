//! Calc command handler
//!
//! Loads a course file, runs it through the selected GPA profiles and renders
//! the results in the requested report format.

use gpa_policy::config::Config;
use gpa_policy::core::colleges::{self, Comparison};
use gpa_policy::core::input::load_courses;
use gpa_policy::core::models::Course;
use gpa_policy::core::orchestrator::{calculate_all, calculate_by_semester, calculate_cumulative};
use gpa_policy::core::profile::{Profile, ProfileKind, ProfileRegistry};
use gpa_policy::core::report::formats::ReportFormat;
use gpa_policy::core::report::{reporter_for, ReportContext};
use gpa_policy::core::{GpaResult, SemesterResult};
use gpa_policy::{debug, error, info, verbose};
use std::path::{Path, PathBuf};

/// Options for one `calc` invocation
#[derive(Debug, Clone)]
pub struct CalcOptions {
    /// Course file to load
    pub input_file: PathBuf,
    /// Report format
    pub format: ReportFormat,
    /// Explicit output file
    pub output: Option<PathBuf>,
    /// Also write into the configured reports directory
    pub save: bool,
    /// College whose branded profiles are shown
    pub college: Option<String>,
    /// Use the cumulative fallback for UC profiles
    pub cumulative: bool,
    /// Include per-course breakdowns
    pub breakdown: bool,
    /// Add per-semester results
    pub by_semester: bool,
    /// Report title
    pub title: Option<String>,
}

/// Run the calc command
pub fn run(options: &CalcOptions, config: &Config) -> i32 {
    match calculate_report(options, config) {
        Ok(written) => {
            for path in written {
                println!("✓ Report written: {}", path.display());
            }
            0
        }
        Err(err) => {
            error!("GPA calculation failed for {}: {err}", options.input_file.display());
            eprintln!("✗ {err}");
            1
        }
    }
}

/// Calculate every selected profile for a course list
///
/// # Errors
/// Returns an error if a configured profile id is unknown
pub fn calculate(
    courses: &[Course],
    config: &Config,
    college: Option<&str>,
    cumulative: bool,
) -> Result<Vec<GpaResult>, String> {
    let calc = &config.calculation;
    let profiles = selected_profiles(config, college)?;
    let overrides = (!calc.boosts.is_empty()).then_some(&calc.boosts);
    Ok(if cumulative && !calc.skip_eligibility_filter {
        calculate_cumulative(courses, &profiles, overrides)
    } else {
        calculate_all(courses, &profiles, overrides, calc.skip_eligibility_filter)
    })
}

/// Calculate every selected profile once per semester
///
/// # Errors
/// Returns an error if a configured profile id is unknown
pub fn calculate_semesters(
    courses: &[Course],
    config: &Config,
    college: Option<&str>,
) -> Result<Vec<SemesterResult>, String> {
    let calc = &config.calculation;
    let profiles = selected_profiles(config, college)?;
    let overrides = (!calc.boosts.is_empty()).then_some(&calc.boosts);
    Ok(calculate_by_semester(courses, &profiles, overrides))
}

fn selected_profiles(config: &Config, college: Option<&str>) -> Result<Vec<Profile>, String> {
    let registry = ProfileRegistry::canonical();
    let profiles = config.calculation.select_profiles(&registry, college)?;
    debug!(
        "Selected profiles: {}",
        profiles.iter().map(|p| p.id.as_str()).collect::<Vec<_>>().join(", ")
    );
    Ok(profiles)
}

/// Compare the unweighted result (or the first one) with a known college's average
#[must_use]
pub fn college_comparison(college: &str, results: &[GpaResult]) -> Option<Comparison> {
    let known = colleges::find(college)?;
    let result = results
        .iter()
        .find(|r| ProfileKind::from_id(&r.profile_id) == Some(ProfileKind::StandardUnweighted))
        .or_else(|| results.first())?;
    Some(known.compare(result.gpa))
}

/// Default report title: the input file stem
fn default_title(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Where `--save` writes the report
fn saved_report_path(config: &Config, input: &Path, format: ReportFormat) -> PathBuf {
    let stem = default_title(input);
    let stem = if stem.is_empty() { "gpa".to_string() } else { stem };
    PathBuf::from(&config.paths.reports_dir).join(format!("{stem}_gpa.{}", format.extension()))
}

/// Load, calculate and render; returns the files written
fn calculate_report(options: &CalcOptions, config: &Config) -> Result<Vec<PathBuf>, String> {
    let input = &options.input_file;
    let courses = load_courses(input)
        .map_err(|e| format!("Failed to load {}: {e}", input.display()))?;
    info!("Loaded {} courses from {}", courses.len(), input.display());

    let results = calculate(
        &courses,
        config,
        options.college.as_deref(),
        options.cumulative,
    )?;
    for result in &results {
        verbose!("{}: {:.2}", result.profile_name, result.gpa);
    }

    let semesters = if options.by_semester {
        calculate_semesters(&courses, config, options.college.as_deref())?
    } else {
        Vec::new()
    };
    debug!("Semester groups: {}", semesters.len());

    let title = options.title.clone().unwrap_or_else(|| default_title(input));
    let ctx = ReportContext::new(&title, &courses, &results)
        .with_breakdown(options.breakdown)
        .with_semesters(&semesters);
    let reporter = reporter_for(options.format);

    let mut targets: Vec<PathBuf> = options.output.iter().cloned().collect();
    if options.save {
        targets.push(saved_report_path(config, input, options.format));
    }

    let comparison = options
        .college
        .as_deref()
        .and_then(|college| college_comparison(college, &results));
    if let Some(comparison) = &comparison {
        info!("College comparison: {comparison}");
    }

    if targets.is_empty() {
        let rendered = reporter.render(&ctx).map_err(|e| e.to_string())?;
        print!("{rendered}");
        if !rendered.ends_with('\n') {
            println!();
        }
        if let (Some(comparison), ReportFormat::Text) = (&comparison, options.format) {
            println!("\n{comparison}");
        }
        return Ok(Vec::new());
    }

    if let Some(comparison) = &comparison {
        println!("{comparison}");
    }

    for target in &targets {
        reporter
            .generate(&ctx, target)
            .map_err(|e| format!("Failed to write {}: {e}", target.display()))?;
        info!("Report written to {}", target.display());
    }
    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpa_policy::core::models::{CourseCategory, Grade, GradeLevel};

    fn courses() -> Vec<Course> {
        vec![
            Course::new("a", "AP Bio", Grade::A, CourseCategory::AdvancedPlacement, 1.0)
                .with_grade_level(GradeLevel::Eleventh),
            Course::new("b", "Algebra", Grade::B, CourseCategory::Standard, 1.0)
                .with_grade_level(GradeLevel::Ninth),
        ]
    }

    #[test]
    fn test_calculate_uses_system_profiles() {
        let mut config = Config::from_defaults();
        config.calculation.system = "uc".to_string();
        let results = calculate(&courses(), &config, None, false).unwrap();
        let ids: Vec<&str> = results.iter().map(|r| r.profile_id.as_str()).collect();
        assert_eq!(
            ids,
            ["uc-capped", "uc-uncapped", "uc-unweighted", "standard-unweighted"]
        );
    }

    #[test]
    fn test_calculate_explicit_profiles_win() {
        let mut config = Config::from_defaults();
        config.calculation.profiles = vec!["standard-weighted".to_string()];
        let results = calculate(&courses(), &config, Some("UC Davis"), false).unwrap();
        assert_eq!(results.len(), 1);
        assert!((results[0].gpa - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_calculate_unknown_profile_is_an_error() {
        let mut config = Config::from_defaults();
        config.calculation.profiles = vec!["made-up".to_string()];
        assert!(calculate(&courses(), &config, None, false).is_err());
    }

    #[test]
    fn test_calculate_semesters_groups_courses() {
        let mut config = Config::from_defaults();
        config.calculation.system = "uc".to_string();
        let mut list = courses();
        list[0].semester_id = "11-1".to_string();
        list[1].semester_id = "9-2".to_string();

        let semesters = calculate_semesters(&list, &config, None).unwrap();
        assert_eq!(semesters.len(), 2);
        assert_eq!(semesters[0].semester_id, "11-1");
        assert!(!semesters[0].results[0].not_counted_by_policy);
        // uc-capped over a 9th grade semester is informational
        assert!(semesters[1].results[0].not_counted_by_policy);
        assert!((semesters[1].results[0].gpa - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_college_comparison_prefers_unweighted() {
        let config = Config::from_defaults();
        let results = calculate(&courses(), &config, Some("UC Davis"), false).unwrap();
        let comparison = college_comparison("uc davis", &results).unwrap();
        // (4.0 + 3.0) / 2 unweighted
        assert!((comparison.gpa - 3.5).abs() < f64::EPSILON);
        assert_eq!(comparison.college.name, "UC Davis");
        assert!(college_comparison("Nowhere College", &results).is_none());
        assert!(college_comparison("UC Davis", &[]).is_none());
    }

    #[test]
    fn test_saved_report_path_uses_stem_and_extension() {
        let mut config = Config::from_defaults();
        config.paths.reports_dir = "/tmp/reports".to_string();
        let path = saved_report_path(&config, Path::new("dir/junior.csv"), ReportFormat::Markdown);
        assert_eq!(path, PathBuf::from("/tmp/reports/junior_gpa.md"));
    }
}
