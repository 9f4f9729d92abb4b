//! Report generation for GPA results
//!
//! This module renders the results of a multi-profile calculation in several
//! formats (plain text, JSON, Markdown, HTML). Every format works from the same
//! [`ReportContext`]; the text-based formats share the preformatted
//! [`ResultView`] rows so numbers look identical everywhere.

pub mod formats;

use crate::core::models::Course;
use crate::core::percentile::percentile_for_id;
use crate::core::result::{CourseBreakdown, GpaResult, SemesterResult};
use std::fmt;
use std::fs;
use std::path::Path;

pub use formats::{HtmlReporter, JsonReporter, MarkdownReporter, ReportFormat, TextReporter};

/// Note shown for results that fall outside the policy's scope
pub const NOT_COUNTED_NOTE: &str = "not counted by policy (informational only)";

/// Errors raised while rendering or writing a report
#[derive(Debug)]
pub enum ReportError {
    /// Template rendering failed
    Template(askama::Error),
    /// JSON serialization failed
    Json(serde_json::Error),
    /// Writing the report failed
    Io(std::io::Error),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template(err) => write!(f, "template error: {err}"),
            Self::Json(err) => write!(f, "json error: {err}"),
            Self::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Template(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<askama::Error> for ReportError {
    fn from(value: askama::Error) -> Self {
        Self::Template(value)
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<std::io::Error> for ReportError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Data context for report generation
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    /// Report title (student or transcript name)
    pub title: &'a str,
    /// Courses that were evaluated
    pub courses: &'a [Course],
    /// One result per profile, in profile order
    pub results: &'a [GpaResult],
    /// Include the per-course breakdown tables
    pub show_breakdown: bool,
    /// Per-semester results, empty unless requested
    pub semesters: &'a [SemesterResult],
}

impl<'a> ReportContext<'a> {
    /// Create a new report context with breakdowns enabled
    #[must_use]
    pub const fn new(title: &'a str, courses: &'a [Course], results: &'a [GpaResult]) -> Self {
        Self {
            title,
            courses,
            results,
            show_breakdown: true,
            semesters: &[],
        }
    }

    /// Attach per-semester results
    #[must_use]
    pub const fn with_semesters(mut self, semesters: &'a [SemesterResult]) -> Self {
        self.semesters = semesters;
        self
    }

    /// Toggle the per-course breakdown tables
    #[must_use]
    pub const fn with_breakdown(mut self, show: bool) -> Self {
        self.show_breakdown = show;
        self
    }

    /// Number of courses evaluated
    #[must_use]
    pub const fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Credits across every evaluated course, counted or not
    #[must_use]
    pub fn total_credits(&self) -> f64 {
        self.courses.iter().map(|c| c.credits).sum()
    }

    /// National percentile for a result, when its profile has a table
    #[must_use]
    pub fn percentile(&self, result: &GpaResult) -> Option<u8> {
        percentile_for_id(&result.profile_id, result.gpa)
    }

    /// Preformatted rows for the text-based formats
    #[must_use]
    pub fn views(&self) -> Vec<ResultView> {
        self.results
            .iter()
            .map(|r| ResultView::new(r, self.percentile(r)))
            .collect()
    }

    /// Preformatted per-semester rows; percentiles only apply to full transcripts
    #[must_use]
    pub fn semester_views(&self) -> Vec<SemesterView> {
        self.semesters
            .iter()
            .map(|semester| SemesterView {
                label: semester.label(),
                courses: semester.course_count,
                results: semester
                    .results
                    .iter()
                    .map(|r| ResultView::new(r, None))
                    .collect(),
            })
            .collect()
    }
}

/// One semester's results with every value already formatted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemesterView {
    /// Short label such as `Gr11S1`
    pub label: String,
    /// Number of courses in the semester
    pub courses: usize,
    /// One view per profile
    pub results: Vec<ResultView>,
}

/// One profile result with every value already formatted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    /// Profile id
    pub id: String,
    /// Profile name
    pub name: String,
    /// GPA, two decimals
    pub gpa: String,
    /// Counted credits, one decimal
    pub credits: String,
    /// Counted quality points, two decimals
    pub quality_points: String,
    /// Percentile such as "83rd", or "-"
    pub percentile: String,
    /// Number of boosted courses
    pub boosted: usize,
    /// Number of excluded courses
    pub excluded: usize,
    /// Policy note, empty when none applies
    pub note: String,
    /// Per-course rows
    pub rows: Vec<BreakdownView>,
}

impl ResultView {
    /// Format a result
    #[must_use]
    pub fn new(result: &GpaResult, percentile: Option<u8>) -> Self {
        Self {
            id: result.profile_id.clone(),
            name: result.profile_name.clone(),
            gpa: format!("{:.2}", result.gpa),
            credits: format!("{:.1}", result.total_credits),
            quality_points: format!("{:.2}", result.total_quality_points),
            percentile: percentile.map_or_else(|| "-".to_string(), ordinal),
            boosted: result.boosted_count(),
            excluded: result.excluded().count(),
            note: if result.not_counted_by_policy {
                NOT_COUNTED_NOTE.to_string()
            } else {
                String::new()
            },
            rows: result.breakdown.iter().map(BreakdownView::from).collect(),
        }
    }
}

/// One breakdown entry with every value already formatted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownView {
    /// Course name
    pub course: String,
    /// Letter grade
    pub grade: String,
    /// Category label
    pub category: String,
    /// Credits, one decimal
    pub credits: String,
    /// Base points, one decimal
    pub base: String,
    /// Boost, signed with one decimal
    pub boost: String,
    /// Final points, one decimal
    pub final_points: String,
    /// Quality points, two decimals
    pub quality: String,
    /// "counted" or "excluded: <reason>"
    pub status: String,
    /// Whether the course was excluded
    pub excluded: bool,
}

impl From<&CourseBreakdown> for BreakdownView {
    fn from(entry: &CourseBreakdown) -> Self {
        Self {
            course: entry.course_name.clone(),
            grade: entry.grade.to_string(),
            category: entry.category.label().to_string(),
            credits: format!("{:.1}", entry.credits),
            base: format!("{:.1}", entry.base_points),
            boost: format!("+{:.1}", entry.boost),
            final_points: format!("{:.1}", entry.final_points),
            quality: format!("{:.2}", entry.quality_points),
            status: entry.exclude_reason.as_ref().map_or_else(
                || "counted".to_string(),
                |reason| format!("excluded: {reason}"),
            ),
            excluded: entry.excluded,
        }
    }
}

/// English ordinal for a percentile, e.g. 1st, 22nd, 83rd, 98th
#[must_use]
pub fn ordinal(n: u8) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, ReportError>;

    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), ReportError> {
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(output_path, self.render(ctx)?)?;
        Ok(())
    }
}

/// The generator for a format
#[must_use]
pub fn reporter_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Text => Box::new(TextReporter::new()),
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
    }
}
