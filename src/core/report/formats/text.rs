//! Plain-text report generator
//!
//! Renders an aligned summary table suitable for a terminal, followed by one
//! breakdown table per profile.

use crate::core::report::{ReportContext, ReportError, ReportGenerator, ResultView, SemesterView};
use std::fmt::Write;

/// Plain-text report generator
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn summary_table(views: &[ResultView]) -> String {
        let width = views
            .iter()
            .map(|v| v.name.chars().count())
            .max()
            .unwrap_or(0)
            .max("Profile".len());

        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:<width$}  {:>5}  {:>7}  {:>10}",
            "Profile", "GPA", "Credits", "Percentile"
        );
        let _ = writeln!(out, "{}", "-".repeat(width + 30));
        for view in views {
            let _ = write!(
                out,
                "{:<width$}  {:>5}  {:>7}  {:>10}",
                view.name, view.gpa, view.credits, view.percentile
            );
            if !view.note.is_empty() {
                let _ = write!(out, "  * {}", view.note);
            }
            out.push('\n');
        }
        out
    }

    fn breakdown_table(view: &ResultView) -> String {
        let width = view
            .rows
            .iter()
            .map(|r| r.course.chars().count())
            .max()
            .unwrap_or(0)
            .max("Course".len());

        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} ({} boosted, {} excluded)",
            view.name, view.boosted, view.excluded
        );
        let _ = writeln!(
            out,
            "  {:<width$}  {:<5}  {:<20}  {:>4}  {:>4}  {:>5}  {:>5}  {:>6}  Status",
            "Course", "Grade", "Category", "Cr", "Base", "Boost", "Final", "QP"
        );
        for row in &view.rows {
            let _ = writeln!(
                out,
                "  {:<width$}  {:<5}  {:<20}  {:>4}  {:>4}  {:>5}  {:>5}  {:>6}  {}",
                row.course,
                row.grade,
                row.category,
                row.credits,
                row.base,
                row.boost,
                row.final_points,
                row.quality,
                row.status
            );
        }
        out
    }

    fn semester_table(semesters: &[SemesterView]) -> String {
        let width = semesters
            .iter()
            .flat_map(|s| s.results.iter())
            .map(|v| v.name.chars().count())
            .max()
            .unwrap_or(0)
            .max("Profile".len());

        let mut out = String::from("By semester\n");
        for semester in semesters {
            let _ = writeln!(out, "  {} ({} courses)", semester.label, semester.courses);
            for view in &semester.results {
                let _ = write!(
                    out,
                    "    {:<width$}  {:>5}  {:>7}",
                    view.name, view.gpa, view.credits
                );
                if !view.note.is_empty() {
                    let _ = write!(out, "  * {}", view.note);
                }
                out.push('\n');
            }
        }
        out
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, ReportError> {
        let views = ctx.views();
        let mut out = String::new();

        if !ctx.title.is_empty() {
            let _ = writeln!(out, "{}", ctx.title);
        }
        let _ = writeln!(
            out,
            "{} courses, {:.1} credits\n",
            ctx.course_count(),
            ctx.total_credits()
        );
        out.push_str(&Self::summary_table(&views));

        let semesters = ctx.semester_views();
        if !semesters.is_empty() {
            out.push('\n');
            out.push_str(&Self::semester_table(&semesters));
        }

        if ctx.show_breakdown {
            for view in &views {
                out.push('\n');
                out.push_str(&Self::breakdown_table(view));
            }
        }

        Ok(out)
    }
}
