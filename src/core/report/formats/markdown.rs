//! Markdown report generator
//!
//! Generates GPA reports as Markdown tables. These reports render well in
//! GitHub, GitLab, and VS Code.

use crate::core::report::{ReportContext, ReportError, ReportGenerator, ResultView, SemesterView};
use askama::Template;

#[derive(Template)]
#[template(path = "report.md", escape = "none")]
struct MarkdownTemplate<'a> {
    title: &'a str,
    course_count: usize,
    total_credits: String,
    show_breakdown: bool,
    results: Vec<ResultView>,
    semesters: Vec<SemesterView>,
}

/// Escape characters that would break a table cell
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn escaped_views(ctx: &ReportContext) -> Vec<ResultView> {
        let mut views = ctx.views();
        for view in &mut views {
            view.name = cell(&view.name);
            for row in &mut view.rows {
                row.course = cell(&row.course);
            }
        }
        views
    }

    fn escaped_semesters(ctx: &ReportContext) -> Vec<SemesterView> {
        let mut semesters = ctx.semester_views();
        for semester in &mut semesters {
            semester.label = cell(&semester.label);
            for view in &mut semester.results {
                view.name = cell(&view.name);
            }
        }
        semesters
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, ReportError> {
        let template = MarkdownTemplate {
            title: ctx.title,
            course_count: ctx.course_count(),
            total_credits: format!("{:.1}", ctx.total_credits()),
            show_breakdown: ctx.show_breakdown,
            results: Self::escaped_views(ctx),
            semesters: Self::escaped_semesters(ctx),
        };
        Ok(template.render()?)
    }
}
