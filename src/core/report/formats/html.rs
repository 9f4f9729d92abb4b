//! HTML report generator
//!
//! Generates a self-contained HTML page with embedded CSS. Values are
//! HTML-escaped by the template engine.

use crate::core::report::{ReportContext, ReportError, ReportGenerator, ResultView, SemesterView};
use askama::Template;

#[derive(Template)]
#[template(path = "report.html")]
struct HtmlTemplate<'a> {
    title: &'a str,
    course_count: usize,
    total_credits: String,
    show_breakdown: bool,
    results: Vec<ResultView>,
    semesters: Vec<SemesterView>,
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, ReportError> {
        let template = HtmlTemplate {
            title: ctx.title,
            course_count: ctx.course_count(),
            total_credits: format!("{:.1}", ctx.total_credits()),
            show_breakdown: ctx.show_breakdown,
            results: ctx.views(),
            semesters: ctx.semester_views(),
        };
        Ok(template.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::tests::{sample, sample_semesters};

    #[test]
    fn test_html_page_structure() {
        let (courses, results) = sample();
        let ctx = ReportContext::new("Jordan", &courses, &results);
        let out = HtmlReporter::new().render(&ctx).unwrap();

        assert!(out.starts_with("<!DOCTYPE html>"));
        assert!(out.contains("<title>GPA Report: Jordan</title>"));
        assert!(out.contains("<section id=\"uc-capped\">"));
        assert!(out.contains("class=\"excluded\""));
        assert!(out.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_html_escapes_user_text() {
        let (courses, results) = sample();
        let ctx = ReportContext::new("<script>alert(1)</script>", &courses, &results);
        let out = HtmlReporter::new().render(&ctx).unwrap();
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_html_semester_table() {
        let (courses, results, semesters) = sample_semesters();
        let ctx = ReportContext::new("", &courses, &results).with_breakdown(false);
        assert!(!HtmlReporter::new().render(&ctx).unwrap().contains("By Semester"));

        let out = HtmlReporter::new()
            .render(&ctx.with_semesters(&semesters))
            .unwrap();
        assert!(out.contains("<h2>By Semester</h2>"));
        assert!(out.contains("<td>Gr10S2</td>"));
    }

    #[test]
    fn test_html_without_breakdown() {
        let (courses, results) = sample();
        let ctx = ReportContext::new("", &courses, &results).with_breakdown(false);
        let out = HtmlReporter::new().render(&ctx).unwrap();
        assert!(!out.contains("<section"));
        assert!(out.contains("Standard Weighted GPA"));
    }
}
