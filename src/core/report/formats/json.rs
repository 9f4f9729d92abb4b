//! JSON report generator

use crate::core::report::{ReportContext, ReportError, ReportGenerator};
use crate::core::result::{GpaResult, SemesterResult};
use serde::Serialize;

#[derive(Serialize)]
struct JsonProfile<'a> {
    #[serde(flatten)]
    result: &'a GpaResult,
    percentile: Option<u8>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    title: &'a str,
    course_count: usize,
    total_credits: f64,
    profiles: Vec<JsonProfile<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    semesters: Option<&'a [SemesterResult]>,
}

/// JSON report generator
///
/// Emits every result with its full breakdown plus the national percentile
/// where one applies.
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, ReportError> {
        let report = JsonReport {
            title: ctx.title,
            course_count: ctx.course_count(),
            total_credits: ctx.total_credits(),
            profiles: ctx
                .results
                .iter()
                .map(|result| JsonProfile {
                    result,
                    percentile: ctx.percentile(result),
                })
                .collect(),
            semesters: (!ctx.semesters.is_empty()).then_some(ctx.semesters),
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}
