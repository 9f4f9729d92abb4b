//! Course model

use super::{CourseCategory, Grade, GradeLevel};
use serde::{Deserialize, Serialize};

/// A graded course as supplied by the caller
///
/// Courses are plain values; the calculators only ever borrow them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Identifier, unique within one calculation
    pub id: String,

    /// Display name (e.g., "AP US History")
    pub name: String,

    /// Letter grade earned
    pub grade: Grade,

    /// Difficulty category
    pub category: CourseCategory,

    /// Credit weight (can be fractional, typically 0.5 - 2.0)
    pub credits: f64,

    /// Semester group the course belongs to; only used by callers for grouping
    #[serde(default)]
    pub semester_id: String,

    /// Whether the course is subject-area approved ("a-g"); `None` counts as approved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_approved: Option<bool>,

    /// Grade level the course was taken in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade_level: Option<GradeLevel>,
}

impl Course {
    /// Create a new course with no semester, approval flag or grade level
    ///
    /// # Arguments
    /// * `id` - Identifier unique within the course list
    /// * `name` - Display name
    /// * `grade` - Letter grade
    /// * `category` - Difficulty category
    /// * `credits` - Credit weight
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        grade: Grade,
        category: CourseCategory,
        credits: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            grade,
            category,
            credits,
            semester_id: String::new(),
            subject_approved: None,
            grade_level: None,
        }
    }

    /// Set the grade level
    #[must_use]
    pub fn with_grade_level(mut self, level: GradeLevel) -> Self {
        self.grade_level = Some(level);
        self
    }

    /// Set the subject-area approval flag
    #[must_use]
    pub fn with_subject_approved(mut self, approved: bool) -> Self {
        self.subject_approved = Some(approved);
        self
    }

    /// Set the semester group
    #[must_use]
    pub fn in_semester(mut self, semester_id: impl Into<String>) -> Self {
        self.semester_id = semester_id.into();
        self
    }

    /// Only an explicit `false` marks a course as not subject-area approved
    #[must_use]
    pub const fn is_subject_approved(&self) -> bool {
        !matches!(self.subject_approved, Some(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new(
            "c1",
            "AP Calculus AB",
            Grade::AMinus,
            CourseCategory::AdvancedPlacement,
            1.0,
        );

        assert_eq!(course.id, "c1");
        assert_eq!(course.name, "AP Calculus AB");
        assert_eq!(course.grade, Grade::AMinus);
        assert!((course.credits - 1.0).abs() < f64::EPSILON);
        assert!(course.semester_id.is_empty());
        assert!(course.subject_approved.is_none());
        assert!(course.grade_level.is_none());
    }

    #[test]
    fn test_subject_approval_is_tri_state() {
        let base = Course::new("c1", "Art", Grade::A, CourseCategory::Standard, 1.0);
        assert!(base.is_subject_approved());
        assert!(base.clone().with_subject_approved(true).is_subject_approved());
        assert!(!base.with_subject_approved(false).is_subject_approved());
    }

    #[test]
    fn test_builders() {
        let course = Course::new("c2", "Chemistry", Grade::B, CourseCategory::Honors, 0.5)
            .with_grade_level(GradeLevel::Tenth)
            .in_semester("10-1");

        assert_eq!(course.grade_level, Some(GradeLevel::Tenth));
        assert_eq!(course.semester_id, "10-1");
    }

    #[test]
    fn test_deserialize_minimal_toml() {
        let course: Course = toml::from_str(
            r#"
id = "c3"
name = "English 11"
grade = "B+"
category = "standard"
credits = 1.0
"#,
        )
        .unwrap();

        assert_eq!(course.grade, Grade::BPlus);
        assert!(course.grade_level.is_none());
        assert!(course.is_subject_approved());
    }
}
