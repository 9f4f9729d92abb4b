//! Calculation results: per-course breakdown and aggregate GPA

use crate::core::models::{Course, CourseCategory, Grade};
use crate::core::profile::Profile;
use serde::{Deserialize, Serialize};

/// Exclusion reason for courses that are not subject-area approved
pub const REASON_NOT_SUBJECT_APPROVED: &str = "not a subject-area-approved course";

/// Exclusion reason for courses outside the counted grade levels
pub const REASON_GRADE_LEVEL: &str = "only 10th & 11th grade count for this policy";

/// How one course was treated by a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseBreakdown {
    /// Course id
    pub course_id: String,
    /// Course name
    pub course_name: String,
    /// Letter grade
    pub grade: Grade,
    /// Course category
    pub category: CourseCategory,
    /// Points for the grade on the profile's scale (kept even when excluded)
    pub base_points: f64,
    /// Boost actually applied
    pub boost: f64,
    /// `min(base + boost, max_gpa)`, or 0 when excluded
    pub final_points: f64,
    /// Credit weight
    pub credits: f64,
    /// `final_points * credits`
    pub quality_points: f64,
    /// Whether the course was left out of the GPA
    pub excluded: bool,
    /// Why the course was left out
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_reason: Option<String>,
}

impl CourseBreakdown {
    /// Entry for a course that counts toward the GPA
    #[must_use]
    pub fn included(course: &Course, profile: &Profile, boost: f64) -> Self {
        let base_points = profile.scale.points(course.grade);
        let final_points = (base_points + boost).min(profile.max_gpa);
        Self {
            course_id: course.id.clone(),
            course_name: course.name.clone(),
            grade: course.grade,
            category: course.category,
            base_points,
            boost,
            final_points,
            credits: course.credits,
            quality_points: final_points * course.credits,
            excluded: false,
            exclude_reason: None,
        }
    }

    /// Entry for a course the profile leaves out
    #[must_use]
    pub fn excluded(course: &Course, profile: &Profile, reason: &str) -> Self {
        Self {
            course_id: course.id.clone(),
            course_name: course.name.clone(),
            grade: course.grade,
            category: course.category,
            base_points: profile.scale.points(course.grade),
            boost: 0.0,
            final_points: 0.0,
            credits: course.credits,
            quality_points: 0.0,
            excluded: true,
            exclude_reason: Some(reason.to_string()),
        }
    }
}

/// GPA for one profile over one course list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpaResult {
    /// GPA rounded to 2 decimal places
    pub gpa: f64,
    /// Id of the profile used
    pub profile_id: String,
    /// Name of the profile used
    pub profile_name: String,
    /// Credits of the counted courses
    pub total_credits: f64,
    /// Quality points of the counted courses
    pub total_quality_points: f64,
    /// Every course, counted ones first in input order, then excluded ones
    pub breakdown: Vec<CourseBreakdown>,
    /// The course set falls outside the policy's scope; the GPA is informational only
    #[serde(default)]
    pub not_counted_by_policy: bool,
}

impl GpaResult {
    /// Aggregate a breakdown into a result
    #[must_use]
    pub fn from_breakdown(profile: &Profile, breakdown: Vec<CourseBreakdown>) -> Self {
        let (total_credits, total_quality_points) = breakdown
            .iter()
            .filter(|b| !b.excluded)
            .fold((0.0, 0.0), |(credits, quality), b| {
                (credits + b.credits, quality + b.quality_points)
            });

        let gpa = if total_credits > 0.0 {
            round2(total_quality_points / total_credits)
        } else {
            0.0
        };

        Self {
            gpa,
            profile_id: profile.id.clone(),
            profile_name: profile.name.clone(),
            total_credits,
            total_quality_points,
            breakdown,
            not_counted_by_policy: false,
        }
    }

    /// Breakdown entries that count toward the GPA
    pub fn included(&self) -> impl Iterator<Item = &CourseBreakdown> {
        self.breakdown.iter().filter(|b| !b.excluded)
    }

    /// Breakdown entries that were left out
    pub fn excluded(&self) -> impl Iterator<Item = &CourseBreakdown> {
        self.breakdown.iter().filter(|b| b.excluded)
    }

    /// Number of included courses that received a non-zero boost
    #[must_use]
    pub fn boosted_count(&self) -> usize {
        self.included().filter(|b| b.boost > 0.0).count()
    }
}

/// Results for the courses of one semester
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemesterResult {
    /// Semester id shared by the courses, empty for unassigned courses
    pub semester_id: String,
    /// Number of courses in the semester
    pub course_count: usize,
    /// One result per profile, in profile order
    pub results: Vec<GpaResult>,
}

impl SemesterResult {
    /// Short label: `Gr11S2` for `11-2` style ids, otherwise the id itself
    #[must_use]
    pub fn label(&self) -> String {
        if self.semester_id.is_empty() {
            return "unassigned".to_string();
        }
        match self.semester_id.split_once('-') {
            Some((level, semester))
                if !level.is_empty()
                    && !semester.is_empty()
                    && level.chars().all(|c| c.is_ascii_digit())
                    && semester.chars().all(|c| c.is_ascii_digit()) =>
            {
                format!("Gr{level}S{semester}")
            }
            _ => self.semester_id.clone(),
        }
    }
}

/// Round half away from zero to 2 decimal places
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
