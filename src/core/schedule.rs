//! Typical US high-school course schedules
//!
//! Starter course lists for each grade level and semester, used to pre-fill a
//! new transcript.

use crate::core::models::{Course, CourseCategory, Grade, GradeLevel};

/// One course in a typical schedule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledCourse {
    /// Course name
    pub name: &'static str,
    /// Difficulty category
    pub category: CourseCategory,
    /// Credit weight
    pub credits: f64,
    /// Subject-area ("a-g") approved
    pub subject_approved: bool,
}

const fn regular(name: &'static str) -> ScheduledCourse {
    ScheduledCourse {
        name,
        category: CourseCategory::Standard,
        credits: 1.0,
        subject_approved: true,
    }
}

const fn with_category(name: &'static str, category: CourseCategory) -> ScheduledCourse {
    ScheduledCourse {
        name,
        category,
        credits: 1.0,
        subject_approved: true,
    }
}

const PE: ScheduledCourse = ScheduledCourse {
    name: "PE",
    category: CourseCategory::Standard,
    credits: 1.0,
    subject_approved: false,
};

static NINTH: [ScheduledCourse; 6] = [
    regular("English 9"),
    regular("Algebra 1"),
    regular("Biology"),
    regular("World History"),
    regular("Spanish 1"),
    PE,
];

static TENTH: [ScheduledCourse; 6] = [
    regular("English 10"),
    regular("Geometry"),
    regular("Chemistry"),
    regular("US History"),
    regular("Spanish 2"),
    regular("Art"),
];

static ELEVENTH: [ScheduledCourse; 6] = [
    with_category("AP English Language", CourseCategory::AdvancedPlacement),
    regular("Algebra 2 / Trigonometry"),
    with_category("AP US History", CourseCategory::AdvancedPlacement),
    regular("Physics"),
    regular("Spanish 3"),
    regular("Elective"),
];

static TWELFTH_FALL: [ScheduledCourse; 6] = [
    with_category("AP English Literature", CourseCategory::AdvancedPlacement),
    regular("Pre-Calculus"),
    with_category("AP Government", CourseCategory::AdvancedPlacement),
    with_category("AP Biology", CourseCategory::AdvancedPlacement),
    with_category("Spanish 4", CourseCategory::Honors),
    regular("Elective"),
];

static TWELFTH_SPRING: [ScheduledCourse; 6] = [
    with_category("AP English Literature", CourseCategory::AdvancedPlacement),
    regular("Pre-Calculus"),
    with_category("AP Economics", CourseCategory::AdvancedPlacement),
    with_category("AP Biology", CourseCategory::AdvancedPlacement),
    with_category("Spanish 4", CourseCategory::Honors),
    regular("Elective"),
];

/// The typical schedule for a grade level and semester (1 or 2)
///
/// Semesters other than 1 and 2 fall back to the 9th grade fall schedule.
#[must_use]
pub fn typical_schedule(level: GradeLevel, semester: u8) -> &'static [ScheduledCourse] {
    match (level, semester) {
        (GradeLevel::Ninth, 1 | 2) | (_, 0 | 3..) => &NINTH,
        (GradeLevel::Tenth, _) => &TENTH,
        (GradeLevel::Eleventh, _) => &ELEVENTH,
        (GradeLevel::Twelfth, 1) => &TWELFTH_FALL,
        (GradeLevel::Twelfth, _) => &TWELFTH_SPRING,
    }
}

/// Semester group id used for starter courses, e.g. `"11-2"`
#[must_use]
pub fn semester_id(level: GradeLevel, semester: u8) -> String {
    format!("{}-{semester}", level.number())
}

/// Materialise a typical schedule as courses with a placeholder grade of A
///
/// Ids are `<level>-<semester>-<n>` so several semesters can be combined
/// without collisions.
#[must_use]
pub fn starter_courses(level: GradeLevel, semester: u8) -> Vec<Course> {
    let group = semester_id(level, semester);
    typical_schedule(level, semester)
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            Course::new(
                format!("{group}-{}", i + 1),
                entry.name,
                Grade::A,
                entry.category,
                entry.credits,
            )
            .with_grade_level(level)
            .with_subject_approved(entry.subject_approved)
            .in_semester(group.clone())
        })
        .collect()
}
