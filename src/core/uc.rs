//! University of California GPA engine
//!
//! UC GPAs only count subject-area approved ("a-g") courses from 10th and
//! 11th grade, collapse plus/minus grades, and add an honors boost to
//! advanced courses passed with a C or better. The capped variant grants that
//! boost to at most 8 course-semesters, no more than 4 of them from 10th
//! grade; slots are handed out in input order.

use crate::core::models::{Course, CourseCategory, GradeLevel};
use crate::core::profile::{EligibilityRules, Profile, UcVariant};
use crate::core::result::{
    CourseBreakdown, GpaResult, REASON_GRADE_LEVEL, REASON_NOT_SUBJECT_APPROVED,
};

/// Lowest base points (on the profile's scale) that still earn an honors boost
pub const MIN_BOOST_POINTS: f64 = 2.0;

/// Default cap on boosted course-semesters for the capped variant
pub const DEFAULT_MAX_BOOSTED: usize = 8;

/// Default cap on boosted course-semesters from 10th grade for the capped variant
pub const DEFAULT_MAX_BOOSTED_FROM_TENTH: usize = 4;

/// Courses sorted into counted and excluded, preserving input order
struct Partition<'a> {
    counted: Vec<&'a Course>,
    excluded: Vec<(&'a Course, &'static str)>,
    grade_level_ineligible: bool,
}

const fn is_counted_grade_level(level: Option<GradeLevel>) -> bool {
    matches!(level, Some(GradeLevel::Tenth | GradeLevel::Eleventh))
}

fn partition<'a>(
    courses: &'a [Course],
    rules: &EligibilityRules,
    skip_grade_filter: bool,
) -> Partition<'a> {
    let mut part = Partition {
        counted: Vec::with_capacity(courses.len()),
        excluded: Vec::new(),
        grade_level_ineligible: false,
    };

    for course in courses {
        if rules.subject_approved_only && !course.is_subject_approved() {
            part.excluded.push((course, REASON_NOT_SUBJECT_APPROVED));
        } else if !is_counted_grade_level(course.grade_level) {
            part.grade_level_ineligible = true;
            if skip_grade_filter {
                part.counted.push(course);
            } else {
                part.excluded.push((course, REASON_GRADE_LEVEL));
            }
        } else {
            part.counted.push(course);
        }
    }

    part
}

/// Whether a course may receive the honors boost at all
fn is_boost_eligible(course: &Course, profile: &Profile) -> bool {
    !matches!(
        course.category,
        CourseCategory::Standard | CourseCategory::IbStandard
    ) && profile.scale.points(course.grade) >= MIN_BOOST_POINTS
}

/// Decide which counted courses receive the honors boost.
///
/// Returns one flag per entry of `counted`.
fn allocate_boosts(
    counted: &[&Course],
    profile: &Profile,
    variant: UcVariant,
    rules: &EligibilityRules,
) -> Vec<bool> {
    let eligible: Vec<bool> = counted
        .iter()
        .map(|course| is_boost_eligible(course, profile))
        .collect();

    match variant {
        UcVariant::Unweighted => vec![false; counted.len()],
        UcVariant::Uncapped => eligible,
        UcVariant::Capped => {
            let max_total = rules.max_boosted_semesters.unwrap_or(DEFAULT_MAX_BOOSTED);
            let max_tenth = rules
                .max_boosted_from_tenth
                .unwrap_or(DEFAULT_MAX_BOOSTED_FROM_TENTH)
                .min(max_total);

            let (from_tenth, others): (Vec<usize>, Vec<usize>) = (0..counted.len())
                .filter(|&i| eligible[i])
                .partition(|&i| counted[i].grade_level == Some(GradeLevel::Tenth));

            let tenth_used = from_tenth.len().min(max_tenth);
            let remaining = max_total - tenth_used;

            let mut boosted = vec![false; counted.len()];
            for &i in from_tenth.iter().take(tenth_used).chain(others.iter().take(remaining)) {
                boosted[i] = true;
            }
            boosted
        }
    }
}

/// Calculate a UC GPA.
///
/// # Arguments
/// * `variant` - Which UC calculation to run
/// * `courses` - Courses to consider, in transcript order
/// * `profile` - UC profile supplying scale, boosts, ceiling and caps
/// * `skip_eligibility_filter` - Keep courses outside 10th/11th grade in the GPA
///   and flag the whole result as not counted by the policy instead
///
/// # Returns
/// The result; its breakdown lists counted courses in input order followed by
/// excluded courses in input order. Courses that are not subject-area approved
/// are always excluded.
#[must_use]
pub fn calculate_uc(
    variant: UcVariant,
    courses: &[Course],
    profile: &Profile,
    skip_eligibility_filter: bool,
) -> GpaResult {
    let rules = profile.rules.unwrap_or(EligibilityRules::UC);
    let part = partition(courses, &rules, skip_eligibility_filter);
    let boosted = allocate_boosts(&part.counted, profile, variant, &rules);

    let mut breakdown: Vec<CourseBreakdown> = part
        .counted
        .iter()
        .zip(&boosted)
        .map(|(course, &is_boosted)| {
            let boost = if is_boosted {
                profile.boosts.boost(course.category)
            } else {
                0.0
            };
            CourseBreakdown::included(course, profile, boost)
        })
        .collect();

    breakdown.extend(
        part.excluded
            .iter()
            .map(|(course, reason)| CourseBreakdown::excluded(course, profile, reason)),
    );

    let mut result = GpaResult::from_breakdown(profile, breakdown);
    result.not_counted_by_policy = skip_eligibility_filter && part.grade_level_ineligible;
    result
}
