//! Run one course list through many profiles

use crate::core::boost::BoostOverrides;
use crate::core::calculator;
use crate::core::models::Course;
use crate::core::profile::Profile;
use crate::core::result::{GpaResult, SemesterResult};
use crate::core::uc;

/// Calculate GPA for a single profile, routing on its kind.
///
/// Boost overrides are merged over the profile's table before either
/// calculator sees it, so they apply to UC profiles as well.
#[must_use]
pub fn calculate_profile(
    courses: &[Course],
    profile: &Profile,
    overrides: Option<&BoostOverrides>,
    skip_eligibility_filter: bool,
) -> GpaResult {
    match profile.uc_variant() {
        Some(variant) => match overrides.filter(|o| !o.is_empty()) {
            Some(o) => {
                let effective = Profile {
                    boosts: profile.boosts.merged(o),
                    ..profile.clone()
                };
                uc::calculate_uc(variant, courses, &effective, skip_eligibility_filter)
            }
            None => uc::calculate_uc(variant, courses, profile, skip_eligibility_filter),
        },
        None => calculator::calculate(courses, profile, overrides),
    }
}

/// Calculate GPA for every profile, in profile order.
///
/// # Arguments
/// * `courses` - Courses to evaluate
/// * `profiles` - Profiles to evaluate them under; an empty slice yields no results
/// * `overrides` - Optional per-category boosts applied to every profile
/// * `skip_eligibility_filter` - Passed through to UC profiles
#[must_use]
pub fn calculate_all(
    courses: &[Course],
    profiles: &[Profile],
    overrides: Option<&BoostOverrides>,
    skip_eligibility_filter: bool,
) -> Vec<GpaResult> {
    profiles
        .iter()
        .map(|profile| calculate_profile(courses, profile, overrides, skip_eligibility_filter))
        .collect()
}

/// Calculate cumulative GPAs with an informational fallback for UC profiles.
///
/// Runs every profile with eligibility filtering on. When a UC profile ends up
/// with no counted credits although courses were supplied (e.g. only 9th grade
/// courses so far), that profile is recomputed with the grade-level filter
/// skipped and the result is flagged as not counted by the policy.
#[must_use]
pub fn calculate_cumulative(
    courses: &[Course],
    profiles: &[Profile],
    overrides: Option<&BoostOverrides>,
) -> Vec<GpaResult> {
    profiles
        .iter()
        .map(|profile| {
            let result = calculate_profile(courses, profile, overrides, false);
            if profile.kind.is_uc() && result.total_credits <= 0.0 && !courses.is_empty() {
                let mut fallback = calculate_profile(courses, profile, overrides, true);
                fallback.not_counted_by_policy = true;
                fallback
            } else {
                result
            }
        })
        .collect()
}

/// Calculate every profile separately for each semester's courses.
///
/// Semesters appear in the order their first course appears. Each group runs
/// with the grade-level filter skipped so UC profiles still show a GPA for
/// 9th and 12th grade semesters; those results carry the not-counted flag.
/// Courses without a semester id form their own group.
#[must_use]
pub fn calculate_by_semester(
    courses: &[Course],
    profiles: &[Profile],
    overrides: Option<&BoostOverrides>,
) -> Vec<SemesterResult> {
    let mut groups: Vec<(&str, Vec<Course>)> = Vec::new();
    for course in courses {
        match groups.iter_mut().find(|(id, _)| *id == course.semester_id) {
            Some((_, group)) => group.push(course.clone()),
            None => groups.push((&course.semester_id, vec![course.clone()])),
        }
    }

    groups
        .into_iter()
        .map(|(semester_id, group)| SemesterResult {
            semester_id: semester_id.to_string(),
            course_count: group.len(),
            results: calculate_all(&group, profiles, overrides, true),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{CourseCategory, Grade, GradeLevel};
    use crate::core::profile::{ProfileKind, ProfileRegistry};

    fn ap(id: &str, level: GradeLevel) -> Course {
        Course::new(id, id, Grade::A, CourseCategory::AdvancedPlacement, 1.0).with_grade_level(level)
    }

    #[test]
    fn test_empty_profiles_yield_empty_results() {
        let courses = [ap("a", GradeLevel::Tenth)];
        assert!(calculate_all(&courses, &[], None, false).is_empty());
    }

    #[test]
    fn test_empty_courses_yield_zero_results_for_every_profile() {
        let registry = ProfileRegistry::canonical();
        let results = calculate_all(&[], registry.profiles(), None, false);
        assert_eq!(results.len(), 5);
        for result in &results {
            assert!(result.gpa.abs() < f64::EPSILON);
            assert!(result.breakdown.is_empty());
            assert!(result.total_credits.abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_results_follow_profile_order() {
        let registry = ProfileRegistry::canonical();
        let profiles = registry
            .resolve(&["uc-unweighted", "standard-weighted", "uc-capped"])
            .unwrap();
        let results = calculate_all(&[ap("a", GradeLevel::Eleventh)], &profiles, None, false);
        let ids: Vec<&str> = results.iter().map(|r| r.profile_id.as_str()).collect();
        assert_eq!(ids, vec!["uc-unweighted", "standard-weighted", "uc-capped"]);
    }

    #[test]
    fn test_uc_unweighted_routes_to_uc_engine() {
        let registry = ProfileRegistry::canonical();
        let profile = registry.by_kind(ProfileKind::UcUnweighted);
        let result = calculate_profile(&[ap("n", GradeLevel::Ninth)], profile, None, false);
        assert!(result.breakdown[0].excluded);
    }

    #[test]
    fn test_branded_profiles_route_by_kind() {
        let registry = ProfileRegistry::canonical();
        let profiles = registry.for_college("UC Davis", "uc");
        let courses = [ap("n", GradeLevel::Ninth), ap("e", GradeLevel::Eleventh)];
        let results = calculate_all(&courses, &profiles, None, false);

        assert_eq!(results[0].profile_id, "college-uc-capped");
        assert_eq!(results[0].profile_name, "UC Davis UC Capped GPA");
        assert_eq!(results[0].excluded().count(), 1);
        assert!((results[0].gpa - 5.0).abs() < f64::EPSILON);
        // standard profiles count everything
        assert_eq!(results[3].excluded().count(), 0);
        assert!((results[4].gpa - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_overrides_reach_uc_profiles() {
        let registry = ProfileRegistry::canonical();
        let profile = registry.by_kind(ProfileKind::UcUncapped);
        let overrides = BoostOverrides::new().with(CourseCategory::AdvancedPlacement, 0.5);
        let result = calculate_profile(
            &[ap("a", GradeLevel::Eleventh)],
            profile,
            Some(&overrides),
            false,
        );
        assert!((result.breakdown[0].boost - 0.5).abs() < f64::EPSILON);
        assert!((result.gpa - 4.5).abs() < f64::EPSILON);
        assert_eq!(result.profile_id, "uc-uncapped");
    }

    #[test]
    fn test_skip_flag_only_affects_uc_profiles() {
        let registry = ProfileRegistry::canonical();
        let courses = [ap("n", GradeLevel::Ninth)];
        let results = calculate_all(&courses, registry.profiles(), None, true);
        for result in &results {
            let is_uc = ProfileKind::from_id(&result.profile_id).is_some_and(ProfileKind::is_uc);
            assert_eq!(result.not_counted_by_policy, is_uc, "{}", result.profile_id);
        }
    }

    #[test]
    fn test_cumulative_falls_back_for_empty_uc_results() {
        let registry = ProfileRegistry::canonical();
        let courses = [ap("n", GradeLevel::Ninth)];
        let results = calculate_cumulative(&courses, registry.profiles(), None);

        let capped = &results[2];
        assert!(capped.not_counted_by_policy);
        assert!((capped.gpa - 5.0).abs() < f64::EPSILON);
        assert_eq!(capped.excluded().count(), 0);

        let standard = &results[0];
        assert!(!standard.not_counted_by_policy);
    }

    #[test]
    fn test_cumulative_keeps_counted_uc_results() {
        let registry = ProfileRegistry::canonical();
        let courses = [ap("n", GradeLevel::Ninth), ap("e", GradeLevel::Eleventh)];
        let results = calculate_cumulative(&courses, registry.profiles(), None);
        let capped = &results[2];
        assert!(!capped.not_counted_by_policy);
        assert_eq!(capped.excluded().count(), 1);
    }

    #[test]
    fn test_cumulative_with_no_courses_has_no_fallback() {
        let registry = ProfileRegistry::canonical();
        let results = calculate_cumulative(&[], registry.profiles(), None);
        assert!(results.iter().all(|r| !r.not_counted_by_policy));
    }

    #[test]
    fn test_semesters_follow_first_appearance() {
        let registry = ProfileRegistry::canonical();
        let courses = [
            ap("a", GradeLevel::Tenth).in_semester("10-2"),
            ap("b", GradeLevel::Ninth).in_semester("9-1"),
            ap("c", GradeLevel::Tenth).in_semester("10-2"),
            ap("d", GradeLevel::Eleventh),
        ];
        let semesters = calculate_by_semester(&courses, registry.profiles(), None);

        let ids: Vec<&str> = semesters.iter().map(|s| s.semester_id.as_str()).collect();
        assert_eq!(ids, ["10-2", "9-1", ""]);
        assert_eq!(semesters[0].course_count, 2);
        assert_eq!(semesters[0].results.len(), 5);
        assert_eq!(semesters[0].results[2].breakdown.len(), 2);
    }

    #[test]
    fn test_semester_flags_follow_grade_level() {
        let registry = ProfileRegistry::canonical();
        let courses = [
            ap("n", GradeLevel::Ninth).in_semester("9-1"),
            ap("t", GradeLevel::Tenth).in_semester("10-1"),
            ap("e", GradeLevel::Eleventh).in_semester("11-2"),
            ap("s", GradeLevel::Twelfth).in_semester("12-1"),
        ];
        let semesters = calculate_by_semester(&courses, registry.profiles(), None);

        for semester in &semesters {
            let outside = semester.semester_id == "9-1" || semester.semester_id == "12-1";
            for result in &semester.results {
                let is_uc = ProfileKind::from_id(&result.profile_id).is_some_and(ProfileKind::is_uc);
                assert_eq!(
                    result.not_counted_by_policy,
                    is_uc && outside,
                    "{} {}",
                    semester.semester_id,
                    result.profile_id
                );
                // the filter is skipped, so every semester still has a GPA
                assert!(result.gpa > 0.0);
                assert_eq!(result.excluded().count(), 0);
            }
        }
    }

    #[test]
    fn test_semester_overrides_apply() {
        let registry = ProfileRegistry::canonical();
        let profiles = registry.resolve(&["standard-weighted"]).unwrap();
        let overrides = BoostOverrides::new().with(CourseCategory::AdvancedPlacement, 0.5);
        let courses = [ap("a", GradeLevel::Eleventh).in_semester("11-1")];
        let semesters = calculate_by_semester(&courses, &profiles, Some(&overrides));
        assert!((semesters[0].results[0].gpa - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_courses_no_semesters() {
        let registry = ProfileRegistry::canonical();
        assert!(calculate_by_semester(&[], registry.profiles(), None).is_empty());
    }

    #[test]
    fn test_cumulative_fallback_still_excludes_unapproved() {
        let registry = ProfileRegistry::canonical();
        let courses = [ap("pe", GradeLevel::Eleventh).with_subject_approved(false)];
        let results = calculate_cumulative(&courses, registry.profiles(), None);
        let capped = &results[2];
        assert!(capped.not_counted_by_policy);
        assert!(capped.gpa.abs() < f64::EPSILON);
        assert_eq!(capped.excluded().count(), 1);
    }
}
