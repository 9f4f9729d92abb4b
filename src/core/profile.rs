//! GPA policy profiles and the canonical profile registry
//!
//! A [`Profile`] bundles a grade scale, a boost table, a GPA ceiling and
//! optional UC eligibility rules. The five canonical profiles live in a
//! [`ProfileRegistry`], which is built once and then only read; it can be
//! shared across threads freely.
//!
//! Which calculator handles a profile is decided by its [`ProfileKind`] tag,
//! so branded copies (e.g. "UC San Diego UC Capped GPA") keep routing
//! correctly no matter what their id or display name says.

use crate::core::boost::BoostTable;
use crate::core::scale::GradeScale;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix applied to the ids of college-branded profiles
pub const BRANDED_ID_PREFIX: &str = "college-";

/// Policy family discriminator carried on every profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProfileKind {
    /// 4.0 scale, no boosts
    StandardUnweighted,
    /// 5.0 scale with graduated boosts
    StandardWeighted,
    /// UC weighted, honors boost capped at 8 semesters (4 from 10th grade)
    UcCapped,
    /// UC weighted, no cap on honors boosts
    UcUncapped,
    /// UC 4.0 scale, no boosts
    UcUnweighted,
}

/// The three UC calculation variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UcVariant {
    /// Honors boost limited by the profile's caps
    Capped,
    /// Honors boost for every eligible course
    Uncapped,
    /// No honors boost at all
    Unweighted,
}

impl ProfileKind {
    /// All kinds, in registry order
    pub const ALL: [Self; 5] = [
        Self::StandardUnweighted,
        Self::StandardWeighted,
        Self::UcCapped,
        Self::UcUncapped,
        Self::UcUnweighted,
    ];

    /// Canonical profile id
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::StandardUnweighted => "standard-unweighted",
            Self::StandardWeighted => "standard-weighted",
            Self::UcCapped => "uc-capped",
            Self::UcUncapped => "uc-uncapped",
            Self::UcUnweighted => "uc-unweighted",
        }
    }

    /// The UC variant this kind computes with, or `None` for standard kinds
    #[must_use]
    pub const fn uc_variant(self) -> Option<UcVariant> {
        match self {
            Self::StandardUnweighted | Self::StandardWeighted => None,
            Self::UcCapped => Some(UcVariant::Capped),
            Self::UcUncapped => Some(UcVariant::Uncapped),
            Self::UcUnweighted => Some(UcVariant::Unweighted),
        }
    }

    /// Whether this kind belongs to the UC family
    #[must_use]
    pub const fn is_uc(self) -> bool {
        self.uc_variant().is_some()
    }

    /// Resolve a kind from a profile id
    ///
    /// Accepts the canonical id as well as any branded form that ends in
    /// `-<canonical id>` (e.g. `college-uc-capped`).
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::ALL.into_iter().find(|kind| {
            id.strip_suffix(kind.id())
                .is_some_and(|rest| rest.is_empty() || rest.ends_with('-'))
        })
    }

    const fn index(self) -> usize {
        match self {
            Self::StandardUnweighted => 0,
            Self::StandardWeighted => 1,
            Self::UcCapped => 2,
            Self::UcUncapped => 3,
            Self::UcUnweighted => 4,
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// UC-only eligibility rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityRules {
    /// Plus/minus modifiers carry no weight
    pub ignore_plus_minus: bool,
    /// Only subject-area approved courses count
    pub subject_approved_only: bool,
    /// Cap on honors-boosted course-semesters
    pub max_boosted_semesters: Option<usize>,
    /// Cap on how many boosted course-semesters may come from 10th grade
    pub max_boosted_from_tenth: Option<usize>,
}

impl EligibilityRules {
    /// UC capped rules: at most 8 boosted semesters, 4 of them from 10th grade
    pub const UC_CAPPED: Self = Self {
        ignore_plus_minus: true,
        subject_approved_only: true,
        max_boosted_semesters: Some(8),
        max_boosted_from_tenth: Some(4),
    };

    /// UC rules without any boost cap
    pub const UC: Self = Self {
        ignore_plus_minus: true,
        subject_approved_only: true,
        max_boosted_semesters: None,
        max_boosted_from_tenth: None,
    };
}

/// A named GPA policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Profile id (canonical, or branded with [`BRANDED_ID_PREFIX`])
    pub id: String,
    /// Display name
    pub name: String,
    /// Short display name
    pub short_name: String,
    /// Longer explanation of the policy
    pub description: String,
    /// Calculation family
    pub kind: ProfileKind,
    /// Grade-to-points scale
    pub scale: GradeScale,
    /// Per-category boosts
    pub boosts: BoostTable,
    /// Highest points a single course can earn
    pub max_gpa: f64,
    /// Whether plus/minus grades are distinguished
    pub allows_plus_minus: bool,
    /// UC eligibility rules, if any
    pub rules: Option<EligibilityRules>,
}

impl Profile {
    /// Build the canonical profile for a kind
    #[must_use]
    pub fn canonical(kind: ProfileKind) -> Self {
        let (name, short_name, description, scale, boosts, max_gpa, rules) = match kind {
            ProfileKind::StandardUnweighted => (
                "Standard Unweighted GPA",
                "Unweighted",
                "The traditional 4.0 scale. All courses are treated equally regardless of \
                 difficulty; an A is worth 4.0 points whether the course is Regular or AP.",
                GradeScale::Standard,
                BoostTable::NONE,
                4.0,
                None,
            ),
            ProfileKind::StandardWeighted => (
                "Standard Weighted GPA",
                "Weighted",
                "A 5.0 scale that rewards challenging courses. Honors, IB Standard Level and \
                 dual enrollment add +0.5; AP and IB Higher Level add +1.0.",
                GradeScale::Standard,
                BoostTable::STANDARD_WEIGHTED,
                5.0,
                None,
            ),
            ProfileKind::UcCapped => (
                "UC Capped Weighted GPA",
                "UC Capped",
                "The primary GPA used by University of California admissions. Adds +1.0 for \
                 honors-level courses, capped at 8 semesters (at most 4 from 10th grade). Only \
                 subject-area approved 10th and 11th grade courses count; +/- is ignored.",
                GradeScale::Uc,
                BoostTable::UC_HONORS,
                5.0,
                Some(EligibilityRules::UC_CAPPED),
            ),
            ProfileKind::UcUncapped => (
                "UC Uncapped Weighted GPA",
                "UC Uncapped",
                "Like UC Capped, but every eligible honors-level course earns +1.0 with no \
                 limit. Still only counts approved 10th and 11th grade courses and ignores +/-.",
                GradeScale::Uc,
                BoostTable::UC_HONORS,
                5.0,
                Some(EligibilityRules::UC),
            ),
            ProfileKind::UcUnweighted => (
                "UC Unweighted GPA",
                "UC Unweighted",
                "A 4.0 scale over approved 10th and 11th grade courses with no course-type \
                 boosts and no +/- distinctions.",
                GradeScale::Uc,
                BoostTable::NONE,
                4.0,
                Some(EligibilityRules::UC),
            ),
        };

        Self {
            id: kind.id().to_string(),
            name: name.to_string(),
            short_name: short_name.to_string(),
            description: description.to_string(),
            kind,
            scale,
            boosts,
            max_gpa,
            allows_plus_minus: scale.distinguishes_plus_minus(),
            rules,
        }
    }

    /// The UC variant this profile computes with, if any
    #[must_use]
    pub const fn uc_variant(&self) -> Option<UcVariant> {
        self.kind.uc_variant()
    }

    /// Copy of this profile branded for a college
    ///
    /// The id gains the `college-` prefix and the name becomes
    /// "<college> <short name> GPA"; the kind and all rules are unchanged.
    #[must_use]
    pub fn branded(&self, college_name: &str) -> Self {
        Self {
            id: format!("{BRANDED_ID_PREFIX}{}", self.id),
            name: format!("{college_name} {} GPA", self.short_name),
            ..self.clone()
        }
    }
}

/// Immutable set of the canonical profiles
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRegistry {
    profiles: Vec<Profile>,
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::canonical()
    }
}

impl ProfileRegistry {
    /// Build the registry holding the five canonical profiles
    #[must_use]
    pub fn canonical() -> Self {
        Self {
            profiles: ProfileKind::ALL.into_iter().map(Profile::canonical).collect(),
        }
    }

    /// All profiles in registry order
    #[must_use]
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// The profile for a kind
    #[must_use]
    pub fn by_kind(&self, kind: ProfileKind) -> &Profile {
        &self.profiles[kind.index()]
    }

    /// Look up a profile by id, accepting branded ids
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Profile> {
        ProfileKind::from_id(id).map(|kind| self.by_kind(kind))
    }

    /// Resolve a list of profile ids, preserving their order
    ///
    /// # Errors
    /// Returns an error naming the first id that matches no profile
    pub fn resolve<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<Profile>, String> {
        ids.iter()
            .map(|id| {
                let id = id.as_ref();
                self.get(id)
                    .cloned()
                    .ok_or_else(|| format!("Unknown GPA profile: '{id}'"))
            })
            .collect()
    }

    /// Profiles relevant to a college system (`uc`, `csu`, `ivy`, `generic`)
    ///
    /// Unknown systems get the generic pair of standard profiles.
    #[must_use]
    pub fn profiles_for_system(&self, system: &str) -> Vec<Profile> {
        let kinds: &[ProfileKind] = match system.trim().to_ascii_lowercase().as_str() {
            "uc" => &[
                ProfileKind::UcCapped,
                ProfileKind::UcUncapped,
                ProfileKind::UcUnweighted,
                ProfileKind::StandardUnweighted,
            ],
            "csu" => &[ProfileKind::StandardWeighted, ProfileKind::StandardUnweighted],
            _ => &[ProfileKind::StandardUnweighted, ProfileKind::StandardWeighted],
        };
        kinds.iter().map(|k| self.by_kind(*k).clone()).collect()
    }

    /// Profiles shown for a specific college
    ///
    /// College-specific (non-standard) profiles of the college's system come
    /// first, branded with the college name; the standard unweighted and
    /// weighted profiles always follow.
    #[must_use]
    pub fn for_college(&self, college_name: &str, system: &str) -> Vec<Profile> {
        let mut profiles: Vec<Profile> = self
            .profiles_for_system(system)
            .iter()
            .filter(|p| p.kind.is_uc())
            .map(|p| p.branded(college_name))
            .collect();
        profiles.push(self.by_kind(ProfileKind::StandardUnweighted).clone());
        profiles.push(self.by_kind(ProfileKind::StandardWeighted).clone());
        profiles
    }
}
