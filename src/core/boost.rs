//! Course-category boost tables and caller overrides

use crate::core::models::CourseCategory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Additive point boost for each course category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoostTable {
    /// Regular courses
    pub standard: f64,
    /// Honors courses
    pub honors: f64,
    /// Advanced Placement
    pub ap: f64,
    /// IB Higher Level
    pub ib_hl: f64,
    /// IB Standard Level
    pub ib_sl: f64,
    /// Dual enrollment
    pub dual_enrollment: f64,
}

impl BoostTable {
    /// No boost for any category
    pub const NONE: Self = Self {
        standard: 0.0,
        honors: 0.0,
        ap: 0.0,
        ib_hl: 0.0,
        ib_sl: 0.0,
        dual_enrollment: 0.0,
    };

    /// Standard weighted (5.0) boosts
    pub const STANDARD_WEIGHTED: Self = Self {
        standard: 0.0,
        honors: 0.5,
        ap: 1.0,
        ib_hl: 1.0,
        ib_sl: 0.5,
        dual_enrollment: 0.5,
    };

    /// UC honors boost: +1 for eligible advanced courses, none for IB Standard Level
    pub const UC_HONORS: Self = Self {
        standard: 0.0,
        honors: 1.0,
        ap: 1.0,
        ib_hl: 1.0,
        ib_sl: 0.0,
        dual_enrollment: 1.0,
    };

    /// Boost for a category
    #[must_use]
    pub const fn boost(&self, category: CourseCategory) -> f64 {
        match category {
            CourseCategory::Standard => self.standard,
            CourseCategory::Honors => self.honors,
            CourseCategory::AdvancedPlacement => self.ap,
            CourseCategory::IbHigher => self.ib_hl,
            CourseCategory::IbStandard => self.ib_sl,
            CourseCategory::DualEnrollment => self.dual_enrollment,
        }
    }

    fn slot_mut(&mut self, category: CourseCategory) -> &mut f64 {
        match category {
            CourseCategory::Standard => &mut self.standard,
            CourseCategory::Honors => &mut self.honors,
            CourseCategory::AdvancedPlacement => &mut self.ap,
            CourseCategory::IbHigher => &mut self.ib_hl,
            CourseCategory::IbStandard => &mut self.ib_sl,
            CourseCategory::DualEnrollment => &mut self.dual_enrollment,
        }
    }

    /// Return a new table where every category present in `overrides` takes the
    /// override value and every other category keeps this table's value
    #[must_use]
    pub fn merged(&self, overrides: &BoostOverrides) -> Self {
        let mut merged = *self;
        for category in CourseCategory::ALL {
            if let Some(value) = overrides.get(category) {
                *merged.slot_mut(category) = value;
            }
        }
        merged
    }
}

/// Partial per-category boost values supplied by a caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoostOverrides {
    values: BTreeMap<String, f64>,
}

impl BoostOverrides {
    /// An empty override set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the boost of one category
    #[must_use]
    pub fn with(mut self, category: CourseCategory, value: f64) -> Self {
        self.set(category, value);
        self
    }

    /// Override the boost of one category in place
    pub fn set(&mut self, category: CourseCategory, value: f64) {
        self.values.insert(category.key().to_string(), value);
    }

    /// Drop the override for one category
    pub fn remove(&mut self, category: CourseCategory) -> Option<f64> {
        self.values.remove(category.key())
    }

    /// Override value for a category, if any
    #[must_use]
    pub fn get(&self, category: CourseCategory) -> Option<f64> {
        self.values.get(category.key()).copied()
    }

    /// Whether no category is overridden
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Layer `other` on top of these overrides (entries in `other` win)
    pub fn extend(&mut self, other: &Self) {
        for (key, value) in &other.values {
            self.values.insert(key.clone(), *value);
        }
    }

    /// Check that every key names a category and every value is a finite, non-negative number
    ///
    /// # Errors
    /// Returns a message naming the first offending entry
    pub fn validate(&self) -> Result<(), String> {
        for (key, value) in &self.values {
            let category = key.parse::<CourseCategory>()?;
            if !value.is_finite() || *value < 0.0 {
                return Err(format!(
                    "Boost for '{}' must be a non-negative number, got {value}",
                    category.key()
                ));
            }
        }
        Ok(())
    }

    /// Re-key entries written with loose spellings ("AP", "IB-HL") to canonical keys
    ///
    /// # Errors
    /// Returns an error if a key is not a known category
    pub fn normalized(&self) -> Result<Self, String> {
        let mut out = Self::new();
        for (key, value) in &self.values {
            let category = key.parse::<CourseCategory>()?;
            out.set(category, *value);
        }
        Ok(out)
    }
}

impl FromStr for BoostOverrides {
    type Err = String;

    /// Parse a comma-separated list of `category=value` pairs, e.g. `honors=1,ap=1.5`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut overrides = Self::new();
        for pair in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| format!("Expected CATEGORY=VALUE, got '{pair}'"))?;
            let category = key.parse::<CourseCategory>()?;
            let value = value
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("Invalid boost value for '{}': '{value}'", key.trim()))?;
            overrides.set(category, value);
        }
        overrides.validate()?;
        Ok(overrides)
    }
}

impl fmt::Display for BoostOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .values
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        f.write_str(&parts.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unweighted_table_is_all_zero() {
        for category in CourseCategory::ALL {
            assert!(BoostTable::NONE.boost(category).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_standard_weighted_pairs() {
        let t = BoostTable::STANDARD_WEIGHTED;
        assert!((t.boost(CourseCategory::AdvancedPlacement) - 1.0).abs() < f64::EPSILON);
        assert!(
            (t.boost(CourseCategory::AdvancedPlacement) - t.boost(CourseCategory::IbHigher)).abs()
                < f64::EPSILON
        );
        assert!((t.boost(CourseCategory::IbStandard) - 0.5).abs() < f64::EPSILON);
        assert!(
            (t.boost(CourseCategory::IbStandard) - t.boost(CourseCategory::DualEnrollment)).abs()
                < f64::EPSILON
        );
        assert!((t.boost(CourseCategory::Honors) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_uc_table_gives_nothing_to_ib_standard() {
        let t = BoostTable::UC_HONORS;
        assert!(t.boost(CourseCategory::IbStandard).abs() < f64::EPSILON);
        assert!(t.boost(CourseCategory::Standard).abs() < f64::EPSILON);
        assert!((t.boost(CourseCategory::DualEnrollment) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_merge_overrides_only_named_categories() {
        let overrides = BoostOverrides::new().with(CourseCategory::Honors, 2.0);
        let merged = BoostTable::STANDARD_WEIGHTED.merged(&overrides);

        assert!((merged.honors - 2.0).abs() < f64::EPSILON);
        assert!((merged.ap - 1.0).abs() < f64::EPSILON);
        assert!((merged.ib_sl - 0.5).abs() < f64::EPSILON);
        // the source table is untouched
        assert!((BoostTable::STANDARD_WEIGHTED.honors - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_merge_with_empty_overrides_is_identity() {
        let merged = BoostTable::UC_HONORS.merged(&BoostOverrides::new());
        assert_eq!(merged, BoostTable::UC_HONORS);
    }

    #[test]
    fn test_parse_overrides() {
        let overrides: BoostOverrides = "honors=1, AP=1.5,ib-sl=0".parse().unwrap();
        assert_eq!(overrides.get(CourseCategory::Honors), Some(1.0));
        assert_eq!(overrides.get(CourseCategory::AdvancedPlacement), Some(1.5));
        assert_eq!(overrides.get(CourseCategory::IbStandard), Some(0.0));
        assert_eq!(overrides.get(CourseCategory::Standard), None);
    }

    #[test]
    fn test_parse_overrides_rejects_bad_input() {
        assert!("honors".parse::<BoostOverrides>().is_err());
        assert!("honors=abc".parse::<BoostOverrides>().is_err());
        assert!("gifted=1".parse::<BoostOverrides>().is_err());
        assert!("honors=-1".parse::<BoostOverrides>().is_err());
    }

    #[test]
    fn test_normalized_rekeys_loose_spellings() {
        let raw: BoostOverrides = toml::from_str("AP = 2.0\n\"Dual Enrollment\" = 0.25").unwrap();
        let normalized = raw.normalized().unwrap();
        assert_eq!(normalized.get(CourseCategory::AdvancedPlacement), Some(2.0));
        assert_eq!(normalized.get(CourseCategory::DualEnrollment), Some(0.25));
    }

    #[test]
    fn test_display_roundtrip() {
        let overrides = BoostOverrides::new()
            .with(CourseCategory::Honors, 1.0)
            .with(CourseCategory::AdvancedPlacement, 1.5);
        let parsed: BoostOverrides = overrides.to_string().parse().unwrap();
        assert_eq!(parsed, overrides);
    }
}
