//! Course difficulty categories

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Difficulty tier of a course; selects the boost table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseCategory {
    /// Regular (non-accelerated) course
    #[serde(alias = "regular", alias = "Regular")]
    Standard,
    /// Honors course
    #[serde(alias = "Honors")]
    Honors,
    /// Advanced Placement
    #[serde(rename = "ap", alias = "AP")]
    AdvancedPlacement,
    /// International Baccalaureate, Higher Level
    #[serde(rename = "ib_hl", alias = "IB_HL")]
    IbHigher,
    /// International Baccalaureate, Standard Level
    #[serde(rename = "ib_sl", alias = "IB_SL")]
    IbStandard,
    /// College course taken for high-school credit
    #[serde(alias = "Dual Enrollment")]
    DualEnrollment,
}

impl CourseCategory {
    /// Every category
    pub const ALL: [Self; 6] = [
        Self::Standard,
        Self::Honors,
        Self::AdvancedPlacement,
        Self::IbHigher,
        Self::IbStandard,
        Self::DualEnrollment,
    ];

    /// Short machine key, also accepted by `from_str`
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Honors => "honors",
            Self::AdvancedPlacement => "ap",
            Self::IbHigher => "ib_hl",
            Self::IbStandard => "ib_sl",
            Self::DualEnrollment => "dual_enrollment",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "Regular",
            Self::Honors => "Honors",
            Self::AdvancedPlacement => "AP",
            Self::IbHigher => "IB Higher Level",
            Self::IbStandard => "IB Standard Level",
            Self::DualEnrollment => "Dual Enrollment",
        }
    }
}

impl fmt::Display for CourseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CourseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "standard" | "regular" | "cp" => Ok(Self::Standard),
            "honors" | "h" => Ok(Self::Honors),
            "ap" | "advanced_placement" => Ok(Self::AdvancedPlacement),
            "ib_hl" | "ib_higher" | "ib_higher_level" => Ok(Self::IbHigher),
            "ib_sl" | "ib_standard" | "ib_standard_level" => Ok(Self::IbStandard),
            "dual" | "dual_enrollment" | "de" => Ok(Self::DualEnrollment),
            _ => Err(format!("Unknown course category: '{s}'")),
        }
    }
}
