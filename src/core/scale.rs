//! Grade-to-points scales

use crate::core::models::Grade;
use serde::{Deserialize, Serialize};

/// Grade scale variant used by a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeScale {
    /// 4.0 scale with plus/minus distinctions (A+ is capped at 4.0)
    Standard,
    /// University of California scale: plus/minus collapsed to whole tiers
    Uc,
}

impl GradeScale {
    /// Base grade points for a letter grade on this scale
    #[must_use]
    pub const fn points(self, grade: Grade) -> f64 {
        match self {
            Self::Standard => standard_points(grade),
            Self::Uc => uc_points(grade),
        }
    }

    /// Whether plus/minus modifiers change the point value
    #[must_use]
    pub const fn distinguishes_plus_minus(self) -> bool {
        matches!(self, Self::Standard)
    }
}

const fn standard_points(grade: Grade) -> f64 {
    match grade {
        Grade::APlus | Grade::A => 4.0,
        Grade::AMinus => 3.7,
        Grade::BPlus => 3.3,
        Grade::B => 3.0,
        Grade::BMinus => 2.7,
        Grade::CPlus => 2.3,
        Grade::C => 2.0,
        Grade::CMinus => 1.7,
        Grade::DPlus => 1.3,
        Grade::D => 1.0,
        Grade::DMinus => 0.7,
        Grade::F => 0.0,
    }
}

const fn uc_points(grade: Grade) -> f64 {
    match grade {
        Grade::APlus | Grade::A | Grade::AMinus => 4.0,
        Grade::BPlus | Grade::B | Grade::BMinus => 3.0,
        Grade::CPlus | Grade::C | Grade::CMinus => 2.0,
        Grade::DPlus | Grade::D | Grade::DMinus => 1.0,
        Grade::F => 0.0,
    }
}
