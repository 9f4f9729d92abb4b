//! Letter grades and high-school grade levels

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A letter grade from A+ down to F
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// A+
    #[serde(rename = "A+")]
    APlus,
    /// A
    #[serde(rename = "A")]
    A,
    /// A-
    #[serde(rename = "A-")]
    AMinus,
    /// B+
    #[serde(rename = "B+")]
    BPlus,
    /// B
    #[serde(rename = "B")]
    B,
    /// B-
    #[serde(rename = "B-")]
    BMinus,
    /// C+
    #[serde(rename = "C+")]
    CPlus,
    /// C
    #[serde(rename = "C")]
    C,
    /// C-
    #[serde(rename = "C-")]
    CMinus,
    /// D+
    #[serde(rename = "D+")]
    DPlus,
    /// D
    #[serde(rename = "D")]
    D,
    /// D-
    #[serde(rename = "D-")]
    DMinus,
    /// F
    #[serde(rename = "F")]
    F,
}

impl Grade {
    /// Every grade, best first
    pub const ALL: [Self; 13] = [
        Self::APlus,
        Self::A,
        Self::AMinus,
        Self::BPlus,
        Self::B,
        Self::BMinus,
        Self::CPlus,
        Self::C,
        Self::CMinus,
        Self::DPlus,
        Self::D,
        Self::DMinus,
        Self::F,
    ];

    /// Letter form of the grade (e.g., "B+")
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::DMinus => "D-",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|g| g.label() == wanted)
            .ok_or_else(|| format!("Unknown grade: '{s}'"))
    }
}

/// High-school grade level (9th through 12th)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GradeLevel {
    /// 9th grade (freshman)
    Ninth,
    /// 10th grade (sophomore)
    Tenth,
    /// 11th grade (junior)
    Eleventh,
    /// 12th grade (senior)
    Twelfth,
}

impl GradeLevel {
    /// All grade levels in order
    pub const ALL: [Self; 4] = [Self::Ninth, Self::Tenth, Self::Eleventh, Self::Twelfth];

    /// Numeric grade (9-12)
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Ninth => 9,
            Self::Tenth => 10,
            Self::Eleventh => 11,
            Self::Twelfth => 12,
        }
    }

    /// Look up a grade level by number
    #[must_use]
    pub const fn from_number(n: u64) -> Option<Self> {
        match n {
            9 => Some(Self::Ninth),
            10 => Some(Self::Tenth),
            11 => Some(Self::Eleventh),
            12 => Some(Self::Twelfth),
            _ => None,
        }
    }

    /// Human label, e.g. "10th Grade (Sophomore)"
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ninth => "9th Grade (Freshman)",
            Self::Tenth => "10th Grade (Sophomore)",
            Self::Eleventh => "11th Grade (Junior)",
            Self::Twelfth => "12th Grade (Senior)",
        }
    }
}

impl fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl FromStr for GradeLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s
            .trim()
            .trim_end_matches(|c: char| c.is_ascii_alphabetic());
        trimmed
            .parse::<u64>()
            .ok()
            .and_then(Self::from_number)
            .ok_or_else(|| format!("Unknown grade level: '{s}' (expected 9, 10, 11 or 12)"))
    }
}

impl Serialize for GradeLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct GradeLevelVisitor;

impl Visitor<'_> for GradeLevelVisitor {
    type Value = GradeLevel;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a grade level between 9 and 12")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        GradeLevel::from_number(v)
            .ok_or_else(|| E::custom(format!("grade level out of range: {v}")))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        u64::try_from(v)
            .ok()
            .and_then(GradeLevel::from_number)
            .ok_or_else(|| E::custom(format!("grade level out of range: {v}")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for GradeLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(GradeLevelVisitor)
    }
}
