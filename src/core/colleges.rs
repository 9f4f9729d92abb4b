//! Admission reference data for named colleges
//!
//! Average admitted GPA (unweighted, 4.0 scale) and acceptance rate for a set
//! of US colleges, plus a comparison of a computed GPA against that average.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Distance below the average that still counts as near it
pub const NEAR_MARGIN: f64 = 0.1;

/// Selectivity band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CollegeTier {
    /// Ivy League
    Ivy,
    /// Top 20 national universities
    Top20,
    /// Top 50 national universities
    Top50,
    /// Flagship state universities
    Flagship,
    /// Other state universities
    State,
}

impl CollegeTier {
    /// Stable key used on the command line
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Ivy => "ivy",
            Self::Top20 => "top20",
            Self::Top50 => "top50",
            Self::Flagship => "flagship",
            Self::State => "state",
        }
    }
}

impl fmt::Display for CollegeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.key())
    }
}

impl FromStr for CollegeTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace([' ', '-'], "").as_str() {
            "ivy" | "ivyleague" => Ok(Self::Ivy),
            "top20" => Ok(Self::Top20),
            "top50" => Ok(Self::Top50),
            "flagship" => Ok(Self::Flagship),
            "state" => Ok(Self::State),
            _ => Err(format!(
                "Unknown college tier: '{s}' (expected ivy, top20, top50, flagship or state)"
            )),
        }
    }
}

/// One college's admission figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct College {
    /// Display name
    pub name: &'static str,
    /// Average GPA of admitted students
    pub avg_gpa: f64,
    /// Acceptance rate in percent
    pub acceptance_rate: f64,
    /// Selectivity band
    pub tier: CollegeTier,
}

impl College {
    const fn new(name: &'static str, avg_gpa: f64, acceptance_rate: f64, tier: CollegeTier) -> Self {
        Self {
            name,
            avg_gpa,
            acceptance_rate,
            tier,
        }
    }

    /// Compare a GPA against this college's admitted average
    #[must_use]
    pub fn compare(&self, gpa: f64) -> Comparison {
        let difference = gpa - self.avg_gpa;
        let standing = if difference >= 0.0 {
            Standing::AtOrAbove
        } else if difference >= -NEAR_MARGIN {
            Standing::Near
        } else {
            Standing::Below
        };
        Comparison {
            college: *self,
            gpa,
            difference,
            standing,
        }
    }
}

/// Where a GPA sits relative to a college average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Standing {
    /// At or above the average
    AtOrAbove,
    /// Below the average by at most [`NEAR_MARGIN`]
    Near,
    /// Further below
    Below,
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AtOrAbove => "at or above average",
            Self::Near => "near average",
            Self::Below => "below average",
        })
    }
}

/// A GPA measured against one college
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Comparison {
    /// The college compared against
    pub college: College,
    /// The GPA that was compared
    pub gpa: f64,
    /// `gpa - avg_gpa`
    pub difference: f64,
    /// Band the difference falls in
    pub standing: Standing,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} vs {} average {:.2} ({:+.2}, {})",
            self.gpa, self.college.name, self.college.avg_gpa, self.difference, self.standing
        )
    }
}

static COLLEGES: &[College] = &[
    College::new("Harvard University", 3.97, 3.2, CollegeTier::Ivy),
    College::new("Yale University", 3.95, 4.4, CollegeTier::Ivy),
    College::new("Princeton University", 3.96, 3.5, CollegeTier::Ivy),
    College::new("Columbia University", 3.94, 3.9, CollegeTier::Ivy),
    College::new("University of Pennsylvania", 3.93, 5.4, CollegeTier::Ivy),
    College::new("Brown University", 3.92, 5.0, CollegeTier::Ivy),
    College::new("Dartmouth College", 3.91, 6.2, CollegeTier::Ivy),
    College::new("Cornell University", 3.89, 7.3, CollegeTier::Ivy),
    College::new("Stanford University", 3.96, 3.7, CollegeTier::Top20),
    College::new("MIT", 3.96, 3.9, CollegeTier::Top20),
    College::new("Caltech", 3.97, 3.2, CollegeTier::Top20),
    College::new("Duke University", 3.94, 5.0, CollegeTier::Top20),
    College::new("Northwestern University", 3.92, 5.6, CollegeTier::Top20),
    College::new("Johns Hopkins University", 3.91, 6.5, CollegeTier::Top20),
    College::new("Rice University", 3.91, 7.7, CollegeTier::Top20),
    College::new("Vanderbilt University", 3.90, 5.6, CollegeTier::Top20),
    College::new("University of Chicago", 3.93, 5.2, CollegeTier::Top20),
    College::new("Georgetown University", 3.89, 12.0, CollegeTier::Top20),
    College::new("Emory University", 3.88, 11.0, CollegeTier::Top20),
    College::new("Carnegie Mellon University", 3.89, 11.0, CollegeTier::Top20),
    College::new("University of Notre Dame", 3.89, 12.0, CollegeTier::Top20),
    College::new("Washington University in St. Louis", 3.90, 10.0, CollegeTier::Top20),
    College::new("UC Berkeley", 3.89, 11.6, CollegeTier::Top50),
    College::new("UCLA", 3.90, 8.6, CollegeTier::Top50),
    College::new("University of Michigan", 3.86, 15.0, CollegeTier::Top50),
    College::new("University of Virginia", 3.85, 16.3, CollegeTier::Top50),
    College::new("Georgia Tech", 3.85, 16.0, CollegeTier::Top50),
    College::new("NYU", 3.80, 12.2, CollegeTier::Top50),
    College::new("UNC Chapel Hill", 3.82, 17.0, CollegeTier::Top50),
    College::new("Boston University", 3.75, 14.0, CollegeTier::Top50),
    College::new("Tufts University", 3.85, 10.0, CollegeTier::Top50),
    College::new("UC San Diego", 3.82, 24.0, CollegeTier::Top50),
    College::new("UC Santa Barbara", 3.78, 26.0, CollegeTier::Top50),
    College::new("UC Davis", 3.75, 37.0, CollegeTier::Top50),
    College::new("UC Irvine", 3.76, 21.0, CollegeTier::Top50),
    College::new("University of Florida", 3.79, 23.0, CollegeTier::Top50),
    College::new("University of Wisconsin-Madison", 3.75, 43.0, CollegeTier::Top50),
    College::new("University of Illinois Urbana-Champaign", 3.73, 43.0, CollegeTier::Top50),
    College::new("Penn State University", 3.55, 55.0, CollegeTier::Flagship),
    College::new("Ohio State University", 3.60, 53.0, CollegeTier::Flagship),
    College::new("University of Texas at Austin", 3.70, 29.0, CollegeTier::Flagship),
    College::new("University of Minnesota", 3.55, 60.0, CollegeTier::Flagship),
    College::new("University of Washington", 3.72, 44.0, CollegeTier::Flagship),
    College::new("Purdue University", 3.55, 53.0, CollegeTier::Flagship),
    College::new("Indiana University", 3.45, 73.0, CollegeTier::Flagship),
    College::new("University of Arizona", 3.35, 84.0, CollegeTier::Flagship),
    College::new("Arizona State University", 3.30, 88.0, CollegeTier::Flagship),
    College::new("San Diego State University", 3.50, 34.0, CollegeTier::State),
    College::new("San Jose State University", 3.30, 62.0, CollegeTier::State),
    College::new("Cal Poly San Luis Obispo", 3.75, 28.0, CollegeTier::State),
    College::new("CSU Long Beach", 3.40, 37.0, CollegeTier::State),
    College::new("CSU Fullerton", 3.30, 48.0, CollegeTier::State),
];

/// Every known college, grouped by tier
#[must_use]
pub fn all() -> &'static [College] {
    COLLEGES
}

/// Colleges in one tier, in table order
pub fn in_tier(tier: CollegeTier) -> impl Iterator<Item = &'static College> {
    COLLEGES.iter().filter(move |c| c.tier == tier)
}

/// Look up a college by name, ignoring case and surrounding whitespace
#[must_use]
pub fn find(name: &str) -> Option<&'static College> {
    let wanted = name.trim();
    COLLEGES.iter().find(|c| c.name.eq_ignore_ascii_case(wanted))
}
