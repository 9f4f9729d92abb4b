//! National GPA percentile estimates
//!
//! Anchor tables map a GPA to the share of US graduates at or below it
//! (NCES transcript study, ACT graduating class profile, College Board data).
//! Values between anchors are linearly interpolated and rounded; values past
//! either end clamp to that end. Only the standard profiles have a table.

use crate::core::profile::ProfileKind;

/// Unweighted (4.0 scale) anchors, highest GPA first
const UNWEIGHTED: &[(f64, u8)] = &[
    (4.0, 98),
    (3.9, 96),
    (3.8, 93),
    (3.7, 90),
    (3.6, 87),
    (3.5, 83),
    (3.4, 79),
    (3.3, 75),
    (3.2, 70),
    (3.1, 65),
    (3.0, 58),
    (2.9, 52),
    (2.8, 46),
    (2.7, 40),
    (2.6, 35),
    (2.5, 30),
    (2.4, 25),
    (2.3, 21),
    (2.2, 17),
    (2.1, 14),
    (2.0, 11),
    (1.9, 9),
    (1.8, 7),
    (1.7, 6),
    (1.6, 5),
    (1.5, 4),
    (1.0, 2),
    (0.5, 1),
    (0.0, 0),
];

/// Weighted (5.0 scale) anchors, highest GPA first
const WEIGHTED: &[(f64, u8)] = &[
    (5.0, 99),
    (4.8, 98),
    (4.6, 97),
    (4.4, 96),
    (4.2, 94),
    (4.0, 90),
    (3.8, 84),
    (3.6, 75),
    (3.4, 64),
    (3.2, 52),
    (3.0, 40),
    (2.8, 30),
    (2.6, 22),
    (2.4, 15),
    (2.2, 10),
    (2.0, 6),
    (1.5, 3),
    (1.0, 1),
    (0.0, 0),
];

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn interpolate(table: &[(f64, u8)], gpa: f64) -> u8 {
    let (Some(&(top_gpa, top_pct)), Some(&(bottom_gpa, bottom_pct))) =
        (table.first(), table.last())
    else {
        return 0;
    };

    if gpa.is_nan() {
        return bottom_pct;
    }
    if gpa >= top_gpa {
        return top_pct;
    }
    if gpa <= bottom_gpa {
        return bottom_pct;
    }

    table
        .windows(2)
        .find(|pair| gpa <= pair[0].0 && gpa >= pair[1].0)
        .map_or(0, |pair| {
            let (hi_gpa, hi_pct) = pair[0];
            let (lo_gpa, lo_pct) = pair[1];
            let ratio = (gpa - lo_gpa) / (hi_gpa - lo_gpa);
            let pct = f64::from(hi_pct - lo_pct).mul_add(ratio, f64::from(lo_pct));
            pct.round() as u8
        })
}

/// Percentile on the unweighted 4.0 table
#[must_use]
pub fn unweighted_percentile(gpa: f64) -> u8 {
    interpolate(UNWEIGHTED, gpa)
}

/// Percentile on the weighted 5.0 table
#[must_use]
pub fn weighted_percentile(gpa: f64) -> u8 {
    interpolate(WEIGHTED, gpa)
}

/// Estimated national percentile for a GPA computed under a profile kind
///
/// Returns `None` for the UC kinds, which have no national table.
#[must_use]
pub fn percentile_for(kind: ProfileKind, gpa: f64) -> Option<u8> {
    match kind {
        ProfileKind::StandardUnweighted => Some(unweighted_percentile(gpa)),
        ProfileKind::StandardWeighted => Some(weighted_percentile(gpa)),
        ProfileKind::UcCapped | ProfileKind::UcUncapped | ProfileKind::UcUnweighted => None,
    }
}

/// Like [`percentile_for`], resolving the kind from a profile id
///
/// Unknown ids yield `None`.
#[must_use]
pub fn percentile_for_id(profile_id: &str, gpa: f64) -> Option<u8> {
    ProfileKind::from_id(profile_id).and_then(|kind| percentile_for(kind, gpa))
}
