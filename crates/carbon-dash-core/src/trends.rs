//! Monthly series shown on the corporate and association views.
//!
//! Like the real-time series these are not persisted. CBAM exports and
//! membership counts draw uniform noise around fixed bases; the ESG trend is
//! a deterministic sinusoid with a slow upward drift.

use serde::{Deserialize, Serialize};

use rand::Rng;

/// Months of CBAM exports shown, July through December.
pub const CBAM_MONTHS: u32 = 6;

/// Months of ESG score history shown, starting January 2023.
pub const ESG_TREND_MONTHS: u32 = 24;

/// Months of association membership shown.
pub const MEMBER_MONTHS: u32 = 12;

const CBAM_FIRST_MONTH: u32 = 7;
const ESG_FIRST_YEAR: u32 = 2023;

const BASE_TOTAL_MEMBERS: i64 = 4_870_000;
const BASE_ACTIVE_MEMBERS: i64 = 3_980_000;

/// One month of electronic-component exports under EU CBAM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CbamMonth {
    /// Month label (`"7월"`).
    pub month: String,
    /// Exported tonnes, `1500..3500`.
    pub exports: i64,
    /// Embedded emissions in tCO2, `300..700`.
    pub emissions: i64,
    /// Certificates required in tCO2, `280..630`.
    pub certificates: i64,
}

/// One month of ESG sub-scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EsgTrendPoint {
    /// `YYYY-MM`.
    pub month: String,
    /// Environmental score.
    pub environmental: f64,
    /// Social score.
    pub social: f64,
    /// Governance score.
    pub governance: f64,
}

/// One month of association membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberMonth {
    /// Month label (`"1월"`).
    pub month: String,
    /// Registered members.
    pub total_members: i64,
    /// Members active that month.
    pub active_members: i64,
    /// Members who joined that month, `5000..25000`.
    pub new_members: i64,
}

/// Generate the CBAM export months.
#[must_use]
pub fn generate_cbam_months<R: Rng + ?Sized>(rng: &mut R) -> Vec<CbamMonth> {
    (0..CBAM_MONTHS)
        .map(|i| CbamMonth {
            month: format!("{}월", CBAM_FIRST_MONTH + i),
            exports: rng.gen_range(1500..3500),
            emissions: rng.gen_range(300..700),
            certificates: rng.gen_range(280..630),
        })
        .collect()
}

/// The ESG score trend. Identical on every call.
#[must_use]
pub fn esg_trend() -> Vec<EsgTrendPoint> {
    (0..ESG_TREND_MONTHS)
        .map(|i| {
            let x = f64::from(i);
            EsgTrendPoint {
                month: format!("{}-{:02}", ESG_FIRST_YEAR + i / 12, i % 12 + 1),
                environmental: 78.2 + (x * 0.3).sin() * 2.0 + x * 0.13,
                social: 71.8 + (x * 0.4).sin() * 1.5 + x * 0.09,
                governance: 77.1 + (x * 0.2).sin() * 1.8 + x * 0.12,
            }
        })
        .collect()
}

/// Generate the membership months: steady growth plus noise.
#[must_use]
pub fn generate_member_months<R: Rng + ?Sized>(rng: &mut R) -> Vec<MemberMonth> {
    (0..MEMBER_MONTHS)
        .map(|i| {
            let step = i64::from(i);
            MemberMonth {
                month: format!("{}월", i + 1),
                total_members: BASE_TOTAL_MEMBERS + step * 15_000 + rng.gen_range(0..8_000),
                active_members: BASE_ACTIVE_MEMBERS + step * 12_000 + rng.gen_range(0..5_000),
                new_members: rng.gen_range(5_000..25_000),
            }
        })
        .collect()
}
