//! Synthetic hourly series for the platform view.
//!
//! The platform dashboard shows the last day of national emissions, reductions,
//! trading volume and credit price. These figures are not persisted; they are
//! generated from fixed base values, a daily sinusoid and uniform noise.
//!
//! | Field | Range |
//! |---|---|
//! | `emissions` | 1,550,000 ..= 2,050,000 t |
//! | `reductions` | 8-10 % of the hourly base |
//! | `trading` | 20,000 .. 70,000 t |
//! | `price` | 36.00 ..= 49.00 |

use std::f64::consts::PI;

use chrono::{DateTime, Duration, Timelike, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of hourly points in a series.
pub const SERIES_HOURS: u32 = 24;

const BASE_EMISSIONS: f64 = 1_800_000.0;
const EMISSION_SWING: f64 = 200_000.0;
const EMISSION_NOISE: f64 = 100_000.0;
const BASE_PRICE: f64 = 42.5;

/// One hour of the synthetic series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealtimePoint {
    /// Hour label in UTC (`"13:00"`), not the viewer's local time.
    pub time: String,
    /// Start of the hour the point describes.
    pub at: DateTime<Utc>,
    /// Emissions in tonnes.
    pub emissions: i64,
    /// Reductions in tonnes.
    pub reductions: i64,
    /// Traded volume in tonnes.
    pub trading: i64,
    /// Credit price, two decimals.
    pub price: f64,
}

/// Generate the 24 points ending at `now`, oldest first.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // values are bounded well inside i64
pub fn generate_series<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> Vec<RealtimePoint> {
    (0..SERIES_HOURS)
        .map(|i| {
            let at = now - Duration::hours(i64::from(SERIES_HOURS - 1 - i));
            let hour = f64::from(i);

            let base = BASE_EMISSIONS + (hour * PI / 12.0).sin() * EMISSION_SWING;
            let noise = (rng.gen::<f64>() - 0.5) * EMISSION_NOISE;
            let reductions = base * 0.08 + rng.gen::<f64>() * base * 0.02;
            let trading = rng.gen_range(20_000..70_000);
            let price =
                BASE_PRICE + (hour * PI / 8.0).sin() * 5.0 + (rng.gen::<f64>() - 0.5) * 3.0;

            RealtimePoint {
                time: format!("{}:00", at.hour()),
                at,
                emissions: (base + noise).floor() as i64,
                reductions: reductions.floor() as i64,
                trading,
                price: (price * 100.0).round() / 100.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn series_has_one_point_per_hour() {
        let now = Utc::now();
        let series = generate_series(now, &mut StdRng::seed_from_u64(7));

        assert_eq!(series.len(), SERIES_HOURS as usize);
        assert_eq!(series.last().unwrap().at, now);
        assert_eq!(series[0].at, now - Duration::hours(23));
        assert!(series.windows(2).all(|w| w[0].at < w[1].at));
    }

    #[test]
    fn values_stay_in_documented_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            for point in generate_series(Utc::now(), &mut rng) {
                assert!((1_550_000..=2_050_000).contains(&point.emissions));
                assert!((128_000..=200_000).contains(&point.reductions));
                assert!((20_000..70_000).contains(&point.trading));
                assert!((36.0..=49.0).contains(&point.price));
            }
        }
    }

    #[test]
    fn price_has_two_decimals() {
        for point in generate_series(Utc::now(), &mut StdRng::seed_from_u64(1)) {
            let cents = point.price * 100.0;
            assert!((cents - cents.round()).abs() < 1e-6);
        }
    }

    #[test]
    fn labels_follow_the_clock() {
        let now = "2025-07-23T05:30:00Z".parse::<DateTime<Utc>>().unwrap();
        let series = generate_series(now, &mut StdRng::seed_from_u64(3));

        assert_eq!(series.last().unwrap().time, "5:00");
        assert_eq!(series[0].time, "6:00");
    }
}
