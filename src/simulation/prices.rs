//! Deterministic day-ahead price signal.
//!
//! Base prices are drawn uniformly from `[BASE_PRICE_MIN, BASE_PRICE_MAX)` with a
//! [`StdRng`] seeded from [`PRICE_SEED`], one draw per hour in hour order. The
//! morning and evening peak hours then get a flat [`PEAK_SURCHARGE`].
//!
//! The stream is only reproducible within one build of this crate: `StdRng` makes
//! no promise of value stability across `rand` releases.

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Number of hourly steps in a simulated day.
pub const HOURS_PER_DAY: usize = 24;

/// Seed for the price generator.
pub const PRICE_SEED: u64 = 0;

/// Lower bound of the base price (EUR/kWh, inclusive).
pub const BASE_PRICE_MIN: f64 = 0.15;

/// Upper bound of the base price (EUR/kWh, exclusive).
pub const BASE_PRICE_MAX: f64 = 0.25;

/// Flat addition applied at [`PEAK_HOURS`] (EUR/kWh).
pub const PEAK_SURCHARGE: f64 = 0.15;

/// Hours of day that carry the peak surcharge.
pub const PEAK_HOURS: [usize; 5] = [7, 8, 17, 18, 19];

/// Hourly electricity prices for one day, indexed by hour of day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries([f64; HOURS_PER_DAY]);

impl PriceSeries {
    /// Generate the seeded price series.
    pub fn generate() -> Self {
        Self::with_seed(PRICE_SEED)
    }

    /// Generate a price series from an explicit seed.
    ///
    /// Only [`PriceSeries::generate`] is used by the engine; other seeds exist for tests.
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut prices = [0.0; HOURS_PER_DAY];
        for price in prices.iter_mut() {
            *price = rng.gen_range(BASE_PRICE_MIN..BASE_PRICE_MAX);
        }
        for hour in PEAK_HOURS {
            prices[hour] += PEAK_SURCHARGE;
        }
        Self(prices)
    }

    pub fn is_peak_hour(hour: usize) -> bool {
        PEAK_HOURS.contains(&hour)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        HOURS_PER_DAY
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Mean price over the day.
    pub fn average(&self) -> f64 {
        self.0.iter().sum::<f64>() / HOURS_PER_DAY as f64
    }
}

impl Index<usize> for PriceSeries {
    type Output = f64;

    fn index(&self, hour: usize) -> &f64 {
        &self.0[hour]
    }
}
