//! Estimated GDP derivation.

use std::ops::RangeInclusive;

use rand::Rng;

/// Range the per-country GDP multiplier is drawn from.
pub const GDP_MULTIPLIER_RANGE: RangeInclusive<u32> = 1000..=2000;

/// Estimates GDP from population and exchange rate.
///
/// # Returns
/// - `None` - The exchange rate is unknown
/// - `Some(0.0)` - The population is zero
/// - `Some(population * multiplier / exchange_rate)` - Otherwise, with `multiplier` drawn
///   uniformly from [`GDP_MULTIPLIER_RANGE`]
///
/// The result differs between calls for the same inputs; pass a seeded generator for
/// repeatable output.
pub fn estimate_gdp<R: Rng + ?Sized>(
    population: i64,
    exchange_rate: Option<f64>,
    rng: &mut R,
) -> Option<f64> {
    let exchange_rate = exchange_rate?;

    if population == 0 {
        return Some(0.0);
    }

    let multiplier = rng.random_range(GDP_MULTIPLIER_RANGE);

    Some(population as f64 * f64::from(multiplier) / exchange_rate)
}
