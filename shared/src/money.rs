//! Rupee arithmetic
//!
//! Amounts travel as `f64` on the wire and in the models. Anything that adds
//! them up goes through `Decimal` and converts back at the end.

use rust_decimal::prelude::*;

/// Paise precision
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Exact sum of rupee amounts
pub fn sum(amounts: impl IntoIterator<Item = f64>) -> Decimal {
    amounts.into_iter().map(to_decimal).sum()
}
