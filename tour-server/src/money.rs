//! Money helpers
//!
//! Amounts travel as `Decimal` with 2 decimal places and are stored as
//! integer minor units (paise).

use rust_decimal::prelude::*;

/// 2 decimal places, half-up
const DECIMAL_PLACES: u32 = 2;

/// Round a monetary value to 2 decimal places, half-up
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert to minor units: multiply by 100 and truncate toward zero.
///
/// Returns `None` if the result does not fit in an `i64`.
pub fn to_minor_units(amount: Decimal) -> Option<i64> {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|minor| minor.trunc().to_i64())
}

/// Inverse of [`to_minor_units`] for values read back from storage
pub fn from_minor_units(minor: i64) -> Decimal {
    Decimal::new(minor, DECIMAL_PLACES)
}
