//! Provisional pricing for bookings that have no guide yet

use rust_decimal::Decimal;
use sqlx::SqlitePool;

use super::error::BookingResult;
use crate::db::guides;
use crate::money::round_money;

/// Estimates a booking's price from the approved guides in its location
#[derive(Clone)]
pub struct RateEstimator {
    pool: SqlitePool,
    fallback_rate: Decimal,
}

impl RateEstimator {
    pub fn new(pool: SqlitePool, fallback_rate: Decimal) -> Self {
        Self {
            pool,
            fallback_rate,
        }
    }

    /// Average approved rate in `location_key` x `hours`, or the fallback rate x `hours`
    pub async fn estimate(&self, location_key: &str, hours: i32) -> BookingResult<Decimal> {
        let guides = guides::list_approved_by_location(&self.pool, location_key).await?;
        let rates: Vec<Decimal> = guides.iter().map(|g| g.rate_per_hour).collect();
        let estimate = estimate_total(&rates, hours, self.fallback_rate);
        tracing::debug!(
            location = %location_key,
            hours,
            guides = rates.len(),
            fallback = rates.is_empty(),
            %estimate,
            "Booking estimate computed"
        );
        Ok(estimate)
    }
}

/// Mean hourly rate rounded half-up to 2 places, times `hours`
pub fn estimate_total(rates: &[Decimal], hours: i32, fallback_rate: Decimal) -> Decimal {
    let hourly = if rates.is_empty() {
        fallback_rate
    } else {
        let sum: Decimal = rates.iter().copied().sum();
        round_money(sum / Decimal::from(rates.len()))
    };
    round_money(hourly * Decimal::from(hours))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_average_of_guides_times_hours() {
        let total = estimate_total(&[dec("100"), dec("200")], 2, dec("500.00"));
        assert_eq!(total, dec("300.00"));
    }

    #[test]
    fn test_fallback_when_no_guides() {
        assert_eq!(estimate_total(&[], 3, dec("500.00")), dec("1500.00"));
        assert_eq!(estimate_total(&[], 2, dec("500.00")), dec("1000.00"));
    }

    #[test]
    fn test_average_rounds_half_up_before_multiplying() {
        // 100.005 rounds to 100.01, so 3h is 300.03 rather than 300.015
        let total = estimate_total(&[dec("100.00"), dec("100.01")], 3, dec("500.00"));
        assert_eq!(total, dec("300.03"));

        // 1000 / 3 = 333.333.. -> 333.33
        let total = estimate_total(&[dec("100"), dec("400"), dec("500")], 1, dec("500.00"));
        assert_eq!(total, dec("333.33"));
    }

    #[test]
    fn test_zero_hours_is_zero() {
        assert_eq!(estimate_total(&[dec("250")], 0, dec("500")), Decimal::ZERO);
    }

    #[test]
    fn test_single_guide_rate() {
        let total = estimate_total(&[dec("275.50")], 4, dec("500.00"));
        assert_eq!(total, dec("1102.00"));
        assert_eq!(total.scale(), 2);
    }
}
