use super::*;
use crate::db::DbService;
use crate::db::users::{NewGuide, insert_guide, insert_traveler};
use chrono::{Days, NaiveTime};
use shared::error::ErrorKind;
use shared::models::{PaymentStatus, VerificationStatus};
use std::str::FromStr;

mod test_accept;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn create_test_manager() -> (BookingManager, SqlitePool) {
    let db = DbService::in_memory().await.unwrap();
    let estimator = RateEstimator::new(db.pool.clone(), dec("500.00"));
    (BookingManager::new(db.pool.clone(), estimator), db.pool)
}

async fn add_traveler(pool: &SqlitePool, email: &str) -> i64 {
    insert_traveler(pool, "Test Traveler", email).await.unwrap()
}

async fn add_guide(
    pool: &SqlitePool,
    email: &str,
    location: &str,
    rate: &str,
    status: VerificationStatus,
) -> i64 {
    insert_guide(
        pool,
        &NewGuide {
            name: "Test Guide",
            email,
            location,
            rate_per_hour: dec(rate),
            languages: &["English".to_string()],
            bio: None,
            verification_status: status,
        },
    )
    .await
    .unwrap()
}

fn booking_input(location: &str, hours: i32) -> BookingCreate {
    BookingCreate {
        tour_date: Utc::now().date_naive() + Days::new(7),
        tour_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        hours,
        location: location.to_string(),
    }
}
