#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{Days, NaiveTime, Utc};
use rust_decimal::Decimal;
use shared::models::{BookingCreate, Role, VerificationStatus};
use sqlx::SqlitePool;
use tempfile::TempDir;
use tour_server::db::users::{NewGuide, insert_guide, insert_traveler};
use tour_server::payment::{GatewayError, GatewayOrder, PaymentGateway};
use tour_server::{AppState, Config, DbService};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderCall {
    pub amount_minor: i64,
    pub currency: String,
    pub receipt: String,
}

/// Records gateway calls; can be switched to fail
#[derive(Default)]
pub struct FakeGateway {
    calls: Mutex<Vec<OrderCall>>,
    failing: AtomicBool,
}

impl FakeGateway {
    pub fn calls(&self) -> Vec<OrderCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn fail(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl PaymentGateway for FakeGateway {
    async fn create_order(
        &self,
        amount_minor: i64,
        currency: &str,
        receipt: &str,
    ) -> Result<GatewayOrder, GatewayError> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(OrderCall {
            amount_minor,
            currency: currency.to_string(),
            receipt: receipt.to_string(),
        });
        if self.failing.load(Ordering::SeqCst) {
            return Err(GatewayError::Rejected {
                status: 500,
                body: "gateway down".to_string(),
            });
        }
        Ok(GatewayOrder {
            id: format!("order_test_{}", calls.len()),
            amount_minor,
            currency: currency.to_string(),
        })
    }
}

pub struct TestApp {
    // Keeps the database directory alive for the test's duration
    _dir: TempDir,
    pub pool: SqlitePool,
    pub state: AppState,
    pub gateway: Arc<FakeGateway>,
}

impl TestApp {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tourverse.db");
        let db = DbService::new(path.to_str().unwrap()).await.unwrap();
        let config = Config::from_vars(|_| None).unwrap();
        let gateway = Arc::new(FakeGateway::default());
        let state = AppState::new(&config, db.clone(), gateway.clone());
        Self {
            _dir: dir,
            pool: db.pool,
            state,
            gateway,
        }
    }

    pub async fn traveler(&self, email: &str) -> i64 {
        insert_traveler(&self.pool, "Traveler", email).await.unwrap()
    }

    pub async fn guide(&self, email: &str, location: &str, rate: i64) -> i64 {
        self.guide_with_status(email, location, rate, VerificationStatus::Approved)
            .await
    }

    pub async fn guide_with_status(
        &self,
        email: &str,
        location: &str,
        rate: i64,
        status: VerificationStatus,
    ) -> i64 {
        insert_guide(
            &self.pool,
            &NewGuide {
                name: "Guide",
                email,
                location,
                rate_per_hour: Decimal::from(rate),
                languages: &["English".to_string(), "Hindi".to_string()],
                bio: Some("Local historian"),
                verification_status: status,
            },
        )
        .await
        .unwrap()
    }

    pub fn token(&self, user_id: i64, role: Role) -> String {
        self.state
            .jwt
            .generate_token(user_id, role, chrono::Duration::hours(1))
            .unwrap()
    }
}

pub fn booking_input(location: &str, hours: i32) -> BookingCreate {
    BookingCreate {
        tour_date: Utc::now().date_naive() + Days::new(5),
        tour_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        hours,
        location: location.to_string(),
    }
}
