//! Application state: the component structs built once at startup

use std::sync::Arc;

use crate::auth::JwtService;
use crate::booking::{BookingManager, RateEstimator};
use crate::config::Config;
use crate::db::DbService;
use crate::guides::GuideService;
use crate::packages::PackageService;
use crate::payment::{PaymentGateway, SettlementService};

#[derive(Clone)]
pub struct AppState {
    pub db: DbService,
    pub jwt: JwtService,
    pub bookings: BookingManager,
    pub settlement: SettlementService,
    pub guides: GuideService,
    pub packages: PackageService,
}

impl AppState {
    pub fn new(config: &Config, db: DbService, gateway: Arc<dyn PaymentGateway>) -> Self {
        let pool = db.pool.clone();
        let estimator = RateEstimator::new(pool.clone(), config.fallback_hourly_rate);
        Self {
            jwt: JwtService::new(&config.jwt_secret),
            bookings: BookingManager::new(pool.clone(), estimator),
            settlement: SettlementService::new(
                pool.clone(),
                gateway,
                config.payment_currency.clone(),
                config.razorpay_key_id.clone(),
            ),
            guides: GuideService::new(pool.clone()),
            packages: PackageService::new(pool),
            db,
        }
    }
}
