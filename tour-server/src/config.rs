//! Server configuration from environment variables

use std::str::FromStr;
use std::time::Duration;

use rust_decimal::Decimal;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database file
    pub database_path: String,
    pub http_port: u16,
    /// development | staging | production
    pub environment: String,
    /// HMAC secret for principal tokens
    pub jwt_secret: String,
    pub razorpay_key_id: String,
    pub razorpay_key_secret: String,
    pub razorpay_api_base: String,
    pub payment_currency: String,
    /// Hourly rate used when no approved guide serves a location
    pub fallback_hourly_rate: Decimal,
    /// Timeout of the single gateway attempt
    pub gateway_timeout: Duration,
    /// Enables daily-rolling file logs
    pub log_dir: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, BoxError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build from any variable source; `from_env` passes the process env
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, BoxError> {
        let environment = var("ENVIRONMENT").unwrap_or_else(|| "development".into());

        // Secrets must be set outside development
        let secret = |name: &str| -> Result<String, BoxError> {
            match var(name).filter(|v| !v.is_empty()) {
                Some(v) => Ok(v),
                None if environment == "development" => Ok(format!("dev-{name}-not-for-production")),
                None => Err(format!("{name} must be set in {environment} environment").into()),
            }
        };
        let or_default = |name: &str, default: &str| -> String {
            var(name)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.into())
        };

        let http_port = or_default("HTTP_PORT", "8080");
        let fallback = or_default("FALLBACK_HOURLY_RATE", "500.00");
        let timeout = or_default("GATEWAY_TIMEOUT_SECS", "10");

        let fallback_hourly_rate = Decimal::from_str(fallback.trim())
            .map_err(|e| format!("FALLBACK_HOURLY_RATE is not a decimal ({fallback}): {e}"))?;
        if fallback_hourly_rate <= Decimal::ZERO {
            return Err(format!("FALLBACK_HOURLY_RATE must be positive, got {fallback}").into());
        }

        Ok(Self {
            database_path: or_default("DATABASE_PATH", "data/tourverse.db"),
            http_port: http_port
                .trim()
                .parse()
                .map_err(|e| format!("HTTP_PORT is not a port number ({http_port}): {e}"))?,
            jwt_secret: secret("JWT_SECRET")?,
            razorpay_key_id: secret("RAZORPAY_KEY_ID")?,
            razorpay_key_secret: secret("RAZORPAY_KEY_SECRET")?,
            razorpay_api_base: or_default("RAZORPAY_API_BASE", "https://api.razorpay.com/v1"),
            payment_currency: or_default("PAYMENT_CURRENCY", "INR"),
            fallback_hourly_rate,
            gateway_timeout: Duration::from_secs(
                timeout
                    .trim()
                    .parse()
                    .map_err(|e| format!("GATEWAY_TIMEOUT_SECS is not a number ({timeout}): {e}"))?,
            ),
            log_dir: var("LOG_DIR").filter(|v| !v.is_empty()),
            environment,
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}
