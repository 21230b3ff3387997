//! Payment gateway seam

use async_trait::async_trait;
use thiserror::Error;

/// Order as reported back by the gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayOrder {
    pub id: String,
    pub amount_minor: i64,
    pub currency: String,
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Gateway request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gateway rejected order (HTTP {status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("Malformed gateway response: {0}")]
    Malformed(String),
}

impl GatewayOrder {
    /// The gateway must echo back exactly what was requested
    pub fn ensure_matches(&self, amount_minor: i64, currency: &str) -> Result<(), GatewayError> {
        if self.amount_minor != amount_minor || !self.currency.eq_ignore_ascii_case(currency) {
            return Err(GatewayError::Malformed(format!(
                "order {} is for {} {}, requested {} {}",
                self.id, self.amount_minor, self.currency, amount_minor, currency
            )));
        }
        Ok(())
    }
}

/// Creates payment orders with an external provider.
///
/// Implementations make exactly one attempt per call; retry policy, if
/// any, belongs to the caller's caller.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_order(
        &self,
        amount_minor: i64,
        currency: &str,
        receipt: &str,
    ) -> Result<GatewayOrder, GatewayError>;
}
