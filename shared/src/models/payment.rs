//! Payment order model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Gateway order created for a booking, handed to the client checkout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentOrder {
    pub razorpay_order_id: String,
    /// Guide booking or package booking id
    pub booking_id: i64,
    /// Public key id the checkout widget needs
    pub razorpay_key_id: String,
    pub amount: Decimal,
    /// Amount as sent to the gateway (paise)
    pub amount_minor: i64,
    pub currency: String,
}
