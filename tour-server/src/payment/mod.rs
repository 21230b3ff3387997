//! Payment settlement
//!
//! Turns a payable booking into a gateway order. Every precondition is
//! checked before the gateway is called, the gateway gets exactly one
//! attempt, and the booking row is only written after the gateway has
//! returned an order for the requested amount and currency. A failed or
//! mismatched call leaves the booking untouched.

pub mod error;
pub mod gateway;
pub mod razorpay;

pub use error::{SettlementError, SettlementResult};
pub use gateway::{GatewayError, GatewayOrder, PaymentGateway};
pub use razorpay::RazorpayGateway;

use std::sync::Arc;

use shared::models::{BookingStatus, PackageBookingStatus, PaymentOrder, PaymentStatus};
use sqlx::SqlitePool;

use crate::db::{bookings, packages};
use crate::money::to_minor_units;

/// Creates gateway orders for guide bookings and package bookings
#[derive(Clone)]
pub struct SettlementService {
    pool: SqlitePool,
    gateway: Arc<dyn PaymentGateway>,
    currency: String,
    /// Public key id returned to the client checkout
    key_id: String,
}

impl SettlementService {
    pub fn new(
        pool: SqlitePool,
        gateway: Arc<dyn PaymentGateway>,
        currency: impl Into<String>,
        key_id: impl Into<String>,
    ) -> Self {
        Self {
            pool,
            gateway,
            currency: currency.into(),
            key_id: key_id.into(),
        }
    }

    /// Pay for a COMPLETED, UNPAID guide booking owned by `traveler_id`
    pub async fn create_order_for_booking(
        &self,
        booking_id: i64,
        traveler_id: i64,
    ) -> SettlementResult<PaymentOrder> {
        let booking = bookings::find_by_id(&self.pool, booking_id)
            .await?
            .ok_or(SettlementError::BookingNotFound(booking_id))?;

        if booking.traveler_id != traveler_id {
            tracing::warn!(booking_id, traveler_id, "Non-owner tried to pay for booking");
            return Err(SettlementError::NotOwner {
                booking_id,
                traveler_id,
            });
        }
        if booking.status != BookingStatus::Completed {
            return Err(SettlementError::NotPayable {
                booking_id,
                status: booking.status.to_string(),
            });
        }
        if booking.payment_status == PaymentStatus::Paid {
            return Err(SettlementError::AlreadyPaid(booking_id));
        }

        let amount_minor =
            to_minor_units(booking.total_amount).ok_or(SettlementError::AmountOutOfRange)?;
        let receipt = format!("booking_{booking_id}");
        let order = self
            .gateway
            .create_order(amount_minor, &self.currency, &receipt)
            .await?;
        order.ensure_matches(amount_minor, &self.currency)?;

        let changed = bookings::mark_paid(&self.pool, booking_id, &order.id).await?;
        if changed != 1 {
            // Someone else settled it between our read and our write
            tracing::warn!(
                booking_id,
                order_id = %order.id,
                "Booking settled concurrently, gateway order left unused"
            );
            return Err(SettlementError::AlreadyPaid(booking_id));
        }

        tracing::info!(
            booking_id,
            traveler_id,
            order_id = %order.id,
            amount_minor,
            "Payment order created for booking"
        );
        Ok(PaymentOrder {
            razorpay_order_id: order.id,
            booking_id,
            razorpay_key_id: self.key_id.clone(),
            amount: booking.total_amount,
            amount_minor,
            currency: self.currency.clone(),
        })
    }

    /// Pay for a PENDING_PAYMENT package booking; success confirms it
    pub async fn create_order_for_package_booking(
        &self,
        package_booking_id: i64,
        traveler_id: i64,
    ) -> SettlementResult<PaymentOrder> {
        let booking = packages::find_booking(&self.pool, package_booking_id)
            .await?
            .ok_or(SettlementError::PackageBookingNotFound(package_booking_id))?;

        if booking.traveler_id != traveler_id {
            tracing::warn!(
                package_booking_id,
                traveler_id,
                "Non-owner tried to pay for package booking"
            );
            return Err(SettlementError::NotOwner {
                booking_id: package_booking_id,
                traveler_id,
            });
        }
        match booking.status {
            PackageBookingStatus::PendingPayment => {}
            PackageBookingStatus::Confirmed => {
                return Err(SettlementError::PackageAlreadyConfirmed(package_booking_id));
            }
            PackageBookingStatus::Canceled => {
                return Err(SettlementError::NotPayable {
                    booking_id: package_booking_id,
                    status: "CANCELED".to_string(),
                });
            }
        }

        let amount_minor =
            to_minor_units(booking.total_amount).ok_or(SettlementError::AmountOutOfRange)?;
        let receipt = format!("package_{package_booking_id}");
        let order = self
            .gateway
            .create_order(amount_minor, &self.currency, &receipt)
            .await?;
        order.ensure_matches(amount_minor, &self.currency)?;

        let changed = packages::confirm_with_order(&self.pool, package_booking_id, &order.id).await?;
        if changed != 1 {
            tracing::warn!(
                package_booking_id,
                order_id = %order.id,
                "Package booking confirmed concurrently, gateway order left unused"
            );
            return Err(SettlementError::PackageAlreadyConfirmed(package_booking_id));
        }

        tracing::info!(
            package_booking_id,
            traveler_id,
            order_id = %order.id,
            amount_minor,
            "Payment order created for package booking"
        );
        Ok(PaymentOrder {
            razorpay_order_id: order.id,
            booking_id: package_booking_id,
            razorpay_key_id: self.key_id.clone(),
            amount: booking.total_amount,
            amount_minor,
            currency: self.currency.clone(),
        })
    }
}
