//! Booking lifecycle from request to settlement

mod common;

use common::{OrderCall, TestApp, booking_input};
use rust_decimal::Decimal;
use shared::error::ErrorKind;
use shared::models::{BookingStatus, PaymentStatus, VerificationStatus};
use std::str::FromStr;
use tour_server::SettlementError;
use tour_server::db::bookings;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[tokio::test]
async fn test_pune_booking_end_to_end() {
    let app = TestApp::new().await;
    let traveler = app.traveler("asha@x.io").await;

    // No guides in Pune yet: fallback 500/h
    let booking = app
        .state
        .bookings
        .create_booking(traveler, &booking_input("Pune", 2))
        .await
        .unwrap();
    assert_eq!(booking.total_amount, dec("1000.00"));
    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.guide_id, None);

    let guide = app.guide("ravi@x.io", "Pune", 300).await;
    let available = app.state.bookings.available_bookings_for_guide(guide).await.unwrap();
    assert_eq!(available.len(), 1);

    let accepted = app.state.bookings.accept_booking(guide, booking.id).await.unwrap();
    assert_eq!(accepted.total_amount, dec("600.00"));
    assert_eq!(accepted.status, BookingStatus::Confirmed);
    assert_eq!(accepted.guide_id, Some(guide));
    assert!(
        app.state
            .bookings
            .available_bookings_for_guide(guide)
            .await
            .unwrap()
            .is_empty()
    );

    let completed = app
        .state
        .bookings
        .complete_booking(traveler, booking.id)
        .await
        .unwrap();
    assert_eq!(completed.status, BookingStatus::Completed);

    let order = app
        .state
        .settlement
        .create_order_for_booking(booking.id, traveler)
        .await
        .unwrap();
    assert_eq!(order.amount_minor, 60000);
    assert_eq!(
        app.gateway.calls(),
        vec![OrderCall {
            amount_minor: 60000,
            currency: "INR".to_string(),
            receipt: format!("booking_{}", booking.id),
        }]
    );

    let settled = bookings::find_by_id(&app.pool, booking.id).await.unwrap().unwrap();
    assert_eq!(settled.payment_status, PaymentStatus::Paid);
    assert_eq!(settled.razorpay_order_id.as_deref(), Some("order_test_1"));
    assert_eq!(settled.status, BookingStatus::Completed);
}

#[tokio::test]
async fn test_estimate_uses_only_approved_guides_in_location() {
    let app = TestApp::new().await;
    let traveler = app.traveler("t@x.io").await;
    app.guide("a@x.io", "Mysuru", 100).await;
    app.guide("b@x.io", "MYSURU", 200).await;
    app.guide_with_status("c@x.io", "Mysuru", 1000, VerificationStatus::Pending)
        .await;

    let booking = app
        .state
        .bookings
        .create_booking(traveler, &booking_input("mysuru", 2))
        .await
        .unwrap();
    assert_eq!(booking.total_amount, dec("300.00"));
}

#[tokio::test]
async fn test_gateway_failure_is_provider_error_and_retry_succeeds() {
    let app = TestApp::new().await;
    let traveler = app.traveler("t@x.io").await;
    let guide = app.guide("g@x.io", "Agra", 250).await;
    let booking = app
        .state
        .bookings
        .create_booking(traveler, &booking_input("Agra", 3))
        .await
        .unwrap();
    app.state.bookings.accept_booking(guide, booking.id).await.unwrap();
    app.state.bookings.complete_booking(traveler, booking.id).await.unwrap();

    app.gateway.fail(true);
    let err = app
        .state
        .settlement
        .create_order_for_booking(booking.id, traveler)
        .await
        .unwrap_err();
    assert!(matches!(err, SettlementError::Provider(_)));
    assert_eq!(err.kind(), ErrorKind::Provider);

    let untouched = bookings::find_by_id(&app.pool, booking.id).await.unwrap().unwrap();
    assert_eq!(untouched.payment_status, PaymentStatus::Unpaid);
    assert_eq!(untouched.razorpay_order_id, None);

    // The caller may retry; exactly one gateway call per attempt
    app.gateway.fail(false);
    let order = app
        .state
        .settlement
        .create_order_for_booking(booking.id, traveler)
        .await
        .unwrap();
    assert_eq!(order.amount_minor, 75000);
    assert_eq!(app.gateway.calls().len(), 2);
}

#[tokio::test]
async fn test_settlement_precondition_order() {
    let app = TestApp::new().await;
    let owner = app.traveler("owner@x.io").await;
    let stranger = app.traveler("stranger@x.io").await;
    let guide = app.guide("g@x.io", "Pune", 300).await;
    let booking = app
        .state
        .bookings
        .create_booking(owner, &booking_input("Pune", 1))
        .await
        .unwrap();
    let settlement = &app.state.settlement;

    let err = settlement.create_order_for_booking(1, owner).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = settlement
        .create_order_for_booking(booking.id, stranger)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Forbidden);

    let err = settlement
        .create_order_for_booking(booking.id, owner)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);

    app.state.bookings.accept_booking(guide, booking.id).await.unwrap();
    app.state.bookings.complete_booking(owner, booking.id).await.unwrap();
    settlement.create_order_for_booking(booking.id, owner).await.unwrap();

    let err = settlement
        .create_order_for_booking(booking.id, owner)
        .await
        .unwrap_err();
    assert!(matches!(err, SettlementError::AlreadyPaid(_)));
    assert_eq!(app.gateway.calls().len(), 1);
}
