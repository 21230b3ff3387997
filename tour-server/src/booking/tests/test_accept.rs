use super::*;

#[tokio::test]
async fn test_accept_reprices_with_guide_rate() {
    let (manager, pool) = create_test_manager().await;
    let traveler = add_traveler(&pool, "t@x.io").await;
    let booking = manager
        .create_booking(traveler, &booking_input("Pune", 2))
        .await
        .unwrap();
    assert_eq!(booking.total_amount, dec("1000.00"));

    let guide = add_guide(&pool, "g@x.io", "Pune", "300", VerificationStatus::Approved).await;
    let accepted = manager.accept_booking(guide, booking.id).await.unwrap();

    assert_eq!(accepted.status, BookingStatus::Confirmed);
    assert_eq!(accepted.guide_id, Some(guide));
    assert_eq!(accepted.guide_name.as_deref(), Some("Test Guide"));
    assert_eq!(accepted.total_amount, dec("600.00"));
}

#[tokio::test]
async fn test_accept_location_is_case_insensitive() {
    let (manager, pool) = create_test_manager().await;
    let traveler = add_traveler(&pool, "t@x.io").await;
    let guide = add_guide(&pool, "g@x.io", "new delhi", "250.50", VerificationStatus::Approved).await;
    let booking = manager
        .create_booking(traveler, &booking_input("New  Delhi", 3))
        .await
        .unwrap();

    let accepted = manager.accept_booking(guide, booking.id).await.unwrap();
    assert_eq!(accepted.total_amount, dec("751.50"));
}

#[tokio::test]
async fn test_accept_twice_is_conflict_and_does_not_mutate() {
    let (manager, pool) = create_test_manager().await;
    let traveler = add_traveler(&pool, "t@x.io").await;
    let first = add_guide(&pool, "a@x.io", "Pune", "300", VerificationStatus::Approved).await;
    let second = add_guide(&pool, "b@x.io", "Pune", "450", VerificationStatus::Approved).await;
    let booking = manager
        .create_booking(traveler, &booking_input("Pune", 2))
        .await
        .unwrap();

    let accepted = manager.accept_booking(first, booking.id).await.unwrap();

    for guide in [first, second] {
        let err = manager.accept_booking(guide, booking.id).await.unwrap_err();
        assert!(matches!(
            err,
            BookingError::NotPending {
                status: BookingStatus::Confirmed,
                ..
            }
        ));
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }

    let after = bookings::find_by_id(&pool, booking.id).await.unwrap().unwrap();
    assert_eq!(after, accepted);
}

#[tokio::test]
async fn test_accept_precondition_order() {
    let (manager, pool) = create_test_manager().await;
    let traveler = add_traveler(&pool, "t@x.io").await;
    let goa_guide = add_guide(&pool, "goa@x.io", "Goa", "300", VerificationStatus::Approved).await;
    let pune_guide = add_guide(&pool, "pune@x.io", "Pune", "300", VerificationStatus::Approved).await;
    let booking = manager
        .create_booking(traveler, &booking_input("Pune", 2))
        .await
        .unwrap();

    // (a) unknown guide wins over unknown booking
    let err = manager.accept_booking(12345, 67890).await.unwrap_err();
    assert!(matches!(err, BookingError::GuideNotFound(12345)));

    // a traveler id does not resolve to a guide
    let err = manager.accept_booking(traveler, booking.id).await.unwrap_err();
    assert!(matches!(err, BookingError::GuideNotFound(_)));

    // (b) unknown booking
    let err = manager.accept_booking(goa_guide, 67890).await.unwrap_err();
    assert!(matches!(err, BookingError::BookingNotFound(67890)));

    // (d) location mismatch while pending
    let err = manager.accept_booking(goa_guide, booking.id).await.unwrap_err();
    assert!(matches!(err, BookingError::LocationMismatch { .. }));
    assert_eq!(err.kind(), ErrorKind::Forbidden);

    // (c) not pending is reported before the location mismatch
    manager.accept_booking(pune_guide, booking.id).await.unwrap();
    let err = manager.accept_booking(goa_guide, booking.id).await.unwrap_err();
    assert!(matches!(err, BookingError::NotPending { .. }));
}

#[tokio::test]
async fn test_unapproved_guide_cannot_accept() {
    let (manager, pool) = create_test_manager().await;
    let traveler = add_traveler(&pool, "t@x.io").await;
    let guide = add_guide(&pool, "g@x.io", "Pune", "300", VerificationStatus::Pending).await;
    let booking = manager
        .create_booking(traveler, &booking_input("Pune", 2))
        .await
        .unwrap();

    let err = manager.accept_booking(guide, booking.id).await.unwrap_err();
    assert!(matches!(err, BookingError::GuideNotApproved(_)));
    assert_eq!(err.kind(), ErrorKind::Forbidden);

    let after = bookings::find_by_id(&pool, booking.id).await.unwrap().unwrap();
    assert_eq!(after.status, BookingStatus::Pending);
    assert_eq!(after.guide_id, None);
}

#[tokio::test]
async fn test_available_bookings_match_guide_location() {
    let (manager, pool) = create_test_manager().await;
    let traveler = add_traveler(&pool, "t@x.io").await;
    let guide = add_guide(&pool, "g@x.io", "Pune", "300", VerificationStatus::Approved).await;
    let other = add_guide(&pool, "o@x.io", "Pune", "300", VerificationStatus::Approved).await;

    let open = manager
        .create_booking(traveler, &booking_input("pune", 2))
        .await
        .unwrap();
    let taken = manager
        .create_booking(traveler, &booking_input("Pune", 2))
        .await
        .unwrap();
    manager
        .create_booking(traveler, &booking_input("Goa", 2))
        .await
        .unwrap();
    manager.accept_booking(other, taken.id).await.unwrap();

    let available = manager.available_bookings_for_guide(guide).await.unwrap();
    let ids: Vec<i64> = available.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![open.id]);

    let err = manager.available_bookings_for_guide(404).await.unwrap_err();
    assert!(matches!(err, BookingError::GuideNotFound(404)));

    let assigned = manager.bookings_for_guide(other).await.unwrap();
    assert_eq!(assigned.len(), 1);
    assert_eq!(assigned[0].id, taken.id);
    assert!(manager.bookings_for_guide(guide).await.unwrap().is_empty());
}
