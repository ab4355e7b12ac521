//! Integration tests for the booking mailto link

use portfolio::booking::BookingRequest;
use portfolio::config::DEFAULT_BOOKING_EMAIL;

#[test]
fn test_booking_uri_matches_expected_link() {
    let request = BookingRequest::from_fields([
        ("name", "Ana"),
        ("email", "a@b.com"),
        ("topic", "Consulting"),
        ("time", "Friday 10am"),
    ]);

    assert_eq!(
        request.mailto_uri(DEFAULT_BOOKING_EMAIL),
        "mailto:ehsanmohajer.fi@gmail.com?subject=Consulting%20session%20request&body=Name%3A%20Ana%0AEmail%3A%20a%40b.com%0ATopic%3A%20Consulting%0APreferred%20time%3A%20Friday%2010am"
    );
}

#[test]
fn test_field_order_in_form_does_not_matter() {
    let forward = BookingRequest::from_fields([("name", "Ana"), ("time", "Mon")]);
    let reversed = BookingRequest::from_fields([("time", "Mon"), ("name", "Ana")]);
    assert_eq!(forward, reversed);
}

#[test]
fn test_empty_form_still_produces_link() {
    let request = BookingRequest::from_fields(Vec::<(String, String)>::new());
    assert_eq!(
        request.mailto_uri("x@y.fi"),
        "mailto:x@y.fi?subject=Consulting%20session%20request&body=Name%3A%20%0AEmail%3A%20%0ATopic%3A%20%0APreferred%20time%3A%20"
    );
}

#[test]
fn test_reserved_characters_in_fields_are_escaped() {
    let request = BookingRequest::from_fields([("topic", "Q&A = 100%?")]);
    let uri = request.mailto_uri("x@y.fi");
    assert!(uri.contains("Topic%3A%20Q%26A%20%3D%20100%25%3F%0A"));
    // exactly one query separator and one parameter separator survive
    assert_eq!(uri.matches('?').count(), 1);
    assert_eq!(uri.matches('&').count(), 1);
}

#[test]
fn test_punctuation_marks_are_left_literal() {
    let request = BookingRequest::from_fields([("name", "O'Brien (CTO)!"), ("topic", "A*B~C")]);
    let uri = request.mailto_uri("x@y.fi");
    assert!(uri.contains("Name%3A%20O'Brien%20(CTO)!%0A"));
    assert!(uri.contains("Topic%3A%20A*B~C%0A"));
}
