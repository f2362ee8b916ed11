//! Tests for the top-level `CoreError` aggregate.

use super::*;

#[test]
fn from_conversions_round_trip_kind() {
    let e: CoreError = UnauthorizedService::new("https://evil.example").into();
    assert!(e.is_unauthorized_service());

    let e: CoreError = AuthenticationFailure::no_supporting_handler("x509").into();
    assert!(e.is_authentication());

    let e: CoreError = AccessValidationFailure::TokenUsed.into();
    assert!(e.is_access());

    let e: CoreError = ConfigurationError::new("no factory").into();
    assert!(e.is_system());

    let e: CoreError = StorageFailure::new("unavailable").into();
    assert!(e.is_system());
}

#[test]
fn display_delegates_to_inner() {
    let e: CoreError = NotFoundSession::new("TGT-1").into();
    assert_eq!(e.to_string(), "session 'TGT-1' not found");
}
