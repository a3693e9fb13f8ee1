//! Tests for the CLI error type.

use super::*;

#[test]
fn test_invalid_id_display_names_the_value() {
    let err = Error::InvalidId("abc".to_string());
    assert_eq!(err.to_string(), "Invalid webhook id: abc");
}

#[test]
fn test_auth_error_passes_through_transparently() {
    let err: Error = AuthError::AuthRequired.into();
    assert_eq!(err.to_string(), "Authentication required: no valid session");
}

#[test]
fn test_registry_not_found_passes_through_transparently() {
    let err: Error = RegistryError::NotFound.into();
    assert_eq!(err.to_string(), "Webhook not found");
}

#[test]
fn test_storage_error_passes_through_transparently() {
    let err: Error = StorageError::ReadFailed("broken".to_string()).into();
    assert!(err.to_string().contains("broken"));
}
