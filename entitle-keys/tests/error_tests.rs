use entitle_keys::LicenseError;
use entitle_types::PlatformId;

#[test]
fn error_display_secrets_manager() {
    let err = LicenseError::SecretsManager("timeout".into());
    assert!(format!("{err}").contains("secrets manager"));
}

#[test]
fn error_display_storage() {
    let err = LicenseError::Storage("disk full".into());
    let msg = format!("{err}");
    assert!(msg.contains("storage"));
    assert!(msg.contains("disk full"));
}

#[test]
fn error_from_types_error() {
    let types_err = PlatformId::parse("").unwrap_err();
    let err: LicenseError = types_err.into();
    assert!(matches!(err, LicenseError::Types(_)));
    assert!(format!("{err}").contains("invalid platform id"));
}

#[test]
fn error_from_serde_json() {
    let serde_err: Result<serde_json::Value, _> = serde_json::from_str("not json");
    let err: LicenseError = serde_err.unwrap_err().into();
    assert!(format!("{err}").contains("serialization"));
}

#[test]
fn error_from_rusqlite() {
    let err: LicenseError = rusqlite::Error::InvalidQuery.into();
    assert!(matches!(err, LicenseError::Storage(_)));
}
