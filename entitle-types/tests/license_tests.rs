use chrono::{Duration, TimeZone, Utc};
use entitle_types::timestamp;
use entitle_types::{LicenseFeatures, LicenseKeyEntity};
use pretty_assertions::assert_eq;

fn sample_record() -> LicenseKeyEntity {
    LicenseKeyEntity {
        id: "lk_1".to_string(),
        email: "ops@example.com".to_string(),
        key: "key-123".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        activated_at: None,
        expires_at: timestamp::parse("2099-12-31T23:59:59.999Z").unwrap(),
        is_trial: None,
        customer_name: None,
        features: LicenseFeatures::all_enabled(),
    }
}

// ── LicenseFeatures ──────────────────────────────────────────────

#[test]
fn all_enabled_hides_powered_by() {
    let f = LicenseFeatures::all_enabled();
    assert!(!f.show_powered_by);
    assert!(f.sso_enabled);
    assert!(f.mcps_enabled);
    assert!(f.manage_projects_enabled);
}

// ── LicenseKeyEntity ─────────────────────────────────────────────

#[test]
fn record_serializes_camel_case_and_flattened() {
    let json = serde_json::to_value(sample_record()).unwrap();
    let obj = json.as_object().unwrap();

    assert_eq!(obj["id"], "lk_1");
    assert_eq!(obj["expiresAt"], "2099-12-31T23:59:59.999Z");
    assert_eq!(obj["createdAt"], "2024-05-01T12:00:00.000Z");
    assert!(obj["activatedAt"].is_null());
    assert_eq!(obj["ssoEnabled"], true);
    assert_eq!(obj["showPoweredBy"], false);
    assert_eq!(obj["mcpsEnabled"], true);
    assert!(!obj.contains_key("features"));
    assert!(!obj.contains_key("isTrial"));
    assert!(!obj.contains_key("customerName"));
}

#[test]
fn record_deserializes_from_platform_json() {
    let json = r#"{
        "id": "lk_1",
        "email": "ops@example.com",
        "key": "key-123",
        "createdAt": "2024-05-01T12:00:00.000Z",
        "activatedAt": null,
        "expiresAt": "2099-12-31T23:59:59.999Z",
        "ssoEnabled": true,
        "environmentsEnabled": true,
        "showPoweredBy": false,
        "embeddingEnabled": true,
        "auditLogEnabled": true,
        "customAppearanceEnabled": true,
        "manageProjectsEnabled": true,
        "managePiecesEnabled": true,
        "manageTemplatesEnabled": true,
        "apiKeysEnabled": true,
        "customDomainsEnabled": true,
        "projectRolesEnabled": true,
        "analyticsEnabled": true,
        "globalConnectionsEnabled": true,
        "customRolesEnabled": true,
        "agentsEnabled": true,
        "tablesEnabled": true,
        "todosEnabled": true,
        "mcpsEnabled": true
    }"#;
    let record: LicenseKeyEntity = serde_json::from_str(json).unwrap();
    assert_eq!(record, sample_record());
}

#[test]
fn record_keeps_optional_trial_fields() {
    let mut record = sample_record();
    record.is_trial = Some(true);
    record.customer_name = Some("Acme".to_string());

    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains(r#""isTrial":true"#));
    assert!(json.contains(r#""customerName":"Acme""#));

    let back: LicenseKeyEntity = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}

#[test]
fn record_rejects_bad_timestamp() {
    let mut json = serde_json::to_value(sample_record()).unwrap();
    json["expiresAt"] = "next tuesday".into();
    let err = serde_json::from_value::<LicenseKeyEntity>(json).unwrap_err();
    assert!(err.to_string().contains("invalid timestamp"));
}

// ── timestamp ────────────────────────────────────────────────────

#[test]
fn format_millis_truncates_sub_millisecond_digits() {
    let ts = Utc.with_ymd_and_hms(2030, 1, 2, 3, 4, 5).unwrap()
        + Duration::nanoseconds(123_456_789);
    assert_eq!(timestamp::format_millis(&ts), "2030-01-02T03:04:05.123Z");
}

#[test]
fn parse_accepts_offsets() {
    let ts = timestamp::parse("2030-01-02T05:04:05+02:00").unwrap();
    assert_eq!(timestamp::format_millis(&ts), "2030-01-02T03:04:05.000Z");
}

#[test]
fn parse_rejects_garbage() {
    assert!(timestamp::parse("2030-13-45").is_err());
}
