use axum::http::StatusCode;
use axum::response::IntoResponse;
use entitle_keys::LicenseError;
use entitle_server::ApiError;
use entitle_types::PlatformId;

fn status_of(err: ApiError) -> StatusCode {
    err.into_response().status()
}

#[test]
fn invalid_input_is_bad_request() {
    let err = PlatformId::parse("").unwrap_err();
    assert_eq!(status_of(err.into()), StatusCode::BAD_REQUEST);
}

#[test]
fn storage_failure_is_internal_error() {
    let err = LicenseError::Storage("disk full".into());
    assert_eq!(status_of(err.into()), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn secrets_manager_failure_is_bad_gateway() {
    let err = LicenseError::SecretsManager("timeout".into());
    assert_eq!(status_of(err.into()), StatusCode::BAD_GATEWAY);
}

#[test]
fn not_found() {
    assert_eq!(status_of(ApiError::NotFound("x".into())), StatusCode::NOT_FOUND);
}
