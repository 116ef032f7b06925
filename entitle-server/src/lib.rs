//! HTTP API for the license key service.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use entitle_keys::{LicenseError, LicenseKeysService};
use entitle_types::{CreateTrialLicenseKeyRequest, LicenseKeyEntity, PlatformId, PlatformPlanUpdate};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Body of `POST /v1/license-keys/activate`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivateRequest {
    pub key: String,
    #[serde(default)]
    pub platform_id: Option<PlatformId>,
}

/// Body of `POST /v1/license-keys/verify`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub platform_id: PlatformId,
    #[serde(default)]
    pub license: Option<String>,
}

/// Body of `POST /v1/license-keys/extend-trial`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtendTrialRequest {
    pub email: String,
    pub days: u32,
}

/// JSON error body.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

/// Error returned by handlers.
#[derive(Debug)]
pub enum ApiError {
    License(LicenseError),
    NotFound(String),
}

impl From<LicenseError> for ApiError {
    fn from(e: LicenseError) -> Self {
        Self::License(e)
    }
}

impl From<entitle_types::Error> for ApiError {
    fn from(e: entitle_types::Error) -> Self {
        Self::License(e.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(what) => (StatusCode::NOT_FOUND, format!("not found: {what}")),
            Self::License(e) => {
                let status = match &e {
                    LicenseError::Types(_) => StatusCode::BAD_REQUEST,
                    LicenseError::SecretsManager(_) => StatusCode::BAD_GATEWAY,
                    LicenseError::Storage(_) | LicenseError::Serialization(_) => {
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                if status.is_server_error() {
                    warn!("request failed: {e}");
                }
                (status, e.to_string())
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

type ApiResult<T> = Result<T, ApiError>;

async fn request_trial_handler(
    State(service): State<LicenseKeysService>,
    Json(request): Json<CreateTrialLicenseKeyRequest>,
) -> ApiResult<Json<LicenseKeyEntity>> {
    Ok(Json(service.request_trial(&request).await?))
}

async fn activate_handler(
    State(service): State<LicenseKeysService>,
    Json(request): Json<ActivateRequest>,
) -> ApiResult<StatusCode> {
    service
        .mark_as_activated(&request.key, request.platform_id.as_ref())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_key_handler(
    State(service): State<LicenseKeysService>,
    Path(key): Path<String>,
) -> ApiResult<Json<LicenseKeyEntity>> {
    service
        .get_key(Some(key.as_str()))
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("license key".to_string()))
}

async fn verify_handler(
    State(service): State<LicenseKeysService>,
    Json(request): Json<VerifyRequest>,
) -> ApiResult<Json<LicenseKeyEntity>> {
    service
        .verify_key_or_return_null(&request.platform_id, request.license.as_deref())
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("valid license key".to_string()))
}

async fn extend_trial_handler(
    State(service): State<LicenseKeysService>,
    Json(request): Json<ExtendTrialRequest>,
) -> ApiResult<StatusCode> {
    service.extend_trial(&request.email, request.days).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn downgrade_handler(
    State(service): State<LicenseKeysService>,
    Path(platform_id): Path<String>,
) -> ApiResult<StatusCode> {
    let platform_id = PlatformId::parse(&platform_id)?;
    service.downgrade_to_free_plan(&platform_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn apply_limits_handler(
    State(service): State<LicenseKeysService>,
    Path(platform_id): Path<String>,
    Json(key): Json<LicenseKeyEntity>,
) -> ApiResult<StatusCode> {
    let platform_id = PlatformId::parse(&platform_id)?;
    service.apply_limits(&platform_id, &key).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn platform_plan_handler(
    State(service): State<LicenseKeysService>,
    Path(platform_id): Path<String>,
) -> ApiResult<Json<PlatformPlanUpdate>> {
    let platform_id = PlatformId::parse(&platform_id)?;
    service
        .platform_plan(&platform_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("plan for platform {platform_id}")))
}

/// Build the HTTP API router around the given service.
pub fn build_router(service: LicenseKeysService) -> Router {
    Router::new()
        .route("/v1/license-keys/trial", post(request_trial_handler))
        .route("/v1/license-keys/activate", post(activate_handler))
        .route("/v1/license-keys/verify", post(verify_handler))
        .route("/v1/license-keys/extend-trial", post(extend_trial_handler))
        .route("/v1/license-keys/{key}", get(get_key_handler))
        .route("/v1/platforms/{platform_id}/downgrade", post(downgrade_handler))
        .route("/v1/platforms/{platform_id}/apply-limits", post(apply_limits_handler))
        .route("/v1/platforms/{platform_id}/plan", get(platform_plan_handler))
        .with_state(service)
}
