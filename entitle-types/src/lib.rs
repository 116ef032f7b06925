//! Domain types for the Entitle license key service.
//!
//! This crate defines the wire-level types shared by the service and its
//! HTTP surface:
//! - Platform identifiers
//! - The license key record and its feature flags
//! - Plan names, team project limits and the platform plan update payload
//! - The trial request body
//!
//! All records serialize as camelCase JSON, matching what platform clients
//! already send and expect.

mod ids;
mod license;
mod plan;
pub mod timestamp;
mod trial;

pub use ids::PlatformId;
pub use license::{LicenseFeatures, LicenseKeyEntity};
pub use plan::{PlanName, PlatformPlanUpdate, TeamProjectsLimit};
pub use trial::CreateTrialLicenseKeyRequest;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid platform id: {0}")]
    InvalidPlatformId(String),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
