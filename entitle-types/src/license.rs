//! The license key record and its feature flags.

use crate::timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Feature-enablement flags carried by a license key.
///
/// Field names on the wire are camelCase (`ssoEnabled`, `mcpsEnabled`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseFeatures {
    pub sso_enabled: bool,
    pub environments_enabled: bool,
    /// Whether the "powered by" badge is shown. Inverted relative to the
    /// other flags: paid tiers turn it off.
    pub show_powered_by: bool,
    pub embedding_enabled: bool,
    pub audit_log_enabled: bool,
    pub custom_appearance_enabled: bool,
    pub manage_projects_enabled: bool,
    pub manage_pieces_enabled: bool,
    pub manage_templates_enabled: bool,
    pub api_keys_enabled: bool,
    pub custom_domains_enabled: bool,
    pub project_roles_enabled: bool,
    pub analytics_enabled: bool,
    pub global_connections_enabled: bool,
    pub custom_roles_enabled: bool,
    pub agents_enabled: bool,
    pub tables_enabled: bool,
    pub todos_enabled: bool,
    pub mcps_enabled: bool,
}

impl LicenseFeatures {
    /// Every capability on and the "powered by" badge hidden.
    #[must_use]
    pub const fn all_enabled() -> Self {
        Self {
            sso_enabled: true,
            environments_enabled: true,
            show_powered_by: false,
            embedding_enabled: true,
            audit_log_enabled: true,
            custom_appearance_enabled: true,
            manage_projects_enabled: true,
            manage_pieces_enabled: true,
            manage_templates_enabled: true,
            api_keys_enabled: true,
            custom_domains_enabled: true,
            project_roles_enabled: true,
            analytics_enabled: true,
            global_connections_enabled: true,
            custom_roles_enabled: true,
            agents_enabled: true,
            tables_enabled: true,
            todos_enabled: true,
            mcps_enabled: true,
        }
    }
}

/// A license key record: identity, lifetime and entitlements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseKeyEntity {
    /// Record ID.
    pub id: String,
    /// Email of the license holder.
    pub email: String,
    /// The license key string handed to the customer.
    pub key: String,
    /// When the record was created.
    #[serde(with = "timestamp::millis")]
    pub created_at: DateTime<Utc>,
    /// When the key was first activated on a platform.
    #[serde(with = "timestamp::millis_option", default)]
    pub activated_at: Option<DateTime<Utc>>,
    /// When the license stops being valid.
    #[serde(with = "timestamp::millis")]
    pub expires_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_trial: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    /// Entitlements, flattened into the record on the wire.
    #[serde(flatten)]
    pub features: LicenseFeatures,
}
