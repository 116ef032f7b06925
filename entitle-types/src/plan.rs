//! Platform plans and the limits written onto them.

use crate::license::LicenseKeyEntity;
use crate::timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the plan a platform is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanName {
    Free,
    Plus,
    Business,
    Enterprise,
}

impl PlanName {
    /// Wire name of the plan.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Plus => "plus",
            Self::Business => "business",
            Self::Enterprise => "enterprise",
        }
    }
}

impl fmt::Display for PlanName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How many team projects a platform may create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeamProjectsLimit {
    None,
    One,
    Unlimited,
}

/// The plan record written onto a platform when limits are applied.
///
/// Quota and billing fields are `None` when the plan carries no limit; they
/// serialize as `null` so a write clears whatever was there before.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformPlanUpdate {
    pub plan: PlanName,
    pub license_key: String,
    #[serde(with = "timestamp::millis")]
    pub license_expires_at: DateTime<Utc>,
    pub sso_enabled: bool,
    pub environments_enabled: bool,
    pub show_powered_by: bool,
    pub embedding_enabled: bool,
    pub audit_log_enabled: bool,
    pub custom_appearance_enabled: bool,
    pub global_connections_enabled: bool,
    pub custom_roles_enabled: bool,
    pub team_projects_limit: TeamProjectsLimit,
    pub manage_pieces_enabled: bool,
    pub mcps_enabled: bool,
    pub todos_enabled: bool,
    pub tables_enabled: bool,
    pub active_flows_limit: Option<u64>,
    pub projects_limit: Option<u64>,
    pub stripe_subscription_id: Option<String>,
    pub stripe_subscription_status: Option<String>,
    pub agents_enabled: bool,
    pub manage_templates_enabled: bool,
    pub api_keys_enabled: bool,
    pub custom_domains_enabled: bool,
    pub project_roles_enabled: bool,
    pub analytics_enabled: bool,
}

impl PlatformPlanUpdate {
    /// Builds an enterprise plan from a license record: unlimited team
    /// projects, no quotas, no subscription, flags copied from the record.
    #[must_use]
    pub fn enterprise(license: &LicenseKeyEntity) -> Self {
        let f = &license.features;
        Self {
            plan: PlanName::Enterprise,
            license_key: license.key.clone(),
            license_expires_at: license.expires_at,
            sso_enabled: f.sso_enabled,
            environments_enabled: f.environments_enabled,
            show_powered_by: f.show_powered_by,
            embedding_enabled: f.embedding_enabled,
            audit_log_enabled: f.audit_log_enabled,
            custom_appearance_enabled: f.custom_appearance_enabled,
            global_connections_enabled: f.global_connections_enabled,
            custom_roles_enabled: f.custom_roles_enabled,
            team_projects_limit: TeamProjectsLimit::Unlimited,
            manage_pieces_enabled: f.manage_pieces_enabled,
            mcps_enabled: f.mcps_enabled,
            todos_enabled: f.todos_enabled,
            tables_enabled: f.tables_enabled,
            active_flows_limit: None,
            projects_limit: None,
            stripe_subscription_id: None,
            stripe_subscription_status: None,
            agents_enabled: f.agents_enabled,
            manage_templates_enabled: f.manage_templates_enabled,
            api_keys_enabled: f.api_keys_enabled,
            custom_domains_enabled: f.custom_domains_enabled,
            project_roles_enabled: f.project_roles_enabled,
            analytics_enabled: f.analytics_enabled,
        }
    }
}
