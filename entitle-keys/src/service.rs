//! The license keys service.
//!
//! Every platform is entitled to the lifetime enterprise license, so lookups
//! never consult a remote secrets manager and never fail. The only operation
//! with a side effect is [`LicenseKeysService::apply_limits`], which writes
//! the enterprise plan onto the platform.

use crate::config::LicenseKeysConfig;
use crate::error::{LicenseError, LicenseResult};
use crate::lifetime::lifetime_license;
use crate::store::PlatformPlanStore;
use entitle_types::{CreateTrialLicenseKeyRequest, LicenseKeyEntity, PlatformId, PlatformPlanUpdate};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Answers license key queries and applies plan limits to platforms.
#[derive(Clone)]
pub struct LicenseKeysService {
    store: Arc<dyn PlatformPlanStore>,
    config: LicenseKeysConfig,
}

impl LicenseKeysService {
    /// Creates a service writing plans to `store`, with default configuration.
    pub fn new(store: Arc<dyn PlatformPlanStore>) -> Self {
        Self::with_config(store, LicenseKeysConfig::default())
    }

    /// Creates a service with explicit configuration.
    pub fn with_config(store: Arc<dyn PlatformPlanStore>, config: LicenseKeysConfig) -> Self {
        Self { store, config }
    }

    /// Returns the service configuration.
    #[must_use]
    pub fn config(&self) -> &LicenseKeysConfig {
        &self.config
    }

    /// Handles a trial request. The caller always receives the lifetime license.
    pub async fn request_trial(
        &self,
        request: &CreateTrialLicenseKeyRequest,
    ) -> LicenseResult<LicenseKeyEntity> {
        debug!(email = %request.email, "trial requested");
        Ok(lifetime_license().clone())
    }

    /// Records that a key was activated. Nothing to record for a lifetime key.
    pub async fn mark_as_activated(
        &self,
        key: &str,
        platform_id: Option<&PlatformId>,
    ) -> LicenseResult<()> {
        debug!(key, platform_id = ?platform_id.map(PlatformId::as_str), "activation ignored");
        Ok(())
    }

    /// Looks up a license key. Any key, or none, resolves to the lifetime license.
    pub async fn get_key(&self, license: Option<&str>) -> LicenseResult<Option<LicenseKeyEntity>> {
        debug!(license = ?license, "key lookup");
        Ok(Some(lifetime_license().clone()))
    }

    /// Verifies a platform's license key.
    ///
    /// Returns `None` for keys that fail verification. The lifetime license
    /// never expires, so in practice this always returns it.
    pub async fn verify_key_or_return_null(
        &self,
        platform_id: &PlatformId,
        license: Option<&str>,
    ) -> LicenseResult<Option<LicenseKeyEntity>> {
        debug!(%platform_id, license = ?license, "key verification");
        Ok(Some(lifetime_license().clone()))
    }

    /// Extends a trial. Lifetime licenses have nothing to extend.
    pub async fn extend_trial(&self, email: &str, days: u32) -> LicenseResult<()> {
        debug!(email, days, "trial extension ignored");
        Ok(())
    }

    /// Downgrades a platform to the free plan. Platforms are never downgraded.
    pub async fn downgrade_to_free_plan(&self, platform_id: &PlatformId) -> LicenseResult<()> {
        debug!(%platform_id, "downgrade ignored");
        Ok(())
    }

    /// Writes the enterprise plan onto a platform.
    ///
    /// The plan comes from the lifetime license; `key` does not influence
    /// what is written.
    pub async fn apply_limits(
        &self,
        platform_id: &PlatformId,
        key: &LicenseKeyEntity,
    ) -> LicenseResult<()> {
        debug!(%platform_id, key = %key.key, "applying limits");
        let update = PlatformPlanUpdate::enterprise(lifetime_license());
        let plan = update.plan;
        self.store.update(platform_id, update).await?;
        info!(
            %platform_id,
            %plan,
            backend = self.store.backend_name(),
            "applied plan limits"
        );
        Ok(())
    }

    /// Returns the plan last written for a platform.
    pub async fn platform_plan(
        &self,
        platform_id: &PlatformId,
    ) -> LicenseResult<Option<PlatformPlanUpdate>> {
        self.store.get(platform_id).await
    }

    /// Logs and wraps an unexpected response from the secrets manager.
    pub fn unexpected_secrets_manager_error(&self, message: impl Into<String>) -> LicenseError {
        let message = message.into();
        error!(
            route = %self.config.secrets_manager_route,
            "Unexpected error from secret manager: {message}"
        );
        LicenseError::SecretsManager(message)
    }
}

impl std::fmt::Debug for LicenseKeysService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LicenseKeysService")
            .field("store", &self.store.backend_name())
            .field("config", &self.config)
            .finish()
    }
}
