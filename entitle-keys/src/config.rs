//! Service configuration.

use serde::{Deserialize, Serialize};

/// Default route of the license-keys collection on the secrets manager.
pub const SECRETS_MANAGER_LICENSE_KEYS_ROUTE: &str =
    "https://secrets.activepieces.com/license-keys";

/// Configuration for [`crate::LicenseKeysService`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseKeysConfig {
    /// Base URL of the license-keys collection on the secrets manager.
    pub secrets_manager_route: String,
}

impl Default for LicenseKeysConfig {
    fn default() -> Self {
        Self {
            secrets_manager_route: SECRETS_MANAGER_LICENSE_KEYS_ROUTE.to_string(),
        }
    }
}
