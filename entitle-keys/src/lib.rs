//! License key service for Entitle.
//!
//! Every platform runs on the lifetime enterprise license:
//! - Trial requests, key lookups and verification all answer with the same
//!   fixed, perpetual, fully-enabled record
//! - Activation, trial extension and downgrade are accepted and ignored
//! - Applying limits writes the enterprise plan onto the platform through a
//!   [`PlatformPlanStore`]
//!
//! The store is the only collaborator with observable side effects. It is a
//! trait so the hosting process can pick in-memory or SQLite persistence.

mod config;
mod error;
mod lifetime;
mod service;
mod store;

pub use config::{LicenseKeysConfig, SECRETS_MANAGER_LICENSE_KEYS_ROUTE};
pub use error::{LicenseError, LicenseResult};
pub use lifetime::{
    lifetime_license, LIFETIME_LICENSE_EMAIL, LIFETIME_LICENSE_EXPIRES_AT, LIFETIME_LICENSE_ID,
    LIFETIME_LICENSE_KEY,
};
pub use service::LicenseKeysService;
pub use store::{InMemoryPlanStore, PlatformPlanStore, SqlitePlanStore};
