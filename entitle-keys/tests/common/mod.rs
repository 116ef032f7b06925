//! Shared test helpers for license service tests.

#![allow(dead_code)]

use chrono::Utc;
use entitle_keys::{InMemoryPlanStore, LicenseKeysService};
use entitle_types::timestamp;
use entitle_types::{LicenseFeatures, LicenseKeyEntity, PlatformId};
use std::sync::Arc;

/// Returns a service backed by a fresh in-memory store, plus the store.
pub fn memory_service() -> (LicenseKeysService, Arc<InMemoryPlanStore>) {
    let store = Arc::new(InMemoryPlanStore::new());
    (LicenseKeysService::new(store.clone()), store)
}

pub fn platform(id: &str) -> PlatformId {
    PlatformId::parse(id).unwrap()
}

/// A record unlike the lifetime license in every field that matters.
pub fn foreign_license() -> LicenseKeyEntity {
    LicenseKeyEntity {
        id: "lk_trial_42".to_string(),
        email: "someone@example.com".to_string(),
        key: "trial-key-42".to_string(),
        created_at: Utc::now(),
        activated_at: None,
        expires_at: timestamp::parse("2020-01-01T00:00:00.000Z").unwrap(),
        is_trial: Some(true),
        customer_name: Some("Someone".to_string()),
        features: LicenseFeatures {
            show_powered_by: true,
            ..LicenseFeatures::default()
        },
    }
}
