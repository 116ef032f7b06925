//! The lifetime enterprise license.
//!
//! A single record that never expires and enables every feature. Its
//! creation and activation stamps are taken the first time it is read, so
//! every caller in a process sees the same value.

use chrono::{DateTime, NaiveDate, SubsecRound, Utc};
use entitle_types::{LicenseFeatures, LicenseKeyEntity};
use std::sync::LazyLock;

/// Record ID of the lifetime license.
pub const LIFETIME_LICENSE_ID: &str = "lifetime-enterprise";

/// Key string of the lifetime license.
pub const LIFETIME_LICENSE_KEY: &str = "lifetime-enterprise-key";

/// Email attached to the lifetime license.
pub const LIFETIME_LICENSE_EMAIL: &str = "enterprise@localhost";

/// Expiry of the lifetime license, `2099-12-31T23:59:59.999Z`.
pub static LIFETIME_LICENSE_EXPIRES_AT: LazyLock<DateTime<Utc>> = LazyLock::new(|| {
    NaiveDate::from_ymd_opt(2099, 12, 31)
        .and_then(|d| d.and_hms_milli_opt(23, 59, 59, 999))
        .expect("lifetime expiry is a valid date")
        .and_utc()
});

static LIFETIME_LICENSE: LazyLock<LicenseKeyEntity> = LazyLock::new(|| {
    let now = Utc::now().trunc_subsecs(3);
    LicenseKeyEntity {
        id: LIFETIME_LICENSE_ID.to_string(),
        email: LIFETIME_LICENSE_EMAIL.to_string(),
        key: LIFETIME_LICENSE_KEY.to_string(),
        created_at: now,
        activated_at: Some(now),
        expires_at: *LIFETIME_LICENSE_EXPIRES_AT,
        is_trial: None,
        customer_name: None,
        features: LicenseFeatures::all_enabled(),
    }
});

/// Returns the lifetime enterprise license.
#[must_use]
pub fn lifetime_license() -> &'static LicenseKeyEntity {
    &LIFETIME_LICENSE
}
