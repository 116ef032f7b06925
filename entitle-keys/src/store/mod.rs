//! Platform plan persistence.
//!
//! Defines the seam through which applied limits reach the platform, plus
//! the two backends the server ships with.

mod memory;
mod sqlite;

pub use memory::InMemoryPlanStore;
pub use sqlite::SqlitePlanStore;

use crate::error::LicenseResult;
use async_trait::async_trait;
use entitle_types::{PlatformId, PlatformPlanUpdate};

/// Persists the plan record of each platform.
#[async_trait]
pub trait PlatformPlanStore: Send + Sync {
    /// Returns the name of the backend, for logging.
    fn backend_name(&self) -> &'static str;

    /// Writes the plan for a platform, replacing any previous plan.
    async fn update(
        &self,
        platform_id: &PlatformId,
        update: PlatformPlanUpdate,
    ) -> LicenseResult<()>;

    /// Reads the plan for a platform, if one was ever written.
    async fn get(&self, platform_id: &PlatformId) -> LicenseResult<Option<PlatformPlanUpdate>>;

    /// Number of platforms with a stored plan.
    async fn count(&self) -> LicenseResult<usize>;
}
