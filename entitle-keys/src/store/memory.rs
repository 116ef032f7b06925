use super::PlatformPlanStore;
use crate::error::LicenseResult;
use async_trait::async_trait;
use entitle_types::{PlatformId, PlatformPlanUpdate};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Plan store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct InMemoryPlanStore {
    plans: RwLock<HashMap<PlatformId, PlatformPlanUpdate>>,
}

impl InMemoryPlanStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlatformPlanStore for InMemoryPlanStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn update(
        &self,
        platform_id: &PlatformId,
        update: PlatformPlanUpdate,
    ) -> LicenseResult<()> {
        self.plans.write().await.insert(platform_id.clone(), update);
        Ok(())
    }

    async fn get(&self, platform_id: &PlatformId) -> LicenseResult<Option<PlatformPlanUpdate>> {
        Ok(self.plans.read().await.get(platform_id).cloned())
    }

    async fn count(&self) -> LicenseResult<usize> {
        Ok(self.plans.read().await.len())
    }
}
