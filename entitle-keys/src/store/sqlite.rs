//! SQLite-backed plan store.
//!
//! Plans are kept as JSON payloads keyed by platform id, with the plan name
//! pulled out into its own column for ad-hoc queries. Statements run on
//! tokio's blocking pool so the connection lock never stalls a runtime worker.

use super::PlatformPlanStore;
use crate::error::{LicenseError, LicenseResult};
use async_trait::async_trait;
use entitle_types::timestamp;
use entitle_types::{PlatformId, PlatformPlanUpdate};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

/// Persistent plan store backed by SQLite.
pub struct SqlitePlanStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqlitePlanStore {
    /// Opens (or creates) a plan store at the given path.
    pub fn open(path: impl AsRef<Path>) -> LicenseResult<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)
            .map_err(|e| LicenseError::Storage(format!("failed to open plan store: {e}")))?;
        debug!("opened plan store at {}", path.display());
        Self::with_connection(conn)
    }

    /// Opens an in-memory plan store (for testing).
    pub fn open_in_memory() -> LicenseResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| {
            LicenseError::Storage(format!("failed to open in-memory plan store: {e}"))
        })?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> LicenseResult<Self> {
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> LicenseResult<()> {
        lock(&self.conn)?
            .execute_batch(
                "
                CREATE TABLE IF NOT EXISTS platform_plans (
                    platform_id TEXT PRIMARY KEY,
                    plan TEXT NOT NULL,
                    payload TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                );
                ",
            )
            .map_err(|e| LicenseError::Storage(format!("failed to init plan schema: {e}")))
    }

    /// Runs `f` against the connection on the blocking pool.
    async fn with_conn<T, F>(&self, f: F) -> LicenseResult<T>
    where
        F: FnOnce(&Connection) -> LicenseResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = lock(&conn)?;
            f(&*guard)
        })
        .await
        .map_err(|e| LicenseError::Storage(format!("plan store task failed: {e}")))?
    }
}

fn lock(conn: &Mutex<Connection>) -> LicenseResult<MutexGuard<'_, Connection>> {
    conn.lock()
        .map_err(|_| LicenseError::Storage("plan store lock poisoned".to_string()))
}

#[async_trait]
impl PlatformPlanStore for SqlitePlanStore {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn update(
        &self,
        platform_id: &PlatformId,
        update: PlatformPlanUpdate,
    ) -> LicenseResult<()> {
        let platform_id = platform_id.to_string();
        let plan = update.plan.as_str();
        let payload = serde_json::to_string(&update)?;
        let updated_at = timestamp::format_millis(&chrono::Utc::now());

        self.with_conn(move |conn| {
            conn.execute(
                "INSERT INTO platform_plans (platform_id, plan, payload, updated_at)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(platform_id) DO UPDATE SET
                    plan = excluded.plan,
                    payload = excluded.payload,
                    updated_at = excluded.updated_at",
                params![platform_id, plan, payload, updated_at],
            )?;
            Ok(())
        })
        .await
    }

    async fn get(&self, platform_id: &PlatformId) -> LicenseResult<Option<PlatformPlanUpdate>> {
        let platform_id = platform_id.to_string();
        let payload: Option<String> = self
            .with_conn(move |conn| {
                conn.query_row(
                    "SELECT payload FROM platform_plans WHERE platform_id = ?1",
                    params![platform_id],
                    |row| row.get(0),
                )
                .optional()
                .map_err(LicenseError::from)
            })
            .await?;

        payload
            .map(|p| serde_json::from_str(&p).map_err(LicenseError::from))
            .transpose()
    }

    async fn count(&self) -> LicenseResult<usize> {
        let count: i64 = self
            .with_conn(|conn| {
                conn.query_row("SELECT COUNT(*) FROM platform_plans", [], |row| row.get(0))
                    .map_err(LicenseError::from)
            })
            .await?;
        Ok(usize::try_from(count).unwrap_or_default())
    }
}
