//! Process-wide storage handle
//!
//! Wraps the PostgreSQL pool with an explicit connect/disconnect lifecycle.
//! Clones share the same pool; repositories built from a handle that was
//! never connected fail with [`AuthError::StorageUnavailable`] on first use.

use std::sync::Arc;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tokio::sync::RwLock;

use crate::error::{AuthError, AuthResult};

#[derive(Clone, Default)]
pub struct Database {
    pool: Arc<RwLock<Option<PgPool>>>,
}

impl Database {
    /// Unconnected handle
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle around an existing pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(RwLock::new(Some(pool))),
        }
    }

    /// Open the pool. A no-op when already connected.
    pub async fn connect(&self, database_url: &str, max_connections: u32) -> AuthResult<()> {
        let mut guard = self.pool.write().await;
        if guard.is_some() {
            return Ok(());
        }

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        tracing::info!(max_connections, "Connected to database");

        *guard = Some(pool);
        Ok(())
    }

    /// Close the pool, waiting for checked-out connections to be returned
    pub async fn disconnect(&self) {
        let pool = self.pool.write().await.take();
        if let Some(pool) = pool {
            pool.close().await;
            tracing::info!("Disconnected from database");
        }
    }

    pub async fn is_connected(&self) -> bool {
        self.pool.read().await.is_some()
    }

    pub async fn pool(&self) -> AuthResult<PgPool> {
        self.pool
            .read()
            .await
            .clone()
            .ok_or(AuthError::StorageUnavailable)
    }
}
