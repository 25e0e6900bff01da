//! Shared fixtures for unit tests.

use std::sync::Arc;
use tempfile::TempDir;

use crate::config::StoreConfig;
use crate::db::{create_connection_pool, initialize_database, ConnectionPool};

/// An initialized on-disk store in a temporary directory
pub struct TestStore {
    pool: Arc<ConnectionPool>,
    config: StoreConfig,
    _dir: TempDir,
}

impl TestStore {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = StoreConfig {
            max_connections: 4,
            ..StoreConfig::at(dir.path().join("brewbuddy.db"))
        };
        let pool = create_connection_pool(&config).expect("pool");
        {
            let conn = pool.get().expect("connection");
            initialize_database(&conn).expect("schema");
        }
        Self {
            pool: Arc::new(pool),
            config,
            _dir: dir,
        }
    }

    pub fn pool(&self) -> Arc<ConnectionPool> {
        Arc::clone(&self.pool)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}
