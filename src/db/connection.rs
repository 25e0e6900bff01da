// src/db/connection.rs
//
// Database connection management
//
// PRINCIPLES:
// - Explicit connection pooling
// - No hidden connection creation
// - Clear error propagation
// - Every connection carries the LOCALIZED collation

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;

use super::collation::{localized_cmp, LOCALIZED_COLLATION};
use crate::config::StoreConfig;
use crate::error::{AppError, AppResult};

/// Type alias for connection pool
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled connection
pub type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Pragmas and collations applied to each new connection
fn prepare_connection(conn: &Connection, busy_timeout_ms: u32) -> rusqlite::Result<()> {
    conn.execute_batch(&format!(
        "PRAGMA foreign_keys = ON;
         PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;
         PRAGMA busy_timeout = {};",
        busy_timeout_ms
    ))?;
    conn.create_collation(LOCALIZED_COLLATION, localized_cmp)?;
    Ok(())
}

/// Create a connection pool
///
/// Pool configuration:
/// - `max_connections` from config
/// - SQLite in WAL mode
/// - Foreign keys enabled (shots cascade with their coffee)
/// - Busy timeout set to avoid immediate errors
pub fn create_connection_pool(config: &StoreConfig) -> AppResult<ConnectionPool> {
    if let Some(parent) = config.database_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let busy_timeout_ms = config.busy_timeout_ms;
    let manager = SqliteConnectionManager::file(&config.database_path)
        .with_init(move |conn| prepare_connection(conn, busy_timeout_ms));

    let pool = Pool::builder()
        .max_size(config.max_connections)
        .build(manager)
        .map_err(|e| AppError::Pool(format!("Failed to create connection pool: {}", e)))?;

    log::info!(
        "Opened coffee store at {} ({} connections max)",
        config.database_path.display(),
        config.max_connections
    );

    Ok(pool)
}

/// Get a connection from the pool
///
/// This is a convenience wrapper that provides better error messages.
pub fn get_connection(pool: &ConnectionPool) -> AppResult<PooledConn> {
    pool.get()
        .map_err(|e| AppError::Pool(format!("Failed to get database connection: {}", e)))
}

/// Create a standalone in-memory connection (for testing)
pub fn create_test_connection() -> AppResult<Connection> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.create_collation(LOCALIZED_COLLATION, localized_cmp)?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_pool_creation() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::at(dir.path().join("nested").join("brewbuddy.db"));

        let pool = create_connection_pool(&config).unwrap();
        let conn = get_connection(&pool).unwrap();

        let fk_enabled: i32 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(fk_enabled, 1);
        assert!(config.database_path.exists());
    }

    #[test]
    fn test_collation_is_registered() {
        let conn = create_test_connection().unwrap();
        let mut stmt = conn
            .prepare(
                "SELECT n FROM (
                     SELECT 'nube' AS n UNION ALL SELECT 'Ñandú' UNION ALL SELECT 'Amaro'
                 )
                 ORDER BY n COLLATE LOCALIZED",
            )
            .unwrap();
        let ordered: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(ordered, vec!["Amaro", "Ñandú", "nube"]);
    }
}
