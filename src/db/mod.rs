// src/db/mod.rs
//
// Database module
//
// Provides:
// - Connection pooling
// - Schema migrations
// - Locale-aware collation

pub mod collation;
pub mod connection;
pub mod migrations;

pub use collation::{localized_cmp, sort_localized, LOCALIZED_COLLATION};

pub use connection::{create_connection_pool, get_connection, ConnectionPool, PooledConn};

pub use migrations::{
    get_database_stats, initialize_database, verify_database_integrity, DatabaseStats,
};
