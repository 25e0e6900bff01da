// src/repositories/coffee_repository.rs
//
// Coffee persistence

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Row};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::{get_connection, ConnectionPool};
use crate::domain::{BrewMethod, Coffee, Rating};
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait CoffeeRepository: Send + Sync {
    /// Insert a new coffee; an existing id is rejected with `Duplicate`
    fn insert(&self, coffee: &Coffee) -> AppResult<()>;
    fn get_by_id(&self, id: Uuid) -> AppResult<Option<Coffee>>;
    /// All coffees ordered by name, locale-aware
    fn list_sorted(&self) -> AppResult<Vec<Coffee>>;
    fn update_rating(&self, id: Uuid, rating: Rating) -> AppResult<()>;
    /// Delete a coffee and, by cascade, its shots
    fn delete(&self, id: Uuid) -> AppResult<()>;
    fn exists(&self, id: Uuid) -> AppResult<bool>;
}

pub struct SqliteCoffeeRepository {
    pool: Arc<ConnectionPool>,
}

const COFFEE_COLUMNS: &str =
    "id, name, roaster_name, brew_method, price, origin, rating, created_at";

pub(crate) fn parse_uuid_column(row: &Row, column: &str) -> Result<Uuid, rusqlite::Error> {
    let raw: String = row.get(column)?;
    Uuid::parse_str(&raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e))
    })
}

pub(crate) fn parse_timestamp_column(
    row: &Row,
    column: &str,
) -> Result<DateTime<Utc>, rusqlite::Error> {
    let raw: String = row.get(column)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e)))
}

pub(crate) fn parse_brew_method_column(
    row: &Row,
    column: &str,
) -> Result<BrewMethod, rusqlite::Error> {
    let raw: String = row.get(column)?;
    raw.parse::<BrewMethod>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e)))
}

impl SqliteCoffeeRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map database row to Coffee - returns rusqlite::Error for query_map compatibility
    fn row_to_coffee(row: &Row) -> Result<Coffee, rusqlite::Error> {
        Ok(Coffee {
            id: parse_uuid_column(row, "id")?,
            name: row.get("name")?,
            roaster_name: row.get("roaster_name")?,
            brew_method: parse_brew_method_column(row, "brew_method")?,
            price: row.get("price")?,
            origin: row.get("origin")?,
            rating: Rating::from_column(row.get("rating")?),
            created_at: parse_timestamp_column(row, "created_at")?,
        })
    }
}

impl CoffeeRepository for SqliteCoffeeRepository {
    fn insert(&self, coffee: &Coffee) -> AppResult<()> {
        let conn = get_connection(&self.pool)?;

        conn.execute(
            &format!(
                "INSERT INTO coffees ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                COFFEE_COLUMNS
            ),
            params![
                coffee.id.to_string(),
                coffee.name,
                coffee.roaster_name,
                coffee.brew_method.storage_key(),
                coffee.price,
                coffee.origin,
                coffee.rating.to_column(),
                coffee.created_at.to_rfc3339(),
            ],
        )
        .map_err(|e| AppError::from_insert(e, &format!("coffee {}", coffee.id)))?;

        log::debug!("Inserted coffee {} ({})", coffee.id, coffee.name);
        Ok(())
    }

    fn get_by_id(&self, id: Uuid) -> AppResult<Option<Coffee>> {
        let conn = get_connection(&self.pool)?;

        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM coffees WHERE id = ?1",
            COFFEE_COLUMNS
        ))?;

        match stmt.query_row(params![id.to_string()], Self::row_to_coffee) {
            Ok(coffee) => Ok(Some(coffee)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn list_sorted(&self) -> AppResult<Vec<Coffee>> {
        let conn = get_connection(&self.pool)?;

        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM coffees ORDER BY name COLLATE LOCALIZED, id",
            COFFEE_COLUMNS
        ))?;

        let coffees: Vec<Coffee> = stmt
            .query_map([], Self::row_to_coffee)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(coffees)
    }

    fn update_rating(&self, id: Uuid, rating: Rating) -> AppResult<()> {
        let conn = get_connection(&self.pool)?;

        let rows_affected = conn.execute(
            "UPDATE coffees SET rating = ?2 WHERE id = ?1",
            params![id.to_string(), rating.to_column()],
        )?;

        if rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        log::debug!("Coffee {} rated {}", id, rating);
        Ok(())
    }

    fn delete(&self, id: Uuid) -> AppResult<()> {
        let conn = get_connection(&self.pool)?;

        let rows_affected = conn.execute("DELETE FROM coffees WHERE id = ?1", params![id.to_string()])?;

        if rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        log::debug!("Deleted coffee {}", id);
        Ok(())
    }

    fn exists(&self, id: Uuid) -> AppResult<bool> {
        let conn = get_connection(&self.pool)?;

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM coffees WHERE id = ?1",
            params![id.to_string()],
            |row| row.get(0),
        )?;

        Ok(count > 0)
    }
}
