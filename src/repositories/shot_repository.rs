// src/repositories/shot_repository.rs
//
// Shot persistence. Shots are only ever read through their coffee.

use rusqlite::{params, Row};
use std::sync::Arc;
use uuid::Uuid;

use super::coffee_repository::{parse_brew_method_column, parse_timestamp_column, parse_uuid_column};
use crate::db::{get_connection, ConnectionPool};
use crate::domain::{Shot, Stars};
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait ShotRepository: Send + Sync {
    /// Insert a shot under `owner`; the owner must exist
    fn insert(&self, shot: &Shot, owner: Uuid) -> AppResult<()>;
    fn get_by_id(&self, id: Uuid) -> AppResult<Option<Shot>>;
    /// Shots of one coffee, oldest first
    fn list_for_coffee(&self, coffee_id: Uuid) -> AppResult<Vec<Shot>>;
    fn count_for_coffee(&self, coffee_id: Uuid) -> AppResult<usize>;
}

pub struct SqliteShotRepository {
    pool: Arc<ConnectionPool>,
}

const SHOT_COLUMNS: &str =
    "id, coffee_id, brew_method, grams_in, grams_out, time_seconds, rating, notes, created_at";

impl SqliteShotRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_shot(row: &Row) -> Result<Shot, rusqlite::Error> {
        let rating_raw: u8 = row.get("rating")?;
        let rating = Stars::new(rating_raw).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Integer, Box::new(e))
        })?;

        Ok(Shot {
            id: parse_uuid_column(row, "id")?,
            coffee_id: Some(parse_uuid_column(row, "coffee_id")?),
            brew_method: parse_brew_method_column(row, "brew_method")?,
            grams_in: row.get("grams_in")?,
            grams_out: row.get("grams_out")?,
            time_seconds: row.get("time_seconds")?,
            rating,
            notes: row.get("notes")?,
            created_at: parse_timestamp_column(row, "created_at")?,
        })
    }
}

impl ShotRepository for SqliteShotRepository {
    fn insert(&self, shot: &Shot, owner: Uuid) -> AppResult<()> {
        let conn = get_connection(&self.pool)?;

        let result = conn.execute(
            &format!(
                "INSERT INTO shots ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                SHOT_COLUMNS
            ),
            params![
                shot.id.to_string(),
                owner.to_string(),
                shot.brew_method.storage_key(),
                shot.grams_in,
                shot.grams_out,
                shot.time_seconds,
                shot.rating.value(),
                shot.notes,
                shot.created_at.to_rfc3339(),
            ],
        );

        match result {
            Ok(_) => {
                log::debug!("Logged shot {} for coffee {}", shot.id, owner);
                Ok(())
            }
            // The owning coffee is gone
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY =>
            {
                Err(AppError::NotFound)
            }
            Err(e) => Err(AppError::from_insert(e, &format!("shot {}", shot.id))),
        }
    }

    fn get_by_id(&self, id: Uuid) -> AppResult<Option<Shot>> {
        let conn = get_connection(&self.pool)?;

        let mut stmt = conn.prepare(&format!("SELECT {} FROM shots WHERE id = ?1", SHOT_COLUMNS))?;

        match stmt.query_row(params![id.to_string()], Self::row_to_shot) {
            Ok(shot) => Ok(Some(shot)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn list_for_coffee(&self, coffee_id: Uuid) -> AppResult<Vec<Shot>> {
        let conn = get_connection(&self.pool)?;

        // rowid follows insertion order; shots are never rewritten
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM shots WHERE coffee_id = ?1 ORDER BY rowid",
            SHOT_COLUMNS
        ))?;

        let shots: Vec<Shot> = stmt
            .query_map(params![coffee_id.to_string()], Self::row_to_shot)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(shots)
    }

    fn count_for_coffee(&self, coffee_id: Uuid) -> AppResult<usize> {
        let conn = get_connection(&self.pool)?;

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM shots WHERE coffee_id = ?1",
            params![coffee_id.to_string()],
            |row| row.get(0),
        )?;

        Ok(usize::try_from(count).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::samples::{sample_coffees, sample_shot};
    use crate::repositories::{CoffeeRepository, SqliteCoffeeRepository};
    use crate::test_support::TestStore;

    #[test]
    fn test_shots_keep_insertion_order() {
        let store = TestStore::new();
        let coffees = SqliteCoffeeRepository::new(store.pool());
        let shots = SqliteShotRepository::new(store.pool());
        let coffee = sample_coffees().remove(0);
        coffees.insert(&coffee).unwrap();

        let mut ids = Vec::new();
        for notes in ["first", "second", "third"] {
            let mut shot = sample_shot();
            shot.notes = notes.to_string();
            shots.insert(&shot, coffee.id).unwrap();
            ids.push(shot.id);
        }

        let listed = shots.list_for_coffee(coffee.id).unwrap();
        assert_eq!(listed.iter().map(|s| s.id).collect::<Vec<_>>(), ids);
        assert!(listed.iter().all(|s| s.coffee_id == Some(coffee.id)));
        assert_eq!(shots.count_for_coffee(coffee.id).unwrap(), 3);
    }

    #[test]
    fn test_unknown_owner_is_not_found() {
        let store = TestStore::new();
        let shots = SqliteShotRepository::new(store.pool());

        let result = shots.insert(&sample_shot(), Uuid::new_v4());
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[test]
    fn test_deleting_coffee_removes_its_shots() {
        let store = TestStore::new();
        let coffees = SqliteCoffeeRepository::new(store.pool());
        let shots = SqliteShotRepository::new(store.pool());
        let coffee = sample_coffees().remove(0);
        coffees.insert(&coffee).unwrap();
        let shot = sample_shot();
        shots.insert(&shot, coffee.id).unwrap();

        coffees.delete(coffee.id).unwrap();

        assert!(shots.get_by_id(shot.id).unwrap().is_none());
        assert_eq!(shots.count_for_coffee(coffee.id).unwrap(), 0);
    }

    #[test]
    fn test_round_trip_fields() {
        let store = TestStore::new();
        let coffees = SqliteCoffeeRepository::new(store.pool());
        let shots = SqliteShotRepository::new(store.pool());
        let coffee = sample_coffees().remove(2);
        coffees.insert(&coffee).unwrap();
        let shot = sample_shot();
        shots.insert(&shot, coffee.id).unwrap();

        let loaded = shots.get_by_id(shot.id).unwrap().unwrap();
        assert_eq!(loaded.grams_in, 18.0);
        assert_eq!(loaded.grams_out, 36.0);
        assert_eq!(loaded.time_seconds, 30.0);
        assert_eq!(loaded.rating.value(), 4);
        assert_eq!(loaded.notes, "This was a good shot");
    }
}
