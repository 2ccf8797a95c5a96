//! Key-value storage with browser `localStorage` semantics: string keys,
//! string values, whole-value replacement.

use super::initialize::init_db;
use super::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{OptionalExtension, params};
use std::collections::HashMap;

pub trait Storage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove_item(&mut self, key: &str) -> AppResult<()>;
}

/// Storage persisted in the `storage` table of a SQLite file.
pub struct SqliteStorage {
    pool: DbPool,
}

impl SqliteStorage {
    /// Open (or create) the database file and make sure the schema exists.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        Self::from_pool(pool)
    }

    pub fn from_pool(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl Storage for SqliteStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        let mut stmt = self
            .pool
            .conn
            .prepare_cached("SELECT value FROM storage WHERE key = ?1")?;
        let value = stmt
            .query_row(params![key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(value)
    }

    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        self.pool.with_conn(|conn| {
            conn.execute(
                "INSERT INTO storage (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, now],
            )
        })?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> AppResult<()> {
        self.pool
            .with_conn(|conn| conn.execute("DELETE FROM storage WHERE key = ?1", params![key]))?;
        Ok(())
    }
}

/// Volatile storage, handy for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> AppResult<()> {
        self.items.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(storage: &mut dyn Storage) {
        assert_eq!(storage.get_item("workouts").unwrap(), None);

        storage.set_item("workouts", "[]").unwrap();
        assert_eq!(storage.get_item("workouts").unwrap().as_deref(), Some("[]"));

        storage.set_item("workouts", "[1]").unwrap();
        assert_eq!(storage.get_item("workouts").unwrap().as_deref(), Some("[1]"));

        storage.remove_item("workouts").unwrap();
        assert_eq!(storage.get_item("workouts").unwrap(), None);

        // removing a missing key is fine
        storage.remove_item("workouts").unwrap();
    }

    #[test]
    fn sqlite_storage_behaves_like_local_storage() {
        let mut s = SqliteStorage::from_pool(DbPool::in_memory().unwrap()).unwrap();
        exercise(&mut s);
    }

    #[test]
    fn memory_storage_behaves_like_local_storage() {
        let mut s = MemoryStorage::new();
        exercise(&mut s);
        assert!(s.is_empty());
    }
}
