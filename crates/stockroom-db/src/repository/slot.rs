//! # Slot Repository
//!
//! Durable named slots: one key, one text value, whole-value replace.
//!
//! ## Storage Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  kv_store                                                               │
//! │                                                                         │
//! │  key        │ value                                  │ updated_at       │
//! │  ───────────┼────────────────────────────────────────┼───────────────── │
//! │  products   │ [{"id":"…","name":"Apple","quantity":5}│ 2026-01-01T…     │
//! │             │  ,{"id":"…","name":"Banana",…}]        │                  │
//! │                                                                         │
//! │  put() is an upsert: there are no partial updates.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};

/// Repository for key-value slot operations.
#[derive(Debug, Clone)]
pub struct SlotRepository {
    pool: SqlitePool,
}

impl SlotRepository {
    /// Creates a new SlotRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SlotRepository { pool }
    }

    /// Reads a slot.
    ///
    /// ## Returns
    /// * `Ok(Some(value))` - Slot exists
    /// * `Ok(None)` - Slot was never written
    pub async fn get(&self, key: &str) -> DbResult<Option<String>> {
        let value: Option<String> = sqlx::query_scalar("SELECT value FROM kv_store WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        debug!(key = %key, found = value.is_some(), "Read slot");
        Ok(value)
    }

    /// Writes a slot, replacing any previous value.
    pub async fn put(&self, key: &str, value: &str) -> DbResult<()> {
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(now)
        .execute(&self.pool)
        .await?;

        debug!(key = %key, bytes = value.len(), "Wrote slot");
        Ok(())
    }

    /// Deletes a slot.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - Slot doesn't exist
    pub async fn delete(&self, key: &str) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM kv_store WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Slot", key));
        }

        debug!(key = %key, "Deleted slot");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig};

    #[tokio::test]
    async fn test_get_missing_slot() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        assert_eq!(db.slots().get("products").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_replaces_whole_value() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let slots = db.slots();

        slots.put("products", "[1,2,3]").await.unwrap();
        slots.put("products", "[]").await.unwrap();

        assert_eq!(slots.get("products").await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_slots_are_independent() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let slots = db.slots();

        slots.put("a", "1").await.unwrap();
        slots.put("b", "2").await.unwrap();

        assert_eq!(slots.get("a").await.unwrap().as_deref(), Some("1"));
        assert_eq!(slots.get("b").await.unwrap().as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn test_delete() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let slots = db.slots();

        slots.put("products", "[]").await.unwrap();
        slots.delete("products").await.unwrap();

        assert_eq!(slots.get("products").await.unwrap(), None);
        assert!(slots.delete("products").await.is_err());
    }
}
