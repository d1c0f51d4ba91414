//! Item Repository Implementation
//!
//! SQLite-backed implementation of the items document collection.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use libsql::Connection;
use tokio::sync::Mutex;

use super::traits::Repository;
use crate::domain::{DetailField, DomainError, DomainResult, Item};

/// Process-local sequence keeping generated ids unique within a millisecond
static ID_SEQ: AtomicU64 = AtomicU64::new(0);

/// SQLite implementation of the Item repository
pub struct ItemRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ItemRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// Timestamp-based document id
    fn next_id() -> String {
        let seq = ID_SEQ.fetch_add(1, Ordering::Relaxed) % 10_000;
        format!("{}{:04}", Utc::now().timestamp_millis(), seq)
    }

    /// Add a new pending item.
    ///
    /// A name that trims to empty or an empty category is a silent no-op
    /// and returns `Ok(None)` without touching the collection.
    pub async fn add(&self, name: &str, category: &str) -> DomainResult<Option<Item>> {
        let name = name.trim();
        if name.is_empty() || category.is_empty() {
            return Ok(None);
        }

        let mut item = Item::new(Self::next_id(), name.to_string(), category.to_string());
        item.created_at = Some(Utc::now().timestamp_millis());

        self.create(&item).await.map(Some)
    }

    /// Flip the completion flag; an unknown id is a no-op
    pub async fn toggle(&self, id: &str) -> DomainResult<()> {
        let conn = self.conn.lock().await;

        conn.execute(
            "UPDATE items SET completed = NOT completed WHERE id = ?",
            libsql::params![id],
        )
        .await
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(())
    }

    /// Set price or quantity on a purchased item; an unknown id is a no-op
    pub async fn set_detail(&self, id: &str, field: DetailField, value: f64) -> DomainResult<()> {
        let conn = self.conn.lock().await;

        let sql = match field {
            DetailField::Price => "UPDATE items SET price = ? WHERE id = ?",
            DetailField::Quantity => "UPDATE items SET quantity = ? WHERE id = ?",
        };

        conn.execute(sql, libsql::params![value, id])
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl Repository<Item> for ItemRepository {
    async fn create(&self, entity: &Item) -> DomainResult<Item> {
        let conn = self.conn.lock().await;

        conn.execute(
            "INSERT INTO items (id, name, category, completed, price, quantity, created_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
            libsql::params![
                entity.id.clone(),
                entity.name.clone(),
                entity.category.clone(),
                if entity.completed { 1 } else { 0 },
                entity.price,
                entity.quantity,
                entity.created_at
            ],
        )
        .await
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(entity.clone())
    }

    async fn find_by_id(&self, id: String) -> DomainResult<Option<Item>> {
        let conn = self.conn.lock().await;

        let mut rows = conn
            .query(
                "SELECT id, name, category, completed, price, quantity, created_at FROM items WHERE id = ?",
                libsql::params![id],
            )
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if let Ok(Some(row)) = rows.next().await {
            Ok(Some(row_to_item(&row)?))
        } else {
            Ok(None)
        }
    }

    async fn list(&self) -> DomainResult<Vec<Item>> {
        let conn = self.conn.lock().await;

        let mut rows = conn
            .query(
                "SELECT id, name, category, completed, price, quantity, created_at FROM items ORDER BY created_at ASC, id ASC",
                (),
            )
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut items = Vec::new();
        while let Ok(Some(row)) = rows.next().await {
            items.push(row_to_item(&row)?);
        }
        Ok(items)
    }

    async fn update(&self, entity: &Item) -> DomainResult<Item> {
        let conn = self.conn.lock().await;

        conn.execute(
            "UPDATE items SET name = ?, category = ?, completed = ?, price = ?, quantity = ? WHERE id = ?",
            libsql::params![
                entity.name.clone(),
                entity.category.clone(),
                if entity.completed { 1 } else { 0 },
                entity.price,
                entity.quantity,
                entity.id.clone()
            ],
        )
        .await
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(entity.clone())
    }

    async fn delete(&self, id: String) -> DomainResult<()> {
        let conn = self.conn.lock().await;

        conn.execute("DELETE FROM items WHERE id = ?", libsql::params![id])
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(())
    }
}

/// Convert a database row to an Item
fn row_to_item(row: &libsql::Row) -> DomainResult<Item> {
    Ok(Item {
        id: row
            .get::<String>(0)
            .map_err(|e| DomainError::Internal(e.to_string()))?,
        name: row
            .get::<String>(1)
            .map_err(|e| DomainError::Internal(e.to_string()))?,
        category: row
            .get::<String>(2)
            .map_err(|e| DomainError::Internal(e.to_string()))?,
        completed: row
            .get::<i32>(3)
            .map_err(|e| DomainError::Internal(e.to_string()))?
            != 0,
        price: row.get::<Option<f64>>(4).ok().flatten(),
        quantity: row.get::<Option<f64>>(5).ok().flatten(),
        created_at: row.get::<Option<i64>>(6).ok().flatten(),
    })
}
