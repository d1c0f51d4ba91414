//! Database Connection and Setup
//!
//! Manages the SQLite database connection and migrations.

use std::path::PathBuf;
use std::sync::Arc;

use libsql::{Builder, Connection, Database};
use tokio::sync::Mutex;

/// Database state wrapper
///
/// Starts empty and is filled once the asynchronous initialization
/// completes; `get_connection` errors until then.
#[derive(Clone)]
pub struct DbState {
    db: Arc<Mutex<Option<Database>>>,
    conn: Arc<Mutex<Option<Connection>>>,
}

impl DbState {
    pub fn new() -> Self {
        Self {
            db: Arc::new(Mutex::new(None)),
            conn: Arc::new(Mutex::new(None)),
        }
    }

    /// Get a connection, if the database has been initialized
    pub async fn get_connection(&self) -> Result<Connection, String> {
        let guard = self.conn.lock().await;
        if let Some(conn) = &*guard {
            return Ok(conn.clone());
        }
        Err("Database not initialized".to_string())
    }

    /// Take over the handles of a freshly initialized state
    pub async fn adopt(&self, other: DbState) {
        *self.db.lock().await = other.db.lock().await.take();
        *self.conn.lock().await = other.conn.lock().await.take();
    }
}

impl Default for DbState {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize database with path
pub async fn init_db(db_path: &PathBuf) -> Result<DbState, String> {
    let db_path_str = db_path.to_str().ok_or("Invalid DB path")?;

    let db = Builder::new_local(db_path_str)
        .build()
        .await
        .map_err(|e| format!("Failed to build db: {}", e))?;

    let conn = db.connect().map_err(|e| format!("Failed to connect: {}", e))?;

    // Run migrations
    run_migrations(&conn).await?;

    let state = DbState::new();
    *state.db.lock().await = Some(db);
    *state.conn.lock().await = Some(conn);

    Ok(state)
}

/// Run database migrations
async fn run_migrations(conn: &Connection) -> Result<(), String> {
    // Items collection - create if not exists
    conn.execute(
        "CREATE TABLE IF NOT EXISTS items (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            category TEXT NOT NULL,
            completed INTEGER NOT NULL DEFAULT 0,
            price REAL,
            quantity REAL,
            created_at INTEGER
        )",
        (),
    )
    .await
    .map_err(|e| e.to_string())?;

    // Snapshots are delivered in creation order
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_items_created ON items(created_at)",
        (),
    )
    .await
    .map_err(|e| e.to_string())?;

    Ok(())
}
