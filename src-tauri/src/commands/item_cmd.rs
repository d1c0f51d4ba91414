//! Tauri Commands for the Items Collection
//!
//! Exposes item CRUD to the frontend via Tauri IPC. Every successful write
//! is followed by a broadcast of the full collection, which is what the
//! frontend subscription consumes.

use std::sync::Arc;

use tauri::{AppHandle, Emitter, State};
use tokio::sync::Mutex;

use crate::domain::{DetailField, DomainError, Item};
use crate::repository::{ItemRepository, Repository};
use crate::AppState;

/// Event carrying the full item collection after every change
pub const ITEMS_CHANGED_EVENT: &str = "items-changed";

async fn item_repo(state: &State<'_, AppState>) -> Result<ItemRepository, String> {
    let conn = state.db_state.get_connection().await?;
    Ok(ItemRepository::new(Arc::new(Mutex::new(conn))))
}

/// Push the current collection to every listening window.
///
/// Best-effort: a failed broadcast is only logged, the next successful
/// write delivers a fresh snapshot anyway.
pub async fn broadcast_items(app: &AppHandle, repo: &ItemRepository) {
    match repo.list().await {
        Ok(items) => {
            if let Err(e) = app.emit(ITEMS_CHANGED_EVENT, &items) {
                log::error!("failed to broadcast item snapshot: {}", e);
            }
        }
        Err(e) => log::error!("failed to load item snapshot: {}", e),
    }
}

/// Create a new item. Blank names and categories are a silent no-op.
#[tauri::command]
pub async fn create_item(
    app: AppHandle,
    state: State<'_, AppState>,
    name: String,
    category: String,
) -> Result<Option<Item>, String> {
    let repo = item_repo(&state).await?;

    match repo.add(&name, &category).await {
        Ok(Some(item)) => {
            broadcast_items(&app, &repo).await;
            Ok(Some(item))
        }
        Ok(None) => Ok(None),
        Err(e) => {
            log::error!("failed to create item: {}", e);
            Err(e.to_string())
        }
    }
}

/// List all items
#[tauri::command]
pub async fn list_items(state: State<'_, AppState>) -> Result<Vec<Item>, String> {
    let repo = item_repo(&state).await?;

    repo.list().await.map_err(|e| {
        log::error!("failed to list items: {}", e);
        e.to_string()
    })
}

/// Toggle item completion status
#[tauri::command]
pub async fn toggle_item(
    app: AppHandle,
    state: State<'_, AppState>,
    id: String,
) -> Result<(), String> {
    let repo = item_repo(&state).await?;

    match repo.toggle(&id).await {
        Ok(()) => {
            broadcast_items(&app, &repo).await;
            Ok(())
        }
        Err(e) => {
            log::error!("failed to toggle item {}: {}", id, e);
            Err(e.to_string())
        }
    }
}

/// Delete an item
#[tauri::command]
pub async fn delete_item(
    app: AppHandle,
    state: State<'_, AppState>,
    id: String,
) -> Result<(), String> {
    let repo = item_repo(&state).await?;

    match repo.delete(id.clone()).await {
        Ok(()) => {
            broadcast_items(&app, &repo).await;
            Ok(())
        }
        Err(e) => {
            log::error!("failed to delete item {}: {}", id, e);
            Err(e.to_string())
        }
    }
}

/// Set the price or quantity of a purchased item
#[tauri::command]
pub async fn update_item_details(
    app: AppHandle,
    state: State<'_, AppState>,
    id: String,
    field: String,
    value: f64,
) -> Result<(), String> {
    let Some(detail) = DetailField::from_str(&field) else {
        let e = DomainError::InvalidInput(format!("unknown detail field: {}", field));
        log::error!("failed to update item {}: {}", id, e);
        return Err(e.to_string());
    };

    let repo = item_repo(&state).await?;

    match repo.set_detail(&id, detail, value).await {
        Ok(()) => {
            broadcast_items(&app, &repo).await;
            Ok(())
        }
        Err(e) => {
            log::error!("failed to update item {}: {}", id, e);
            Err(e.to_string())
        }
    }
}
