//! Lista de Compras Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - commands: Tauri command handlers

use std::path::PathBuf;
use std::sync::Arc;

use tauri::Manager;
use tokio::sync::Mutex;

mod commands;
mod domain;
mod repository;

use repository::{init_db, DbState, ItemRepository};

/// Application state shared across commands
pub struct AppState {
    pub db_state: DbState,
    pub db_path: PathBuf,
}

/// Get database path from app handle
fn get_db_path(app_handle: &tauri::AppHandle) -> PathBuf {
    let app_dir = app_handle
        .path()
        .app_data_dir()
        .expect("failed to resolve app data dir");
    std::fs::create_dir_all(&app_dir).expect("failed to create app data dir");
    app_dir.join("lista_de_compras.db")
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle()
                .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                    // Focus the existing window when a new instance tries to start
                    if let Some(window) = app.get_webview_window("main") {
                        let _ = window.set_focus();
                    }
                }))?;

            let app_handle = app.handle().clone();

            // Initialize logging
            rolling_logger::init_logger(
                app_handle
                    .path()
                    .app_log_dir()
                    .expect("failed to get log dir"),
                "ListaDeCompras",
            )
            .expect("failed to init rolling logger");

            let db_path = get_db_path(&app_handle);

            // Create initial empty DbState (managed); commands error with
            // "Database not initialized" until the background init lands
            let db_state = DbState::new();
            app.manage(AppState {
                db_state: db_state.clone(),
                db_path: db_path.clone(),
            });

            // Initialize the database asynchronously, then deliver the first
            // snapshot so a frontend that mounted early converges on it
            tauri::async_runtime::spawn(async move {
                match init_db(&db_path).await {
                    Ok(initialized) => {
                        db_state.adopt(initialized).await;
                        let _ = rolling_logger::info("database initialised");

                        match db_state.get_connection().await {
                            Ok(conn) => {
                                let repo = ItemRepository::new(Arc::new(Mutex::new(conn)));
                                commands::broadcast_items(&app_handle, &repo).await;
                            }
                            Err(e) => log::error!("{}", e),
                        }
                    }
                    Err(e) => {
                        let _ = rolling_logger::error(&format!("database init failed: {}", e));
                    }
                }
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::create_item,
            commands::list_items,
            commands::toggle_item,
            commands::delete_item,
            commands::update_item_details,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
