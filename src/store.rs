//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Item;
use crate::prefs;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Mirror of the remote items collection, replaced wholesale on snapshots
    pub items: Vec<Item>,
    /// Search term applied to item names
    pub search_term: String,
    /// Selected category id; filters the list and is used for new items ("" = all)
    pub selected_category: String,
    /// Whether the category chip row is shown
    pub show_filters: bool,
    /// Dark-mode preference, persisted across sessions
    pub dark_mode: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            dark_mode: prefs::load_dark_mode(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Replace the item collection with a fresh snapshot (last snapshot wins)
pub fn store_replace_items(store: &AppStore, items: Vec<Item>) {
    *store.items().write() = items;
}
