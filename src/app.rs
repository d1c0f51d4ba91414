//! Lista de Compras Frontend App
//!
//! Root component: owns the store, wires the snapshot subscription, and
//! derives the visible list and the purchase total.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{BudgetSummary, FilterBar, Header, ItemList, NewItemForm};
use crate::listing;
use crate::prefs;
use crate::store::{store_replace_items, AppState, AppStateStoreFields};
use crate::subscription;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    // Write the dark-mode preference through on every change
    Effect::new(move |_| {
        let enabled = store.dark_mode().get();
        prefs::apply_dark_mode(enabled);
        prefs::save_dark_mode(enabled);
    });

    // Initial snapshot; every later change arrives through the subscription
    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(items) = commands::list_items().await {
                store_replace_items(&store, items);
            }
        });
    });

    // Live snapshots replace the list wholesale
    subscription::subscribe_to_items(store);

    let visible = Memo::new(move |_| {
        listing::visible_items(
            &store.items().get(),
            &store.search_term().get(),
            &store.selected_category().get(),
        )
    });
    let total = Memo::new(move |_| listing::purchase_total(&store.items().get()));

    view! {
        <div class="app-shell">
            <Header/>
            <div class="card">
                <BudgetSummary total/>
                <FilterBar/>
                <NewItemForm/>
                <ItemList visible/>
            </div>
        </div>
    }
}
