//! Header Component
//!
//! Application title and the dark-mode toggle.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Header() -> impl IntoView {
    let store = use_app_store();

    let toggle_dark_mode = move |_| {
        let enabled = store.dark_mode().get();
        store.dark_mode().set(!enabled);
    };

    view! {
        <div class="app-header">
            <h1>"Lista de Compras"</h1>
            <button
                class="dark-mode-btn"
                aria-label="Alternar modo escuro"
                on:click=toggle_dark_mode
            >
                {move || if store.dark_mode().get() { "☀️" } else { "🌙" }}
            </button>
        </div>
    }
}
