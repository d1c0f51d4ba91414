//! Filter Bar Component
//!
//! Search input plus the collapsible category chip row. The selected
//! category doubles as the category of new items, so the chips and the
//! form stay in sync through the store.

use leptos::prelude::*;

use crate::models::CATEGORIES;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="filter-bar">
            <input
                type="text"
                class="search-input"
                placeholder="Buscar itens..."
                prop:value=move || store.search_term().get()
                on:input=move |ev| store.search_term().set(event_target_value(&ev))
            />
            <button
                class="filters-toggle"
                on:click=move |_| {
                    let shown = store.show_filters().get();
                    store.show_filters().set(!shown);
                }
            >
                "Filtros"
            </button>
        </div>
        <Show when=move || store.show_filters().get()>
            <div class="category-chips">
                <button
                    class=move || {
                        if store.selected_category().get().is_empty() { "chip active" } else { "chip" }
                    }
                    on:click=move |_| store.selected_category().set(String::new())
                >
                    "Todas"
                </button>
                {CATEGORIES.iter().map(|category| {
                    let id = category.id;
                    view! {
                        <button
                            class=move || {
                                if store.selected_category().get() == id { "chip active" } else { "chip" }
                            }
                            on:click=move |_| store.selected_category().set(id.to_string())
                        >
                            <span>{category.icon}</span>
                            {category.name}
                        </button>
                    }
                }).collect_view()}
            </div>
        </Show>
    }
}
