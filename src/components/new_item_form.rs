//! New Item Form Component
//!
//! Form for adding items with a category selector. A name that trims to
//! empty or a missing category is silently ignored.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, CreateItemArgs};
use crate::models::CATEGORIES;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();

    let (new_name, set_new_name) = signal(String::new());

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get();
        let category = store.selected_category().get();
        if name.trim().is_empty() || category.is_empty() {
            return;
        }

        spawn_local(async move {
            let args = CreateItemArgs {
                name: &name,
                category: &category,
            };
            if commands::create_item(&args).await.is_ok() {
                set_new_name.set(String::new());
            }
        });
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <input
                type="text"
                placeholder="Adicionar novo item..."
                prop:value=move || new_name.get()
                on:input=move |ev| set_new_name.set(event_target_value(&ev))
            />
            <select
                prop:value=move || store.selected_category().get()
                on:change=move |ev| store.selected_category().set(event_target_value(&ev))
            >
                <option value="">"Selecione uma categoria"</option>
                {CATEGORIES.iter().map(|category| view! {
                    <option value=category.id>
                        {format!("{} {}", category.icon, category.name)}
                    </option>
                }).collect_view()}
            </select>
            <button type="submit">"Adicionar"</button>
        </form>
    }
}
