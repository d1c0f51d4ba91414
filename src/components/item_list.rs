//! Item List Component
//!
//! Renders the visible items and an empty state.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::models::Item;

#[component]
pub fn ItemList(visible: Memo<Vec<Item>>) -> impl IntoView {
    view! {
        <div class="item-list">
            <For
                each=move || visible.get()
                key=|item| {
                    // Key on every mutable field so snapshot changes re-render the row
                    (
                        item.id.clone(),
                        item.name.clone(),
                        item.completed,
                        item.price.map(f64::to_bits),
                        item.quantity.map(f64::to_bits),
                    )
                }
                children=move |item| view! { <ItemRow item/> }
            />
            <Show when=move || visible.get().is_empty()>
                <p class="empty-state">"Nenhum item encontrado"</p>
            </Show>
        </div>
    }
}
