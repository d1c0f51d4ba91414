//! Item Row Component
//!
//! A single list entry: completion checkbox, name and category label, and
//! the price/quantity editors shown once the item is purchased.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::models::{category_by_id, Item};

#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    // Dangling category references render blank rather than failing
    let category_label = category_by_id(&item.category)
        .map(|category| format!("{} {}", category.icon, category.name))
        .unwrap_or_default();

    let completed = item.completed;
    let toggle_id = item.id.clone();
    let remove_id = item.id.clone();
    let price_id = item.id.clone();
    let quantity_id = item.id.clone();

    // Shown only when both details are set and nonzero
    let line_total = item
        .price
        .filter(|price| *price != 0.0)
        .zip(item.quantity.filter(|quantity| *quantity != 0.0))
        .map(|(price, quantity)| format!("Total: R$ {:.2}", price * quantity));

    let price_value = item.price.map(|price| price.to_string()).unwrap_or_default();
    let quantity_value = item
        .quantity
        .map(|quantity| quantity.to_string())
        .unwrap_or_default();

    view! {
        <div class=if completed { "item-row completed" } else { "item-row" }>
            <input
                type="checkbox"
                checked=completed
                on:change=move |_| {
                    let id = toggle_id.clone();
                    spawn_local(async move {
                        let _ = commands::toggle_item(&id).await;
                    });
                }
            />

            <div class="item-label">
                <span class="item-name">{item.name.clone()}</span>
                <span class="item-category">{category_label}</span>
            </div>

            {completed.then(|| view! {
                <div class="item-details">
                    <input
                        type="number"
                        step="0.01"
                        min="0"
                        placeholder="Preço"
                        prop:value=price_value
                        on:input=move |ev| {
                            // Malformed numeric input is coerced to 0
                            let value = event_target_value(&ev).parse::<f64>().unwrap_or(0.0);
                            let id = price_id.clone();
                            spawn_local(async move {
                                let _ = commands::update_item_details(&id, "price", value).await;
                            });
                        }
                    />
                    <span class="unit-label">"R$"</span>
                    <input
                        type="number"
                        min="0"
                        placeholder="Qtd"
                        prop:value=quantity_value
                        on:input=move |ev| {
                            let value = event_target_value(&ev).parse::<f64>().unwrap_or(0.0);
                            let id = quantity_id.clone();
                            spawn_local(async move {
                                let _ = commands::update_item_details(&id, "quantity", value).await;
                            });
                        }
                    />
                    <span class="unit-label">"un"</span>
                    {line_total.map(|total| view! { <span class="line-total">{total}</span> })}
                </div>
            })}

            <button
                class="delete-btn"
                on:click=move |_| {
                    let id = remove_id.clone();
                    spawn_local(async move {
                        let _ = commands::delete_item(&id).await;
                    });
                }
            >
                "×"
            </button>
        </div>
    }
}
