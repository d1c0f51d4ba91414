//! Remote Snapshot Subscription
//!
//! Long-lived listener for the backend's items-changed event. Every event
//! carries the full current collection and replaces the local view
//! wholesale (last snapshot wins, no merging). The listener is registered
//! once when the app mounts and detached when the owning scope is
//! disposed.

use leptos::prelude::*;
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::models::Item;
use crate::store::{store_replace_items, AppStore};

/// Event emitted by the backend whenever the items collection changes
const ITEMS_CHANGED_EVENT: &str = "items-changed";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "event"])]
    async fn listen(event: &str, handler: &JsValue) -> Result<JsValue, JsValue>;
}

/// Tauri event envelope; only the payload matters here
#[derive(Deserialize)]
struct SnapshotEvent {
    payload: Vec<Item>,
}

/// Subscribe the store to item snapshots
pub fn subscribe_to_items(store: AppStore) {
    let unlisten: StoredValue<Option<js_sys::Function>, LocalStorage> = StoredValue::new_local(None);

    spawn_local(async move {
        let handler = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            match serde_wasm_bindgen::from_value::<SnapshotEvent>(event) {
                Ok(snapshot) => store_replace_items(&store, snapshot.payload),
                Err(e) => web_sys::console::error_1(
                    &format!("Ignorando snapshot inválido: {}", e).into(),
                ),
            }
        });

        match listen(ITEMS_CHANGED_EVENT, handler.as_ref()).await {
            Ok(unlisten_fn) => {
                // The closure stays registered for the lifetime of the listener
                handler.forget();
                if let Ok(function) = unlisten_fn.dyn_into::<js_sys::Function>() {
                    unlisten.set_value(Some(function));
                }
            }
            Err(e) => web_sys::console::error_1(
                &format!("Erro ao assinar snapshots: {:?}", e).into(),
            ),
        }
    });

    on_cleanup(move || {
        if let Some(function) = unlisten.try_get_value().flatten() {
            let _ = function.call0(&JsValue::NULL);
        }
    });
}
