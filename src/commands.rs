//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands. Failures are logged to the
//! console and re-raised; callers decide whether to ignore them.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::models::Item;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

fn error_message(error: JsValue) -> String {
    error
        .as_string()
        .unwrap_or_else(|| format!("{:?}", error))
}

fn log_error(context: &str, message: &str) {
    web_sys::console::error_1(&format!("{} {}", context, message).into());
}

// ========================
// Command Argument Structs
// ========================

#[derive(Serialize)]
pub struct CreateItemArgs<'a> {
    pub name: &'a str,
    pub category: &'a str,
}

#[derive(Serialize)]
struct IdArgs<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct UpdateDetailsArgs<'a> {
    id: &'a str,
    field: &'a str,
    value: f64,
}

// ========================
// Item Commands
// ========================

pub async fn list_items() -> Result<Vec<Item>, String> {
    let result = invoke("list_items", JsValue::NULL).await.map_err(|e| {
        let msg = error_message(e);
        log_error("Erro ao carregar itens:", &msg);
        msg
    })?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn create_item(args: &CreateItemArgs<'_>) -> Result<Option<Item>, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke("create_item", js_args).await.map_err(|e| {
        let msg = error_message(e);
        log_error("Erro ao adicionar item:", &msg);
        msg
    })?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn toggle_item(id: &str) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    invoke("toggle_item", js_args).await.map_err(|e| {
        let msg = error_message(e);
        log_error("Erro ao atualizar item:", &msg);
        msg
    })?;
    Ok(())
}

pub async fn delete_item(id: &str) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    invoke("delete_item", js_args).await.map_err(|e| {
        let msg = error_message(e);
        log_error("Erro ao remover item:", &msg);
        msg
    })?;
    Ok(())
}

pub async fn update_item_details(id: &str, field: &'static str, value: f64) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&UpdateDetailsArgs { id, field, value })
        .map_err(|e| e.to_string())?;
    invoke("update_item_details", js_args).await.map_err(|e| {
        let msg = error_message(e);
        log_error("Erro ao atualizar detalhes:", &msg);
        msg
    })?;
    Ok(())
}
