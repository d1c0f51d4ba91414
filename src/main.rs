//! Lista de Compras Frontend Entry Point

mod app;
mod commands;
mod components;
mod listing;
mod models;
mod prefs;
mod store;
mod subscription;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
