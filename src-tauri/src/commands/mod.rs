//! Command Layer
//!
//! Tauri command handlers exposed to the frontend.

mod item_cmd;

pub use item_cmd::*;
