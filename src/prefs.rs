//! Dark-Mode Preference
//!
//! One persisted boolean: loaded from localStorage at startup, written
//! back on every change, and reflected as a class on the document element.

use web_sys::window;

const DARK_MODE_KEY: &str = "darkMode";

pub fn load_dark_mode() -> bool {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(DARK_MODE_KEY).ok().flatten())
        .map(|value| value == "true")
        .unwrap_or(false)
}

pub fn save_dark_mode(enabled: bool) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(DARK_MODE_KEY, if enabled { "true" } else { "false" });
    }
}

/// Toggle the document-level style switch
pub fn apply_dark_mode(enabled: bool) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };

    let classes = root.class_list();
    let result = if enabled {
        classes.add_1("dark")
    } else {
        classes.remove_1("dark")
    };
    if let Err(e) = result {
        web_sys::console::error_1(&e);
    }
}
