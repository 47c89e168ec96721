/// Typed wrappers around the browser extension APIs exposed by extension.js

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::settings::{Preferences, STORAGE_KEYS, Settings};

// Import JS bridge functions
#[wasm_bindgen(module = "/extension.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getStorage(keys: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setStorage(items: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn getActiveTabUrl() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn writeClipboard(text: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn openOptionsPage() -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn sleep(ms: u32) -> Result<(), JsValue>;
}

/// Only the history key, so the popup never overwrites preferences
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HistoryPatch<'a> {
    email_history: &'a [String],
}

async fn set_items<T: Serialize>(items: &T) -> Result<(), String> {
    let items_js = serde_wasm_bindgen::to_value(items)
        .map_err(|e| format!("Failed to serialize settings: {:?}", e))?;

    setStorage(items_js)
        .await
        .map_err(|e| format!("Failed to save settings: {:?}", e))
}

pub async fn load_settings() -> Result<Settings, String> {
    let keys_js = serde_wasm_bindgen::to_value(STORAGE_KEYS)
        .map_err(|e| format!("Failed to serialize keys: {:?}", e))?;

    let settings_js = getStorage(keys_js)
        .await
        .map_err(|e| format!("Failed to get settings: {:?}", e))?;

    if settings_js.is_null() || settings_js.is_undefined() {
        Ok(Settings::new())
    } else {
        serde_wasm_bindgen::from_value(settings_js)
            .map_err(|e| format!("Failed to parse settings: {:?}", e))
    }
}

pub async fn save_history(settings: &Settings) -> Result<(), String> {
    set_items(&HistoryPatch {
        email_history: &settings.email_history,
    })
    .await
}

pub async fn save_preferences(preferences: &Preferences) -> Result<(), String> {
    set_items(preferences).await
}

/// URL of the active tab in the current window, empty if there is none
pub async fn active_tab_url() -> Result<String, String> {
    let url_js = getActiveTabUrl()
        .await
        .map_err(|e| format!("Failed to query active tab: {:?}", e))?;

    Ok(url_js.as_string().unwrap_or_default())
}

pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    writeClipboard(text)
        .await
        .map_err(|e| format!("Failed to copy: {:?}", e))
}

pub async fn open_options_page() -> Result<(), String> {
    openOptionsPage()
        .await
        .map_err(|e| format!("Failed to open options: {:?}", e))
}

pub async fn delay(ms: u32) {
    if let Err(e) = sleep(ms).await {
        log::warn!("Timer failed: {:?}", e);
    }
}

pub fn close_window() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.close() {
            log::warn!("Failed to close window: {:?}", e);
        }
    }
}
