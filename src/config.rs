//! Runtime Configuration
//!
//! Compile-time defaults (`PROPERTY_API_URL`) can be overridden by a
//! `window.__PROPERTY_SERVICE_CONFIG__ = { baseUrl, timeoutMs }` object
//! set before the bundle loads.

use property_search::ApiConfig;
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "__PROPERTY_SERVICE_CONFIG__";

pub fn load_config() -> ApiConfig {
    let defaults = ApiConfig::default();
    let Some(window) = web_sys::window() else {
        return defaults;
    };

    let raw = match js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) {
        Ok(raw) if !raw.is_undefined() && !raw.is_null() => raw,
        _ => {
            log::info!("Using API at {}", defaults.base_url);
            return defaults;
        }
    };

    match serde_wasm_bindgen::from_value::<serde_json::Value>(raw) {
        Ok(overrides) => {
            let config = defaults.merged_with(&overrides);
            log::info!("Using API at {} (timeout {} ms)", config.base_url, config.timeout_ms);
            config
        }
        Err(e) => {
            log::warn!("Ignoring malformed {}: {}", CONFIG_GLOBAL, e);
            defaults
        }
    }
}
