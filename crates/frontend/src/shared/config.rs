//! Backend base-URL resolution.
//!
//! Every request goes through the single setting resolved here; no other
//! module builds backend URLs on its own.

use wasm_bindgen::JsValue;

/// Optional global set by the hosting page, e.g.
/// `<script>window.RENTAL_API_BASE = "https://rental-backend.example.com";</script>`
const BASE_URL_GLOBAL: &str = "RENTAL_API_BASE";

/// Get the base URL for API requests.
///
/// Uses the `RENTAL_API_BASE` window global when the deployment provides
/// one, otherwise derives the URL from the current location with the
/// backend's default port 3000.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };

    if let Ok(value) = js_sys::Reflect::get(&window, &JsValue::from_str(BASE_URL_GLOBAL)) {
        if let Some(base) = value.as_string() {
            if !base.trim().is_empty() {
                return base.trim().trim_end_matches('/').to_string();
            }
        }
    }

    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path like `/ordini/3`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
