//! Runtime Configuration
//!
//! The host page may set `window.DIET_PLANNER_API_BASE` before the wasm bundle
//! loads; otherwise requests go to the page's own origin.

use js_sys::Reflect;
use wasm_bindgen::JsValue;

const API_BASE_GLOBAL: &str = "DIET_PLANNER_API_BASE";

fn read_global(key: &str) -> Option<String> {
    Reflect::get(&js_sys::global(), &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
}

pub fn api_base() -> String {
    read_global(API_BASE_GLOBAL).unwrap_or_default()
}

/// Join an endpoint path onto a base with exactly one `/`
pub fn join_endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

pub fn endpoint(path: &str) -> String {
    join_endpoint(&api_base(), path)
}
