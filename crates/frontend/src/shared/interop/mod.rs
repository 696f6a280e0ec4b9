//! Bindings to the page's third-party scripts.
//!
//! The libraries are loaded by `index.html` as globals; nothing here
//! reimplements them. Call [`library_available`] before touching a binding,
//! an import of a missing global throws.

pub mod gsap;
pub mod headroom;
pub mod lenis;
pub mod marquee;
pub mod split_type;
pub mod swiper;

use serde::Serialize;
use wasm_bindgen::JsValue;

/// Whether `window[name]` is defined.
pub fn library_available(name: &str) -> bool {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .map(|value| !value.is_undefined() && !value.is_null())
        .unwrap_or(false)
}

/// Converts an options struct into a plain JS object.
///
/// Uses the JSON-compatible serializer so maps become objects, not `Map`s.
pub fn to_js<T: Serialize>(options: &T) -> JsValue {
    match options.serialize(&serde_wasm_bindgen::Serializer::json_compatible()) {
        Ok(value) => value,
        Err(err) => {
            log::error!("Failed to convert options for JS: {}", err);
            JsValue::UNDEFINED
        }
    }
}

/// Sets `key` on a JS object, used for callback-valued options.
pub fn set_property(target: &JsValue, key: &str, value: &JsValue) {
    if let Err(err) = js_sys::Reflect::set(target, &JsValue::from_str(key), value) {
        log::warn!("Failed to set option '{}': {:?}", key, err);
    }
}
