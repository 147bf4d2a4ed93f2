//! Hook attaching introspection affordances to the JS global scope.

use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use yew::prelude::*;

const GLOBAL_KEY: &str = "__agentSessionDebug";

/// Attach a debug marker object to `window` for the lifetime of the
/// view, and detach it in the effect destructor. Gated by a flag
/// resolved at startup from the app config rather than at build time,
/// so a deployed client can opt in.
#[hook]
pub fn use_debug_mode(enabled: bool) {
    use_effect_with(enabled, move |enabled| {
        let attached = *enabled && attach();
        move || {
            if attached {
                detach();
            }
        }
    });
}

fn attach() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let info = js_sys::Object::new();
    let _ = Reflect::set(
        &info,
        &JsValue::from_str("version"),
        &JsValue::from_str(env!("CARGO_PKG_VERSION")),
    );
    let _ = Reflect::set(
        &info,
        &JsValue::from_str("attachedAt"),
        &js_sys::Date::new_0().to_iso_string().into(),
    );
    Reflect::set(window.as_ref(), &JsValue::from_str(GLOBAL_KEY), &info).is_ok()
}

fn detach() {
    if let Some(window) = web_sys::window() {
        let target: &js_sys::Object = window.unchecked_ref();
        let _ = Reflect::delete_property(target, &JsValue::from_str(GLOBAL_KEY));
    }
}
