use js_sys::{Object, Reflect};
use leptos_router::{use_navigate, NavigateOptions, State};
use wasm_bindgen::JsValue;

use crate::components::guard::decision::{Redirect, ReturnTo};

/// Key of the return target inside the router's history state.
pub const RETURN_TO_STATE_KEY: &str = "from";

pub fn return_to_state(return_to: &ReturnTo) -> JsValue {
    let state = Object::new();
    let _ = Reflect::set(
        &state,
        &JsValue::from_str(RETURN_TO_STATE_KEY),
        &JsValue::from_str(return_to.as_str()),
    );
    state.into()
}

pub fn return_to_from_state(state: &State) -> Option<ReturnTo> {
    let value = state.0.as_ref()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    Reflect::get(value, &JsValue::from_str(RETURN_TO_STATE_KEY))
        .ok()?
        .as_string()
        .map(|path| ReturnTo::from_location(&path))
}

pub fn navigate_options(redirect: &Redirect) -> NavigateOptions {
    NavigateOptions {
        replace: redirect.replace,
        state: State(redirect.return_to.as_ref().map(return_to_state)),
        ..Default::default()
    }
}

/// Must run inside a `<Router/>`.
pub fn follow_redirect(redirect: &Redirect) {
    log::debug!(
        "Guard redirecting to {} (return to {:?})",
        redirect.to,
        redirect.return_to.as_ref().map(ReturnTo::as_str)
    );
    let navigate = use_navigate();
    navigate(redirect.to, navigate_options(redirect));
}
