use futures::{future::LocalBoxFuture, FutureExt};
use js_sys::{Array, Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::{is_redirect_callback, IdentityError, IdentityProvider, IdentitySession, IdentityUser};
use crate::{components::guard::decision::ReturnTo, config::RuntimeConfig, utils::storage};

/// Talks to an SPA identity SDK client installed on `window` by the host page.
#[derive(Debug, Clone)]
pub struct BrowserIdentity {
    client_name: String,
    logout_return_to: Option<String>,
}

impl BrowserIdentity {
    pub fn from_config(config: &RuntimeConfig) -> Self {
        Self {
            client_name: config.identity_client_name().to_string(),
            logout_return_to: config.logout_return_to.clone(),
        }
    }

    fn client(&self) -> Result<JsValue, IdentityError> {
        let window = storage::window().map_err(IdentityError::Unavailable)?;
        let client = Reflect::get(&window, &JsValue::from_str(&self.client_name)).map_err(|_| {
            IdentityError::Unavailable(format!("cannot read window.{}", self.client_name))
        })?;
        if client.is_undefined() || client.is_null() {
            return Err(IdentityError::Unavailable(format!(
                "window.{} is not installed",
                self.client_name
            )));
        }
        Ok(client)
    }

    async fn session(self) -> Result<IdentitySession, IdentityError> {
        let client = self.client()?;

        let return_to = if current_search().is_some_and(|search| is_redirect_callback(&search)) {
            let result = call_async(&client, "handleRedirectCallback", &Array::new()).await?;
            clear_callback_query();
            app_state_return_to(&result)
        } else {
            None
        };

        let is_authenticated = call_async(&client, "isAuthenticated", &Array::new())
            .await?
            .as_bool()
            .unwrap_or(false);
        let user = if is_authenticated {
            user_from_js(&call_async(&client, "getUser", &Array::new()).await?)
        } else {
            None
        };

        Ok(IdentitySession {
            user,
            is_authenticated,
            return_to,
        })
    }

    fn logout_target(&self) -> Result<String, IdentityError> {
        if let Some(target) = &self.logout_return_to {
            return Ok(target.clone());
        }
        storage::window()
            .and_then(|w| w.location().origin().map_err(|_| "No location origin".to_string()))
            .map_err(IdentityError::Unavailable)
    }
}

impl IdentityProvider for BrowserIdentity {
    fn resolve(&self) -> LocalBoxFuture<'static, Result<IdentitySession, IdentityError>> {
        self.clone().session().boxed_local()
    }

    fn login(&self, return_to: Option<&ReturnTo>) -> Result<(), IdentityError> {
        let client = self.client()?;
        log::info!("Redirecting to identity provider login");
        call(&client, "loginWithRedirect", &Array::of1(&login_options(return_to))).map(|_| ())
    }

    fn logout(&self) -> Result<(), IdentityError> {
        let client = self.client()?;
        let options = logout_options(&self.logout_target()?);
        log::info!("Redirecting to identity provider logout");
        call(&client, "logout", &Array::of1(&options)).map(|_| ())
    }
}

/// `{ appState: { returnTo } }`, read back by `app_state_return_to` after the
/// callback.
fn login_options(return_to: Option<&ReturnTo>) -> Object {
    let options = Object::new();
    if let Some(target) = return_to {
        let app_state = Object::new();
        set(&app_state, "returnTo", &JsValue::from_str(target.as_str()));
        set(&options, "appState", &app_state);
    }
    options
}

fn logout_options(return_to: &str) -> Object {
    let params = Object::new();
    set(&params, "returnTo", &JsValue::from_str(return_to));
    let options = Object::new();
    set(&options, "logoutParams", &params);
    options
}

fn set(target: &Object, key: &str, value: &JsValue) {
    let _ = Reflect::set(target, &JsValue::from_str(key), value);
}

fn string_field(value: &JsValue, key: &str) -> Option<String> {
    Reflect::get(value, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
}

fn describe(method: &str, err: &JsValue) -> String {
    let detail = err
        .as_string()
        .or_else(|| string_field(err, "message"))
        .unwrap_or_else(|| "unknown error".to_string());
    format!("{method}: {detail}")
}

fn call(client: &JsValue, method: &str, args: &Array) -> Result<JsValue, IdentityError> {
    let function = Reflect::get(client, &JsValue::from_str(method))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
        .ok_or_else(|| IdentityError::Sdk(format!("`{method}` is not a function")))?;
    function
        .apply(client, args)
        .map_err(|err| IdentityError::Sdk(describe(method, &err)))
}

async fn call_async(client: &JsValue, method: &str, args: &Array) -> Result<JsValue, IdentityError> {
    match call(client, method, args)?.dyn_into::<Promise>() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .map_err(|err| IdentityError::Sdk(describe(method, &err))),
        Err(value) => Ok(value),
    }
}

fn user_from_js(value: &JsValue) -> Option<IdentityUser> {
    if value.is_undefined() || value.is_null() {
        return None;
    }
    Some(IdentityUser {
        email: string_field(value, "email"),
        name: string_field(value, "name"),
    })
}

fn app_state_return_to(result: &JsValue) -> Option<ReturnTo> {
    let app_state = Reflect::get(result, &JsValue::from_str("appState")).ok()?;
    if app_state.is_undefined() || app_state.is_null() {
        return None;
    }
    string_field(&app_state, "returnTo").map(|path| ReturnTo::from_location(&path))
}

fn current_search() -> Option<String> {
    storage::window().ok()?.location().search().ok()
}

fn clear_callback_query() {
    let Ok(window) = storage::window() else {
        return;
    };
    let Ok(pathname) = window.location().pathname() else {
        return;
    };
    if let Ok(history) = window.history() {
        if history
            .replace_state_with_url(&JsValue::NULL, "", Some(&pathname))
            .is_err()
        {
            log::warn!("Failed to strip login callback parameters from the URL");
        }
    }
}
