use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{str::FromStr, sync::OnceLock};

use crate::utils::storage;

pub const DEFAULT_IDENTITY_CLIENT: &str = "__EDUTECH_IDENTITY";
const ENV_GLOBAL: &str = "__EDUTECH_ENV";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Name of the `window` global holding the identity SDK client.
    #[serde(default, alias = "IDENTITY_CLIENT")]
    pub identity_client: Option<String>,
    #[serde(default, alias = "LOGOUT_RETURN_TO")]
    pub logout_return_to: Option<String>,
    #[serde(default, alias = "LOG_LEVEL")]
    pub log_level: Option<String>,
}

impl RuntimeConfig {
    pub fn identity_client_name(&self) -> &str {
        self.identity_client
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_IDENTITY_CLIENT)
    }

    pub fn log_level_filter(&self) -> LevelFilter {
        self.log_level
            .as_deref()
            .and_then(|level| LevelFilter::from_str(level.trim()).ok())
            .unwrap_or(LevelFilter::Info)
    }
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

// Expect optional global object: window.__EDUTECH_ENV = { identity_client: "..." }
fn snapshot_from_globals() -> Option<RuntimeConfig> {
    let window = storage::window().ok()?;
    let any = js_sys::Reflect::get(&window, &ENV_GLOBAL.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let json = js_sys::JSON::stringify(&any).ok()?.as_string()?;
    parse_runtime_config(&json)
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = storage::window().ok()?.location().origin().ok()?;
    let resp = reqwest::Client::new()
        .get(format!("{origin}/config.json"))
        .send()
        .await
        .ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

fn parse_runtime_config(json: &str) -> Option<RuntimeConfig> {
    match serde_json::from_str(json) {
        Ok(config) => Some(config),
        Err(err) => {
            log::warn!("Ignoring malformed runtime config: {err}");
            None
        }
    }
}

/// Resolves the runtime config once: `window.__EDUTECH_ENV` wins over
/// `config.json`, and defaults apply when neither is present.
pub async fn init() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    let resolved = match snapshot_from_globals() {
        Some(config) => config,
        None => fetch_runtime_config().await.unwrap_or_default(),
    };
    RUNTIME_CONFIG.get_or_init(|| resolved).clone()
}

pub fn runtime_config() -> RuntimeConfig {
    RUNTIME_CONFIG.get().cloned().unwrap_or_default()
}
