//! Bridge to the hosted identity provider.
//!
//! The provider owns login, logout and session state. This crate only asks it
//! for the current session and hands control to it for the two redirects.

use futures::future::LocalBoxFuture;
use leptos::use_context;
use serde::{Deserialize, Serialize};
use std::{ops::Deref, rc::Rc};

use crate::{components::guard::decision::ReturnTo, config::RuntimeConfig};

mod browser;

pub use browser::BrowserIdentity;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityUser {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentitySession {
    pub user: Option<IdentityUser>,
    pub is_authenticated: bool,
    /// Set when the page load is the provider's login callback.
    pub return_to: Option<ReturnTo>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("identity provider unavailable: {0}")]
    Unavailable(String),
    #[error("identity provider call failed: {0}")]
    Sdk(String),
}

pub trait IdentityProvider {
    fn resolve(&self) -> LocalBoxFuture<'static, Result<IdentitySession, IdentityError>>;
    fn login(&self, return_to: Option<&ReturnTo>) -> Result<(), IdentityError>;
    fn logout(&self) -> Result<(), IdentityError>;
}

#[derive(Clone)]
pub struct IdentityHandle(Rc<dyn IdentityProvider>);

impl IdentityHandle {
    pub fn new(provider: impl IdentityProvider + 'static) -> Self {
        Self(Rc::new(provider))
    }

    pub fn browser(config: &RuntimeConfig) -> Self {
        Self::new(BrowserIdentity::from_config(config))
    }
}

impl Deref for IdentityHandle {
    type Target = dyn IdentityProvider;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

pub fn use_identity() -> IdentityHandle {
    use_context::<IdentityHandle>()
        .unwrap_or_else(|| IdentityHandle::browser(&crate::config::runtime_config()))
}

/// True when the query string carries an OAuth callback (`code` or `error`
/// together with `state`).
pub fn is_redirect_callback(search: &str) -> bool {
    let mut has_result = false;
    let mut has_state = false;
    for pair in search.trim_start_matches('?').split('&') {
        match pair.split('=').next().unwrap_or_default() {
            "code" | "error" => has_result = true,
            "state" => has_state = true,
            _ => {}
        }
    }
    has_result && has_state
}
