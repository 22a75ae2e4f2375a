//! Pure routing decisions for the admin and user guards.
//!
//! The two guards are independent trust domains: the admin guard only looks
//! at the stored admin marker, the user guard only looks at the identity
//! provider's status. Neither reads the other's inputs.

use crate::utils::storage::CredentialStore;

pub const ADMIN_TOKEN_KEY: &str = "admin_token";
pub const ADMIN_ENTRY_PATH: &str = "/admin";
pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Loading,
    Redirect(Redirect),
}

impl GuardDecision {
    pub fn allows(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, GuardDecision::Loading)
    }

    pub fn redirect(&self) -> Option<&Redirect> {
        match self {
            GuardDecision::Redirect(redirect) => Some(redirect),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub to: &'static str,
    pub replace: bool,
    pub return_to: Option<ReturnTo>,
}

/// Path the user originally asked for, without its leading `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReturnTo(String);

impl ReturnTo {
    /// Accepts `/dashboard`, `dashboard`, `#/dashboard` and `/#/dashboard`
    /// and stores all of them as `dashboard`.
    pub fn from_location(path: &str) -> Self {
        let trimmed = path.trim().trim_start_matches('/');
        let trimmed = trimmed
            .strip_prefix('#')
            .map(|rest| rest.trim_start_matches('/'))
            .unwrap_or(trimmed);
        Self(trimmed.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn route(&self) -> String {
        format!("/{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthStatus {
    pub is_loading: bool,
    pub is_authenticated: bool,
}

pub fn admin_decision(store: Option<&dyn CredentialStore>) -> GuardDecision {
    let present = store
        .and_then(|store| store.read(ADMIN_TOKEN_KEY))
        .map(|value| !value.is_empty())
        .unwrap_or(false);
    if present {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(Redirect {
            to: ADMIN_ENTRY_PATH,
            replace: true,
            return_to: None,
        })
    }
}

pub fn auth_decision(status: AuthStatus, current_path: &str) -> GuardDecision {
    if status.is_loading {
        return GuardDecision::Loading;
    }
    if status.is_authenticated {
        return GuardDecision::Allow;
    }
    GuardDecision::Redirect(Redirect {
        to: LOGIN_PATH,
        replace: true,
        return_to: Some(ReturnTo::from_location(current_path)),
    })
}
