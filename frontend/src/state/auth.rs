use crate::{
    components::guard::decision::{AuthStatus, ReturnTo},
    identity::{use_identity, IdentityError, IdentityHandle, IdentitySession, IdentityUser},
};
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<IdentityUser>,
    pub is_authenticated: bool,
    pub loading: bool,
    pub return_to: Option<ReturnTo>,
}

impl AuthState {
    pub fn status(&self) -> AuthStatus {
        AuthStatus {
            is_loading: self.loading,
            is_authenticated: self.is_authenticated,
        }
    }

    pub fn apply_session(&mut self, result: Result<IdentitySession, IdentityError>) {
        self.loading = false;
        match result {
            Ok(session) => {
                self.is_authenticated = session.is_authenticated;
                self.user = session.user.filter(|_| session.is_authenticated);
                self.return_to = session.return_to;
            }
            Err(err) => {
                log::warn!("Identity session unavailable: {err}");
                self.sign_out();
            }
        }
    }

    pub fn sign_out(&mut self) {
        self.user = None;
        self.is_authenticated = false;
        self.loading = false;
        self.return_to = None;
    }
}

fn create_auth_context(identity: IdentityHandle) -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState {
        loading: true,
        ..AuthState::default()
    });

    spawn_local(async move {
        let result = identity.resolve().await;
        set_auth_state.update(|state| state.apply_session(result));
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context(use_identity());
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub fn login(identity: &IdentityHandle, return_to: Option<&ReturnTo>) {
    if let Err(err) = identity.login(return_to) {
        log::warn!("Login redirect failed: {err}");
    }
}

/// Clears local state even when the provider call fails.
pub fn logout(
    identity: &IdentityHandle,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), IdentityError> {
    let result = identity.logout();
    set_auth_state.update(AuthState::sign_out);
    result
}

/// Sends the user back to the page they asked for before the provider's
/// login round-trip.
#[component]
pub fn ReturnToRedirect() -> impl IntoView {
    let (auth, set_auth) = use_auth();
    create_effect(move |_| {
        let Some(return_to) = auth.with(|state| state.return_to.clone()) else {
            return;
        };
        set_auth.update(|state| state.return_to = None);
        log::debug!("Returning to {} after login", return_to.route());
        let navigate = use_navigate();
        navigate(
            &return_to.route(),
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn use_auth_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_auth();
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated);
            assert!(!snapshot.loading);
            assert!(snapshot.user.is_none());
        });
    }

    #[test]
    fn apply_session_marks_authenticated_user() {
        let mut state = AuthState {
            loading: true,
            ..AuthState::default()
        };
        state.apply_session(Ok(IdentitySession {
            user: Some(IdentityUser {
                email: Some("kid@school.test".into()),
                name: None,
            }),
            is_authenticated: true,
            return_to: Some(ReturnTo::from_location("/dashboard")),
        }));
        assert!(!state.loading);
        assert!(state.is_authenticated);
        assert_eq!(
            state.user.and_then(|u| u.email).as_deref(),
            Some("kid@school.test")
        );
        assert_eq!(state.return_to.map(|r| r.route()).as_deref(), Some("/dashboard"));
    }

    #[test]
    fn apply_session_drops_user_when_not_authenticated() {
        let mut state = AuthState::default();
        state.apply_session(Ok(IdentitySession {
            user: Some(IdentityUser::default()),
            is_authenticated: false,
            return_to: None,
        }));
        assert!(!state.is_authenticated);
        assert!(state.user.is_none());
    }

    #[test]
    fn apply_session_treats_errors_as_signed_out() {
        let mut state = AuthState {
            user: Some(IdentityUser::default()),
            is_authenticated: true,
            loading: true,
            return_to: None,
        };
        state.apply_session(Err(IdentityError::Unavailable("no sdk".into())));
        assert_eq!(state, AuthState::default());
    }

    #[test]
    fn status_mirrors_flags() {
        let state = AuthState {
            loading: true,
            is_authenticated: true,
            ..AuthState::default()
        };
        assert_eq!(
            state.status(),
            AuthStatus {
                is_loading: true,
                is_authenticated: true
            }
        );
    }
}
