#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::components::guard::decision::{ReturnTo, ADMIN_TOKEN_KEY};
    use crate::identity::{
        IdentityError, IdentityHandle, IdentityProvider, IdentitySession, IdentityUser,
    };
    use crate::state::auth::AuthState;
    use crate::utils::storage::{CredentialStoreHandle, MemoryStorage};
    use futures::{future::LocalBoxFuture, FutureExt};
    use leptos::*;
    use std::{cell::RefCell, rc::Rc};

    #[derive(Debug, Clone, PartialEq)]
    pub enum IdentityCall {
        Login(Option<ReturnTo>),
        Logout,
    }

    #[derive(Clone, Default)]
    pub struct StaticIdentity {
        session: IdentitySession,
        error: Option<IdentityError>,
        calls: Rc<RefCell<Vec<IdentityCall>>>,
    }

    impl StaticIdentity {
        pub fn signed_in(user: IdentityUser) -> Self {
            Self {
                session: IdentitySession {
                    user: Some(user),
                    is_authenticated: true,
                    return_to: None,
                },
                ..Self::default()
            }
        }

        pub fn signed_out() -> Self {
            Self::default()
        }

        pub fn failing(error: IdentityError) -> Self {
            Self {
                error: Some(error),
                ..Self::default()
            }
        }

        pub fn calls(&self) -> Vec<IdentityCall> {
            self.calls.borrow().clone()
        }
    }

    impl IdentityProvider for StaticIdentity {
        fn resolve(&self) -> LocalBoxFuture<'static, Result<IdentitySession, IdentityError>> {
            let result = match &self.error {
                Some(err) => Err(err.clone()),
                None => Ok(self.session.clone()),
            };
            async move { result }.boxed_local()
        }

        fn login(&self, return_to: Option<&ReturnTo>) -> Result<(), IdentityError> {
            self.calls
                .borrow_mut()
                .push(IdentityCall::Login(return_to.cloned()));
            Ok(())
        }

        fn logout(&self) -> Result<(), IdentityError> {
            self.calls.borrow_mut().push(IdentityCall::Logout);
            Ok(())
        }
    }

    pub fn student() -> IdentityUser {
        IdentityUser {
            email: Some("student@edutech.test".into()),
            name: Some("Sam Student".into()),
        }
    }

    pub fn provide_auth(state: AuthState) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(state);
        provide_context((auth, set_auth));
        (auth, set_auth)
    }

    pub fn provide_signed_in(user: IdentityUser) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        provide_auth(AuthState {
            user: Some(user),
            is_authenticated: true,
            loading: false,
            return_to: None,
        })
    }

    pub fn provide_identity(identity: StaticIdentity) -> StaticIdentity {
        provide_context(IdentityHandle::new(identity.clone()));
        identity
    }

    pub fn provide_admin_token(token: Option<&str>) {
        let store = MemoryStorage::default();
        if let Some(token) = token {
            store.insert(ADMIN_TOKEN_KEY, token);
        }
        provide_context(CredentialStoreHandle::new(store));
    }
}
