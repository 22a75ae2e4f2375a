use crate::{
    components::layout::LoadingPlaceholder,
    state::auth::use_auth,
    utils::{navigation::follow_redirect, storage::CredentialStoreHandle},
};
use leptos::*;
use leptos_router::use_location;

pub mod decision;

use decision::{admin_decision, auth_decision};

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let location = use_location();
    let decision =
        create_memo(move |_| auth_decision(auth.get().status(), &location.pathname.get()));
    create_effect(move |_| {
        if let Some(redirect) = decision.get().redirect() {
            follow_redirect(redirect);
        }
    });
    view! {
        <Show
            when=move || decision.get().allows()
            fallback=move || {
                if decision.get().is_loading() {
                    view! { <LoadingPlaceholder /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

/// Reads the admin marker once when mounted. Unrelated to `RequireAuth`'s
/// identity state.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let store = use_context::<CredentialStoreHandle>().unwrap_or_else(CredentialStoreHandle::browser);
    let decision = admin_decision(store.store());
    let allowed = decision.allows();
    if let Some(redirect) = decision.redirect().cloned() {
        create_effect(move |_| follow_redirect(&redirect));
    }
    view! {
        <Show when=move || allowed fallback=|| ()>
            {children()}
        </Show>
    }
}
