use crate::{
    components::guard::decision::ReturnTo,
    identity::use_identity,
    state::auth::{self, use_auth},
};
use leptos::*;

const BUTTON_CLASS: &str = "px-3 py-2 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover disabled:opacity-50";

/// Login or logout depending on the identity provider's state.
#[component]
pub fn AuthButton(#[prop(default = None)] return_to: Option<ReturnTo>) -> impl IntoView {
    let (auth, set_auth) = use_auth();
    let identity = use_identity();

    let on_login = {
        let identity = identity.clone();
        move |_: ev::MouseEvent| auth::login(&identity, return_to.as_ref())
    };
    let on_logout = move |_: ev::MouseEvent| {
        if let Err(err) = auth::logout(&identity, set_auth) {
            log::warn!("Logout failed: {err}");
        }
    };

    view! {
        <div class="flex items-center gap-3">
            {move || {
                let state = auth.get();
                if state.loading {
                    view! {
                        <button class=BUTTON_CLASS disabled=true>
                            "Loading..."
                        </button>
                    }
                        .into_view()
                } else if state.is_authenticated {
                    let email = state.user.and_then(|user| user.email).unwrap_or_default();
                    let on_logout = on_logout.clone();
                    view! {
                        <span class="text-sm text-fg-muted">{email}</span>
                        <button class=BUTTON_CLASS on:click=on_logout>
                            "Log out"
                        </button>
                    }
                        .into_view()
                } else {
                    let on_login = on_login.clone();
                    view! {
                        <button class=BUTTON_CLASS on:click=on_login>
                            "Log in"
                        </button>
                    }
                        .into_view()
                }
            }}
        </div>
    }
}
