use crate::{
    components::{auth_button::AuthButton, guard::decision::ReturnTo},
    state::auth::use_auth,
    utils::navigation::return_to_from_state,
};
use leptos::*;
use leptos_router::{use_location, use_navigate, NavigateOptions};

pub const DEFAULT_LANDING_PATH: &str = "/dashboard";

pub fn landing_path(return_to: Option<&ReturnTo>) -> String {
    return_to
        .map(ReturnTo::route)
        .unwrap_or_else(|| DEFAULT_LANDING_PATH.to_string())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let location = use_location();
    let return_to = location.state.with_untracked(return_to_from_state);
    let (auth, _) = use_auth();

    let target = landing_path(return_to.as_ref());
    create_effect(move |_| {
        if auth.with(|state| !state.loading && state.is_authenticated) {
            let navigate = use_navigate();
            navigate(
                &target,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface px-4">
            <div class="max-w-md w-full space-y-6 text-center">
                <h2 class="text-3xl font-extrabold text-fg">"Sign in to EduTech"</h2>
                <p class="text-sm text-fg-muted">
                    "You will be sent to our identity provider and brought back here."
                </p>
                <div class="flex justify-center">
                    <AuthButton return_to=return_to />
                </div>
            </div>
        </div>
    }
}
