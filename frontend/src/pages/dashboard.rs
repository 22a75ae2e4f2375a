use crate::{
    components::{
        chart::{BarChart, ChartData, ChartOptions},
        layout::Layout,
    },
    state::auth::use_auth,
};
use leptos::*;

pub fn greeting(email: Option<&str>) -> String {
    match email.map(str::trim).filter(|email| !email.is_empty()) {
        Some(email) => format!("Welcome back, {email}"),
        None => "Welcome back".to_string(),
    }
}

/// `results` defaults to an empty chart until a results source is wired in.
#[component]
pub fn DashboardPage(#[prop(optional, into)] results: MaybeSignal<ChartData>) -> impl IntoView {
    let (auth, _) = use_auth();
    let chart_options = ChartOptions {
        title: Some("Practice test results".into()),
        ..ChartOptions::default()
    };
    let heading = move || {
        auth.with(|state| greeting(state.user.as_ref().and_then(|user| user.email.as_deref())))
    };

    view! {
        <Layout>
            <div class="px-4 space-y-4">
                <div class="space-y-2">
                    <h2 class="text-2xl font-bold text-fg">{heading}</h2>
                    <p class="text-sm text-fg-muted">"Your practice tests and results will appear here."</p>
                </div>
                <BarChart data=results options=chart_options />
            </div>
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_uses_email_when_present() {
        assert_eq!(greeting(Some("kid@school.test")), "Welcome back, kid@school.test");
        assert_eq!(greeting(Some("  ")), "Welcome back");
        assert_eq!(greeting(None), "Welcome back");
    }
}
