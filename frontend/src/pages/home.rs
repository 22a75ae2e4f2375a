use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Layout>
            <div class="py-12 px-4 text-center">
                <h1 class="text-4xl font-extrabold text-fg sm:text-5xl">
                    "EduTech"
                </h1>
                <p class="mt-3 max-w-md mx-auto text-base text-fg-muted sm:text-lg">
                    "Practice tests and feedback for every student."
                </p>
                <div class="mt-5 flex justify-center">
                    <a href="/dashboard" class="px-8 py-3 text-base font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover">
                        "Go to dashboard"
                    </a>
                </div>
            </div>
        </Layout>
    }
}
