//! 404 page for unmatched routes.

use crate::components::empty_state::EmptyState;
use leptos::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface px-4">
            <div class="max-w-md w-full">
                <EmptyState
                    title="Page not found"
                    description="The page you are looking for does not exist."
                >
                    <a href="/" class="text-sm font-medium text-action-primary-bg hover:underline">
                        "Return home"
                    </a>
                </EmptyState>
            </div>
        </div>
    }
}
