use leptos::*;

/// Where the admin guard sends visitors without an admin marker.
#[component]
pub fn AdminEntryPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface px-4">
            <div class="max-w-md w-full space-y-4 text-center">
                <h2 class="text-2xl font-bold text-fg">"Administrator access"</h2>
                <p class="text-sm text-fg-muted">
                    "Sign in through the administrator portal to manage EduTech."
                </p>
                <a href="/" class="text-sm font-medium text-action-primary-bg hover:underline">
                    "Back to home"
                </a>
            </div>
        </div>
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <main class="max-w-7xl mx-auto py-6 px-4 space-y-2">
                <h2 class="text-2xl font-bold text-fg">"Admin dashboard"</h2>
                <p class="text-sm text-fg-muted">"Manage students, tests and results."</p>
            </main>
        </div>
    }
}
