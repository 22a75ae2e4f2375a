use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    components::guard::{RequireAdmin, RequireAuth},
    config,
    identity::IdentityHandle,
    pages::{
        admin::{AdminDashboardPage, AdminEntryPage},
        dashboard::DashboardPage,
        home::HomePage,
        login::LoginPage,
        not_found::NotFoundPage,
    },
    state::auth::{AuthProvider, ReturnToRedirect},
};

pub const ROUTE_PATHS: &[&str] = &["/", "/login", "/dashboard", "/admin", "/admin/dashboard"];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/dashboard"];

pub const ADMIN_ROUTE_PATHS: &[&str] = &["/admin/dashboard"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login", "/admin"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(IdentityHandle::browser(&config::runtime_config()));
    view! {
        <Title text="EduTech"/>
        <AuthProvider>
            <Router>
                <ReturnToRedirect/>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/admin" view=AdminEntryPage/>
                    <Route path="/admin/dashboard" view=ProtectedAdminDashboard/>
                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedAdminDashboard() -> impl IntoView {
    view! { <RequireAdmin><AdminDashboardPage/></RequireAdmin> }
}
