use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::empty_state::EmptyState,
    pages::{
        attendance::AttendancePage, calendar::CalendarPage, dashboard::DashboardPage,
        employees::EmployeesPage,
    },
    state::{
        notifications::provide_notification_center, profile::provide_profile,
        settings::SettingsStore, toast::provide_toasts,
    },
};

pub const ROUTE_PATHS: &[&str] = &["/", "/employees", "/attendance", "/calendar"];

pub fn mount_app() {
    mount_to_body(app_root);
}

/// Shared state every page reads from context.
pub fn provide_app_state(api: ApiClient, store: SettingsStore) {
    provide_context(api.clone());
    provide_toasts();
    provide_profile(store);
    provide_notification_center(api);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_app_state(ApiClient::new(), SettingsStore::browser());
    view! {
        <Title text="HR Dashboard" />
        <Router>
            <Routes>
                <Route path="/" view=DashboardPage/>
                <Route path="/employees" view=EmployeesPage/>
                <Route path="/attendance" view=AttendancePage/>
                <Route path="/calendar" view=CalendarPage/>
                <Route path="/*any" view=NotFound/>
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-slate-50">
            <div class="text-center space-y-4">
                <EmptyState title="Page not found" description="The page you requested does not exist." />
                <a href="/" class="text-sm font-bold text-indigo-600 hover:underline">"Back to dashboard"</a>
            </div>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn not_found_links_home() {
        let html = render_to_string(|| view! { <NotFound /> });
        assert!(html.contains("Page not found"));
        assert!(html.contains("href=\"/\""));
    }
}
