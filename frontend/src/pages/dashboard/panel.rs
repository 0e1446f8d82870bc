use leptos::*;

use super::{
    components::{RecentActivityList, SelfMarkCard, StatsGrid, WeeklyTrend, WelcomeBanner},
    view_model::{use_dashboard_view_model, DashboardViewModel},
};
use crate::components::{
    error::InlineErrorMessage,
    layout::{Layout, LoadingSpinner},
};

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <Layout title="Dashboard">
            <DashboardPanel />
        </Layout>
    }
}

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let vm = use_dashboard_view_model();
    view! { <DashboardView vm=vm /> }
}

#[component]
pub fn DashboardView(vm: DashboardViewModel) -> impl IntoView {
    view! {
        {move || match vm.today_mark.get() {
            None => view! { <SelfMarkCard vm=vm /> }.into_view(),
            Some(status) => view! {
                <div class="space-y-8">
                    <WelcomeBanner vm=vm status=status />
                    <DashboardContent vm=vm />
                </div>
            }
            .into_view(),
        }}
    }
}

#[component]
fn DashboardContent(vm: DashboardViewModel) -> impl IntoView {
    view! {
        {move || match vm.data.get() {
            None => view! { <LoadingSpinner /> }.into_view(),
            Some(Err(err)) => {
                let error = create_rw_signal(Some(err));
                view! { <InlineErrorMessage error=error.into() /> }.into_view()
            }
            Some(Ok(data)) => view! {
                <div class="space-y-8">
                    <StatsGrid summary=data.summary />
                    <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                        <div class="lg:col-span-2">
                            <WeeklyTrend days=data.weekly />
                        </div>
                        <RecentActivityList items=data.recent />
                    </div>
                </div>
            }
            .into_view(),
        }}
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{ApiClient, AttendanceStatus};
    use crate::state::{profile::ProfileState, settings::SettingsStore, toast::ToastState};
    use crate::test_support::ssr::render_to_string;
    use crate::utils::storage::MemoryStorage;
    use chrono::NaiveDate;
    use std::rc::Rc;

    fn vm(marked: Option<AttendanceStatus>) -> DashboardViewModel {
        let today = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        let store = SettingsStore::new(Rc::new(MemoryStorage::new()));
        if let Some(status) = marked {
            store.record_self_mark(today, status).unwrap();
        }
        DashboardViewModel::new(
            ApiClient::new_with_base_url("http://unused"),
            ProfileState::new(store),
            ToastState::new(),
            today,
        )
    }

    #[test]
    fn unmarked_admin_sees_self_mark_prompt() {
        let html = render_to_string(|| view! { <DashboardView vm=vm(None) /> });
        assert!(html.contains("Mark your attendance for today"));
        assert!(html.contains("Thursday, 02 Jan 2025"));
        assert!(!html.contains("Add Employee"));
    }

    #[test]
    fn marked_admin_sees_status_and_loading_stats() {
        let html = render_to_string(|| {
            view! { <DashboardView vm=vm(Some(AttendanceStatus::Absent)) /> }
        });
        assert!(html.contains("Status: Absent"));
        assert!(html.contains("Add Employee"));
        assert!(html.contains("animate-spin"));
    }
}
