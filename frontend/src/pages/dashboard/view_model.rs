use chrono::NaiveDate;
use leptos::*;

use crate::{
    api::{ApiClient, ApiError, AttendanceStatus},
    pages::dashboard::repository::{self, DashboardData, SelfMarkOutcome},
    state::{
        profile::{use_profile, ProfileState},
        toast::{use_toasts, ToastState},
    },
    utils::{storage::StorageError, time::today_local},
};

type MarkResult = (AttendanceStatus, Result<SelfMarkOutcome, StorageError>);

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    toasts: ToastState,
    pub today: NaiveDate,
    pub data: Resource<(), Result<DashboardData, ApiError>>,
    pub today_mark: RwSignal<Option<AttendanceStatus>>,
    pub mark_action: Action<AttendanceStatus, MarkResult>,
}

impl DashboardViewModel {
    pub fn new(api: ApiClient, profile: ProfileState, toasts: ToastState, today: NaiveDate) -> Self {
        let api_for_data = api.clone();
        let data = create_resource(
            || (),
            move |_| {
                let api = api_for_data.clone();
                async move {
                    let result = repository::fetch_dashboard(&api).await;
                    if let Err(err) = &result {
                        log::error!("Failed to load dashboard stats: {}", err);
                    }
                    result
                }
            },
        );

        let mark_action = create_action(move |status: &AttendanceStatus| {
            let api = api.clone();
            let store = profile.store();
            let employee_id = profile.current().with_untracked(|p| p.employee_id.clone());
            let status = *status;
            async move {
                let result =
                    repository::self_mark(&api, &store, employee_id.as_deref(), today, status)
                        .await;
                (status, result)
            }
        });

        Self {
            toasts,
            today,
            data,
            today_mark: create_rw_signal(profile.store().self_mark(today)),
            mark_action,
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.today_mark.get().is_some()
    }

    pub fn mark(&self, status: AttendanceStatus) {
        if self.mark_action.pending().get_untracked() {
            return;
        }
        self.mark_action.dispatch(status);
    }

    pub(crate) fn on_mark_finished(
        &self,
        status: AttendanceStatus,
        result: Result<SelfMarkOutcome, StorageError>,
    ) {
        match result {
            Ok(SelfMarkOutcome::Synced) => {
                self.today_mark.set(Some(status));
                self.toasts
                    .success(format!("You are marked {} for today", status));
                self.data.refetch();
            }
            Ok(SelfMarkOutcome::LocalOnly) => {
                self.today_mark.set(Some(status));
                self.toasts
                    .warning(format!("Marked {} on this device only", status));
            }
            Err(err) => {
                log::error!("Failed to record self mark: {}", err);
                self.toasts.error("Failed to record your attendance");
            }
        }
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let vm = DashboardViewModel::new(api, use_profile(), use_toasts(), today_local());

    create_effect(move |_| {
        if let Some((status, result)) = vm.mark_action.value().get() {
            vm.on_mark_finished(status, result);
        }
    });

    vm
}
