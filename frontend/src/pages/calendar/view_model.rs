use chrono::NaiveDate;
use leptos::*;

use crate::{
    api::{ApiClient, ApiError, Employee},
    pages::calendar::{
        repository,
        utils::{DayStats, MonthAttendance, MonthKey},
    },
    state::{
        request_generation::{RequestGeneration, Ticket},
        toast::{use_toasts, ToastState},
    },
    utils::{filter::DepartmentFilter, time::today_local},
};

#[derive(Clone, Copy)]
pub struct CalendarViewModel {
    api: StoredValue<ApiClient>,
    toasts: ToastState,
    pub(crate) generation: StoredValue<RequestGeneration>,
    pub today: NaiveDate,
    pub month: RwSignal<MonthKey>,
    pub filter: RwSignal<DepartmentFilter>,
    pub roster: RwSignal<Vec<Employee>>,
    pub attendance: RwSignal<MonthAttendance>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
}

impl CalendarViewModel {
    pub fn new(api: ApiClient, toasts: ToastState, today: NaiveDate) -> Self {
        Self {
            api: store_value(api),
            toasts,
            generation: store_value(RequestGeneration::new()),
            today,
            month: create_rw_signal(MonthKey::containing(today)),
            filter: create_rw_signal(DepartmentFilter::All),
            roster: create_rw_signal(Vec::new()),
            attendance: create_rw_signal(MonthAttendance::default()),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
        }
    }

    pub fn load_roster(&self) {
        let api = self.api.get_value();
        let roster = self.roster;
        let toasts = self.toasts;
        spawn_local(async move {
            match repository::fetch_roster(&api).await {
                Ok(employees) => roster.set(employees),
                Err(err) => {
                    log::error!("Failed to load employees for calendar: {}", err);
                    toasts.error("Failed to load employees");
                }
            }
        });
    }

    pub fn load_month(&self, month: MonthKey) {
        let ticket = self.generation.with_value(RequestGeneration::begin);
        self.loading.set(true);
        let api = self.api.get_value();
        let vm = *self;
        spawn_local(async move {
            let result = repository::fetch_month(&api, month).await;
            vm.apply_month(ticket, month, result);
        });
    }

    /// Returns false when a newer month load has superseded this one.
    pub(crate) fn apply_month(
        &self,
        ticket: Ticket,
        month: MonthKey,
        result: Result<MonthAttendance, ApiError>,
    ) -> bool {
        let current = self
            .generation
            .try_with_value(|generation| generation.is_current(ticket))
            .unwrap_or(false);
        if !current {
            log::debug!("Dropping stale calendar load for {}", month.title());
            return false;
        }
        self.loading.set(false);
        match result {
            Ok(attendance) => {
                self.attendance.set(attendance);
                self.error.set(None);
            }
            Err(err) => {
                log::error!("Failed to load calendar for {}: {}", month.title(), err);
                self.attendance.set(MonthAttendance::default());
                self.error.set(Some(err));
                self.toasts.error("Failed to load calendar data");
            }
        }
        true
    }

    pub fn previous_month(&self) {
        self.month.update(|month| *month = month.shift(-1));
    }

    pub fn next_month(&self) {
        self.month.update(|month| *month = month.shift(1));
    }

    /// Recomputed from the stored raw records; the filter never refetches.
    pub fn day_stats(&self, date: NaiveDate) -> DayStats {
        let filter = self.filter.get();
        self.roster.with(|roster| {
            self.attendance
                .with(|attendance| attendance.day_stats(date, roster, &filter))
        })
    }
}

pub fn use_calendar_view_model() -> CalendarViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let vm = CalendarViewModel::new(api, use_toasts(), today_local());

    create_effect(move |_| vm.load_roster());
    create_effect(move |_| {
        let month = vm.month.get();
        vm.load_month(month);
    });

    vm
}
