use chrono::NaiveDate;
use leptos::*;

use crate::{
    api::{ApiClient, ApiError, AttendanceStatus},
    pages::attendance::{
        repository::{self, CommitOutcome},
        utils::AttendanceBoard,
    },
    state::{
        request_generation::{RequestGeneration, Ticket},
        toast::{use_toasts, ToastState},
    },
    utils::time::today_local,
};

#[derive(Clone, Copy)]
pub struct AttendanceViewModel {
    api: StoredValue<ApiClient>,
    toasts: ToastState,
    generation: StoredValue<RequestGeneration>,
    pub date: RwSignal<NaiveDate>,
    pub board: RwSignal<AttendanceBoard>,
    pub search: RwSignal<String>,
    pub loading: RwSignal<bool>,
    pub load_error: RwSignal<Option<ApiError>>,
    pub commit_action: Action<AttendanceBoard, (NaiveDate, Result<CommitOutcome, ApiError>)>,
}

impl AttendanceViewModel {
    pub fn new(api: ApiClient, toasts: ToastState, date: NaiveDate) -> Self {
        let api_for_commit = api.clone();
        let commit_action = create_action(move |board: &AttendanceBoard| {
            let api = api_for_commit.clone();
            let board = board.clone();
            async move { (board.date(), repository::commit_drafts(&api, &board).await) }
        });

        Self {
            api: store_value(api),
            toasts,
            generation: store_value(RequestGeneration::new()),
            date: create_rw_signal(date),
            board: create_rw_signal(AttendanceBoard::empty(date)),
            search: create_rw_signal(String::new()),
            loading: create_rw_signal(false),
            load_error: create_rw_signal(None),
            commit_action,
        }
    }

    /// Starts a load for `date`. Only the most recent load is applied.
    pub fn load(&self, date: NaiveDate) {
        let ticket = self.generation.with_value(RequestGeneration::begin);
        self.loading.set(true);
        let api = self.api.get_value();
        let vm = *self;
        spawn_local(async move {
            let result = repository::load_day(&api, date).await;
            vm.apply_load(ticket, date, result);
        });
    }

    /// Returns false when the response was superseded and dropped.
    pub(crate) fn apply_load(
        &self,
        ticket: Ticket,
        date: NaiveDate,
        result: Result<AttendanceBoard, ApiError>,
    ) -> bool {
        let current = self
            .generation
            .try_with_value(|generation| generation.is_current(ticket))
            .unwrap_or(false);
        if !current {
            log::debug!("Dropping stale attendance load for {}", date);
            return false;
        }
        self.loading.set(false);
        match result {
            Ok(board) => {
                self.board.set(board);
                self.load_error.set(None);
            }
            Err(err) => {
                log::error!("Failed to load attendance for {}: {}", date, err);
                self.board.set(AttendanceBoard::empty(date));
                self.load_error.set(Some(err));
                self.toasts.error("Failed to load attendance data");
            }
        }
        true
    }

    /// True while a load or a commit is in flight. Edits are refused then,
    /// since the pending response replaces the board.
    pub fn is_busy(&self) -> bool {
        self.loading.get() || self.commit_action.pending().get()
    }

    fn is_busy_untracked(&self) -> bool {
        self.loading.get_untracked() || self.commit_action.pending().get_untracked()
    }

    pub fn set_status(&self, employee_id: &str, status: AttendanceStatus) {
        if self.is_busy_untracked() {
            log::debug!("Ignoring edit for {} while the board is busy", employee_id);
            return;
        }
        self.board
            .update(|board| board.set_status(employee_id, status));
    }

    pub fn bulk_set_status(&self, status: AttendanceStatus) {
        if self.is_busy_untracked() {
            log::debug!("Ignoring bulk {} while the board is busy", status);
            return;
        }
        self.board.update(|board| board.bulk_set_status(status));
        self.toasts
            .info(format!("All employees set to {}", status));
    }

    pub fn commit(&self) {
        if self.is_busy_untracked() {
            return;
        }
        self.commit_action.dispatch(self.board.get_untracked());
    }

    /// Toasts the outcome of a finished commit. Returns the date to reload,
    /// which is only set when the user is still looking at the saved day.
    pub(crate) fn on_commit_finished(
        &self,
        committed_date: NaiveDate,
        result: Result<CommitOutcome, ApiError>,
    ) -> Option<NaiveDate> {
        match result {
            Ok(CommitOutcome::NoChanges) => {
                self.toasts.info("No changes to commit");
                None
            }
            Ok(CommitOutcome::Saved { count }) => {
                let noun = if count == 1 { "record" } else { "records" };
                self.toasts
                    .success(format!("Committed {} attendance {}", count, noun));
                (self.date.get_untracked() == committed_date).then_some(committed_date)
            }
            Err(_) => {
                self.toasts
                    .error("Failed to save attendance. Please try again.");
                None
            }
        }
    }
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let vm = AttendanceViewModel::new(api, use_toasts(), today_local());

    create_effect(move |_| {
        let date = vm.date.get();
        vm.load(date);
    });
    create_effect(move |_| {
        if let Some((committed_date, result)) = vm.commit_action.value().get() {
            if let Some(date) = vm.on_commit_finished(committed_date, result) {
                vm.load(date);
            }
        }
    });

    vm
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Department;
    use crate::pages::attendance::utils::tests::{date, employee};
    use crate::test_support::ssr::with_runtime;

    fn vm() -> AttendanceViewModel {
        AttendanceViewModel::new(
            ApiClient::new_with_base_url("http://unused"),
            ToastState::new(),
            date(),
        )
    }

    fn board_with(name: &str) -> AttendanceBoard {
        AttendanceBoard::from_server(
            date(),
            vec![employee("E1", name, Department::Hr)],
            Vec::new(),
        )
    }

    #[test]
    fn stale_load_is_dropped() {
        with_runtime(|| {
            let vm = vm();
            let first = vm.generation.with_value(RequestGeneration::begin);
            let second = vm.generation.with_value(RequestGeneration::begin);

            assert!(vm.apply_load(second, date(), Ok(board_with("Fresh"))));
            assert!(!vm.apply_load(first, date(), Ok(board_with("Stale"))));

            let board = vm.board.get_untracked();
            assert_eq!(board.employees()[0].full_name, "Fresh");
        });
    }

    #[test]
    fn failed_load_clears_board_and_records_error() {
        with_runtime(|| {
            let vm = vm();
            vm.board.set(board_with("Previous"));
            let ticket = vm.generation.with_value(RequestGeneration::begin);
            vm.apply_load(ticket, date(), Err(ApiError::request_failed("offline")));

            assert!(vm.board.get_untracked().employees().is_empty());
            assert_eq!(
                vm.load_error.get_untracked().map(|e| e.code),
                Some("REQUEST_FAILED".to_string())
            );
            assert_eq!(vm.toasts.items().get_untracked().len(), 1);
        });
    }

    #[test]
    fn bulk_set_announces_and_dirties_all_rows() {
        with_runtime(|| {
            let vm = vm();
            vm.board.set(board_with("Alice"));
            vm.search.set("nobody".into());
            vm.bulk_set_status(AttendanceStatus::Absent);

            let board = vm.board.get_untracked();
            assert!(board.draft("E1").unwrap().is_dirty);
            let toasts = vm.toasts.items().get_untracked();
            assert_eq!(toasts[0].message, "All employees set to Absent");
        });
    }

    #[test]
    fn failed_commit_keeps_drafts_and_reports_once() {
        with_runtime(|| {
            let vm = vm();
            let mut board = board_with("Alice");
            board.set_status("E1", AttendanceStatus::Present);
            vm.board.set(board.clone());

            vm.on_commit_finished(date(), Err(ApiError::unknown("boom")));

            assert_eq!(vm.board.get_untracked(), board);
            let toasts = vm.toasts.items().get_untracked();
            assert_eq!(toasts.len(), 1);
            assert_eq!(toasts[0].message, "Failed to save attendance. Please try again.");
        });
    }

    #[test]
    fn saved_commit_reloads_only_the_day_still_in_view() {
        with_runtime(|| {
            let vm = vm();
            let reload = vm.on_commit_finished(date(), Ok(CommitOutcome::Saved { count: 2 }));
            assert_eq!(reload, Some(date()));
            let toasts = vm.toasts.items().get_untracked();
            assert_eq!(toasts[0].message, "Committed 2 attendance records");

            let next_day = date().succ_opt().unwrap();
            vm.date.set(next_day);
            let reload = vm.on_commit_finished(date(), Ok(CommitOutcome::Saved { count: 1 }));
            assert_eq!(reload, None);
            let toasts = vm.toasts.items().get_untracked();
            assert_eq!(toasts[1].message, "Committed 1 attendance record");
        });
    }

    #[test]
    fn edits_are_refused_while_a_load_is_in_flight() {
        with_runtime(|| {
            let vm = vm();
            vm.board.set(board_with("Alice"));
            vm.loading.set(true);
            assert!(vm.is_busy());

            vm.set_status("E1", AttendanceStatus::Absent);
            vm.bulk_set_status(AttendanceStatus::Present);

            assert_eq!(vm.board.get_untracked(), board_with("Alice"));
            assert!(vm.toasts.items().get_untracked().is_empty());

            vm.loading.set(false);
            vm.set_status("E1", AttendanceStatus::Absent);
            assert!(vm.board.get_untracked().draft("E1").unwrap().is_dirty);
        });
    }

    #[test]
    fn noop_commit_only_informs() {
        with_runtime(|| {
            let vm = vm();
            vm.on_commit_finished(date(), Ok(CommitOutcome::NoChanges));
            let toasts = vm.toasts.items().get_untracked();
            assert_eq!(toasts[0].message, "No changes to commit");
        });
    }
}
