use leptos::*;

use crate::{
    api::{ApiClient, ApiError, AttendanceRecord, CreateEmployee, Employee},
    config::DIRECTORY_PAGE_SIZE,
    pages::employees::{
        export,
        repository,
        utils::{clamp_page, filter_employees, paginate, total_pages, EmployeeForm},
    },
    state::toast::{use_toasts, ToastState},
    utils::{filter::DepartmentFilter, time::now_local},
};

type HistoryResult = Option<Result<Vec<AttendanceRecord>, ApiError>>;

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    api: StoredValue<ApiClient>,
    toasts: ToastState,
    pub roster: RwSignal<Vec<Employee>>,
    pub loading: RwSignal<bool>,
    pub load_error: RwSignal<Option<ApiError>>,
    pub reload: RwSignal<u32>,
    pub search: RwSignal<String>,
    pub department: RwSignal<DepartmentFilter>,
    pub page: RwSignal<usize>,
    pub form: RwSignal<EmployeeForm>,
    pub form_open: RwSignal<bool>,
    pub form_error: RwSignal<Option<ApiError>>,
    pub pending_delete: RwSignal<Option<Employee>>,
    pub selected: RwSignal<Option<Employee>>,
    pub history: Resource<Option<String>, HistoryResult>,
    pub add_action: Action<CreateEmployee, Result<Employee, ApiError>>,
    pub delete_action: Action<String, Result<String, ApiError>>,
}

impl EmployeesViewModel {
    pub fn new(api: ApiClient, toasts: ToastState) -> Self {
        let selected = create_rw_signal(None::<Employee>);

        let api_for_history = api.clone();
        let history = create_resource(
            move || selected.get().map(|e| e.employee_id),
            move |employee_id| {
                let api = api_for_history.clone();
                async move {
                    let employee_id = employee_id?;
                    let result = repository::fetch_history(&api, &employee_id).await;
                    if let Err(err) = &result {
                        log::error!("Failed to load history for {}: {}", employee_id, err);
                    }
                    Some(result)
                }
            },
        );

        let api_for_add = api.clone();
        let add_action = create_action(move |request: &CreateEmployee| {
            let api = api_for_add.clone();
            let request = request.clone();
            async move { repository::add_employee(&api, request).await }
        });

        let api_for_delete = api.clone();
        let delete_action = create_action(move |employee_id: &String| {
            let api = api_for_delete.clone();
            let employee_id = employee_id.clone();
            async move { repository::remove_employee(&api, employee_id).await }
        });

        Self {
            api: store_value(api),
            toasts,
            roster: create_rw_signal(Vec::new()),
            loading: create_rw_signal(false),
            load_error: create_rw_signal(None),
            reload: create_rw_signal(0),
            search: create_rw_signal(String::new()),
            department: create_rw_signal(DepartmentFilter::All),
            page: create_rw_signal(1),
            form: create_rw_signal(EmployeeForm::default()),
            form_open: create_rw_signal(false),
            form_error: create_rw_signal(None),
            pending_delete: create_rw_signal(None),
            selected,
            history,
            add_action,
            delete_action,
        }
    }

    pub fn load(&self) {
        self.loading.set(true);
        let api = self.api.get_value();
        let vm = *self;
        spawn_local(async move {
            let result = repository::fetch_employees(&api).await;
            vm.apply_load(result);
        });
    }

    pub(crate) fn apply_load(&self, result: Result<Vec<Employee>, ApiError>) {
        self.loading.set(false);
        match result {
            Ok(employees) => {
                self.roster.set(employees);
                self.load_error.set(None);
            }
            Err(err) => {
                log::error!("Failed to load employees: {}", err);
                self.load_error.set(Some(err));
                self.toasts.error("Failed to load employees");
            }
        }
    }

    pub fn refresh(&self) {
        self.reload.update(|n| *n = n.wrapping_add(1));
    }

    pub fn filtered(&self) -> Vec<Employee> {
        let query = self.search.get();
        let department = self.department.get();
        self.roster
            .with(|roster| filter_employees(roster, &query, &department))
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), DIRECTORY_PAGE_SIZE)
    }

    /// The page shown in the indicator. The stored page is left as is when
    /// filters shrink the list.
    pub fn display_page(&self) -> usize {
        clamp_page(self.page.get(), self.total_pages())
    }

    pub fn visible(&self) -> Vec<Employee> {
        paginate(&self.filtered(), self.page.get(), DIRECTORY_PAGE_SIZE)
    }

    pub fn next_page(&self) {
        let total = self.total_pages();
        let current = clamp_page(self.page.get_untracked(), total);
        self.page.set(clamp_page(current + 1, total));
    }

    pub fn previous_page(&self) {
        let total = self.total_pages();
        let current = clamp_page(self.page.get_untracked(), total);
        self.page.set(clamp_page(current.saturating_sub(1), total));
    }

    pub fn open_form(&self) {
        self.form_error.set(None);
        self.form_open.set(true);
    }

    pub fn close_form(&self) {
        self.form_open.set(false);
        self.form_error.set(None);
    }

    /// Validates locally before anything is sent.
    pub fn submit_form(&self) {
        if self.add_action.pending().get_untracked() {
            return;
        }
        match self.form.with_untracked(EmployeeForm::validate) {
            Ok(request) => {
                self.form_error.set(None);
                self.add_action.dispatch(request);
            }
            Err(err) => self.form_error.set(Some(err)),
        }
    }

    pub(crate) fn on_added(&self, result: Result<Employee, ApiError>) {
        match result {
            Ok(employee) => {
                self.toasts
                    .success(format!("Employee added: {}", employee.full_name));
                self.form.update(EmployeeForm::reset);
                self.form_open.set(false);
                self.refresh();
            }
            Err(err) => {
                log::error!("Failed to add employee: {}", err);
                self.toasts.error(err.error.clone());
                self.form_error.set(Some(err));
            }
        }
    }

    pub fn request_delete(&self, employee: Employee) {
        self.pending_delete.set(Some(employee));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn confirm_delete(&self) {
        if let Some(employee) = self.pending_delete.get_untracked() {
            self.pending_delete.set(None);
            self.delete_action.dispatch(employee.employee_id);
        }
    }

    pub(crate) fn on_removed(&self, result: Result<String, ApiError>) {
        match result {
            Ok(employee_id) => {
                self.toasts.info("Employee removed");
                let was_selected = self
                    .selected
                    .with_untracked(|s| s.as_ref().is_some_and(|e| e.employee_id == employee_id));
                if was_selected {
                    self.selected.set(None);
                }
                self.refresh();
            }
            Err(err) => {
                log::error!("Failed to remove employee: {}", err);
                self.toasts.error("Failed to remove employee");
            }
        }
    }

    pub fn select(&self, employee: Employee) {
        self.selected.set(Some(employee));
    }

    pub fn close_detail(&self) {
        self.selected.set(None);
    }

    /// Exports the filtered list, ignoring pagination.
    pub fn export(&self) {
        let employees = self.roster.with_untracked(|roster| {
            filter_employees(
                roster,
                &self.search.get_untracked(),
                &self.department.get_untracked(),
            )
        });
        match export::export_employees(&employees, now_local()) {
            Ok(_) => {
                self.toasts.success("Downloading Report...");
            }
            Err(err) => {
                log::error!("Failed to export employees: {}", err);
                self.toasts.error("Failed to export PDF");
            }
        }
    }
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let vm = EmployeesViewModel::new(api, use_toasts());

    create_effect(move |_| {
        let _ = vm.reload.get();
        vm.load();
    });
    create_effect(move |_| {
        if let Some(result) = vm.add_action.value().get() {
            vm.on_added(result);
        }
    });
    create_effect(move |_| {
        if let Some(result) = vm.delete_action.value().get() {
            vm.on_removed(result);
        }
    });

    vm
}
