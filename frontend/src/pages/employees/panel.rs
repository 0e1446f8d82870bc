use leptos::*;

use super::{
    components::{DirectoryToolbar, EmployeeDetail, EmployeeFormModal, EmployeeTable, Pagination},
    view_model::{use_employees_view_model, EmployeesViewModel},
};
use crate::components::{
    confirm_dialog::ConfirmDialog,
    error::InlineErrorMessage,
    layout::{Layout, LoadingSpinner},
};

#[component]
pub fn EmployeesPage() -> impl IntoView {
    view! {
        <Layout title="Employees">
            <EmployeesPanel />
        </Layout>
    }
}

#[component]
pub fn EmployeesPanel() -> impl IntoView {
    let vm = use_employees_view_model();
    view! { <EmployeesView vm=vm /> }
}

#[component]
pub fn EmployeesView(vm: EmployeesViewModel) -> impl IntoView {
    let confirm_open = Signal::derive(move || vm.pending_delete.with(Option::is_some));
    let confirm_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|e| format!("Remove {} ({}) from the directory?", e.full_name, e.employee_id))
            .unwrap_or_default()
    });

    view! {
        <div class="space-y-6">
            <DirectoryToolbar vm=vm />
            <InlineErrorMessage error=vm.load_error.into() />
            <Show when=move || vm.loading.get() && vm.roster.with(Vec::is_empty) fallback=move || view! {
                <EmployeeTable vm=vm />
                <Pagination vm=vm />
            }>
                <LoadingSpinner />
            </Show>
            <EmployeeFormModal vm=vm />
            <EmployeeDetail vm=vm />
            <ConfirmDialog
                is_open=confirm_open
                title="Remove Employee"
                message=confirm_message
                confirm_label="Remove"
                destructive=true
                confirm_disabled=Signal::derive(move || vm.delete_action.pending().get())
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.cancel_delete())
            />
        </div>
    }
}
