use leptos::*;

use crate::{
    api::{AttendanceStatus, Employee},
    components::{empty_state::EmptyState, layout::LoadingSpinner},
    pages::attendance::{utils::RowState, view_model::AttendanceViewModel},
    utils::time::format_time,
};

fn status_button_class(active: bool, status: AttendanceStatus) -> &'static str {
    match (active, status) {
        (true, AttendanceStatus::Present) => "px-4 py-2 rounded-lg text-xs font-bold bg-emerald-600 text-white",
        (true, AttendanceStatus::Absent) => "px-4 py-2 rounded-lg text-xs font-bold bg-rose-600 text-white",
        (false, _) => "px-4 py-2 rounded-lg text-xs font-bold bg-slate-50 text-slate-400 hover:bg-slate-100 disabled:opacity-50",
    }
}

fn row_state_label(state: &RowState) -> String {
    match state {
        RowState::Unsaved => "Unsaved".into(),
        RowState::Marked(Some(at)) => format!("Marked {}", format_time(at)),
        RowState::Marked(None) => "Marked".into(),
        RowState::AwaitingSync => "Awaiting Sync".into(),
    }
}

#[component]
fn RosterRow(employee: Employee, vm: AttendanceViewModel) -> impl IntoView {
    let id = store_value(employee.employee_id.clone());
    let current = Signal::derive(move || {
        vm.board
            .with(|board| id.with_value(|id| board.draft(id).map(|d| d.status)))
    });
    let state = Signal::derive(move || vm.board.with(|board| id.with_value(|id| board.row_state(id))));
    let status_button = move |status: AttendanceStatus| {
        view! {
            <button
                type="button"
                class=move || status_button_class(current.get() == Some(status), status)
                disabled=move || vm.is_busy()
                on:click=move |_| id.with_value(|id| vm.set_status(id, status))
            >
                {status.as_str()}
            </button>
        }
    };

    view! {
        <tr class="border-b border-slate-50">
            <td class="px-6 py-4">
                <p class="text-sm font-bold text-slate-900">{employee.full_name.clone()}</p>
                <p class="text-[10px] font-semibold text-slate-400 uppercase tracking-widest">{employee.employee_id.clone()}</p>
            </td>
            <td class="px-6 py-4 text-xs font-semibold text-slate-500">{employee.department.to_string()}</td>
            <td class="px-6 py-4">
                <div class="flex justify-center gap-2">
                    {status_button(AttendanceStatus::Present)}
                    {status_button(AttendanceStatus::Absent)}
                </div>
            </td>
            <td class="px-6 py-4 text-right">
                <span class=move || match state.get() {
                    RowState::Unsaved => "text-[10px] font-bold uppercase tracking-widest text-amber-600",
                    RowState::Marked(_) => "text-[10px] font-bold uppercase tracking-widest text-emerald-600",
                    RowState::AwaitingSync => "text-[10px] font-bold uppercase tracking-widest text-slate-400",
                }>
                    {move || row_state_label(&state.get())}
                </span>
            </td>
        </tr>
    }
}

#[component]
pub fn RosterTable(vm: AttendanceViewModel) -> impl IntoView {
    let rows = Signal::derive(move || {
        let query = vm.search.get();
        vm.board.with(|board| board.visible(&query))
    });

    view! {
        <Show when=move || !vm.loading.get() fallback=|| view! { <LoadingSpinner /> }>
            <Show
                when=move || !rows.get().is_empty()
                fallback=|| view! { <EmptyState title="No employees to show" description="Adjust the search or add employees in the directory." /> }
            >
                <div class="rounded-3xl bg-white border border-slate-100 overflow-x-auto">
                    <table class="w-full text-left">
                        <thead class="bg-slate-50">
                            <tr>
                                <th class="px-6 py-4 text-[10px] font-bold text-slate-400 uppercase tracking-widest">"Employee Details"</th>
                                <th class="px-6 py-4 text-[10px] font-bold text-slate-400 uppercase tracking-widest">"Department"</th>
                                <th class="px-6 py-4 text-[10px] font-bold text-slate-400 uppercase tracking-widest text-center">"Status"</th>
                                <th class="px-6 py-4 text-[10px] font-bold text-slate-400 uppercase tracking-widest text-right">"Commit Progress"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || rows.get()
                                key=|employee: &Employee| employee.employee_id.clone()
                                children=move |employee: Employee| view! { <RosterRow employee=employee vm=vm /> }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>
        </Show>
    }
}
