use leptos::*;

use crate::{
    api::{Department, Employee},
    components::empty_state::EmptyState,
    pages::employees::view_model::EmployeesViewModel,
    utils::filter::DepartmentFilter,
};

#[component]
pub fn DirectoryToolbar(vm: EmployeesViewModel) -> impl IntoView {
    view! {
        <div class="flex flex-col lg:flex-row lg:items-end justify-between gap-6">
            <div>
                <h2 class="text-2xl font-black text-slate-900 tracking-tight uppercase">"Employee Directory"</h2>
                <p class="text-[10px] font-bold text-slate-400 uppercase tracking-widest mt-2">
                    {move || format!("{} Records", vm.roster.with(Vec::len))}
                </p>
            </div>
            <div class="flex flex-wrap items-center gap-3">
                <input
                    type="search"
                    placeholder="Search by name or ID"
                    class="rounded-xl border border-slate-200 bg-white px-4 py-2 text-sm"
                    prop:value=move || vm.search.get()
                    on:input=move |ev| vm.search.set(event_target_value(&ev))
                />
                <select
                    class="rounded-xl border border-slate-200 bg-white px-4 py-2 text-sm font-semibold"
                    on:change=move |ev| {
                        vm.department.set(DepartmentFilter::from_select_value(&event_target_value(&ev)));
                    }
                >
                    <option value="All">"All Departments"</option>
                    {Department::ALL
                        .iter()
                        .map(|d| view! { <option value=d.to_string()>{d.to_string()}</option> })
                        .collect_view()}
                </select>
                <button
                    type="button"
                    class="px-4 py-2 rounded-xl bg-white border border-indigo-100 text-indigo-600 text-xs font-bold uppercase tracking-widest hover:bg-indigo-50"
                    on:click=move |_| vm.export()
                >
                    "Export PDF"
                </button>
                <button
                    type="button"
                    class="px-4 py-2 rounded-xl bg-indigo-600 text-white text-xs font-bold uppercase tracking-widest hover:bg-indigo-700"
                    on:click=move |_| vm.open_form()
                >
                    "Add Employee"
                </button>
            </div>
        </div>
    }
}

#[component]
fn EmployeeRow(vm: EmployeesViewModel, employee: Employee) -> impl IntoView {
    let for_select = employee.clone();
    let for_delete = employee.clone();
    view! {
        <tr class="hover:bg-slate-50 cursor-pointer" on:click=move |_| vm.select(for_select.clone())>
            <td class="px-4 py-3 text-xs font-bold text-slate-500">{employee.employee_id.clone()}</td>
            <td class="px-4 py-3 text-sm font-bold text-slate-900">{employee.full_name.clone()}</td>
            <td class="px-4 py-3 text-sm text-slate-500">{employee.email.clone()}</td>
            <td class="px-4 py-3">
                <span class="px-2 py-1 rounded-lg bg-indigo-50 text-indigo-600 text-[10px] font-bold uppercase tracking-widest">
                    {employee.department.to_string()}
                </span>
            </td>
            <td class="px-4 py-3 text-right">
                <button
                    type="button"
                    class="text-xs font-bold text-rose-600 hover:underline"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        vm.request_delete(for_delete.clone());
                    }
                >
                    "Remove"
                </button>
            </td>
        </tr>
    }
}

#[component]
pub fn EmployeeTable(vm: EmployeesViewModel) -> impl IntoView {
    let rows = Signal::derive(move || vm.visible());
    view! {
        <div class="rounded-3xl bg-white border border-slate-100 overflow-hidden">
            <Show
                when=move || !rows.with(Vec::is_empty)
                fallback=move || view! {
                    <EmptyState title="No employees match" description="Adjust the search or department filter." />
                }
            >
                <table class="min-w-full divide-y divide-slate-100">
                    <thead class="bg-slate-50">
                        <tr>
                            <th class="px-4 py-3 text-left text-[10px] font-bold text-slate-400 uppercase tracking-widest">"ID"</th>
                            <th class="px-4 py-3 text-left text-[10px] font-bold text-slate-400 uppercase tracking-widest">"Name"</th>
                            <th class="px-4 py-3 text-left text-[10px] font-bold text-slate-400 uppercase tracking-widest">"Email"</th>
                            <th class="px-4 py-3 text-left text-[10px] font-bold text-slate-400 uppercase tracking-widest">"Department"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-slate-50">
                        <For
                            each=move || rows.get()
                            key=|employee| employee.employee_id.clone()
                            children=move |employee| view! { <EmployeeRow vm=vm employee=employee /> }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

#[component]
pub fn Pagination(vm: EmployeesViewModel) -> impl IntoView {
    let total = Signal::derive(move || vm.total_pages());
    let current = Signal::derive(move || vm.display_page());
    view! {
        <Show when=move || { total.get() > 1 }>
            <div class="flex items-center justify-between">
                <button
                    type="button"
                    class="px-4 py-2 rounded-xl bg-white border border-slate-200 text-xs font-bold uppercase disabled:opacity-40"
                    disabled=move || { current.get() <= 1 }
                    on:click=move |_| vm.previous_page()
                >
                    "Previous"
                </button>
                <span class="text-xs font-bold text-slate-500 uppercase tracking-widest">
                    {move || format!("Page {} of {}", current.get(), total.get())}
                </span>
                <button
                    type="button"
                    class="px-4 py-2 rounded-xl bg-white border border-slate-200 text-xs font-bold uppercase disabled:opacity-40"
                    disabled=move || { current.get() >= total.get() }
                    on:click=move |_| vm.next_page()
                >
                    "Next"
                </button>
            </div>
        </Show>
    }
}
