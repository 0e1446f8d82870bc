use leptos::{ev, *};

use crate::{
    api::Department,
    components::error::InlineErrorMessage,
    pages::employees::{utils::EmployeeForm, view_model::EmployeesViewModel},
};

#[component]
fn FormInput(
    #[prop(into)] label: String,
    #[prop(optional)] input_type: Option<&'static str>,
    form: RwSignal<EmployeeForm>,
    get: fn(&EmployeeForm) -> String,
    set: fn(&mut EmployeeForm, String),
) -> impl IntoView {
    view! {
        <label class="block space-y-1">
            <span class="text-[10px] font-bold text-slate-400 uppercase tracking-widest">{label}</span>
            <input
                type=input_type.unwrap_or("text")
                class="w-full rounded-xl border border-slate-200 bg-slate-50 px-4 py-3 text-sm font-semibold focus:border-indigo-600 outline-none"
                prop:value=move || form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            />
        </label>
    }
}

#[component]
pub fn EmployeeFormModal(vm: EmployeesViewModel) -> impl IntoView {
    let pending = vm.add_action.pending();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_form();
    };

    view! {
        <Show when=move || vm.form_open.get()>
            <div class="fixed inset-0 z-[60] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-slate-900/40"
                    on:click=move |_| vm.close_form()
                ></button>
                <div class="relative w-full max-w-lg rounded-3xl bg-white shadow-2xl p-8 space-y-6" role="dialog" aria-modal="true">
                    <div>
                        <h3 class="text-xl font-black text-slate-900 uppercase tracking-tight">"New Employee"</h3>
                        <p class="text-[10px] font-black text-slate-400 uppercase tracking-widest mt-2">"Enter employee details below"</p>
                    </div>
                    <InlineErrorMessage error=vm.form_error.into() />
                    <form class="space-y-4" on:submit=on_submit>
                        <FormInput
                            label="Employee ID"
                            form=vm.form
                            get=|f| f.employee_id.clone()
                            set=|f, v| f.employee_id = v
                        />
                        <FormInput
                            label="Full Name"
                            form=vm.form
                            get=|f| f.full_name.clone()
                            set=|f, v| f.full_name = v
                        />
                        <FormInput
                            label="Email"
                            input_type="email"
                            form=vm.form
                            get=|f| f.email.clone()
                            set=|f, v| f.email = v
                        />
                        <label class="block space-y-1">
                            <span class="text-[10px] font-bold text-slate-400 uppercase tracking-widest">"Department"</span>
                            <select
                                class="w-full rounded-xl border border-slate-200 bg-slate-50 px-4 py-3 text-sm font-semibold"
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    vm.form.update(|f| f.department = Department::from(value));
                                }
                            >
                                {Department::ALL
                                    .iter()
                                    .map(|d| {
                                        let department = d.clone();
                                        view! {
                                            <option
                                                value=d.to_string()
                                                selected=move || vm.form.with(|f| f.department == department)
                                            >
                                                {d.to_string()}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </label>
                        <div class="flex gap-3 pt-4">
                            <button
                                type="submit"
                                class="flex-1 py-3 rounded-xl bg-indigo-600 text-white text-xs font-bold uppercase tracking-widest hover:bg-indigo-700 disabled:opacity-50"
                                disabled=move || pending.get()
                            >
                                {move || if pending.get() { "Saving..." } else { "Add Employee" }}
                            </button>
                            <button
                                type="button"
                                class="px-6 rounded-xl bg-slate-50 text-slate-500 text-xs font-bold uppercase tracking-widest border border-slate-100"
                                on:click=move |_| vm.close_form()
                            >
                                "Cancel"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
