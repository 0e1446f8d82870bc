use leptos::*;

use crate::{
    api::AttendanceStatus,
    pages::dashboard::{utils::greeting, view_model::DashboardViewModel},
    utils::time::{current_hour, format_long_date},
};

fn status_badge(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => "bg-emerald-100 text-emerald-600",
        AttendanceStatus::Absent => "bg-rose-100 text-rose-600",
    }
}

/// Shown until the admin records their own attendance for today.
#[component]
pub fn SelfMarkCard(vm: DashboardViewModel) -> impl IntoView {
    let pending = vm.mark_action.pending();
    let choice = move |status: AttendanceStatus, accent: &'static str| {
        view! {
            <button
                type="button"
                class=format!("flex-1 py-8 rounded-3xl border-2 text-xl font-black uppercase tracking-widest transition-colors disabled:opacity-50 {}", accent)
                disabled=move || pending.get()
                on:click=move |_| vm.mark(status)
            >
                {status.as_str()}
            </button>
        }
    };

    view! {
        <div class="bg-white p-8 rounded-[2.5rem] border border-indigo-50 space-y-6">
            <div>
                <span class="text-[10px] font-black text-slate-300 uppercase tracking-widest">{format_long_date(vm.today)}</span>
                <h2 class="text-3xl font-black text-slate-900 tracking-tighter uppercase">
                    {format!("Good {}", greeting(current_hour()))}
                </h2>
                <p class="text-slate-500 font-medium mt-2">"Mark your attendance for today to open the dashboard."</p>
            </div>
            <div class="flex flex-col sm:flex-row gap-4">
                {choice(AttendanceStatus::Present, "border-emerald-100 text-emerald-600 hover:bg-emerald-500 hover:text-white")}
                {choice(AttendanceStatus::Absent, "border-rose-100 text-rose-600 hover:bg-rose-500 hover:text-white")}
            </div>
            <Show when=move || pending.get()>
                <p class="text-xs font-bold text-indigo-600 uppercase tracking-widest">"Recording..."</p>
            </Show>
        </div>
    }
}

#[component]
pub fn WelcomeBanner(vm: DashboardViewModel, status: AttendanceStatus) -> impl IntoView {
    let total = move || {
        vm.data
            .get()
            .and_then(Result::ok)
            .map(|data| data.summary.total_employees)
            .unwrap_or_default()
    };
    view! {
        <div class="flex flex-col lg:flex-row justify-between items-start lg:items-end gap-6 bg-white p-8 rounded-[2.5rem] border border-indigo-50">
            <div>
                <div class="flex items-center gap-3 mb-2">
                    <span class=format!("px-3 py-1 rounded-full text-[10px] font-black uppercase tracking-widest {}", status_badge(status))>
                        {format!("Status: {}", status)}
                    </span>
                    <span class="text-[10px] font-black text-slate-300 uppercase tracking-widest">{format_long_date(vm.today)}</span>
                </div>
                <h2 class="text-3xl font-black text-slate-900 tracking-tighter uppercase">
                    {format!("Good {}", greeting(current_hour()))}
                </h2>
                <p class="text-slate-500 font-medium mt-2">
                    "Managing "
                    <span class="text-indigo-600 font-black">{move || format!("{} EMPLOYEES", total())}</span>
                </p>
            </div>
            <a
                href="/employees"
                class="px-6 py-4 rounded-2xl bg-indigo-600 text-white font-black uppercase text-[10px] tracking-[0.2em] hover:bg-indigo-700"
            >
                "Add Employee"
            </a>
        </div>
    }
}
