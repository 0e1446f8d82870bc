use chrono::NaiveDate;
use leptos::*;

use crate::{
    api::AttendanceStatus,
    pages::attendance::{utils::BoardCounts, view_model::AttendanceViewModel},
};

#[component]
fn CountTile(#[prop(into)] label: String, value: Signal<usize>, accent: &'static str) -> impl IntoView {
    view! {
        <div class="px-4 py-3 rounded-2xl bg-white border border-slate-100">
            <p class="text-[10px] font-bold text-slate-400 uppercase tracking-widest">{label}</p>
            <p class=format!("text-2xl font-black {}", accent)>{move || value.get()}</p>
        </div>
    }
}

#[component]
pub fn AttendanceToolbar(vm: AttendanceViewModel) -> impl IntoView {
    let counts = Signal::derive(move || vm.board.with(|board| board.counts()));
    let count = move |get: fn(&BoardCounts) -> usize| Signal::derive(move || get(&counts.get()));
    let committing = vm.commit_action.pending();
    let has_changes = Signal::derive(move || vm.board.with(|board| board.has_changes()));

    view! {
        <div class="space-y-6">
            <div class="flex flex-col lg:flex-row lg:items-end justify-between gap-6">
                <div>
                    <h2 class="text-2xl font-black text-slate-900 tracking-tight uppercase">"Attendance Management"</h2>
                    <p class="text-[10px] font-bold text-slate-400 uppercase tracking-widest mt-2">"Daily Records System"</p>
                </div>
                <label class="flex flex-col gap-1 text-[10px] font-bold text-slate-400 uppercase tracking-widest">
                    "Date"
                    <input
                        type="date"
                        class="rounded-xl border border-slate-200 bg-white px-4 py-2 text-sm font-semibold text-slate-900"
                        prop:value=move || vm.date.get().format("%Y-%m-%d").to_string()
                        on:change=move |ev| {
                            match NaiveDate::parse_from_str(&event_target_value(&ev), "%Y-%m-%d") {
                                Ok(date) => vm.date.set(date),
                                Err(err) => log::warn!("Ignoring invalid date input: {}", err),
                            }
                        }
                    />
                </label>
            </div>
            <div class="grid grid-cols-2 lg:grid-cols-4 gap-3">
                <CountTile label="Present" value=count(|c| c.present) accent="text-emerald-600" />
                <CountTile label="Absent" value=count(|c| c.absent) accent="text-rose-600" />
                <CountTile label="Awaiting Sync" value=count(|c| c.unmarked) accent="text-slate-500" />
                <CountTile label="Unsaved" value=count(|c| c.dirty) accent="text-amber-600" />
            </div>
            <div class="flex flex-col lg:flex-row gap-4">
                <div class="flex-1 p-6 rounded-3xl bg-white border border-slate-100 flex flex-wrap items-center justify-between gap-4">
                    <div>
                        <p class="text-[10px] font-bold text-slate-400 uppercase tracking-widest">"Quick Attendance Actions"</p>
                        <h3 class="text-lg font-black text-slate-900 uppercase">"Mark Everyone"</h3>
                    </div>
                    <div class="flex gap-2">
                        <button
                            type="button"
                            class="px-5 py-3 rounded-xl bg-emerald-50 text-emerald-700 text-xs font-bold uppercase tracking-widest hover:bg-emerald-100 disabled:opacity-50"
                            disabled=move || vm.is_busy()
                            on:click=move |_| vm.bulk_set_status(AttendanceStatus::Present)
                        >
                            "All Present"
                        </button>
                        <button
                            type="button"
                            class="px-5 py-3 rounded-xl bg-rose-50 text-rose-700 text-xs font-bold uppercase tracking-widest hover:bg-rose-100 disabled:opacity-50"
                            disabled=move || vm.is_busy()
                            on:click=move |_| vm.bulk_set_status(AttendanceStatus::Absent)
                        >
                            "All Absent"
                        </button>
                    </div>
                </div>
                <div class="lg:w-72 p-6 rounded-3xl bg-indigo-600 flex flex-col justify-between gap-4">
                    <p class="text-[10px] font-bold text-white/60 uppercase tracking-widest">"Save Records"</p>
                    <button
                        type="button"
                        class="w-full py-3 rounded-xl bg-white text-indigo-600 text-xs font-black uppercase tracking-widest hover:bg-indigo-50 disabled:opacity-60"
                        disabled=move || vm.is_busy()
                        on:click=move |_| vm.commit()
                    >
                        {move || {
                            if committing.get() {
                                "Committing..."
                            } else if has_changes.get() {
                                "Commit Changes"
                            } else {
                                "Up To Date"
                            }
                        }}
                    </button>
                </div>
            </div>
            <input
                type="search"
                placeholder="Search employees by name or ID..."
                class="w-full px-6 py-4 rounded-2xl bg-white border border-slate-100 text-sm font-semibold text-slate-900 focus:border-indigo-300 outline-none"
                prop:value=move || vm.search.get()
                on:input=move |ev| vm.search.set(event_target_value(&ev))
            />
        </div>
    }
}
