use leptos::*;

use crate::{
    api::{AttendanceRecord, AttendanceStatus, Employee},
    components::{error::InlineErrorMessage, layout::LoadingSpinner},
    pages::employees::{
        utils::{recent_records, HistorySummary},
        view_model::EmployeesViewModel,
    },
    utils::time::format_date,
};

const HISTORY_CELLS: usize = 30;

fn cell_class(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => "bg-emerald-500 border-emerald-600",
        AttendanceStatus::Absent => "bg-rose-500 border-rose-600",
    }
}

#[component]
pub fn HistoryView(records: Vec<AttendanceRecord>) -> impl IntoView {
    let summary = HistorySummary::from_records(&records);
    let recent = recent_records(&records, HISTORY_CELLS);
    view! {
        <div class="space-y-4">
            <div class="grid grid-cols-3 gap-3">
                <div class="p-4 rounded-2xl bg-emerald-50">
                    <p class="text-[10px] font-bold text-emerald-600 uppercase tracking-widest">"Present"</p>
                    <p class="text-2xl font-black text-emerald-700">{summary.present}</p>
                </div>
                <div class="p-4 rounded-2xl bg-rose-50">
                    <p class="text-[10px] font-bold text-rose-600 uppercase tracking-widest">"Absent"</p>
                    <p class="text-2xl font-black text-rose-700">{summary.absent}</p>
                </div>
                <div class="p-4 rounded-2xl bg-indigo-50">
                    <p class="text-[10px] font-bold text-indigo-600 uppercase tracking-widest">"Rate"</p>
                    <p class="text-2xl font-black text-indigo-700">{format!("{}%", summary.attendance_rate())}</p>
                </div>
            </div>
            {if recent.is_empty() {
                view! { <p class="text-xs font-bold text-slate-400 uppercase tracking-widest">"No attendance history"</p> }.into_view()
            } else {
                view! {
                    <div class="grid grid-cols-10 gap-1">
                        {recent
                            .into_iter()
                            .map(|record| view! {
                                <div
                                    class=format!("aspect-square rounded-lg border-2 {}", cell_class(record.status))
                                    title=format!("{}: {}", format_date(record.date), record.status)
                                ></div>
                            })
                            .collect_view()}
                    </div>
                }
                .into_view()
            }}
        </div>
    }
}

#[component]
pub fn EmployeeDetail(vm: EmployeesViewModel) -> impl IntoView {
    let employee = move || vm.selected.get();
    view! {
        <Show when=move || employee().is_some()>
            <aside class="fixed inset-y-0 right-0 z-50 w-full max-w-md bg-white shadow-2xl p-8 space-y-6 overflow-y-auto">
                <div class="flex items-start justify-between">
                    <div class="min-w-0">
                        <p class="text-[10px] font-bold text-slate-400 uppercase tracking-widest">
                            {move || employee().map(|e| e.employee_id).unwrap_or_default()}
                        </p>
                        <h3 class="text-2xl font-black text-slate-900 truncate">
                            {move || employee().map(|e| e.full_name).unwrap_or_default()}
                        </h3>
                        <p class="text-sm text-slate-500 truncate">
                            {move || employee().map(|e: Employee| format!("{} · {}", e.email, e.department)).unwrap_or_default()}
                        </p>
                    </div>
                    <button
                        type="button"
                        aria-label="Close details"
                        class="px-3 py-1 rounded-lg text-slate-400 hover:bg-slate-100"
                        on:click=move |_| vm.close_detail()
                    >
                        "Close"
                    </button>
                </div>
                <h4 class="text-sm font-black text-slate-900 uppercase tracking-widest">"Attendance History"</h4>
                {move || match vm.history.get().flatten() {
                    None => view! { <LoadingSpinner /> }.into_view(),
                    Some(Err(err)) => {
                        let error = create_rw_signal(Some(err));
                        view! { <InlineErrorMessage error=error.into() /> }.into_view()
                    }
                    Some(Ok(records)) => view! { <HistoryView records=records /> }.into_view(),
                }}
            </aside>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use chrono::NaiveDate;

    #[test]
    fn history_shows_counts_and_rate() {
        let html = render_to_string(|| {
            let day = |d| NaiveDate::from_ymd_opt(2025, 1, d).unwrap();
            let records = vec![
                AttendanceRecord {
                    id: None,
                    employee_id: "E1".into(),
                    date: day(2),
                    status: AttendanceStatus::Present,
                    marked_at: None,
                },
                AttendanceRecord {
                    id: None,
                    employee_id: "E1".into(),
                    date: day(3),
                    status: AttendanceStatus::Absent,
                    marked_at: None,
                },
            ];
            view! { <HistoryView records=records /> }
        });
        assert!(html.contains("50%"));
        assert!(html.contains("bg-rose-500"));
    }

    #[test]
    fn empty_history_says_so() {
        let html = render_to_string(|| view! { <HistoryView records=Vec::new() /> });
        assert!(html.contains("No attendance history"));
        assert!(html.contains("0%"));
    }
}
