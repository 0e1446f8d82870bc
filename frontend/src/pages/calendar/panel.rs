use chrono::{Datelike, NaiveDate};
use leptos::*;

use super::view_model::{use_calendar_view_model, CalendarViewModel};
use crate::{
    api::Department,
    components::{error::InlineErrorMessage, layout::Layout},
    utils::filter::DepartmentFilter,
};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[component]
pub fn CalendarPage() -> impl IntoView {
    view! {
        <Layout title="Calendar">
            <CalendarPanel />
        </Layout>
    }
}

#[component]
pub fn CalendarPanel() -> impl IntoView {
    let vm = use_calendar_view_model();
    view! { <CalendarView vm=vm /> }
}

#[component]
pub fn CalendarView(vm: CalendarViewModel) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div class="flex flex-col lg:flex-row lg:items-end justify-between gap-6">
                <div>
                    <h2 class="text-2xl font-black text-slate-900 tracking-tight uppercase">"Attendance History"</h2>
                    <p class="text-[10px] font-bold text-slate-400 uppercase tracking-widest mt-2">"Monthly Attendance Overview"</p>
                </div>
                <div class="flex flex-wrap items-center gap-3">
                    <select
                        class="rounded-xl border border-slate-200 bg-white px-4 py-2 text-sm font-semibold text-slate-900"
                        on:change=move |ev| {
                            vm.filter.set(DepartmentFilter::from_select_value(&event_target_value(&ev)));
                        }
                    >
                        <option value="All" selected=move || vm.filter.with(|f| *f == DepartmentFilter::All)>
                            {DepartmentFilter::All.to_string()}
                        </option>
                        {Department::ALL
                            .iter()
                            .map(|department| {
                                let value = department.as_str().to_string();
                                let wanted = DepartmentFilter::Only(department.clone());
                                view! {
                                    <option value=value.clone() selected=move || vm.filter.with(|f| *f == wanted)>
                                        {value.clone()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <div class="flex items-center gap-2 rounded-xl bg-white border border-slate-200 px-2 py-1">
                        <button
                            type="button"
                            aria-label="Previous month"
                            class="px-3 py-1 rounded-lg text-slate-500 hover:bg-indigo-50 hover:text-indigo-600"
                            on:click=move |_| vm.previous_month()
                        >
                            "‹"
                        </button>
                        <span class="min-w-[9rem] text-center text-sm font-black text-slate-900 uppercase tracking-wide">
                            {move || vm.month.get().title()}
                        </span>
                        <button
                            type="button"
                            aria-label="Next month"
                            class="px-3 py-1 rounded-lg text-slate-500 hover:bg-indigo-50 hover:text-indigo-600"
                            on:click=move |_| vm.next_month()
                        >
                            "›"
                        </button>
                    </div>
                </div>
            </div>

            <InlineErrorMessage error=vm.error.into() />

            <div class="rounded-3xl bg-white border border-slate-100 p-4 lg:p-6">
                <div class="grid grid-cols-7 gap-2 mb-2">
                    {WEEKDAYS
                        .iter()
                        .map(|day| view! {
                            <div class="text-center text-[10px] font-bold text-slate-400 uppercase tracking-widest py-2">{*day}</div>
                        })
                        .collect_view()}
                </div>
                <div class="grid grid-cols-7 gap-2" class:opacity-50=move || vm.loading.get()>
                    {move || {
                        vm.month
                            .get()
                            .grid()
                            .into_iter()
                            .map(|date| view! { <DayCell vm=vm date=date /> })
                            .collect_view()
                    }}
                </div>
            </div>

            <div class="flex flex-wrap gap-6 text-xs font-semibold text-slate-500">
                <span class="flex items-center gap-2"><span class="h-3 w-3 rounded-full bg-emerald-500"></span>"Present"</span>
                <span class="flex items-center gap-2"><span class="h-3 w-3 rounded-full bg-rose-500"></span>"Absent"</span>
                <span class="flex items-center gap-2"><span class="h-3 w-3 rounded-full bg-indigo-600"></span>"Today"</span>
            </div>
        </div>
    }
}

#[component]
fn DayCell(vm: CalendarViewModel, date: NaiveDate) -> impl IntoView {
    let in_month = vm.month.get_untracked().contains(date);
    let is_today = date == vm.today;
    let stats = Signal::derive(move || vm.day_stats(date));

    let frame = if is_today {
        "border-indigo-600 ring-2 ring-indigo-100"
    } else if in_month {
        "border-slate-100"
    } else {
        "border-transparent opacity-40"
    };

    view! {
        <div class=format!("min-h-[6.5rem] rounded-2xl border bg-slate-50/60 p-2 flex flex-col gap-1 {}", frame)>
            <div class="flex items-center justify-between">
                <span class="text-sm font-black text-slate-900">{date.day()}</span>
                {is_today.then(|| view! {
                    <span class="text-[9px] font-black text-indigo-600 uppercase tracking-widest">"TODAY"</span>
                })}
            </div>
            {in_month.then(|| view! {
                <Show
                    when=move || stats.get().has_data()
                    fallback=|| view! {
                        <span class="mt-auto text-[9px] font-bold text-slate-300 uppercase tracking-widest">"No Records Found"</span>
                    }
                >
                    <div class="mt-auto space-y-1">
                        <div class="flex justify-between text-[10px] font-bold">
                            <span class="text-emerald-600">{move || format!("{} P", stats.get().present)}</span>
                            <span class="text-rose-600">{move || format!("{} A", stats.get().absent)}</span>
                        </div>
                        <div class="h-1.5 rounded-full bg-rose-100 overflow-hidden">
                            <div
                                class="h-full bg-emerald-500"
                                style=move || format!("width: {}%", stats.get().present_percentage())
                            ></div>
                        </div>
                        <span class="text-[10px] font-semibold text-slate-500">
                            {move || format!("{}% present", stats.get().present_percentage())}
                        </span>
                    </div>
                </Show>
            })}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{ApiClient, AttendanceRecord, AttendanceStatus};
    use crate::pages::attendance::utils::tests::employee;
    use crate::pages::calendar::utils::MonthAttendance;
    use crate::state::request_generation::RequestGeneration;
    use crate::state::toast::ToastState;
    use crate::test_support::ssr::render_to_string;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    #[test]
    fn panel_renders_month_header_and_legend() {
        let html = render_to_string(|| view! { <CalendarPanel /> });
        assert!(html.contains("Attendance History"));
        assert!(html.contains("All Departments"));
        assert!(html.contains("Sun"));
        assert!(html.contains("Sat"));
        assert!(html.contains("TODAY"));
    }

    #[test]
    fn day_cells_show_counts_and_empty_days() {
        let html = render_to_string(|| {
            let vm = CalendarViewModel::new(
                ApiClient::new_with_base_url("http://unused"),
                ToastState::new(),
                day(),
            );
            vm.roster.set(vec![
                employee("E1", "Alice", Department::Hr),
                employee("E2", "Bob", Department::Hr),
            ]);
            let ticket = vm.generation.with_value(RequestGeneration::begin);
            vm.apply_month(
                ticket,
                vm.month.get_untracked(),
                Ok(MonthAttendance::from_days(vec![(
                    day(),
                    vec![
                        AttendanceRecord {
                            id: None,
                            employee_id: "E1".into(),
                            date: day(),
                            status: AttendanceStatus::Present,
                            marked_at: None,
                        },
                        AttendanceRecord {
                            id: None,
                            employee_id: "E2".into(),
                            date: day(),
                            status: AttendanceStatus::Absent,
                            marked_at: None,
                        },
                    ],
                )])),
            );
            view! { <CalendarView vm=vm /> }
        });
        assert!(html.contains("March 2025"));
        assert!(html.contains("50% present"));
        assert!(html.contains("No Records Found"));
    }
}
