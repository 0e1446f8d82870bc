use leptos::*;

use crate::{
    api::{SummaryStats, WeeklyStat},
    pages::dashboard::utils::{attendance_rate, unmarked_today},
};

#[component]
fn StatTile(#[prop(into)] label: String, value: String, accent: &'static str) -> impl IntoView {
    view! {
        <div class="p-6 rounded-3xl bg-white border border-slate-100">
            <p class="text-[10px] font-black text-slate-400 uppercase tracking-widest">{label}</p>
            <p class=format!("mt-3 text-3xl font-black {}", accent)>{value}</p>
        </div>
    }
}

#[component]
pub fn StatsGrid(summary: SummaryStats) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 lg:grid-cols-5 gap-4">
            <StatTile label="Attendance Rate" value=format!("{}%", attendance_rate(&summary)) accent="text-indigo-600" />
            <StatTile label="Total Employees" value=summary.total_employees.to_string() accent="text-slate-900" />
            <StatTile label="Present Today" value=summary.present_today.to_string() accent="text-emerald-600" />
            <StatTile label="Absent Today" value=summary.absent_today.to_string() accent="text-rose-600" />
            <StatTile label="Not Marked" value=unmarked_today(&summary).to_string() accent="text-slate-500" />
        </div>
    }
}

#[component]
pub fn WeeklyTrend(days: Vec<WeeklyStat>) -> impl IntoView {
    view! {
        <div class="p-6 rounded-3xl bg-white border border-slate-100">
            <h3 class="text-xl font-black text-slate-900 tracking-tighter uppercase">"Attendance Trend"</h3>
            <p class="text-[10px] font-black text-slate-400 uppercase tracking-[0.2em] mt-1">"Weekly Performance Report"</p>
            <div class="mt-6 flex items-end gap-3 h-48">
                {days
                    .into_iter()
                    .map(|day| {
                        let height = day.present.min(100);
                        let title = format!(
                            "{}: {} present, {} absent",
                            day.date.format("%b %d"),
                            day.present_count,
                            day.absent_count
                        );
                        view! {
                            <div class="flex-1 h-full flex flex-col items-center justify-end gap-2" title=title>
                                <span class="text-[10px] font-bold text-slate-500">{format!("{}%", day.present)}</span>
                                <div class="w-full rounded-t-xl bg-indigo-100 flex items-end h-full">
                                    <div class="w-full rounded-t-xl bg-indigo-600" style=format!("height: {}%", height)></div>
                                </div>
                                <span class="text-[10px] font-black text-slate-400 uppercase">{day.day.clone()}</span>
                                {day.is_holiday.then(|| view! {
                                    <span class="text-[8px] font-black text-rose-400 uppercase">"Holiday"</span>
                                })}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
