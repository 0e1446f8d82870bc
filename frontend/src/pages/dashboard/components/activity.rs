use leptos::*;

use crate::{api::RecentActivity, components::empty_state::EmptyState};

fn initial_for(activity: &RecentActivity) -> String {
    activity
        .initial
        .clone()
        .filter(|initial| !initial.is_empty())
        .or_else(|| activity.user.chars().next().map(|c| c.to_uppercase().to_string()))
        .unwrap_or_else(|| "?".into())
}

#[component]
pub fn RecentActivityList(items: Vec<RecentActivity>) -> impl IntoView {
    let empty = items.is_empty();
    view! {
        <div class="p-6 rounded-3xl bg-white border border-slate-100">
            <h3 class="text-xl font-black text-slate-900 tracking-tighter uppercase">"Recent Activity"</h3>
            {if empty {
                view! { <EmptyState title="No activity yet" /> }.into_view()
            } else {
                view! {
                    <ul class="mt-4 divide-y divide-slate-50">
                        {items
                            .into_iter()
                            .map(|activity| view! {
                                <li class="py-3 flex items-center gap-3">
                                    <span class="h-9 w-9 rounded-xl bg-indigo-50 text-indigo-600 font-black flex items-center justify-center">
                                        {initial_for(&activity)}
                                    </span>
                                    <div class="min-w-0 flex-1">
                                        <p class="text-sm font-bold text-slate-900 truncate">{activity.user.clone()}</p>
                                        <p class="text-xs text-slate-500 truncate">{activity.action.clone()}</p>
                                    </div>
                                    <span class="text-[10px] font-bold text-slate-400 uppercase">{activity.time.clone()}</span>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                }
                .into_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_falls_back_to_user_name() {
        let activity = RecentActivity {
            user: "bob".into(),
            action: "Marked Absent".into(),
            time: "10:00 AM".into(),
            initial: None,
        };
        assert_eq!(initial_for(&activity), "B");
    }
}
