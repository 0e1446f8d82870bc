use leptos::*;

use crate::{
    api::{Notification, NotificationKind},
    state::notifications::{use_notification_center, NotificationCenter},
    utils::time::format_stamp,
};

fn kind_accent(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "bg-emerald-50 text-emerald-600",
        NotificationKind::Warning => "bg-amber-50 text-amber-600",
        NotificationKind::Error => "bg-rose-50 text-rose-600",
        NotificationKind::Info => "bg-indigo-50 text-indigo-600",
    }
}

fn kind_glyph(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "✓",
        NotificationKind::Warning => "!",
        NotificationKind::Error => "✕",
        NotificationKind::Info => "i",
    }
}

/// Bell with unread badge. Polls while mounted and toggles the dropdown.
#[component]
pub fn NotificationBell() -> impl IntoView {
    let center = use_notification_center();
    center.start_polling();
    let unread = center.unread_count;

    view! {
        <div class="relative">
            <button
                type="button"
                class="relative p-2 rounded-xl text-slate-500 hover:text-indigo-600 hover:bg-slate-100"
                aria-label="Notifications"
                on:click=move |_| center.toggle()
            >
                <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 17h5l-1.405-1.405A2.032 2.032 0 0118 14.158V11a6.002 6.002 0 00-4-5.659V5a2 2 0 10-4 0v.341C7.67 6.165 6 8.388 6 11v3.159c0 .538-.214 1.055-.595 1.436L4 17h5m6 0v1a3 3 0 11-6 0v-1m6 0H9" />
                </svg>
                <Show when=move || { unread.get() > 0 }>
                    <span class="absolute -top-0.5 -right-0.5 min-w-[1.25rem] h-5 px-1 rounded-full bg-rose-500 text-white text-[10px] font-bold flex items-center justify-center">
                        {move || unread.get().to_string()}
                    </span>
                </Show>
            </button>
            <Show when=move || center.open.get()>
                <NotificationDropdown center=center />
            </Show>
        </div>
    }
}

#[component]
pub fn NotificationDropdown(center: NotificationCenter) -> impl IntoView {
    let items = Signal::derive(move || center.feed.with(|feed| feed.items().to_vec()));
    let has_unread = move || center.unread_count.get() > 0;

    view! {
        <div class="absolute right-0 mt-3 w-96 rounded-2xl bg-white border border-slate-100 shadow-2xl z-50 overflow-hidden">
            <div class="flex items-center justify-between px-5 py-4 border-b border-slate-100">
                <h3 class="text-sm font-bold text-slate-900">"Notifications"</h3>
                <div class="flex items-center gap-2">
                    <Show when=has_unread>
                        <button
                            type="button"
                            class="text-xs font-semibold text-indigo-600 hover:text-indigo-800"
                            on:click=move |_| center.mark_all_read()
                        >
                            "Mark all read"
                        </button>
                    </Show>
                    <button
                        type="button"
                        aria-label="Close notifications"
                        class="text-slate-400 hover:text-slate-700"
                        on:click=move |_| center.close()
                    >
                        "✕"
                    </button>
                </div>
            </div>
            <div class="max-h-96 overflow-y-auto">
                <Show
                    when=move || !center.loading.get()
                    fallback=|| view! { <p class="px-5 py-8 text-center text-sm text-slate-400">"Loading..."</p> }
                >
                    <Show
                        when=move || !items.get().is_empty()
                        fallback=|| view! { <p class="px-5 py-8 text-center text-sm text-slate-400">"No notifications yet"</p> }
                    >
                        <For
                            each=move || items.get()
                            key=|n: &Notification| (n.id.clone(), n.is_read)
                            children=move |n: Notification| view! { <NotificationRow notification=n center=center /> }
                        />
                    </Show>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn NotificationRow(notification: Notification, center: NotificationCenter) -> impl IntoView {
    let Notification {
        id,
        title,
        message,
        kind,
        is_read,
        created_at,
    } = notification;
    let row_class = if is_read {
        "flex gap-3 px-5 py-4 border-b border-slate-50"
    } else {
        "flex gap-3 px-5 py-4 border-b border-slate-50 bg-indigo-50/40"
    };

    view! {
        <div class=row_class>
            <span class=format!("h-8 w-8 shrink-0 rounded-lg flex items-center justify-center text-sm font-bold {}", kind_accent(kind))>
                {kind_glyph(kind)}
            </span>
            <div class="flex-1 min-w-0">
                <p class="text-sm font-semibold text-slate-900">{title}</p>
                <p class="text-xs text-slate-500 mt-0.5">{message}</p>
                {created_at.map(|at| view! {
                    <p class="text-[10px] text-slate-400 mt-1">{format_stamp(&at)}</p>
                })}
            </div>
            {(!is_read).then(|| view! {
                <button
                    type="button"
                    class="self-start text-xs font-semibold text-indigo-600 hover:text-indigo-800"
                    on:click=move |_| center.mark_read(id.clone())
                >
                    "Mark read"
                </button>
            })}
        </div>
    }
}
