use leptos::*;

use crate::{
    components::{
        notifications::NotificationBell, profile_modal::ProfileModal, toast::ToastHost,
    },
    state::profile::{use_profile, AdminProfile},
    utils::time::{format_long_date, today_local},
};

const NAV_ITEMS: [(&str, &str); 4] = [
    ("/", "Dashboard"),
    ("/employees", "Employees"),
    ("/attendance", "Attendance"),
    ("/calendar", "Calendar"),
];

#[component]
fn Avatar(#[prop(into)] size_class: String) -> impl IntoView {
    let profile = use_profile().current();
    view! {
        <div class=format!("{} rounded-xl bg-indigo-50 overflow-hidden flex items-center justify-center shrink-0", size_class)>
            {move || match profile.with(|p| p.avatar.clone()) {
                Some(src) => view! { <img src=src alt="Admin" class="h-full w-full object-cover" /> }.into_view(),
                None => view! {
                    <span class="font-black text-indigo-600">{move || profile.with(AdminProfile::initial)}</span>
                }
                .into_view(),
            }}
        </div>
    }
}

#[component]
pub fn Sidebar(on_profile: Callback<()>) -> impl IntoView {
    let profile = use_profile().current();
    view! {
        <aside class="hidden lg:flex w-64 shrink-0 flex-col bg-white border-r border-slate-100 min-h-screen">
            <div class="px-6 py-6">
                <span class="text-lg font-black text-slate-900 tracking-tight">"HR Dashboard"</span>
            </div>
            <nav class="flex-1 px-4 space-y-1">
                {NAV_ITEMS
                    .iter()
                    .map(|(href, label)| view! {
                        <a
                            href=*href
                            class="block px-4 py-3 rounded-xl text-sm font-semibold text-slate-500 hover:text-indigo-600 hover:bg-indigo-50"
                        >
                            {*label}
                        </a>
                    })
                    .collect_view()}
            </nav>
            <button
                type="button"
                class="m-4 p-3 flex items-center gap-3 rounded-2xl bg-slate-50 hover:bg-indigo-50 text-left"
                on:click=move |_| on_profile.call(())
            >
                <Avatar size_class="h-10 w-10" />
                <div class="min-w-0">
                    <p class="text-sm font-bold text-slate-900 truncate">{move || profile.with(|p| p.name.clone())}</p>
                    <p class="text-[10px] font-semibold text-slate-400 uppercase tracking-widest truncate">
                        {move || profile.with(|p| p.role.clone())}
                    </p>
                </div>
            </button>
        </aside>
    }
}

#[component]
pub fn Header(#[prop(into)] title: String, on_profile: Callback<()>) -> impl IntoView {
    let today = format_long_date(today_local());
    view! {
        <header class="bg-white border-b border-slate-100">
            <div class="flex items-center justify-between h-16 px-6 lg:px-10">
                <div>
                    <h1 class="text-lg font-black text-slate-900 tracking-tight">{title}</h1>
                    <p class="text-[10px] font-semibold text-slate-400 uppercase tracking-widest">{today}</p>
                </div>
                <div class="flex items-center gap-4">
                    <NotificationBell />
                    <button
                        type="button"
                        aria-label="Open profile"
                        on:click=move |_| on_profile.call(())
                    >
                        <Avatar size_class="h-9 w-9" />
                    </button>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(#[prop(into)] title: String, children: Children) -> impl IntoView {
    let profile_open = create_rw_signal(false);
    let open_profile = Callback::new(move |_| profile_open.set(true));

    view! {
        <div class="min-h-screen bg-slate-50 flex">
            <Sidebar on_profile=open_profile />
            <div class="flex-1 min-w-0">
                <Header title=title on_profile=open_profile />
                <main class="p-6 lg:p-10">{children()}</main>
            </div>
            <ProfileModal open=profile_open />
            <ToastHost />
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-indigo-600"></div>
        </div>
    }
}
