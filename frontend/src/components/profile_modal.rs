use leptos::*;

use crate::state::{
    profile::{use_profile, AdminProfile, ProfileState},
    toast::{use_toasts, ToastState},
};

fn selected_file(ev: &ev::Event) -> Option<web_sys::File> {
    let input = event_target::<web_sys::HtmlInputElement>(ev);
    input.files()?.get(0)
}

/// Trims the free-form fields and drops a blank employee id.
pub fn normalise_profile(mut profile: AdminProfile) -> AdminProfile {
    profile.name = profile.name.trim().to_string();
    profile.email = profile.email.trim().to_string();
    profile.employee_id = profile
        .employee_id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty());
    profile
}

fn persist(state: &ProfileState, toasts: ToastState, profile: AdminProfile, notice: &str) -> bool {
    match state.save(profile) {
        Ok(()) => {
            toasts.success(notice);
            true
        }
        Err(err) => {
            log::error!("Failed to save admin profile: {}", err);
            toasts.error("Failed to save profile");
            false
        }
    }
}

#[component]
fn ProfileField(
    #[prop(into)] label: String,
    value: Signal<String>,
    editing: Signal<bool>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="p-4 rounded-2xl bg-slate-50 border border-slate-100 space-y-2">
            <span class="text-[10px] font-bold text-slate-400 uppercase tracking-widest">{label}</span>
            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <p class="text-sm font-semibold text-slate-900 truncate">
                        {move || {
                            let text = value.get();
                            if text.is_empty() { "Not set".to_string() } else { text }
                        }}
                    </p>
                }
            >
                <input
                    type="text"
                    class="w-full rounded-lg border border-indigo-100 bg-white px-3 py-2 text-sm focus:border-indigo-600 outline-none"
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.call(event_target_value(&ev))
                />
            </Show>
        </div>
    }
}

#[component]
pub fn ProfileModal(open: RwSignal<bool>) -> impl IntoView {
    let profile_state = use_profile();
    let toasts = use_toasts();
    let current = profile_state.current();
    let editing = create_rw_signal(false);
    let draft = create_rw_signal(current.get_untracked());

    let field = move |get: fn(&AdminProfile) -> String| {
        Signal::derive(move || {
            if editing.get() {
                draft.with(get)
            } else {
                current.with(get)
            }
        })
    };
    let editing_signal: Signal<bool> = editing.into();

    let start_edit = move |_| {
        draft.set(current.get_untracked());
        editing.set(true);
    };
    let close = move |_| {
        editing.set(false);
        open.set(false);
    };

    let on_save = move |_| {
        let next = normalise_profile(draft.get_untracked());
        if persist(&profile_state, toasts, next, "Profile updated") {
            editing.set(false);
        }
    };

    let on_avatar = move |ev: ev::Event| {
        let Some(file) = selected_file(&ev) else {
            return;
        };
        spawn_local(async move {
            let file = gloo_file::File::from(file);
            match gloo_file::futures::read_as_data_url(&file).await {
                Ok(data_url) => {
                    draft.update(|d| d.avatar = Some(data_url.clone()));
                    let mut next = profile_state.current().get_untracked();
                    next.avatar = Some(data_url);
                    persist(&profile_state, toasts, next, "Profile picture updated");
                }
                Err(err) => {
                    log::error!("Failed to read avatar file: {}", err);
                    toasts.error("Could not read the selected image");
                }
            }
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-[60] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-slate-900/40"
                    on:click=close
                ></button>
                <div class="relative w-full max-w-lg rounded-3xl bg-white shadow-2xl overflow-hidden" role="dialog" aria-modal="true">
                    <div class="bg-indigo-600 px-8 pt-8 pb-16">
                        <h3 class="text-xl font-black text-white uppercase tracking-tight">"Admin Profile"</h3>
                    </div>
                    <div class="px-8 pb-8">
                        <div class="-mt-12 mb-6 flex justify-center">
                            <div class="relative h-24 w-24 rounded-3xl bg-white p-1 shadow-xl">
                                <div class="h-full w-full rounded-[1.3rem] bg-slate-50 overflow-hidden flex items-center justify-center">
                                    {move || match current.with(|p| p.avatar.clone()) {
                                        Some(src) => view! { <img src=src alt="Admin" class="h-full w-full object-cover" /> }.into_view(),
                                        None => view! {
                                            <span class="text-3xl font-black text-indigo-600">{move || current.with(AdminProfile::initial)}</span>
                                        }.into_view(),
                                    }}
                                </div>
                                <label class="absolute -bottom-1 -right-1 px-2 py-1 bg-indigo-600 text-white text-xs rounded-lg shadow cursor-pointer hover:bg-indigo-700">
                                    "Photo"
                                    <input type="file" class="hidden" accept="image/*" on:change=on_avatar />
                                </label>
                            </div>
                        </div>
                        <div class="text-center mb-6">
                            <Show
                                when=move || editing.get()
                                fallback=move || view! {
                                    <h4 class="text-2xl font-black text-slate-900 truncate">{move || current.with(|p| p.name.clone())}</h4>
                                    <span class="inline-block mt-2 px-3 py-1 rounded-full bg-indigo-50 text-indigo-600 text-[10px] font-bold uppercase tracking-widest">
                                        {move || current.with(|p| p.role.clone())}
                                    </span>
                                }
                            >
                                <input
                                    type="text"
                                    class="w-full text-center text-xl font-bold rounded-xl border-2 border-indigo-100 bg-slate-50 px-4 py-3 outline-none focus:border-indigo-600"
                                    prop:value=move || draft.with(|d| d.name.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        draft.update(|d| d.name = value);
                                    }
                                />
                            </Show>
                        </div>
                        <div class="grid grid-cols-2 gap-3">
                            <ProfileField
                                label="Email"
                                value=field(|p| p.email.clone())
                                editing=editing_signal
                                on_input=Callback::new(move |v: String| draft.update(|d| d.email = v))
                            />
                            <ProfileField
                                label="Phone"
                                value=field(|p| p.phone.clone())
                                editing=editing_signal
                                on_input=Callback::new(move |v: String| draft.update(|d| d.phone = v))
                            />
                            <ProfileField
                                label="Location"
                                value=field(|p| p.location.clone())
                                editing=editing_signal
                                on_input=Callback::new(move |v: String| draft.update(|d| d.location = v))
                            />
                            <ProfileField
                                label="Employee ID"
                                value=field(|p| p.employee_id.clone().unwrap_or_default())
                                editing=editing_signal
                                on_input=Callback::new(move |v: String| draft.update(|d| d.employee_id = Some(v)))
                            />
                        </div>
                        <div class="mt-8 pt-6 border-t border-slate-100 flex gap-3">
                            <Show
                                when=move || editing.get()
                                fallback=move || view! {
                                    <button
                                        type="button"
                                        class="flex-1 py-3 rounded-xl bg-white text-indigo-600 font-bold text-xs uppercase tracking-widest border-2 border-indigo-100 hover:bg-indigo-50"
                                        on:click=start_edit
                                    >
                                        "Edit Profile"
                                    </button>
                                }
                            >
                                <button
                                    type="button"
                                    class="flex-1 py-3 rounded-xl bg-indigo-600 text-white font-bold text-xs uppercase tracking-widest hover:bg-indigo-700"
                                    on:click=on_save
                                >
                                    "Save Changes"
                                </button>
                                <button
                                    type="button"
                                    class="px-6 rounded-xl bg-slate-50 text-slate-500 font-bold text-xs uppercase tracking-widest border border-slate-100 hover:bg-slate-100"
                                    on:click=move |_| editing.set(false)
                                >
                                    "Cancel"
                                </button>
                            </Show>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
