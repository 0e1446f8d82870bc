use leptos::*;

use crate::state::toast::{use_toasts, Toast};

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();
    let items = toasts.items();

    view! {
        <div class="fixed bottom-6 right-6 z-[80] flex flex-col gap-3 w-80" aria-live="polite">
            <For
                each=move || items.get()
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("flex items-start justify-between gap-3 rounded-xl border px-4 py-3 shadow-lg text-sm font-medium {}", toast.kind.classes())>
                            <span>{toast.message}</span>
                            <button
                                type="button"
                                aria-label="Dismiss"
                                class="opacity-60 hover:opacity-100"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
