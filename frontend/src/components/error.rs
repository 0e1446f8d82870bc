use crate::api::ApiError;
use leptos::*;
use serde_json::Value;

/// Field messages carried by an error: the server's validation entries
/// (`[{"msg": ..}]`) or a client-side `{"errors": [..]}` list.
fn detail_messages(details: Option<&Value>) -> Vec<String> {
    let entries = match details {
        Some(Value::Array(entries)) => entries.clone(),
        Some(other) => other
            .get("errors")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default(),
        None => Vec::new(),
    };
    entries
        .iter()
        .filter_map(|entry| match entry {
            Value::String(text) => Some(text.clone()),
            other => other.get("msg").and_then(Value::as_str).map(str::to_string),
        })
        .collect()
}

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-rose-50 border border-rose-200 text-rose-700 px-4 py-3 rounded-lg space-y-1 my-2">
                <div class="font-semibold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    let messages = detail_messages(e.details.as_ref());
                    if messages.len() > 1 {
                        view! {
                            <ul class="list-disc list-inside text-sm">
                                {messages.into_iter().map(|msg| view! { <li>{msg}</li> }).collect_view()}
                            </ul>
                        }
                        .into_view()
                    } else if e.code != "UNKNOWN" && !e.code.is_empty() {
                        view! { <div class="text-xs opacity-75">{"Code: "}{e.code.clone()}</div> }.into_view()
                    } else {
                        ().into_view()
                    }
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}
