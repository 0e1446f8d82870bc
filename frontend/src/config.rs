use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "https://hrm-comapny.onrender.com/api";

/// Rows per directory page.
pub const DIRECTORY_PAGE_SIZE: usize = 8;
pub const UNREAD_POLL_INTERVAL_MS: u32 = 10_000;
pub const TOAST_DISMISS_MS: u32 = 4_000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn get_from_env_js() -> Option<String> {
    // Optional global object: window.__HR_DASHBOARD_ENV = { API_URL: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &"__HR_DASHBOARD_ENV".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let val = js_sys::Reflect::get(&obj, &"API_URL".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&obj, &"api_url".into()).ok());
    val.and_then(|v| v.as_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn get_from_env_js() -> Option<String> {
    None
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Runtime override wins over the build-time `HR_API_URL`, which wins over
/// the built-in default.
pub fn resolve(runtime: RuntimeConfig, build_time: Option<&str>) -> String {
    runtime
        .api_base_url
        .as_deref()
        .and_then(non_empty)
        .or_else(|| build_time.and_then(non_empty))
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

pub fn api_base_url() -> String {
    API_BASE_URL
        .get_or_init(|| {
            let runtime = RuntimeConfig {
                api_base_url: get_from_env_js(),
            };
            resolve(runtime, option_env!("HR_API_URL"))
        })
        .clone()
}

pub fn init() {
    log::info!("API base URL: {}", api_base_url());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_value_takes_precedence() {
        let runtime = RuntimeConfig {
            api_base_url: Some("https://runtime.example/api".into()),
        };
        assert_eq!(
            resolve(runtime, Some("https://build.example/api")),
            "https://runtime.example/api"
        );
    }

    #[test]
    fn build_time_value_used_when_runtime_missing_or_blank() {
        let blank = RuntimeConfig {
            api_base_url: Some("   ".into()),
        };
        assert_eq!(
            resolve(blank, Some("https://build.example/api")),
            "https://build.example/api"
        );
    }

    #[test]
    fn falls_back_to_default() {
        assert_eq!(resolve(RuntimeConfig::default(), None), DEFAULT_API_BASE_URL);
        assert_eq!(resolve(RuntimeConfig::default(), Some("")), DEFAULT_API_BASE_URL);
    }
}
