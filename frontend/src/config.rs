use serde::Deserialize;
use std::sync::OnceLock;

pub const DEFAULT_AUTH_PATH: &str = "/api/auth";
const FALLBACK_AUTH_BASE_URL: &str = "http://localhost:3000/api/auth";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuntimeConfig {
    pub auth_base_url: Option<String>,
}

static AUTH_BASE_URL: OnceLock<String> = OnceLock::new();

fn read_global_key(global: &str, keys: [&str; 2]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let val = js_sys::Reflect::get(&obj, &keys[0].into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&obj, &keys[1].into()).ok());
    val.and_then(|v| v.as_string())
}

fn snapshot_from_globals() -> Option<String> {
    // window.__DOCSIGN_ENV (env.js) wins over window.__DOCSIGN_CONFIG
    read_global_key("__DOCSIGN_ENV", ["AUTH_BASE_URL", "auth_base_url"])
        .or_else(|| read_global_key("__DOCSIGN_CONFIG", ["auth_base_url", "AUTH_BASE_URL"]))
}

fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

fn cache_base_url(value: &str) -> String {
    let value = value.to_string();
    let _ = AUTH_BASE_URL.set(value.clone());
    value
}

fn write_window_config(cfg: &RuntimeConfig) {
    let Some(url) = &cfg.auth_base_url else {
        return;
    };
    let Some(w) = web_sys::window() else {
        return;
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &"auth_base_url".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&w, &"__DOCSIGN_CONFIG".into(), &obj);
}

async fn fetch_runtime_config(origin: Option<&str>) -> Option<RuntimeConfig> {
    let url = format!("{}/config.json", origin?);
    let resp = reqwest::get(&url).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

/// Trims a configured base URL and resolves path-only values against the
/// page origin.
pub fn normalize_base_url(raw: &str, origin: Option<&str>) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with('/') {
        let origin = origin?.trim_end_matches('/');
        return Some(format!("{}{}", origin, trimmed));
    }
    Some(trimmed.to_string())
}

pub fn default_base_url(origin: Option<&str>) -> String {
    normalize_base_url(DEFAULT_AUTH_PATH, origin)
        .unwrap_or_else(|| FALLBACK_AUTH_BASE_URL.to_string())
}

pub async fn await_auth_base_url() -> String {
    if let Some(cached) = AUTH_BASE_URL.get() {
        return cached.clone();
    }
    let origin = page_origin();
    if let Some(existing) =
        snapshot_from_globals().and_then(|raw| normalize_base_url(&raw, origin.as_deref()))
    {
        return cache_base_url(&existing);
    }
    if let Some(cfg) = fetch_runtime_config(origin.as_deref()).await {
        write_window_config(&cfg);
        if let Some(url) = cfg
            .auth_base_url
            .as_deref()
            .and_then(|raw| normalize_base_url(raw, origin.as_deref()))
        {
            return cache_base_url(&url);
        }
    }
    log::warn!("No auth base URL configured; using the default auth path");
    cache_base_url(&default_base_url(origin.as_deref()))
}

pub async fn init() {
    let base = await_auth_base_url().await;
    log::info!("Auth boundary resolved to {}", base);
}
