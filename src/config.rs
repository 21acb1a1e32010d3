//! Compile-time client configuration: backend URL, routes, and storage keys.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so the backend base
//! URL is baked in at build time from `API_URL`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend base URL used when `API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

pub const LOGIN_ROUTE: &str = "/login";
pub const SIGNUP_ROUTE: &str = "/signup";
pub const HOME_ROUTE: &str = "/";
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Where the browser is sent after the backend rejects the stored token.
pub const UNAUTHORIZED_ROUTE: &str = SIGNUP_ROUTE;

/// `localStorage` key holding the bearer token.
pub const TOKEN_KEY: &str = "access_token";
/// `localStorage` key holding the JSON-encoded user record.
pub const USER_KEY: &str = "user";

/// Resolve the backend base URL, trimming any trailing slash.
pub fn api_url() -> String {
    resolve_api_url(option_env!("API_URL"))
}

fn resolve_api_url(raw: Option<&str>) -> String {
    let raw = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_URL);
    raw.trim_end_matches('/').to_owned()
}

/// Join a base URL with an absolute API path.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
