//! Session guard rules shared by the route guard component.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route applies the same rule: signed-out users are sent to `/login`,
//! signed-in users are kept off `/login` and `/signup`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::config::{HOME_ROUTE, LOGIN_ROUTE, SIGNUP_ROUTE};

/// Guard state for one mounted page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    /// Storage has not been checked yet.
    #[default]
    Pending,
    /// Render the page.
    Authorized,
    /// Navigating away; the page is never rendered.
    Redirecting(&'static str),
}

/// Whether `path` is `/login` or `/signup`.
pub fn is_auth_page(path: &str) -> bool {
    let path = if path.len() > 1 { path.trim_end_matches('/') } else { path };
    path == LOGIN_ROUTE || path == SIGNUP_ROUTE
}

/// Decide what the guard does for `path` given token presence.
pub fn evaluate(has_token: bool, path: &str) -> GuardState {
    match (has_token, is_auth_page(path)) {
        (false, false) => GuardState::Redirecting(LOGIN_ROUTE),
        (true, true) => GuardState::Redirecting(HOME_ROUTE),
        _ => GuardState::Authorized,
    }
}
