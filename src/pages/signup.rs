//! Signup page: registers an account under a new or existing hospital.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::{HOME_ROUTE, LOGIN_ROUTE};
use crate::net::api::{ApiClient, ApiError};
use crate::net::types::AuthResponse;
use crate::util::timer;

/// Delay before leaving the page after a successful signup.
const SUCCESS_REDIRECT_MS: u32 = 1800;
/// Delay before sending an already-registered user to login.
const DUPLICATE_REDIRECT_MS: u32 = 2000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    /// A new hospital was registered.
    Created,
    /// The account joined an existing hospital.
    Joined,
    /// The email already has an account.
    Warning,
    Error,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            Self::Created => "signup-notice signup-notice--created",
            Self::Joined => "signup-notice signup-notice--joined",
            Self::Warning => "signup-notice signup-notice--warning",
            Self::Error => "signup-notice signup-notice--error",
        }
    }
}

/// Message shown after a signup attempt and where to go next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupNotice {
    pub kind: NoticeKind,
    pub text: String,
    /// Route and delay in milliseconds for the follow-up redirect.
    pub redirect: Option<(&'static str, u32)>,
}

/// Map a signup result to the notice shown to the user.
pub fn signup_notice(result: &Result<AuthResponse, ApiError>) -> SignupNotice {
    match result {
        Ok(resp) => {
            let hospital = resp
                .user
                .as_ref()
                .and_then(|u| u.hospital_name.clone())
                .unwrap_or_default();
            let (kind, text) = if resp.new_hospital {
                (NoticeKind::Created, format!("Hospital \"{hospital}\" registered successfully!"))
            } else {
                (NoticeKind::Joined, format!("Added under existing hospital: \"{hospital}\". Welcome!"))
            };
            SignupNotice { kind, text, redirect: Some((HOME_ROUTE, SUCCESS_REDIRECT_MS)) }
        }
        Err(e) if e.is_email_already_registered() => SignupNotice {
            kind: NoticeKind::Warning,
            text: "This email is already registered. Please log in instead.".to_owned(),
            redirect: Some((LOGIN_ROUTE, DUPLICATE_REDIRECT_MS)),
        },
        Err(_) => SignupNotice {
            kind: NoticeKind::Error,
            text: "Signup failed. Please try again.".to_owned(),
            redirect: None,
        },
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let hospital_name = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(None::<SignupNotice>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        notice.set(None);

        let client = client.clone();
        let navigate = navigate.clone();
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        let hospital_value = hospital_name.get_untracked().trim().to_owned();
        leptos::task::spawn_local(async move {
            let result = client.signup(&email_value, &password_value, &hospital_value).await;
            if let Err(e) = &result {
                log::error!("signup failed: {e}");
            }
            let next = signup_notice(&result);
            if let Some((route, delay)) = next.redirect {
                timer::after(delay, move || navigate(route, NavigateOptions::default()));
            }
            notice.set(Some(next));
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            {move || {
                notice
                    .get()
                    .map(|n| view! { <div class={n.kind.class()}>{n.text}</div> })
            }}
            <form class="login-card" on:submit=on_submit>
                <h1>"Sign Up"</h1>
                <label class="login-label">
                    "Email"
                    <input
                        class="login-input"
                        type="email"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-label">
                    "Password"
                    <input
                        class="login-input"
                        type="password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-label">
                    "Hospital Name"
                    <input
                        class="login-input"
                        type="text"
                        required=true
                        prop:value=move || hospital_name.get()
                        on:input=move |ev| hospital_name.set(event_target_value(&ev))
                    />
                </label>
                <button class="login-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing up..." } else { "Sign Up" }}
                </button>
                <p class="login-card__footer">
                    "Already have an account? "
                    <a href=LOGIN_ROUTE>"Login"</a>
                </p>
            </form>
        </div>
    }
}
