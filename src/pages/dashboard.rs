//! Account details page with logout.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::{HOME_ROUTE, LOGIN_ROUTE};
use crate::state::session::{Session, User};

/// Hospital name for display, with a dash when unknown.
fn hospital_label(user: &User) -> String {
    user.hospital_name
        .as_deref()
        .filter(|h| !h.trim().is_empty())
        .unwrap_or("—")
        .to_owned()
}

/// Account page showing the stored user. Reads storage after mount.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let user = RwSignal::new(None::<User>);

    {
        let session = session.clone();
        Effect::new(move || user.set(session.user()));
    }

    let on_back = {
        let navigate = navigate.clone();
        move |_| navigate(HOME_ROUTE, NavigateOptions::default())
    };
    let on_logout = move |_| {
        session.logout();
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    view! {
        <div class="account-page">
            <div class="account-card">
                <h1>"Account Details"</h1>
                <Show
                    when=move || user.get().is_some()
                    fallback=|| view! { <p class="account-card__loading">"Loading account..."</p> }
                >
                    <div class="account-card__rows">
                        <p>
                            <strong>"Hospital: "</strong>
                            {move || user.get().map(|u| hospital_label(&u)).unwrap_or_default()}
                        </p>
                        <p>
                            <strong>"Email: "</strong>
                            {move || user.get().map(|u| u.email).unwrap_or_default()}
                        </p>
                    </div>
                </Show>
                <div class="account-card__actions">
                    <button class="btn btn--primary" on:click=on_back>
                        "Back to Patients"
                    </button>
                    <button class="btn" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </div>
        </div>
    }
}
