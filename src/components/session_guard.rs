//! Route guard gating page rendering on the stored session.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::Session;
use crate::util::auth::{GuardState, evaluate};

/// Renders `children` only once the session check allows the current path.
///
/// The check runs in an effect, so it never touches storage during the
/// server render pass; the page shows "Checking session..." until the
/// browser evaluates it. It re-runs whenever the path changes.
#[component]
pub fn SessionGuard(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();
    let location = use_location();
    let navigate = use_navigate();
    let state = RwSignal::new(GuardState::Pending);

    Effect::new(move || {
        let path = location.pathname.get();
        let next = evaluate(session.is_authenticated(), &path);
        if let GuardState::Redirecting(route) = next {
            navigate(route, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
        state.set(next);
    });

    view! {
        <Show
            when=move || state.get() == GuardState::Authorized
            fallback=|| view! { <div class="session-check">"Checking session..."</div> }
        >
            {children()}
        </Show>
    }
}
