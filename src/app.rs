//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::session_guard::SessionGuard;
use crate::net::api::ApiClient;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, patients::PatientsPage, signup::SignupPage};
use crate::state::session::Session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="AI-powered patient follow-up system"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the browser session and the API client bound to it, then routes
/// every page through the session guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::browser();
    let client = ApiClient::browser(session.clone());
    provide_context(session);
    provide_context(client);

    view! {
        <Stylesheet id="leptos" href="/pkg/followup-dashboard.css"/>
        <Title text="Hospital Voice Agent"/>

        <Router>
            <SessionGuard>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=PatientsPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                </Routes>
            </SessionGuard>
        </Router>
    }
}
