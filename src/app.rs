//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::require_auth::RequireAuth;
use crate::config;
use crate::net::api::HttpApi;
use crate::pages::{
    burnout::BurnoutPage, dashboard::DashboardPage, login::LoginPage, predictions::PredictionsPage,
    register::RegisterPage,
};
use crate::state::auth::AuthState;
use crate::state::session::AppSession;
use crate::util::token_store::BrowserTokenStore;

/// Root application component.
///
/// Builds the session manager, provides it and its state signal as context,
/// kicks off the startup token check, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = AppSession::new(HttpApi::new(config::api_base_url()), BrowserTokenStore::default());
    let auth: RwSignal<AuthState> = RwSignal::from(session.state());

    provide_context(auth);
    provide_context(session.clone());

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        session.initialize().await;
    });

    view! {
        <Title text="StratAcade"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("predictions")
                    view=|| view! { <RequireAuth><PredictionsPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("burnout")
                    view=|| view! { <RequireAuth><BurnoutPage/></RequireAuth> }
                />
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard"/> }/>
            </Routes>
        </Router>
    }
}
