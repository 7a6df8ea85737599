//! Dashboard page: the signed-in student's profile and analytics summary.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route, always mounted behind
//! `RequireAuth`. The summary is opaque backend JSON; only its top-level
//! sections are picked out for display.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;
use serde_json::Value;

use crate::state::auth::AuthState;
use crate::state::session::AppSession;

/// Sections of the summary response shown on the page, with their headings.
const SUMMARY_SECTIONS: [(&str, &str); 2] = [("readiness", "Placement Readiness"), ("placement", "Placement Prediction")];

fn dashboard_summary_path(student_id: i64) -> String {
    format!("/students/{student_id}/dashboard-summary")
}

/// Render one summary section as display text, or `None` when absent.
fn summary_section(summary: &Value, key: &str) -> Option<String> {
    match summary.get(key)? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => serde_json::to_string_pretty(other).ok(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<AppSession>();

    let summary = RwSignal::new(None::<Value>);
    let summary_error = RwSignal::new(None::<String>);
    let requested_for = RwSignal::new(None::<i64>);

    // Fetch the summary once per signed-in student.
    let session_fetch = session.clone();
    Effect::new(move || {
        let Some(student_id) = auth.get().profile().map(|p| p.id) else {
            return;
        };
        if requested_for.get_untracked() == Some(student_id) {
            return;
        }
        requested_for.set(Some(student_id));

        #[cfg(feature = "csr")]
        {
            let session = session_fetch.clone();
            leptos::task::spawn_local(async move {
                match session.get_json::<Value>(&dashboard_summary_path(student_id)).await {
                    Ok(value) => {
                        summary.set(Some(value));
                        summary_error.set(None);
                    }
                    Err(e) => {
                        log::warn!("dashboard summary failed: {e}");
                        summary_error.set(Some(e.to_string()));
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&session_fetch, dashboard_summary_path(student_id));
        }
    });

    let on_logout = move |_| session.logout();

    let name = move || auth.with(|s| s.profile().map(|p| p.name.clone()).unwrap_or_default());
    let roll_number = move || auth.with(|s| s.profile().map(|p| p.roll_number.clone()).unwrap_or_default());
    let email = move || auth.with(|s| s.profile().map(|p| p.email.clone()).unwrap_or_default());

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <div>
                    <h1>{name}</h1>
                    <p class="dashboard-header__meta">
                        {roll_number}
                        " · "
                        {email}
                    </p>
                </div>
                <button class="dashboard-button" on:click=on_logout>"Logout"</button>
            </header>
            <nav class="dashboard-nav">
                <A href="/predictions">"Predictions"</A>
                <A href="/burnout">"Burnout Alerts"</A>
            </nav>
            <Show when=move || summary_error.get().is_some()>
                <p class="dashboard-error">{move || summary_error.get().unwrap_or_default()}</p>
            </Show>
            <section class="dashboard-summary">
                {SUMMARY_SECTIONS
                    .into_iter()
                    .map(|(key, title)| {
                        view! {
                            <div class="dashboard-card">
                                <h2>{title}</h2>
                                <pre>
                                    {move || {
                                        summary
                                            .with(|s| s.as_ref().and_then(|v| summary_section(v, key)))
                                            .unwrap_or_else(|| "No data yet.".to_owned())
                                    }}
                                </pre>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
