//! Burnout alert page: recent engagement trends scored for burnout risk.
//!
//! Mounted behind `RequireAuth`; posts to `/predictions/predict-burnout`.

#[cfg(test)]
#[path = "burnout_test.rs"]
mod burnout_test;

use leptos::prelude::*;
use leptos_router::components::A;
use serde::{Deserialize, Serialize};

use crate::state::session::AppSession;

const PREDICT_BURNOUT_PATH: &str = "/predictions/predict-burnout";
const BURNOUT_FALLBACK: &str = "Failed to compute burnout risk. Please check your inputs.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct BurnoutInput {
    weekly_attendance_trend: String,
    marks_decline_trend: String,
    lab_submission_delays: String,
    high_attendance_low_marks: bool,
}

/// Body of `POST /predictions/predict-burnout`. The backend takes the flag
/// as `0`/`1`.
#[derive(Clone, Debug, PartialEq, Serialize)]
struct BurnoutRequest {
    weekly_attendance_trend: f64,
    marks_decline_trend: f64,
    lab_submission_delays: u32,
    high_attendance_low_marks: u8,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
struct BurnoutResult {
    burnout_risk_flag: bool,
    burnout_probability: f64,
    warning_level: String,
}

fn parse_trend(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|trend| trend.is_finite())
}

fn validate_burnout_input(input: &BurnoutInput) -> Result<BurnoutRequest, &'static str> {
    let weekly_attendance_trend =
        parse_trend(&input.weekly_attendance_trend).ok_or("Weekly attendance trend must be a number.")?;
    let marks_decline_trend = parse_trend(&input.marks_decline_trend).ok_or("Marks decline trend must be a number.")?;
    let lab_submission_delays = input
        .lab_submission_delays
        .trim()
        .parse::<u32>()
        .map_err(|_| "Lab submission delays must be a whole number.")?;
    Ok(BurnoutRequest {
        weekly_attendance_trend,
        marks_decline_trend,
        lab_submission_delays,
        high_attendance_low_marks: u8::from(input.high_attendance_low_marks),
    })
}

/// CSS modifier for the backend's `warning_level`. Unknown levels read as high.
fn warning_tier(level: &str) -> &'static str {
    match level {
        "Low" => "low",
        "Medium" => "medium",
        _ => "high",
    }
}

fn trend_field(
    form: RwSignal<BurnoutInput>,
    label: &'static str,
    placeholder: &'static str,
    read: fn(&BurnoutInput) -> String,
    write: fn(&mut BurnoutInput, String),
) -> impl IntoView {
    view! {
        <label class="form-label">
            {label}
            <input
                class="form-input"
                type="number"
                step="any"
                required=true
                placeholder=placeholder
                prop:value=move || form.with(read)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| write(f, value));
                }
            />
        </label>
    }
}

#[component]
pub fn BurnoutPage() -> impl IntoView {
    let session = expect_context::<AppSession>();

    let form = RwSignal::new(BurnoutInput::default());
    let result = RwSignal::new(None::<BurnoutResult>);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        result.set(None);
        let request = match validate_burnout_input(&form.get()) {
            Ok(request) => request,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        error.set(String::new());
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                match session.post_json::<_, BurnoutResult>(PREDICT_BURNOUT_PATH, &request).await {
                    Ok(value) => result.set(Some(value)),
                    Err(e) => {
                        log::warn!("burnout prediction failed: {e}");
                        error.set(BURNOUT_FALLBACK.to_owned());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&session, PREDICT_BURNOUT_PATH, BURNOUT_FALLBACK, request);
            busy.set(false);
        }
    };

    view! {
        <div class="analysis-page">
            <header class="analysis-header">
                <div>
                    <h1>"Burnout Alerts"</h1>
                    <p class="analysis-header__subtitle">"Check burnout risk from recent engagement trends"</p>
                </div>
                <A href="/dashboard">"Back to dashboard"</A>
            </header>
            <form class="analysis-form" on:submit=on_submit>
                {trend_field(form, "Weekly Attendance Trend (e.g. -0.1 = 10% drop)", "e.g. -0.15", |f| f.weekly_attendance_trend.clone(), |f, v| f.weekly_attendance_trend = v)}
                {trend_field(form, "Marks Decline Trend (e.g. -0.2 = dropping)", "e.g. -0.1", |f| f.marks_decline_trend.clone(), |f, v| f.marks_decline_trend = v)}
                {trend_field(form, "Lab Submission Delays (count)", "e.g. 3", |f| f.lab_submission_delays.clone(), |f, v| f.lab_submission_delays = v)}
                <label class="form-check">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.high_attendance_low_marks)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            form.update(|f| f.high_attendance_low_marks = checked);
                        }
                    />
                    "High attendance but low marks"
                </label>
                <button class="form-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Analyzing..." } else { "Check Burnout Risk" }}
                </button>
            </form>
            <Show when=move || !error.get().is_empty()>
                <p class="analysis-error">{move || error.get()}</p>
            </Show>
            {move || {
                result
                    .get()
                    .map(|r| {
                        view! {
                            <section class=format!("analysis-result analysis-result--{}", warning_tier(&r.warning_level))>
                                <p class="analysis-score">{r.warning_level.clone()}</p>
                                <p class="analysis-result__meta">{format!("{}% probability", r.burnout_probability)}</p>
                                <p class="analysis-result__flag">
                                    {if r.burnout_risk_flag {
                                        "Burnout risk detected. Consider reaching out to a mentor."
                                    } else {
                                        "No burnout risk flagged."
                                    }}
                                </p>
                            </section>
                        }
                    })
            }}
        </div>
    }
}
