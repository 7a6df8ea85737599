//! Placement prediction page: academic indicators in, placement odds out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted behind `RequireAuth`. The scoring model runs on the backend; this
//! page only shapes the form into `POST /predictions/predict-placement` and
//! renders the answer.

#[cfg(test)]
#[path = "predictions_test.rs"]
mod predictions_test;

use leptos::prelude::*;
use leptos_router::components::A;
use serde::{Deserialize, Serialize};

use crate::state::session::AppSession;

const PREDICT_PLACEMENT_PATH: &str = "/predictions/predict-placement";
const PREDICTION_FALLBACK: &str = "Failed to compute prediction. Please check your inputs.";

const INTERNSHIP_TYPES: [(&str, &str); 4] = [
    ("Technical", "Technical/IT"),
    ("Research", "Research"),
    ("Industrial", "Industrial (Core)"),
    ("Corporate", "Corporate/Mgmt"),
];

/// Raw form contents. Numbers stay as typed until submit.
#[derive(Clone, Debug, PartialEq, Eq)]
struct PlacementInput {
    skill_readiness_score: String,
    project_count: String,
    internship_status: bool,
    internship_type: String,
    internship_duration: String,
    communication_rating: String,
    core_subject_marks: String,
}

impl Default for PlacementInput {
    fn default() -> Self {
        Self {
            skill_readiness_score: String::new(),
            project_count: String::new(),
            internship_status: false,
            internship_type: INTERNSHIP_TYPES[0].0.to_owned(),
            internship_duration: "3".to_owned(),
            communication_rating: String::new(),
            core_subject_marks: String::new(),
        }
    }
}

/// Body of `POST /predictions/predict-placement`.
#[derive(Clone, Debug, PartialEq, Serialize)]
struct PlacementRequest {
    skill_readiness_score: f64,
    project_count: u32,
    internship_status: bool,
    internship_type: String,
    internship_duration: u32,
    communication_rating: f64,
    core_subject_marks: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
struct PlacementResult {
    placement_probability: f64,
    confidence_score: f64,
    #[serde(default)]
    suggested_improvements: Vec<String>,
}

fn parse_score(value: &str, max: f64) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|score| score.is_finite() && (0.0..=max).contains(score))
}

fn validate_placement_input(input: &PlacementInput) -> Result<PlacementRequest, &'static str> {
    let skill_readiness_score =
        parse_score(&input.skill_readiness_score, 100.0).ok_or("Skill readiness score must be between 0 and 100.")?;
    let project_count = input
        .project_count
        .trim()
        .parse::<u32>()
        .map_err(|_| "Number of projects must be a whole number.")?;
    let communication_rating =
        parse_score(&input.communication_rating, 10.0).ok_or("Communication rating must be between 0 and 10.")?;
    let core_subject_marks =
        parse_score(&input.core_subject_marks, 100.0).ok_or("Core subject marks must be between 0 and 100.")?;

    // Without an internship the backend expects its "None"/0 defaults.
    let (internship_type, internship_duration) = if input.internship_status {
        if !INTERNSHIP_TYPES.iter().any(|(value, _)| *value == input.internship_type) {
            return Err("Choose an internship type.");
        }
        let months = input
            .internship_duration
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|months| (1..=12).contains(months))
            .ok_or("Internship duration must be 1 to 12 months.")?;
        (input.internship_type.clone(), months)
    } else {
        ("None".to_owned(), 0)
    };

    Ok(PlacementRequest {
        skill_readiness_score,
        project_count,
        internship_status: input.internship_status,
        internship_type,
        internship_duration,
        communication_rating,
        core_subject_marks,
    })
}

/// CSS modifier for a placement probability in percent.
fn probability_tier(probability: f64) -> &'static str {
    if probability >= 60.0 {
        "high"
    } else if probability >= 40.0 {
        "medium"
    } else {
        "low"
    }
}

fn score_field(
    form: RwSignal<PlacementInput>,
    label: &'static str,
    placeholder: &'static str,
    read: fn(&PlacementInput) -> String,
    write: fn(&mut PlacementInput, String),
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
pub fn PredictionsPage() -> impl IntoView {
    let session = expect_context::<AppSession>();

    let form = RwSignal::new(PlacementInput::default());
    let result = RwSignal::new(None::<PlacementResult>);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        result.set(None);
        let request = match validate_placement_input(&form.get()) {
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
                match session.post_json::<_, PlacementResult>(PREDICT_PLACEMENT_PATH, &request).await {
                    Ok(value) => result.set(Some(value)),
                    Err(e) => {
                        log::warn!("placement prediction failed: {e}");
                        error.set(PREDICTION_FALLBACK.to_owned());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&session, PREDICT_PLACEMENT_PATH, PREDICTION_FALLBACK, request);
            busy.set(false);
        }
    };

    let internship = move || form.with(|f| f.internship_status);

    view! {
        <div class="analysis-page">
            <header class="analysis-header">
                <div>
                    <h1>"Placement Prediction"</h1>
                    <p class="analysis-header__subtitle">"Calculate your placement probability score"</p>
                </div>
                <A href="/dashboard">"Back to dashboard"</A>
            </header>
            <form class="analysis-form" on:submit=on_submit>
                {score_field(form, "Skill Readiness Score (0–100)", "e.g. 72.5", |f| f.skill_readiness_score.clone(), |f, v| f.skill_readiness_score = v)}
                {score_field(form, "Number of Projects", "e.g. 3", |f| f.project_count.clone(), |f, v| f.project_count = v)}
                {score_field(form, "Communication Rating (0–10)", "e.g. 7.5", |f| f.communication_rating.clone(), |f, v| f.communication_rating = v)}
                {score_field(form, "Core Subject Marks (0–100)", "e.g. 78", |f| f.core_subject_marks.clone(), |f, v| f.core_subject_marks = v)}
                <label class="form-check">
                    <input
                        type="checkbox"
                        prop:checked=internship
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            form.update(|f| f.internship_status = checked);
                        }
                    />
                    "Completed an internship"
                </label>
                <Show when=internship>
                    <label class="form-label">
                        "Internship Type"
                        <select
                            class="form-input"
                            prop:value=move || form.with(|f| f.internship_type.clone())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.internship_type = value);
                            }
                        >
                            {INTERNSHIP_TYPES
                                .into_iter()
                                .map(|(value, label)| view! { <option value=value>{label}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <label class="form-label">
                        {move || format!("Duration (Months): {}", form.with(|f| f.internship_duration.clone()))}
                        <input
                            type="range"
                            min="1"
                            max="12"
                            prop:value=move || form.with(|f| f.internship_duration.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.internship_duration = value);
                            }
                        />
                    </label>
                </Show>
                <button class="form-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Analyzing..." } else { "Predict Placement" }}
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
                            <section class="analysis-result">
                                <p class=format!("analysis-score analysis-score--{}", probability_tier(r.placement_probability))>
                                    {format!("{}%", r.placement_probability)}
                                </p>
                                <p class="analysis-result__meta">{format!("Confidence: {}%", r.confidence_score)}</p>
                                <ul class="analysis-suggestions">
                                    {r
                                        .suggested_improvements
                                        .into_iter()
                                        .map(|tip| view! { <li>{tip}</li> })
                                        .collect_view()}
                                </ul>
                            </section>
                        }
                    })
            }}
        </div>
    }
}
