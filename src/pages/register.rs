//! Account creation page. A successful registration signs the student in.
//!
//! Password confirmation and the minimum length are checked here; the
//! session manager only requires the fields to be present.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::session::AppSession;
#[cfg(feature = "csr")]
use crate::state::session::SessionError;
#[cfg(feature = "csr")]
use crate::util::auth::auth_error_message;

#[cfg(any(test, feature = "csr"))]
const REGISTER_FALLBACK: &str = "Registration failed. Please try again.";
const MIN_PASSWORD_CHARS: usize = 6;

/// Raw form contents, one field per input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct RegisterInput {
    name: String,
    roll_number: String,
    email: String,
    password: String,
    confirm_password: String,
}

fn validate_register_input(input: &RegisterInput) -> Result<(), &'static str> {
    let required = [
        &input.name,
        &input.roll_number,
        &input.email,
        &input.password,
        &input.confirm_password,
    ];
    if required.iter().any(|value| value.trim().is_empty()) {
        return Err("All fields are required.");
    }
    if input.password != input.confirm_password {
        return Err("Passwords do not match.");
    }
    if input.password.chars().count() < MIN_PASSWORD_CHARS {
        return Err("Password must be at least 6 characters.");
    }
    Ok(())
}

fn form_field(
    form: RwSignal<RegisterInput>,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    read: fn(&RegisterInput) -> String,
    write: fn(&mut RegisterInput, String),
) -> impl IntoView {
    view! {
        <label class="auth-label">
            {label}
            <input
                class="auth-input"
                type=input_type
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
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();

    let form = RwSignal::new(RegisterInput::default());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    Effect::new(move || {
        if auth.get().is_authenticated() {
            navigate("/dashboard", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = form.get();
        if let Err(message) = validate_register_input(&input) {
            error.set(message.to_owned());
            return;
        }
        error.set(String::new());
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                let result = session
                    .register(
                        input.name.trim(),
                        input.roll_number.trim(),
                        input.email.trim(),
                        &input.password,
                    )
                    .await;
                match result {
                    Ok(()) | Err(SessionError::Superseded) => {}
                    Err(e) => error.set(auth_error_message(&e, REGISTER_FALLBACK)),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&session, input);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <p class="auth-card__subtitle">"Join EduNexus AI"</p>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-error">{move || error.get()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    {form_field(form, "Full Name", "text", "e.g. Jagadeesh Kumar", |f| f.name.clone(), |f, v| f.name = v)}
                    {form_field(form, "Roll Number", "text", "e.g. ENX2026-042", |f| f.roll_number.clone(), |f, v| f.roll_number = v)}
                    {form_field(form, "Email Address", "email", "name@university.edu", |f| f.email.clone(), |f, v| f.email = v)}
                    {form_field(form, "Password", "password", "", |f| f.password.clone(), |f, v| f.password = v)}
                    {form_field(form, "Confirm Password", "password", "", |f| f.confirm_password.clone(), |f, v| f.confirm_password = v)}
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating Account..." } else { "Create Account" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
