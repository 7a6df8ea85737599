//! Route guard for pages that need a signed-in student.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Renders `children` only for an authenticated session.
///
/// Shows a loading notice during the startup token check and redirects to
/// `/login` once it is known nobody is signed in.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=move || {
                view! {
                    <Show when=move || auth.get().loading>
                        <div class="auth-loading">"Loading..."</div>
                    </Show>
                }
            }
        >
            {children()}
        </Show>
    }
}
