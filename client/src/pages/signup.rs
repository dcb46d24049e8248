//! Signup page: creates an account and lands on the dashboard.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::credentials_form::CredentialsForm;
use crate::components::hero::Hero;
use crate::net::api::{ApiClient, AppApi};
use crate::net::error::error_message;
use crate::net::transport::Transport;
use crate::state::form::{FormErrors, SubmitError};
use crate::util::i18n::{Locale, Text};
use crate::util::validation::validate_signup_form;

/// Where a successful signup lands. The backend sets the session cookie.
pub const AFTER_SIGNUP: &str = "/dashboard";

/// Validate the form and create the account.
///
/// # Errors
///
/// `Fields` when validation fails (no request is sent); `General` with the
/// server's message or the localized fallback when the request fails.
pub async fn submit_signup<T: Transport>(
    api: &ApiClient<T>,
    email: &str,
    password: &str,
    locale: Locale,
) -> Result<&'static str, SubmitError> {
    validate_signup_form(email, password).map_err(SubmitError::Fields)?;
    api.signup(email, password).await.map(|_| AFTER_SIGNUP).map_err(|e| {
        log::warn!("signup failed: {}", e.summary());
        SubmitError::General(error_message(Some(&e), locale.text(Text::SignupFailed)))
    })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let api = expect_context::<AppApi>();
    let locale = expect_context::<RwSignal<Locale>>();
    let navigate = leptos_router::hooks::use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let busy = RwSignal::new(false);
    let landing = RwSignal::new(None::<&'static str>);
    let t = move |key: Text| locale.get().text(key);

    Effect::new(move || {
        if let Some(route) = landing.get() {
            navigate(route, leptos_router::NavigateOptions::default());
        }
    });

    let on_submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        errors.update(FormErrors::clear_all);
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        let current = locale.get_untracked();

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            busy.set(true);
            leptos::task::spawn_local(async move {
                let outcome = submit_signup(&api, &email_value, &password_value, current).await;
                busy.set(false);
                match outcome {
                    Ok(route) => landing.set(Some(route)),
                    Err(e) => errors.update(|f| f.show(&e, current)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, email_value, password_value, current);
        }
    });

    view! {
        <div class="auth-page">
            <Hero/>
            <div class="auth-card">
                <h2 class="auth-card__title">{move || t(Text::SignupTitle)}</h2>
                <p class="auth-card__subtitle">
                    {move || t(Text::SignupSubtitle)}
                    " "
                    <A href="/login">{move || t(Text::SignupLoginLink)}</A>
                </p>
                <CredentialsForm
                    email=email
                    password=password
                    errors=errors
                    busy=busy
                    password_placeholder=Text::SignupPasswordPlaceholder
                    password_autocomplete="new-password"
                    submit_label=Text::SignupSubmit
                    submitting_label=Text::SignupSubmitting
                    on_submit=on_submit
                />
            </div>
        </div>
    }
}
