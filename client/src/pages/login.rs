//! Login page: email + password form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Entry point for unauthenticated users and the target of every session
//! redirect. A 401 here means bad credentials, so the unauthorized-redirect
//! interceptor stays quiet on this route and the form shows the message.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::credentials_form::CredentialsForm;
use crate::components::hero::Hero;
use crate::net::api::{ApiClient, AppApi};
use crate::net::error::error_message;
use crate::net::transport::Transport;
use crate::state::form::{FormErrors, SubmitError};
use crate::util::i18n::{Locale, Text};
use crate::util::validation::validate_login_form;

/// Where a successful login lands.
pub const AFTER_LOGIN: &str = "/dashboard";

/// Validate the form and sign in.
///
/// Returns the route to navigate to on success.
///
/// # Errors
///
/// `Fields` when validation fails (no request is sent); `General` with the
/// localized message when the request fails.
pub async fn submit_login<T: Transport>(
    api: &ApiClient<T>,
    email: &str,
    password: &str,
    locale: Locale,
) -> Result<&'static str, SubmitError> {
    validate_login_form(email, password).map_err(SubmitError::Fields)?;
    match api.login(email, password).await {
        Ok(_) => Ok(AFTER_LOGIN),
        Err(e) if e.is_unauthorized() => Err(SubmitError::General(locale.text(Text::LoginInvalidCredentials).to_owned())),
        Err(e) => {
            log::warn!("login failed: {}", e.summary());
            Err(SubmitError::General(error_message(Some(&e), locale.text(Text::LoginFailed))))
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
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
                let outcome = submit_login(&api, &email_value, &password_value, current).await;
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
                <h2 class="auth-card__title">{move || t(Text::LoginTitle)}</h2>
                <p class="auth-card__subtitle">
                    {move || t(Text::LoginSubtitle)}
                    " "
                    <A href="/signup">{move || t(Text::LoginCreateAccount)}</A>
                </p>
                <CredentialsForm
                    email=email
                    password=password
                    errors=errors
                    busy=busy
                    password_placeholder=Text::PasswordPlaceholder
                    password_autocomplete="current-password"
                    submit_label=Text::LoginSubmit
                    submitting_label=Text::LoginSubmitting
                    on_submit=on_submit
                />
            </div>
        </div>
    }
}
