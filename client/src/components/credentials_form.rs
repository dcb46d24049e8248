//! Email + password form shared by the login and signup pages.
//!
//! DESIGN
//! ======
//! The page owns the signals and the submit flow; this component only renders
//! inputs, per-field errors and the general error, and clears a field's error
//! as soon as the user edits it.

use leptos::prelude::*;

use crate::components::error_message::ErrorMessage;
use crate::state::form::FormErrors;
use crate::util::i18n::{Locale, Text};
use crate::util::validation::Field;

#[component]
pub fn CredentialsForm(
    email: RwSignal<String>,
    password: RwSignal<String>,
    errors: RwSignal<FormErrors>,
    busy: RwSignal<bool>,
    password_placeholder: Text,
    password_autocomplete: &'static str,
    submit_label: Text,
    submitting_label: Text,
    on_submit: Callback<()>,
) -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();
    let t = move |key: Text| locale.get().text(key);
    let field_error = move |field: Field| errors.with(|f| f.get(field).map(str::to_owned));

    view! {
        <form
            class="auth-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <label class="auth-form__label" for="email">{move || t(Text::EmailLabel)}</label>
            <input
                id="email"
                name="email"
                type="email"
                autocomplete="email"
                class="auth-form__input"
                class:auth-form__input--invalid=move || field_error(Field::Email).is_some()
                placeholder=move || t(Text::EmailPlaceholder)
                prop:value=move || email.get()
                disabled=move || busy.get()
                on:input=move |ev| {
                    email.set(event_target_value(&ev));
                    errors.update(|f| f.clear(Field::Email));
                }
            />
            {move || field_error(Field::Email).map(|msg| view! { <p class="auth-form__error">{msg}</p> })}

            <label class="auth-form__label" for="password">{move || t(Text::PasswordLabel)}</label>
            <input
                id="password"
                name="password"
                type="password"
                autocomplete=password_autocomplete
                class="auth-form__input"
                class:auth-form__input--invalid=move || field_error(Field::Password).is_some()
                placeholder=move || t(password_placeholder)
                prop:value=move || password.get()
                disabled=move || busy.get()
                on:input=move |ev| {
                    password.set(event_target_value(&ev));
                    errors.update(|f| f.clear(Field::Password));
                }
            />
            {move || field_error(Field::Password).map(|msg| view! { <p class="auth-form__error">{msg}</p> })}

            {move || errors.get().general.map(|message| view! { <ErrorMessage message=message/> })}

            <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { t(submitting_label) } else { t(submit_label) }}
            </button>
        </form>
    }
}
