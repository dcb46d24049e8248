//! Alert box for form-level and request errors.

use leptos::prelude::*;

#[component]
pub fn ErrorMessage(#[prop(into)] message: String, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <div class=format!("error-message {class}") role="alert">
            <p class="error-message__text">{message}</p>
        </div>
    }
}
