//! Dark / light switch bound to the shared theme signal.

use leptos::prelude::*;

use crate::util::i18n::{Locale, Text};
use crate::util::theme::{self, Theme};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let current = expect_context::<RwSignal<Theme>>();
    let locale = expect_context::<RwSignal<Locale>>();
    let label = move || {
        let key = match current.get() {
            Theme::Dark => Text::ThemeToLight,
            Theme::Light => Text::ThemeToDark,
        };
        locale.get().text(key)
    };

    view! {
        <button
            class="theme-toggle"
            title=label
            aria-label=label
            on:click=move |_| current.set(theme::toggle(current.get_untracked()))
        >
            {move || if current.get() == Theme::Dark { "☀" } else { "☾" }}
        </button>
    }
}
