//! Brand header shown above the auth forms, with the preference toggles.

use leptos::prelude::*;

use crate::components::language_toggle::LanguageToggle;
use crate::components::theme_toggle::ThemeToggle;
use crate::util::i18n::{Locale, Text};

#[component]
pub fn Hero() -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();
    let t = move |key: Text| locale.get().text(key);

    view! {
        <section class="hero">
            <div class="hero__toggles">
                <LanguageToggle/>
                <ThemeToggle/>
            </div>
            <h1 class="hero__title">{move || t(Text::HeroTitle)}</h1>
            <p class="hero__subtitle">{move || t(Text::HeroSubtitle)}</p>
        </section>
    }
}
