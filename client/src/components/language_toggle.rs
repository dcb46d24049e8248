//! PT / EN switch. Writes the choice to the shared locale signal and
//! persists it.

use leptos::prelude::*;

use crate::util::i18n::{self, Locale};

#[component]
pub fn LanguageToggle() -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();

    let choose = move |next: Locale| {
        if locale.get_untracked() != next {
            locale.set(next);
        }
        i18n::save_preference(next);
    };

    view! {
        <div class="language-toggle" role="group">
            <button
                class="language-toggle__option"
                class:language-toggle__option--active=move || locale.get() == Locale::Pt
                title="Português"
                aria-label="Mudar idioma para Português"
                on:click=move |_| choose(Locale::Pt)
            >
                "PT"
            </button>
            <button
                class="language-toggle__option"
                class:language-toggle__option--active=move || locale.get() == Locale::En
                title="English"
                aria-label="Change language to English"
                on:click=move |_| choose(Locale::En)
            >
                "EN"
            </button>
        </div>
    }
}
