//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::net::api::AppApi;
use crate::net::interceptor::LOGIN_ROUTE;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, signup::SignupPage};
use crate::util::i18n::{self, Locale};
use crate::util::theme::{self, Theme};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang=Locale::default().tag() class=theme::DARK_CLASS>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the API client, locale, and theme contexts and sets up routing.
/// `/` and unknown paths fall through to the login page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let locale = RwSignal::new(Locale::default());
    let current_theme = RwSignal::new(Theme::default());
    provide_context(AppApi::browser());
    provide_context(locale);
    provide_context(current_theme);

    // Stored preferences are only readable in the browser; SSR renders the
    // defaults and hydration swaps them in.
    Effect::new(move || {
        let preferred_locale = i18n::read_preference();
        let preferred_theme = theme::read_preference();
        i18n::save_preference(preferred_locale);
        theme::apply(preferred_theme);
        locale.set(preferred_locale);
        current_theme.set(preferred_theme);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/painel.css"/>
        <Title text="Painel"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=LOGIN_ROUTE/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                />
                <Route path=StaticSegment("") view=|| view! { <Redirect path=LOGIN_ROUTE/> }/>
            </Routes>
        </Router>
    }
}
