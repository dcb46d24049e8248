//! Dashboard page: sales chart and product table for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered only inside `ProtectedRoute`. Data is fetched once per mount into
//! an `AsyncState`; a failed fetch offers a full page reload. A 401 from the
//! fetch is handled by the API client's redirect interceptor.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::language_toggle::LanguageToggle;
use crate::components::sales_chart::SalesChart;
use crate::components::sales_table::SalesTable;
use crate::components::theme_toggle::ThemeToggle;
use crate::net::api::{ApiClient, AppApi};
use crate::net::interceptor::LOGIN_ROUTE;
use crate::net::transport::Transport;
use crate::net::types::DashboardData;
use crate::state::async_state::AsyncState;
use crate::state::auth::MountFlag;
use crate::util::i18n::{Locale, Text};

/// Fetch dashboard data, mapping any failure to the localized message.
///
/// # Errors
///
/// The localized "failed to load" message; the cause is logged.
pub async fn load_dashboard<T: Transport>(api: &ApiClient<T>, locale: Locale) -> Result<DashboardData, String> {
    api.dashboard_data().await.map_err(|e| {
        log::warn!("dashboard fetch failed: {}", e.summary());
        locale.text(Text::DashboardFailed).to_owned()
    })
}

/// End the session. The user lands on the login page either way.
pub async fn sign_out<T: Transport>(api: &ApiClient<T>) -> &'static str {
    if let Err(e) = api.logout().await {
        log::warn!("logout failed: {}", e.summary());
    }
    LOGIN_ROUTE
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<AppApi>();
    let locale = expect_context::<RwSignal<Locale>>();
    let navigate = leptos_router::hooks::use_navigate();
    let t = move |key: Text| locale.get().text(key);

    let data = RwSignal::new(AsyncState::<DashboardData>::default());
    let landing = RwSignal::new(None::<&'static str>);
    let mounted = MountFlag::new();
    on_cleanup({
        let mounted = mounted.clone();
        move || mounted.unmount()
    });

    Effect::new(move || {
        if let Some(route) = landing.get() {
            navigate(route, leptos_router::NavigateOptions::default());
        }
    });

    if data.try_update(AsyncState::start).unwrap_or(false) {
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let current = locale.get_untracked();
            leptos::task::spawn_local(async move {
                let result = load_dashboard(&api, current).await;
                if mounted.is_mounted() {
                    data.update(|s| {
                        s.settle(result);
                    });
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &mounted;
        }
    }

    let on_logout = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                landing.set(Some(sign_out(&api).await));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &api;
        }
    });

    let on_reload = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().reload();
            }
        }
    };

    view! {
        {move || match data.get() {
            AsyncState::Idle | AsyncState::Loading => {
                view! {
                    <div class="dashboard-status">
                        <div class="dashboard-status__spinner" aria-hidden="true"></div>
                        <p>{t(Text::DashboardLoading)}</p>
                    </div>
                }
                    .into_any()
            }
            AsyncState::Error(message) => {
                view! {
                    <div class="dashboard-status">
                        <p class="dashboard-status__error">{message}</p>
                        <button class="dashboard-status__retry" on:click=on_reload>
                            {t(Text::Retry)}
                        </button>
                    </div>
                }
                    .into_any()
            }
            AsyncState::Success(dashboard) => {
                view! {
                    <div class="dashboard-page">
                        <header class="dashboard-header">
                            <div>
                                <h1 class="dashboard-header__title">{t(Text::DashboardTitle)}</h1>
                                {(!dashboard.user_email.is_empty())
                                    .then(|| {
                                        view! { <p class="dashboard-header__email">{dashboard.user_email.clone()}</p> }
                                    })}
                            </div>
                            <div class="dashboard-header__actions">
                                <LanguageToggle/>
                                <ThemeToggle/>
                                <button class="dashboard-header__logout" on:click=move |_| on_logout.run(())>
                                    {t(Text::Logout)}
                                </button>
                            </div>
                        </header>
                        <main class="dashboard-main">
                            <SalesChart points=dashboard.chart_data/>
                            <SalesTable rows=dashboard.table_data/>
                        </main>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}
