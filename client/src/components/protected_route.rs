//! Route guard component for authenticated pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps a route's view. On mount it asks the backend once whether the
//! session is valid; children render only after that check succeeds.
//!
//! DESIGN
//! ======
//! State lives in a `RouteGuard` signal. The redirect to the login page is
//! taken from the guard exactly once and uses `replace` so the protected URL
//! does not stay in history. If the guard unmounts before the check returns,
//! the result is dropped.
//!
//! A 401 from the check also reaches the `UnauthorizedRedirect` interceptor,
//! which does its own full navigation to `/login`. Each path fires once, so
//! that case issues two redirects to the same place.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::AppApi;
use crate::state::auth::{GuardState, GuardView, MountFlag, RouteGuard};
use crate::util::i18n::{Locale, Text};

#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let api = expect_context::<AppApi>();
    let locale = expect_context::<RwSignal<Locale>>();
    let navigate = use_navigate();

    let guard = RwSignal::new(RouteGuard::default());
    let mounted = MountFlag::new();
    on_cleanup({
        let mounted = mounted.clone();
        move || mounted.unmount()
    });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Some(authenticated) = crate::state::auth::check_session(&api, &mounted).await {
            guard.update(|g| {
                g.settle(authenticated);
            });
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (&api, &mounted);
    }

    Effect::new(move || {
        if guard.with(RouteGuard::state) != GuardState::Unauthenticated {
            return;
        }
        if let Some(route) = guard.try_update_untracked(RouteGuard::take_redirect).flatten() {
            navigate(route, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match guard.with(RouteGuard::view) {
        GuardView::Loading => view! {
            <div class="guard-loading" role="status">
                <div class="guard-loading__spinner" aria-hidden="true"></div>
                <p>{locale.get().text(Text::Checking)}</p>
            </div>
        }
        .into_any(),
        GuardView::Content => children().into_any(),
        GuardView::Nothing => ().into_any(),
    }
}
