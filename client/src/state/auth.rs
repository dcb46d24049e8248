//! Auth-session state for protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client never holds a session token. Whether the browser is signed in
//! is decided per mount of a protected route by asking `/api/auth/me` once.
//!
//! DESIGN
//! ======
//! `RouteGuard` is a three-state machine: `Checking` settles exactly once into
//! `Authenticated` or `Unauthenticated`. A late check result for a view that
//! has already unmounted is dropped via `MountFlag`; the request itself is
//! left to finish.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::net::api::ApiClient;
use crate::net::interceptor::LOGIN_ROUTE;
use crate::net::transport::Transport;

/// Phase of the session check for one mounted guard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    #[default]
    Checking,
    Authenticated,
    Unauthenticated,
}

/// What a guard should render for its current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardView {
    Loading,
    Content,
    Nothing,
}

/// Session check state machine for one mounted protected route.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteGuard {
    state: GuardState,
    redirect_issued: bool,
}

impl RouteGuard {
    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Record the check outcome. Only the first call has any effect.
    pub fn settle(&mut self, authenticated: bool) -> bool {
        if self.state != GuardState::Checking {
            return false;
        }
        self.state = if authenticated { GuardState::Authenticated } else { GuardState::Unauthenticated };
        log::debug!("route guard settled: {:?}", self.state);
        true
    }

    /// The login route, returned once after settling unauthenticated.
    pub fn take_redirect(&mut self) -> Option<&'static str> {
        if self.state != GuardState::Unauthenticated || self.redirect_issued {
            return None;
        }
        self.redirect_issued = true;
        Some(LOGIN_ROUTE)
    }

    pub fn view(&self) -> GuardView {
        match self.state {
            GuardState::Checking => GuardView::Loading,
            GuardState::Authenticated => GuardView::Content,
            GuardState::Unauthenticated => GuardView::Nothing,
        }
    }
}

/// Liveness of the view that started an async task.
///
/// Cleared on unmount; tasks check it before touching view state.
#[derive(Clone, Debug)]
pub struct MountFlag(Arc<AtomicBool>);

impl MountFlag {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn unmount(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl Default for MountFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Ask the backend whether the session is valid.
///
/// Any failure (401, network, schema) counts as unauthenticated. Returns
/// `None` when the view unmounted while the request was in flight.
pub async fn check_session<T: Transport>(api: &ApiClient<T>, mounted: &MountFlag) -> Option<bool> {
    let result = api.me().await;
    if !mounted.is_mounted() {
        log::debug!("session check finished after unmount; dropping result");
        return None;
    }
    if let Err(e) = &result {
        log::debug!("session check failed: {e}");
    }
    Some(result.is_ok())
}
