//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Submit and fetch flows are plain async functions over a
//! `Transport` so they run in unit tests without a browser.

pub mod dashboard;
pub mod login;
pub mod signup;
