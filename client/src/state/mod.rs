//! Client-side state types shared by pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! These are plain data types with explicit transitions. Pages wrap them in
//! `RwSignal`s; the types themselves know nothing about Leptos so they can be
//! exercised directly in unit tests.

pub mod async_state;
pub mod auth;
pub mod form;
