//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared locale, theme, and API client from Leptos
//! context. Page-level flows (submit, fetch, logout) stay in `pages`.

pub mod credentials_form;
pub mod error_message;
pub mod hero;
pub mod language_toggle;
pub mod protected_route;
pub mod sales_chart;
pub mod sales_table;
pub mod theme_toggle;
