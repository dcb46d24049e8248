//! Networking modules for the session API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` exposes the backend operations, `transport` is the seam to `fetch`,
//! `interceptor` holds cross-cutting response hooks, `error` normalizes
//! failures, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod interceptor;
pub mod transport;
pub mod types;
