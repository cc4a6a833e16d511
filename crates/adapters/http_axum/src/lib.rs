//! # hearth-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** (`/api/storage/{key}`, `/api/devices`,
//!   `/api/status`) for the polling client
//! - Serve the **session-gated static pages** with desktop/mobile variant
//!   selection, and the login/signup/logout form surface
//! - Hand out and check the session cookie
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses (JSON, HTML, redirects)
//!
//! ## Dependency rule
//! Depends on `hearth-app` (for port traits and services) and
//! `hearth-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod pages;
pub mod router;
pub mod session;
pub mod state;
