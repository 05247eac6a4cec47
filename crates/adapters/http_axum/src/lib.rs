//! # frontdesk-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum). This is the form layer
//! the front desk clerk works with.
//!
//! ## Responsibilities
//! - Serve a **server-side-rendered HTML booking desk** that works with
//!   **zero JavaScript**: book, list, search, and cancel through plain
//!   `<form>` elements
//! - Serve a small **JSON API** for programmatic access
//!   (`/api/reservations`, `/api/availability`, `/api/quote`, …)
//! - Parse raw form text (room number, dates) into domain types at the
//!   boundary, so bad input surfaces as a validation message, never a crash
//! - Map every service error to a visible message with a fitting status code
//!
//! ## Dependency rule
//! Depends on `frontdesk-app` (for port traits and services) and `frontdesk-domain`
//! (for domain types used in request/response mapping). Never touches the
//! store directly and never leaks axum types into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
