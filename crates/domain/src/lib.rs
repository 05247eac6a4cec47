//! # frontdesk-domain
//!
//! Pure domain model for the frontdesk hotel booking system.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Reservations** (one guest, one room, one stay period)
//! - Define **Stay periods** (half-open `[check_in, check_out)` intervals and their overlap test)
//! - Define the **Tariff** (nightly rate) used to quote a stay
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod money;
pub mod reservation;
pub mod stay;
