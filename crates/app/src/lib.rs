//! # frontdesk-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ReservationRepository`: insert, query, and delete reservation rows
//! - Define **driving/inbound ports** as use-case structs:
//!   - `BookingService`: book, check availability, quote, find, cancel, list
//! - Serialize the availability check and the insert so a room is never
//!   double-booked, whatever drives the service
//!
//! ## Dependency rule
//! Depends on `frontdesk-domain` only (plus `tokio::sync` for the booking lock).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
