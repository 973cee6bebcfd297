//! Wanderplan Core - Domain entities, services, and traits.
//!
//! This crate contains the trip planning logic: the intake form, the
//! itinerary presenter, the dashboard and the profile store. It is
//! transport-agnostic; the server crate exposes it over HTTP and the
//! `storage-sqlite` crate provides the database connection.

pub mod constants;
pub mod currency;
pub mod dashboard;
pub mod errors;
pub mod itinerary;
pub mod navigation;
pub mod notifications;
pub mod profile;
pub mod trips;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
