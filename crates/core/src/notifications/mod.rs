//! User-facing notices.
//!
//! Services emit a [`Notice`] after each user action (form submitted, profile
//! saved, password mismatch, ...). Runtime adapters decide how to present them;
//! the web server fans them out to connected clients.

mod notification_model;
mod sink;

pub use notification_model::*;
pub use sink::*;
