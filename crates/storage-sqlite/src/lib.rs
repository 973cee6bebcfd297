//! SQLite storage for Wanderplan.
//!
//! The planner keeps no records yet; this crate only owns the database
//! connection opened at startup and the pool used for readiness checks.
//! It is the only crate in the workspace that depends on Diesel.

pub mod db;
pub mod errors;

pub use db::{create_pool, get_connection, init, ping, DbConnection, DbPool};
pub use errors::{IntoCore, StorageError};

pub use wanderplan_core::errors::{DatabaseError, Error, Result};
