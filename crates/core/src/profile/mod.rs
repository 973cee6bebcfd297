//! Profile module - traveler settings and the password-change form.

mod profile_model;
mod profile_service;
mod profile_traits;


pub use profile_model::*;
pub use profile_service::ProfileService;
pub use profile_traits::ProfileServiceTrait;
