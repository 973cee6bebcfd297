//! Trip intake module - form state, validation and the deferred itinerary hand-off.

mod pending_navigation;
mod trips_model;
mod trips_service;
mod trips_traits;


pub use pending_navigation::{Navigation, PendingNavigation};
pub use trips_model::*;
pub use trips_service::{PlanningStarted, TripPlannerService};
pub use trips_traits::TripPlannerServiceTrait;
