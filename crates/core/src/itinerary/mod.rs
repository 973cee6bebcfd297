//! Itinerary module - day-by-day plan, inline activity edits and budget overview.

mod itinerary_model;
mod itinerary_sample;
mod itinerary_service;
mod itinerary_session;
mod itinerary_traits;
mod itinerary_view;


pub use itinerary_model::*;
pub use itinerary_sample::SampleItineraryProvider;
pub use itinerary_service::ItineraryService;
pub use itinerary_session::ItinerarySession;
pub use itinerary_traits::{ItineraryProvider, ItineraryServiceTrait};
pub use itinerary_view::*;
