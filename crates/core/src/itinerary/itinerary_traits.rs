use async_trait::async_trait;

use crate::errors::Result;
use crate::notifications::Notice;
use crate::trips::TripRequest;

use super::itinerary_model::{ActivityEdit, Itinerary, ViewMode};
use super::itinerary_session::ItinerarySession;
use super::itinerary_view::{ItineraryPage, ItineraryView};

/// Source of itinerary content for a trip request.
#[async_trait]
pub trait ItineraryProvider: Send + Sync {
    async fn build_itinerary(&self, trip_request: &TripRequest) -> Result<Itinerary>;
}

/// Trait for itinerary presentation operations
#[async_trait]
pub trait ItineraryServiceTrait: Send + Sync {
    async fn present(
        &self,
        trip_request: Option<&TripRequest>,
        view_mode: ViewMode,
    ) -> Result<ItineraryPage>;
    async fn open_session(&self, trip_request: &TripRequest) -> Result<ItinerarySession>;
    fn edit_activity(
        &self,
        itinerary: Itinerary,
        activity_id: u32,
        edit: &ActivityEdit,
        view_mode: ViewMode,
    ) -> Result<(Itinerary, ItineraryView)>;
    fn save_itinerary(&self, itinerary: &Itinerary) -> Notice;
    fn export_pdf(&self, itinerary: &Itinerary) -> Notice;
}
