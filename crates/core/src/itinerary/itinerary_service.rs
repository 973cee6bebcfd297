use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

use crate::errors::Result;
use crate::notifications::{Notice, NotificationSink};
use crate::trips::TripRequest;

use super::itinerary_model::{ActivityEdit, Itinerary, ViewMode};
use super::itinerary_session::ItinerarySession;
use super::itinerary_traits::{ItineraryProvider, ItineraryServiceTrait};
use super::itinerary_view::{ItineraryPage, ItineraryView, MissingTripData};

pub struct ItineraryService {
    provider: Arc<dyn ItineraryProvider>,
    sink: Arc<dyn NotificationSink>,
}

impl ItineraryService {
    pub fn new(provider: Arc<dyn ItineraryProvider>, sink: Arc<dyn NotificationSink>) -> Self {
        ItineraryService { provider, sink }
    }
}

#[async_trait]
impl ItineraryServiceTrait for ItineraryService {
    async fn present(
        &self,
        trip_request: Option<&TripRequest>,
        view_mode: ViewMode,
    ) -> Result<ItineraryPage> {
        let Some(trip_request) = trip_request else {
            debug!("Itinerary requested without trip data");
            return Ok(ItineraryPage::NoTripData(MissingTripData::default()));
        };
        let mut session = self.open_session(trip_request).await?;
        session.set_view_mode(view_mode);
        Ok(ItineraryPage::Ready(session.render()?))
    }

    async fn open_session(&self, trip_request: &TripRequest) -> Result<ItinerarySession> {
        trip_request.validate()?;
        let itinerary = self.provider.build_itinerary(trip_request).await?;
        ItinerarySession::new(itinerary)
    }

    fn edit_activity(
        &self,
        itinerary: Itinerary,
        activity_id: u32,
        edit: &ActivityEdit,
        view_mode: ViewMode,
    ) -> Result<(Itinerary, ItineraryView)> {
        let mut session = ItinerarySession::new(itinerary)?;
        session.set_view_mode(view_mode);
        session.toggle_editor(activity_id)?;
        session.commit_edit(activity_id, edit)?;
        let view = session.render()?;
        Ok((session.into_itinerary(), view))
    }

    fn save_itinerary(&self, itinerary: &Itinerary) -> Notice {
        info!("Saving itinerary for {}", itinerary.destination);
        let notice = Notice::info(
            "Itinerary Saved!",
            "Your trip has been saved to your dashboard.",
        );
        self.sink.notify(notice.clone());
        notice
    }

    fn export_pdf(&self, itinerary: &Itinerary) -> Notice {
        info!("Exporting itinerary for {}", itinerary.destination);
        let notice = Notice::info(
            "Exporting PDF",
            "Your itinerary is being prepared for download...",
        );
        self.sink.notify(notice.clone());
        notice
    }
}
