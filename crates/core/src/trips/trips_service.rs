use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};
use tokio::sync::mpsc::UnboundedSender;

use crate::constants::DEFAULT_PLANNING_DELAY_MS;
use crate::errors::{Error, Result, ValidationError};
use crate::notifications::{Notice, NotificationSink};

use super::pending_navigation::{Navigation, PendingNavigation};
use super::trips_model::{TripFormOptions, TripRequest, TripRequestForm};
use super::trips_traits::TripPlannerServiceTrait;

/// Outcome of an accepted submission: the acknowledgment and the scheduled hand-off.
#[derive(Debug)]
pub struct PlanningStarted {
    pub trip_request: TripRequest,
    pub notice: Notice,
    pub pending: PendingNavigation,
}

pub struct TripPlannerService {
    sink: Arc<dyn NotificationSink>,
    delay: Duration,
}

impl TripPlannerService {
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        TripPlannerService {
            sink,
            delay: Duration::from_millis(DEFAULT_PLANNING_DELAY_MS),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl TripPlannerServiceTrait for TripPlannerService {
    fn form_options(&self) -> TripFormOptions {
        TripFormOptions::load()
    }

    fn validate(&self, form: &TripRequestForm) -> Result<TripRequest> {
        form.validate()
    }

    fn submit(
        &self,
        form: &TripRequestForm,
        navigator: UnboundedSender<Navigation>,
    ) -> Result<PlanningStarted> {
        let trip_request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                debug!("Rejected trip submission: {}", e);
                let notice = match &e {
                    Error::Validation(ValidationError::MissingRequiredFields(_)) => {
                        Notice::destructive(
                            "Missing Information",
                            "Please fill in all required fields.",
                        )
                    }
                    other => Notice::destructive("Invalid Information", other.to_string()),
                };
                self.sink.notify(notice);
                return Err(e);
            }
        };

        info!(
            "Planning trip to {} ({} to {})",
            trip_request.destination, trip_request.start_date, trip_request.end_date
        );
        let notice = Notice::info(
            "Trip Planning Started!",
            "Creating your personalized itinerary...",
        );
        self.sink.notify(notice.clone());

        let pending = PendingNavigation::schedule(trip_request.clone(), self.delay, navigator);
        Ok(PlanningStarted {
            trip_request,
            notice,
            pending,
        })
    }
}
