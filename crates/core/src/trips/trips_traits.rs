use tokio::sync::mpsc::UnboundedSender;

use crate::errors::Result;
use crate::trips::pending_navigation::Navigation;
use crate::trips::trips_model::{TripFormOptions, TripRequest, TripRequestForm};
use crate::trips::trips_service::PlanningStarted;

/// Trait for trip intake operations
pub trait TripPlannerServiceTrait: Send + Sync {
    fn form_options(&self) -> TripFormOptions;
    fn validate(&self, form: &TripRequestForm) -> Result<TripRequest>;
    fn submit(
        &self,
        form: &TripRequestForm,
        navigator: UnboundedSender<Navigation>,
    ) -> Result<PlanningStarted>;
}
