use std::sync::Arc;

use crate::{
    config::Config,
    events::{EventBus, WebNotificationSink},
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use wanderplan_core::{
    dashboard::{DashboardService, DashboardServiceTrait, StaticDashboardProvider},
    itinerary::{ItineraryService, ItineraryServiceTrait, SampleItineraryProvider},
    notifications::NotificationSink,
    profile::{ProfileService, ProfileServiceTrait},
    trips::{TripPlannerService, TripPlannerServiceTrait},
};
use wanderplan_storage_sqlite::db::{self, DbPool};

const EVENT_BUS_CAPACITY: usize = 256;

pub struct AppState {
    pub trip_planner: Arc<dyn TripPlannerServiceTrait>,
    pub itinerary_service: Arc<dyn ItineraryServiceTrait>,
    pub dashboard_service: Arc<dyn DashboardServiceTrait>,
    pub profile_service: Arc<dyn ProfileServiceTrait>,
    pub event_bus: EventBus,
    pub db_pool: Arc<DbPool>,
}

pub fn init_tracing() {
    let log_format = std::env::var("WP_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    let db_pool = db::create_pool(&db_path)?;
    tracing::info!("Database connection established at {}", db_path);

    let event_bus = EventBus::new(EVENT_BUS_CAPACITY);
    let sink: Arc<dyn NotificationSink> = Arc::new(WebNotificationSink::new(event_bus.clone()));

    let trip_planner =
        Arc::new(TripPlannerService::new(sink.clone()).with_delay(config.planning_delay));
    let itinerary_service = Arc::new(ItineraryService::new(
        Arc::new(SampleItineraryProvider::new()),
        sink.clone(),
    ));
    let dashboard_service = Arc::new(DashboardService::new(Arc::new(
        StaticDashboardProvider::new()?,
    )));
    let profile_service = Arc::new(ProfileService::new(sink));

    Ok(Arc::new(AppState {
        trip_planner,
        itinerary_service,
        dashboard_service,
        profile_service,
        event_bus,
        db_pool,
    }))
}
