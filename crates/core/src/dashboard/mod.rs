//! Dashboard module - trip summaries, budget progress and recent expenses.

mod dashboard_model;
mod dashboard_sample;
mod dashboard_service;
mod dashboard_traits;
mod dashboard_view;


pub use dashboard_model::*;
pub use dashboard_sample::StaticDashboardProvider;
pub use dashboard_service::DashboardService;
pub use dashboard_traits::{DashboardDataProvider, DashboardServiceTrait};
pub use dashboard_view::*;
