use async_trait::async_trait;

use crate::errors::Result;

use super::dashboard_model::{CategoryTotal, Expense, TripSummary};
use super::dashboard_view::{DashboardView, TripExpenses};

/// Source of dashboard records.
#[async_trait]
pub trait DashboardDataProvider: Send + Sync {
    async fn trips(&self) -> Result<Vec<TripSummary>>;
    async fn recent_expenses(&self) -> Result<Vec<Expense>>;
}

/// Trait for dashboard service operations
#[async_trait]
pub trait DashboardServiceTrait: Send + Sync {
    async fn get_dashboard(&self) -> Result<DashboardView>;
    async fn get_trip_expenses(&self, trip_id: &str) -> Result<TripExpenses>;
    async fn get_expense_breakdown(&self, trip_id: &str) -> Result<Vec<CategoryTotal>>;
}
