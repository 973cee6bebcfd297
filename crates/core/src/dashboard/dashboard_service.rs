use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;

use crate::constants::DEFAULT_CURRENCY;
use crate::currency::format_currency;
use crate::errors::Result;

use super::dashboard_model::{CategoryTotal, DashboardStats, Expense, ExpenseCategory, TripSummary};
use super::dashboard_traits::{DashboardDataProvider, DashboardServiceTrait};
use super::dashboard_view::{DashboardView, ExpenseView, StatsView, TripCard, TripExpenses};

pub struct DashboardService {
    provider: Arc<dyn DashboardDataProvider>,
}

impl DashboardService {
    pub fn new(provider: Arc<dyn DashboardDataProvider>) -> Self {
        DashboardService { provider }
    }

    /// Currency of the owning trip, or the default when the trip is unknown.
    fn currency_for<'a>(trips: &'a [TripSummary], trip_id: &str) -> &'a str {
        trips
            .iter()
            .find(|t| t.id == trip_id)
            .map(|t| t.currency.as_str())
            .unwrap_or(DEFAULT_CURRENCY)
    }

    fn breakdown(expenses: &[Expense], currency: &str) -> Vec<CategoryTotal> {
        let mut totals: BTreeMap<ExpenseCategory, Decimal> = BTreeMap::new();
        for expense in expenses {
            *totals.entry(expense.category).or_insert(Decimal::ZERO) += expense.amount;
        }
        totals
            .into_iter()
            .map(|(category, amount)| CategoryTotal {
                category,
                amount,
                amount_label: format_currency(amount, currency),
            })
            .collect()
    }

    async fn expenses_for(&self, trip_id: &str) -> Result<Vec<Expense>> {
        Ok(self
            .provider
            .recent_expenses()
            .await?
            .into_iter()
            .filter(|e| e.trip_id == trip_id)
            .collect())
    }
}

#[async_trait]
impl DashboardServiceTrait for DashboardService {
    async fn get_dashboard(&self) -> Result<DashboardView> {
        let trips = self.provider.trips().await?;
        let expenses = self.provider.recent_expenses().await?;
        debug!(
            "Rendering dashboard with {} trips and {} expenses",
            trips.len(),
            expenses.len()
        );

        let recent_expenses = expenses
            .iter()
            .map(|e| ExpenseView::render(e, Self::currency_for(&trips, &e.trip_id)))
            .collect();
        Ok(DashboardView {
            stats: StatsView::render(DashboardStats::from_trips(&trips)),
            trips: trips.iter().map(TripCard::render).collect(),
            recent_expenses,
        })
    }

    async fn get_trip_expenses(&self, trip_id: &str) -> Result<TripExpenses> {
        let trips = self.provider.trips().await?;
        let currency = Self::currency_for(&trips, trip_id);
        let expenses = self.expenses_for(trip_id).await?;
        let total: Decimal = expenses.iter().map(|e| e.amount).sum();

        Ok(TripExpenses {
            trip_id: trip_id.to_string(),
            breakdown: Self::breakdown(&expenses, currency),
            expenses: expenses
                .iter()
                .map(|e| ExpenseView::render(e, currency))
                .collect(),
            total,
            total_label: format_currency(total, currency),
        })
    }

    async fn get_expense_breakdown(&self, trip_id: &str) -> Result<Vec<CategoryTotal>> {
        let trips = self.provider.trips().await?;
        let expenses = self.expenses_for(trip_id).await?;
        Ok(Self::breakdown(
            &expenses,
            Self::currency_for(&trips, trip_id),
        ))
    }
}
