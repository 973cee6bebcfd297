use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CURRENCY;
use crate::currency::format_currency;
use crate::itinerary::{short_date_label, travelers_label};

use super::dashboard_model::{
    BudgetProgress, CategoryTotal, DashboardStats, Expense, TripStatus, TripSummary,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsView {
    #[serde(flatten)]
    pub stats: DashboardStats,
    pub total_budget_label: String,
    pub total_spent_label: String,
}

impl StatsView {
    /// Header totals are always shown in the default currency.
    pub fn render(stats: DashboardStats) -> Self {
        Self {
            total_budget_label: format_currency(stats.total_budget, DEFAULT_CURRENCY),
            total_spent_label: format_currency(stats.total_spent, DEFAULT_CURRENCY),
            stats,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripCard {
    pub id: String,
    pub destination: String,
    pub status: TripStatus,
    pub date_range_label: String,
    pub travelers_label: String,
    pub progress: BudgetProgress,
    pub spent_of_budget_label: String,
    pub warning_message: Option<String>,
}

impl TripCard {
    pub fn render(trip: &TripSummary) -> Self {
        let progress = BudgetProgress::from_amounts(trip.spent, trip.budget);
        Self {
            id: trip.id.clone(),
            destination: trip.destination.clone(),
            status: trip.status,
            date_range_label: format!(
                "{} - {}",
                short_date_label(trip.start_date),
                short_date_label(trip.end_date)
            ),
            travelers_label: travelers_label(trip.travelers),
            progress,
            spent_of_budget_label: format!(
                "{} / {}",
                format_currency(trip.spent, &trip.currency),
                format_currency(trip.budget, &trip.currency)
            ),
            warning_message: progress.warning_message().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseView {
    pub id: String,
    pub trip_id: String,
    pub description: String,
    pub category: String,
    pub date_label: String,
    pub amount: Decimal,
    pub amount_label: String,
}

impl ExpenseView {
    pub fn render(expense: &Expense, currency: &str) -> Self {
        Self {
            id: expense.id.clone(),
            trip_id: expense.trip_id.clone(),
            description: expense.description.clone(),
            category: expense.category.as_str().to_string(),
            date_label: short_date_label(expense.date),
            amount: expense.amount,
            amount_label: format_currency(expense.amount, currency),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub stats: StatsView,
    pub trips: Vec<TripCard>,
    pub recent_expenses: Vec<ExpenseView>,
}

/// Expenses of a single trip with per-category totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripExpenses {
    pub trip_id: String,
    pub expenses: Vec<ExpenseView>,
    pub breakdown: Vec<CategoryTotal>,
    pub total: Decimal,
    pub total_label: String,
}
