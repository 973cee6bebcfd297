//! Dashboard domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::BUDGET_WARNING_THRESHOLD_PERCENT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    Planned,
    Ongoing,
    Completed,
}

impl TripStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Planned => "planned",
            TripStatus::Ongoing => "ongoing",
            TripStatus::Completed => "completed",
        }
    }
}

/// A trip as listed on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSummary {
    pub id: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: Decimal,
    pub spent: Decimal,
    pub currency: String,
    pub status: TripStatus,
    pub travelers: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Food,
    Transport,
    Stay,
    Shopping,
    Miscellaneous,
}

impl ExpenseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "food",
            ExpenseCategory::Transport => "transport",
            ExpenseCategory::Stay => "stay",
            ExpenseCategory::Shopping => "shopping",
            ExpenseCategory::Miscellaneous => "miscellaneous",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub trip_id: String,
    pub amount: Decimal,
    pub category: ExpenseCategory,
    pub description: String,
    pub date: NaiveDate,
}

/// Share of a trip's budget already spent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetProgress {
    /// `spent / budget * 100`, rounded to two decimals. Zero when the budget is zero.
    pub percentage: Decimal,
    pub warning: bool,
}

impl BudgetProgress {
    pub const WARNING_MESSAGE: &'static str = "Close to budget limit";

    pub fn from_amounts(spent: Decimal, budget: Decimal) -> Self {
        if budget.is_zero() {
            return Self {
                percentage: Decimal::ZERO,
                warning: false,
            };
        }
        let hundred = Decimal::ONE_HUNDRED;
        let threshold = Decimal::from(BUDGET_WARNING_THRESHOLD_PERCENT);
        // Compared by cross-multiplication so the rounded percentage never decides the flag.
        let warning = spent * hundred > budget * threshold;
        Self {
            percentage: (spent * hundred / budget).round_dp(2),
            warning,
        }
    }

    pub fn warning_message(&self) -> Option<&'static str> {
        self.warning.then_some(Self::WARNING_MESSAGE)
    }
}

/// Aggregates shown in the dashboard header cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_trips: usize,
    pub ongoing_trips: usize,
    pub total_budget: Decimal,
    pub total_spent: Decimal,
}

impl DashboardStats {
    pub fn from_trips(trips: &[TripSummary]) -> Self {
        Self {
            total_trips: trips.len(),
            ongoing_trips: trips
                .iter()
                .filter(|t| t.status == TripStatus::Ongoing)
                .count(),
            total_budget: trips.iter().map(|t| t.budget).sum(),
            total_spent: trips.iter().map(|t| t.spent).sum(),
        }
    }
}

/// Total spent in one expense category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub amount: Decimal,
    pub amount_label: String,
}
