use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::DEFAULT_CURRENCY;
use crate::errors::{Error, Result};

use super::dashboard_model::{Expense, ExpenseCategory, TripStatus, TripSummary};
use super::dashboard_traits::DashboardDataProvider;

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| Error::Unexpected(format!("invalid sample date {year}-{month}-{day}")))
}

#[allow(clippy::too_many_arguments)]
fn trip(
    id: &str,
    destination: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    budget: Decimal,
    spent: Decimal,
    status: TripStatus,
    travelers: u32,
) -> TripSummary {
    TripSummary {
        id: id.to_string(),
        destination: destination.to_string(),
        start_date,
        end_date,
        budget,
        spent,
        currency: DEFAULT_CURRENCY.to_string(),
        status,
        travelers,
    }
}

fn expense(
    id: &str,
    amount: Decimal,
    category: ExpenseCategory,
    description: &str,
    date: NaiveDate,
) -> Expense {
    Expense {
        id: id.to_string(),
        trip_id: "1".to_string(),
        amount,
        category,
        description: description.to_string(),
        date,
    }
}

/// Fixed dashboard records: three trips and the latest expenses of the Paris trip.
#[derive(Debug, Clone)]
pub struct StaticDashboardProvider {
    trips: Vec<TripSummary>,
    expenses: Vec<Expense>,
}

impl StaticDashboardProvider {
    pub fn new() -> Result<Self> {
        let trips = vec![
            trip(
                "1",
                "Paris, France",
                date(2024, 3, 15)?,
                date(2024, 3, 22)?,
                dec!(150000),
                dec!(89000),
                TripStatus::Ongoing,
                2,
            ),
            trip(
                "2",
                "Tokyo, Japan",
                date(2024, 1, 10)?,
                date(2024, 1, 17)?,
                dec!(120000),
                dec!(118500),
                TripStatus::Completed,
                1,
            ),
            trip(
                "3",
                "Bali, Indonesia",
                date(2024, 5, 1)?,
                date(2024, 5, 8)?,
                dec!(80000),
                dec!(0),
                TripStatus::Planned,
                2,
            ),
        ];
        let expenses = vec![
            expense(
                "1",
                dec!(4500),
                ExpenseCategory::Food,
                "Dinner at Le Comptoir",
                date(2024, 1, 15)?,
            ),
            expense(
                "2",
                dec!(2800),
                ExpenseCategory::Transport,
                "Metro day pass",
                date(2024, 1, 15)?,
            ),
            expense(
                "3",
                dec!(12000),
                ExpenseCategory::Stay,
                "Hotel night 3",
                date(2024, 1, 14)?,
            ),
            expense(
                "4",
                dec!(1500),
                ExpenseCategory::Shopping,
                "Souvenirs",
                date(2024, 1, 14)?,
            ),
        ];
        Ok(Self::with_records(trips, expenses))
    }

    pub fn with_records(trips: Vec<TripSummary>, expenses: Vec<Expense>) -> Self {
        Self { trips, expenses }
    }
}

#[async_trait]
impl DashboardDataProvider for StaticDashboardProvider {
    async fn trips(&self) -> Result<Vec<TripSummary>> {
        Ok(self.trips.clone())
    }

    async fn recent_expenses(&self) -> Result<Vec<Expense>> {
        Ok(self.expenses.clone())
    }
}
