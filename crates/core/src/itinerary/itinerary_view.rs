//! Render-ready projections of an itinerary.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::format_currency;
use crate::errors::Result;
use crate::navigation::PLAN_TRIP_PATH;

use super::itinerary_model::{Activity, Day, Itinerary, ViewMode};

const LONG_DATE_FORMAT: &str = "%A, %B %-d, %Y";
const SHORT_DATE_FORMAT: &str = "%-m/%-d/%Y";

pub fn long_date_label(date: NaiveDate) -> String {
    date.format(LONG_DATE_FORMAT).to_string()
}

pub fn short_date_label(date: NaiveDate) -> String {
    date.format(SHORT_DATE_FORMAT).to_string()
}

pub fn travelers_label(travelers: u32) -> String {
    if travelers == 1 {
        "1 traveler".to_string()
    } else {
        format!("{} travelers", travelers)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetOverview {
    pub total_budget: Decimal,
    pub estimated_cost: Decimal,
    pub remaining: Decimal,
    pub within_budget: bool,
    pub total_budget_label: String,
    pub estimated_cost_label: String,
    pub remaining_label: String,
}

impl BudgetOverview {
    pub fn from_itinerary(itinerary: &Itinerary) -> Result<Self> {
        let estimated_cost = itinerary.estimated_cost()?;
        let remaining = itinerary.remaining_budget()?;
        let currency = itinerary.currency.as_str();
        Ok(Self {
            total_budget: itinerary.budget,
            estimated_cost,
            remaining,
            within_budget: remaining >= Decimal::ZERO,
            total_budget_label: format_currency(itinerary.budget, currency),
            estimated_cost_label: format_currency(estimated_cost, currency),
            remaining_label: format_currency(remaining, currency),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityView {
    pub id: u32,
    pub time: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub duration: String,
    pub category: String,
    pub cost: Decimal,
    pub cost_label: String,
    pub timeline_marker: bool,
    pub is_editing: bool,
}

impl ActivityView {
    fn render(activity: &Activity, currency: &str, view_mode: ViewMode, is_editing: bool) -> Self {
        Self {
            id: activity.id,
            time: activity.time.clone(),
            title: activity.title.clone(),
            description: activity.description.clone(),
            location: activity.location.clone(),
            duration: activity.duration.clone(),
            category: activity.category.as_str().to_string(),
            cost: activity.cost,
            cost_label: format_currency(activity.cost, currency),
            timeline_marker: view_mode == ViewMode::Timeline,
            is_editing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayView {
    pub day: u32,
    pub heading: String,
    pub date_label: String,
    pub theme: String,
    pub total_cost: Decimal,
    pub total_cost_label: String,
    pub activities: Vec<ActivityView>,
}

impl DayView {
    fn render(day: &Day, currency: &str, view_mode: ViewMode, editing: Option<u32>) -> Self {
        Self {
            day: day.day,
            heading: format!("Day {}", day.day),
            date_label: long_date_label(day.date),
            theme: day.theme.clone(),
            total_cost: day.total_cost,
            total_cost_label: format_currency(day.total_cost, currency),
            activities: day
                .activities
                .iter()
                .map(|a| ActivityView::render(a, currency, view_mode, editing == Some(a.id)))
                .collect(),
        }
    }
}

/// Everything the itinerary screen shows for a loaded plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryView {
    pub title: String,
    pub date_range_label: String,
    pub travelers_label: String,
    pub view_mode: ViewMode,
    pub editing: Option<u32>,
    pub budget: BudgetOverview,
    pub days: Vec<DayView>,
    pub itinerary: Itinerary,
}

impl ItineraryView {
    pub fn render(itinerary: &Itinerary, view_mode: ViewMode, editing: Option<u32>) -> Result<Self> {
        let currency = itinerary.currency.as_str();
        Ok(Self {
            title: format!("{} Itinerary", itinerary.destination),
            date_range_label: format!(
                "{} - {}",
                short_date_label(itinerary.start_date),
                short_date_label(itinerary.end_date)
            ),
            travelers_label: travelers_label(itinerary.travelers),
            view_mode,
            editing,
            budget: BudgetOverview::from_itinerary(itinerary)?,
            days: itinerary
                .days
                .iter()
                .map(|d| DayView::render(d, currency, view_mode, editing))
                .collect(),
            itinerary: itinerary.clone(),
        })
    }
}

/// Shown when the itinerary screen is reached without a trip request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingTripData {
    pub title: String,
    pub action_label: String,
    pub action_path: String,
}

impl Default for MissingTripData {
    fn default() -> Self {
        Self {
            title: "No trip data found".to_string(),
            action_label: "Plan a New Trip".to_string(),
            action_path: PLAN_TRIP_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "camelCase")]
pub enum ItineraryPage {
    Ready(ItineraryView),
    NoTripData(MissingTripData),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_labels() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(long_date_label(date), "Friday, March 15, 2024");
        assert_eq!(short_date_label(date), "3/15/2024");
    }

    #[test]
    fn test_travelers_label_pluralizes() {
        assert_eq!(travelers_label(1), "1 traveler");
        assert_eq!(travelers_label(2), "2 travelers");
    }

    #[test]
    fn test_no_trip_data_page_serialization() {
        let page = ItineraryPage::NoTripData(MissingTripData::default());
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["status"], "noTripData");
        assert_eq!(json["data"]["title"], "No trip data found");
        assert_eq!(json["data"]["actionLabel"], "Plan a New Trip");
        assert_eq!(json["data"]["actionPath"], "/plan");
    }
}
