//! Itinerary domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Transport,
    Accommodation,
    Food,
    Sightseeing,
    Cultural,
    #[serde(other)]
    Other,
}

impl ActivityCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityCategory::Transport => "transport",
            ActivityCategory::Accommodation => "accommodation",
            ActivityCategory::Food => "food",
            ActivityCategory::Sightseeing => "sightseeing",
            ActivityCategory::Cultural => "cultural",
            ActivityCategory::Other => "other",
        }
    }
}

/// A single scheduled item within a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: u32,
    pub time: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub cost: Decimal,
    pub duration: String,
    pub category: ActivityCategory,
}

/// Replacement values from the inline activity editor. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityEdit {
    pub title: Option<String>,
    pub time: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub duration: Option<String>,
    pub cost: Option<Decimal>,
}

impl ActivityEdit {
    pub fn validate(&self) -> Result<()> {
        if let Some(cost) = self.cost {
            if cost.is_sign_negative() && !cost.is_zero() {
                return Err(ValidationError::InvalidInput(
                    "Activity cost cannot be negative".to_string(),
                )
                .into());
            }
        }
        Ok(())
    }

    pub fn apply_to(&self, activity: &mut Activity) {
        if let Some(title) = &self.title {
            activity.title = title.clone();
        }
        if let Some(time) = &self.time {
            activity.time = time.clone();
        }
        if let Some(description) = &self.description {
            activity.description = description.clone();
        }
        if let Some(location) = &self.location {
            activity.location = location.clone();
        }
        if let Some(duration) = &self.duration {
            activity.duration = duration.clone();
        }
        if let Some(cost) = self.cost {
            activity.cost = cost;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    pub day: u32,
    pub date: NaiveDate,
    pub theme: String,
    pub total_cost: Decimal,
    pub activities: Vec<Activity>,
}

/// Sums amounts, failing instead of overflowing.
fn checked_sum(amounts: impl IntoIterator<Item = Decimal>, what: &str) -> Result<Decimal> {
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |total, amount| total.checked_add(amount))
        .ok_or_else(|| {
            ValidationError::InvalidInput(format!("{} exceeds the largest supported amount", what))
                .into()
        })
}

impl Day {
    /// Builds a day whose total is derived from its activities.
    pub fn new(
        day: u32,
        date: NaiveDate,
        theme: impl Into<String>,
        activities: Vec<Activity>,
    ) -> Result<Self> {
        let mut built = Self {
            day,
            date,
            theme: theme.into(),
            total_cost: Decimal::ZERO,
            activities,
        };
        built.recompute_total()?;
        Ok(built)
    }

    pub fn activities_cost(&self) -> Result<Decimal> {
        checked_sum(
            self.activities.iter().map(|a| a.cost),
            &format!("Day {} total", self.day),
        )
    }

    pub fn recompute_total(&mut self) -> Result<()> {
        self.total_cost = self.activities_cost()?;
        Ok(())
    }
}

/// A day-by-day plan for a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: Decimal,
    pub currency: String,
    pub travelers: u32,
    pub days: Vec<Day>,
}

impl Itinerary {
    /// Sum of the per-day totals. Never cached.
    pub fn estimated_cost(&self) -> Result<Decimal> {
        checked_sum(self.days.iter().map(|d| d.total_cost), "Trip total")
    }

    pub fn remaining_budget(&self) -> Result<Decimal> {
        self.budget
            .checked_sub(self.estimated_cost()?)
            .ok_or_else(|| {
                ValidationError::InvalidInput(
                    "Remaining budget exceeds the largest supported amount".to_string(),
                )
                .into()
            })
    }

    pub fn recompute_totals(&mut self) -> Result<()> {
        self.days.iter_mut().try_for_each(Day::recompute_total)
    }

    pub fn contains_activity(&self, activity_id: u32) -> bool {
        self.activity(activity_id).is_some()
    }

    pub fn activity(&self, activity_id: u32) -> Option<&Activity> {
        self.days
            .iter()
            .flat_map(|d| d.activities.iter())
            .find(|a| a.id == activity_id)
    }

    /// Returns the day holding the activity and the activity's index within it.
    pub(crate) fn locate_activity_mut(&mut self, activity_id: u32) -> Option<(&mut Day, usize)> {
        self.days.iter_mut().find_map(|day| {
            day.activities
                .iter()
                .position(|a| a.id == activity_id)
                .map(|index| (day, index))
        })
    }
}

/// Presentation mode of the itinerary. Does not affect content or ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Timeline,
}
