//! Fixed itinerary content used until a real planner is wired in.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::errors::{Error, Result};
use crate::trips::TripRequest;

use super::itinerary_model::{Activity, ActivityCategory, Day, Itinerary};
use super::itinerary_traits::ItineraryProvider;

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| Error::Unexpected(format!("invalid sample date {year}-{month}-{day}")))
}

#[allow(clippy::too_many_arguments)]
fn activity(
    id: u32,
    time: &str,
    title: &str,
    description: &str,
    location: &str,
    cost: Decimal,
    duration: &str,
    category: ActivityCategory,
) -> Activity {
    Activity {
        id,
        time: time.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        location: location.to_string(),
        cost,
        duration: duration.to_string(),
        category,
    }
}

fn sample_days() -> Result<Vec<Day>> {
    use ActivityCategory::*;

    Ok(vec![
        Day::new(
            1,
            date(2024, 3, 15)?,
            "Arrival & City Center",
            vec![
                activity(
                    1,
                    "09:00",
                    "Arrival at Charles de Gaulle Airport",
                    "Land in Paris and take airport shuttle to city center",
                    "CDG Airport",
                    dec!(2500),
                    "2 hours",
                    Transport,
                ),
                activity(
                    2,
                    "12:00",
                    "Check-in at Hotel",
                    "Check-in at Hotel des Grands Boulevards",
                    "2nd Arrondissement",
                    dec!(12000),
                    "30 minutes",
                    Accommodation,
                ),
                activity(
                    3,
                    "14:00",
                    "Lunch at Local Café",
                    "Traditional French lunch near the hotel",
                    "Café de Flore",
                    dec!(3500),
                    "1.5 hours",
                    Food,
                ),
            ],
        )?,
        Day::new(
            2,
            date(2024, 3, 16)?,
            "Historic Paris",
            vec![
                activity(
                    4,
                    "09:00",
                    "Visit Notre-Dame Cathedral",
                    "Explore the iconic Gothic cathedral and surrounding area",
                    "Île de la Cité",
                    dec!(0),
                    "2 hours",
                    Sightseeing,
                ),
                activity(
                    5,
                    "11:30",
                    "Seine River Cruise",
                    "Scenic boat tour along the Seine River",
                    "Seine River",
                    dec!(4000),
                    "1.5 hours",
                    Sightseeing,
                ),
                activity(
                    6,
                    "13:30",
                    "Lunch at Bistro",
                    "Authentic French bistro experience",
                    "Le Procope",
                    dec!(4500),
                    "1.5 hours",
                    Food,
                ),
                activity(
                    7,
                    "16:00",
                    "Visit Louvre Museum",
                    "Explore world-famous art collection including Mona Lisa",
                    "Louvre Museum",
                    dec!(5000),
                    "3 hours",
                    Cultural,
                ),
                activity(
                    8,
                    "20:00",
                    "Dinner at French Restaurant",
                    "Fine dining experience with wine pairing",
                    "L'Ami Jean",
                    dec!(8500),
                    "2 hours",
                    Food,
                ),
            ],
        )?,
    ])
}

/// Serves the same two-day Paris plan for every request, with the header
/// taken from the request.
#[derive(Debug, Default, Clone)]
pub struct SampleItineraryProvider;

impl SampleItineraryProvider {
    pub fn new() -> Self {
        Self
    }

    /// The plan with its own fixed header.
    pub fn fallback_itinerary() -> Result<Itinerary> {
        Ok(Itinerary {
            destination: "Paris, France".to_string(),
            start_date: date(2024, 3, 15)?,
            end_date: date(2024, 3, 22)?,
            budget: dec!(150000),
            currency: "INR".to_string(),
            travelers: 2,
            days: sample_days()?,
        })
    }
}

#[async_trait]
impl ItineraryProvider for SampleItineraryProvider {
    async fn build_itinerary(&self, trip_request: &TripRequest) -> Result<Itinerary> {
        Ok(Itinerary {
            destination: trip_request.destination.clone(),
            start_date: trip_request.start_date,
            end_date: trip_request.end_date,
            budget: trip_request.budget,
            currency: trip_request.currency.as_str().to_string(),
            travelers: trip_request.travelers,
            days: sample_days()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_day_totals_match_activities() {
        let itinerary = SampleItineraryProvider::fallback_itinerary().unwrap();
        assert_eq!(itinerary.days.len(), 2);
        assert_eq!(itinerary.days[0].total_cost, dec!(18000));
        assert_eq!(itinerary.days[1].total_cost, dec!(22000));
        assert_eq!(itinerary.estimated_cost().unwrap(), dec!(40000));
        assert_eq!(itinerary.remaining_budget().unwrap(), dec!(110000));
    }

    #[test]
    fn test_sample_activity_ids_are_unique() {
        let itinerary = SampleItineraryProvider::fallback_itinerary().unwrap();
        let mut ids: Vec<u32> = itinerary
            .days
            .iter()
            .flat_map(|d| d.activities.iter().map(|a| a.id))
            .collect();
        let count = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), count);
        assert_eq!(count, 8);
    }
}
