//! Profile domain models.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::currency::CurrencyCode;
use crate::trips::{AccommodationType, CuisinePreference, TravelType};

/// Traveler profile and planning defaults.
///
/// Fields are stored as entered; nothing here is validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub bio: String,
    pub default_travel_type: TravelType,
    pub default_currency: CurrencyCode,
    pub daily_budget_limit: String,
    pub favorite_cuisines: BTreeSet<CuisinePreference>,
    pub accommodation_type: AccommodationType,
    pub frequent_cities: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Alex Johnson".to_string(),
            email: "alex.johnson@email.com".to_string(),
            bio: "Passionate traveler exploring the world one destination at a time.".to_string(),
            default_travel_type: TravelType::Solo,
            default_currency: CurrencyCode::Inr,
            daily_budget_limit: "5000".to_string(),
            favorite_cuisines: [
                CuisinePreference::Local,
                CuisinePreference::Indian,
                CuisinePreference::Italian,
            ]
            .into_iter()
            .collect(),
            accommodation_type: AccommodationType::Hotel,
            frequent_cities: "Mumbai, Delhi, Bangalore".to_string(),
        }
    }
}

impl Profile {
    /// First character of each word of the name, e.g. "AJ" for "Alex Johnson".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

/// Transient password-change form. Kept apart from [`Profile`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordChange {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

impl PasswordChange {
    pub fn matches(&self) -> bool {
        self.new == self.confirm
    }

    pub fn clear(&mut self) {
        self.current.clear();
        self.new.clear();
        self.confirm.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty() && self.new.is_empty() && self.confirm.is_empty()
    }
}
