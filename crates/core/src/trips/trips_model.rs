//! Trip intake domain models.

use std::collections::BTreeSet;
use std::str::FromStr;

use chrono::NaiveDate;
use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DATE_FORMAT, DEFAULT_TRAVELERS};
use crate::currency::CurrencyCode;
use crate::errors::{Result, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccommodationType {
    Hotel,
    Hostel,
    Airbnb,
    Resort,
}

impl AccommodationType {
    pub const ALL: [AccommodationType; 4] = [
        AccommodationType::Hotel,
        AccommodationType::Hostel,
        AccommodationType::Airbnb,
        AccommodationType::Resort,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccommodationType::Hotel => "hotel",
            AccommodationType::Hostel => "hostel",
            AccommodationType::Airbnb => "airbnb",
            AccommodationType::Resort => "resort",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccommodationType::Hotel => "Hotel",
            AccommodationType::Hostel => "Hostel",
            AccommodationType::Airbnb => "Airbnb",
            AccommodationType::Resort => "Resort",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelType {
    Solo,
    Couple,
    Family,
    Student,
    Friends,
}

impl TravelType {
    pub const ALL: [TravelType; 5] = [
        TravelType::Solo,
        TravelType::Couple,
        TravelType::Family,
        TravelType::Student,
        TravelType::Friends,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TravelType::Solo => "solo",
            TravelType::Couple => "couple",
            TravelType::Family => "family",
            TravelType::Student => "student",
            TravelType::Friends => "friends",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TravelType::Solo => "Solo",
            TravelType::Couple => "Couple",
            TravelType::Family => "Family",
            TravelType::Student => "Student",
            TravelType::Friends => "Friends",
        }
    }
}

/// Interest tags a traveler can tick on the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttractionCategory {
    Sightseeing,
    Adventure,
    Cultural,
    Shopping,
    Food,
}

impl AttractionCategory {
    pub const ALL: [AttractionCategory; 5] = [
        AttractionCategory::Sightseeing,
        AttractionCategory::Adventure,
        AttractionCategory::Cultural,
        AttractionCategory::Shopping,
        AttractionCategory::Food,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttractionCategory::Sightseeing => "sightseeing",
            AttractionCategory::Adventure => "adventure",
            AttractionCategory::Cultural => "cultural",
            AttractionCategory::Shopping => "shopping",
            AttractionCategory::Food => "food",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttractionCategory::Sightseeing => "Sightseeing",
            AttractionCategory::Adventure => "Adventure",
            AttractionCategory::Cultural => "Cultural",
            AttractionCategory::Shopping => "Shopping",
            AttractionCategory::Food => "Food & Dining",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CuisinePreference {
    Local,
    Indian,
    Chinese,
    Italian,
    Mediterranean,
    Asian,
}

impl CuisinePreference {
    pub const ALL: [CuisinePreference; 6] = [
        CuisinePreference::Local,
        CuisinePreference::Indian,
        CuisinePreference::Chinese,
        CuisinePreference::Italian,
        CuisinePreference::Mediterranean,
        CuisinePreference::Asian,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CuisinePreference::Local => "local",
            CuisinePreference::Indian => "indian",
            CuisinePreference::Chinese => "chinese",
            CuisinePreference::Italian => "italian",
            CuisinePreference::Mediterranean => "mediterranean",
            CuisinePreference::Asian => "asian",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CuisinePreference::Local => "Local Cuisine",
            CuisinePreference::Indian => "Indian",
            CuisinePreference::Chinese => "Chinese",
            CuisinePreference::Italian => "Italian",
            CuisinePreference::Mediterranean => "Mediterranean",
            CuisinePreference::Asian => "Asian Fusion",
        }
    }
}

/// Raw state of the trip intake form, exactly as the user typed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TripRequestForm {
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub travelers: String,
    pub budget: String,
    pub currency: CurrencyCode,
    pub accommodation: Option<AccommodationType>,
    pub travel_type: Option<TravelType>,
    pub attractions: BTreeSet<AttractionCategory>,
    pub cuisine: Option<CuisinePreference>,
}

impl Default for TripRequestForm {
    fn default() -> Self {
        Self {
            destination: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            travelers: DEFAULT_TRAVELERS.to_string(),
            budget: String::new(),
            currency: CurrencyCode::default(),
            accommodation: None,
            travel_type: None,
            attractions: BTreeSet::new(),
            cuisine: None,
        }
    }
}

/// A single field change on the intake form.
#[derive(Debug, Clone, PartialEq)]
pub enum TripFormUpdate {
    Destination(String),
    StartDate(String),
    EndDate(String),
    Travelers(String),
    Budget(String),
    Currency(CurrencyCode),
    Accommodation(Option<AccommodationType>),
    TravelType(Option<TravelType>),
    Attraction {
        category: AttractionCategory,
        checked: bool,
    },
    Cuisine(Option<CuisinePreference>),
}

impl TripRequestForm {
    /// Returns the form with one field changed.
    pub fn apply(mut self, update: TripFormUpdate) -> Self {
        match update {
            TripFormUpdate::Destination(value) => self.destination = value,
            TripFormUpdate::StartDate(value) => self.start_date = value,
            TripFormUpdate::EndDate(value) => self.end_date = value,
            TripFormUpdate::Travelers(value) => self.travelers = value,
            TripFormUpdate::Budget(value) => self.budget = value,
            TripFormUpdate::Currency(value) => self.currency = value,
            TripFormUpdate::Accommodation(value) => self.accommodation = value,
            TripFormUpdate::TravelType(value) => self.travel_type = value,
            TripFormUpdate::Attraction { category, checked } => {
                self.set_attraction(category, checked)
            }
            TripFormUpdate::Cuisine(value) => self.cuisine = value,
        }
        self
    }

    /// Checking adds the tag, unchecking removes it. Repeating either is a no-op.
    pub fn set_attraction(&mut self, category: AttractionCategory, checked: bool) {
        if checked {
            self.attractions.insert(category);
        } else {
            self.attractions.remove(&category);
        }
    }

    pub fn toggle_attraction(&mut self, category: AttractionCategory) {
        let checked = !self.attractions.contains(&category);
        self.set_attraction(category, checked);
    }

    /// Names of required fields that are blank.
    pub fn missing_required_fields(&self) -> Vec<String> {
        [
            ("destination", &self.destination),
            ("startDate", &self.start_date),
            ("endDate", &self.end_date),
            ("budget", &self.budget),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name.to_string())
        .collect()
    }

    /// Converts the raw form into a validated [`TripRequest`].
    pub fn validate(&self) -> Result<TripRequest> {
        let missing = self.missing_required_fields();
        if !missing.is_empty() {
            return Err(ValidationError::MissingRequiredFields(missing).into());
        }

        let start_date = parse_date(&self.start_date)?;
        let end_date = parse_date(&self.end_date)?;
        if end_date < start_date {
            warn!(
                "Trip to '{}' ends ({}) before it starts ({})",
                self.destination.trim(),
                end_date,
                start_date
            );
        }

        Ok(TripRequest {
            destination: self.destination.trim().to_string(),
            start_date,
            end_date,
            travelers: parse_travelers(&self.travelers)?,
            budget: parse_budget(&self.budget)?,
            currency: self.currency,
            accommodation: self.accommodation,
            travel_type: self.travel_type,
            attractions: self.attractions.clone(),
            cuisine: self.cuisine,
        })
    }
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|e| ValidationError::date_parse(trimmed, e).into())
}

fn parse_budget(value: &str) -> Result<Decimal> {
    let trimmed = value.trim();
    let budget = Decimal::from_str(trimmed)
        .map_err(|_| ValidationError::NumberParse(trimmed.to_string()))?;
    check_budget(budget)?;
    Ok(budget)
}

fn check_budget(budget: Decimal) -> Result<()> {
    if budget.is_sign_negative() && !budget.is_zero() {
        return Err(ValidationError::InvalidInput("Budget cannot be negative".to_string()).into());
    }
    Ok(())
}

fn check_travelers(travelers: u32) -> Result<()> {
    if travelers == 0 {
        return Err(ValidationError::InvalidInput(
            "At least one traveler is required".to_string(),
        )
        .into());
    }
    Ok(())
}

fn parse_travelers(value: &str) -> Result<u32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(DEFAULT_TRAVELERS);
    }
    let count = trimmed
        .parse::<u32>()
        .map_err(|_| ValidationError::NumberParse(trimmed.to_string()))?;
    check_travelers(count)?;
    Ok(count)
}

/// Validated trip parameters handed from the intake form to the itinerary view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub travelers: u32,
    pub budget: Decimal,
    pub currency: CurrencyCode,
    #[serde(default)]
    pub accommodation: Option<AccommodationType>,
    #[serde(default)]
    pub travel_type: Option<TravelType>,
    #[serde(default)]
    pub attractions: BTreeSet<AttractionCategory>,
    #[serde(default)]
    pub cuisine: Option<CuisinePreference>,
}

impl TripRequest {
    /// Re-checks a request received from outside the intake form.
    pub fn validate(&self) -> Result<()> {
        if self.destination.trim().is_empty() {
            return Err(ValidationError::MissingRequiredFields(vec!["destination".to_string()]).into());
        }
        check_travelers(self.travelers)?;
        check_budget(self.budget)
    }
}

/// A value/label pair for a select or checkbox list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormOption {
    pub value: String,
    pub label: String,
}

impl FormOption {
    fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Choices offered by the intake form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripFormOptions {
    pub travelers: Vec<FormOption>,
    pub currencies: Vec<FormOption>,
    pub accommodations: Vec<FormOption>,
    pub travel_types: Vec<FormOption>,
    pub attractions: Vec<FormOption>,
    pub cuisines: Vec<FormOption>,
}

pub const MAX_FORM_TRAVELERS: u32 = 8;

impl TripFormOptions {
    pub fn load() -> Self {
        Self {
            travelers: (1..=MAX_FORM_TRAVELERS)
                .map(|n| {
                    let noun = if n == 1 { "Person" } else { "People" };
                    FormOption::new(n.to_string(), format!("{} {}", n, noun))
                })
                .collect(),
            currencies: CurrencyCode::ALL
                .iter()
                .map(|c| FormOption::new(c.as_str(), c.label()))
                .collect(),
            accommodations: AccommodationType::ALL
                .iter()
                .map(|a| FormOption::new(a.as_str(), a.label()))
                .collect(),
            travel_types: TravelType::ALL
                .iter()
                .map(|t| FormOption::new(t.as_str(), t.label()))
                .collect(),
            attractions: AttractionCategory::ALL
                .iter()
                .map(|a| FormOption::new(a.as_str(), a.label()))
                .collect(),
            cuisines: CuisinePreference::ALL
                .iter()
                .map(|c| FormOption::new(c.as_str(), c.label()))
                .collect(),
        }
    }
}
