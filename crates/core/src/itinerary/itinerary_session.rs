use log::debug;
use rust_decimal::Decimal;

use crate::errors::{ItineraryError, Result};

use super::itinerary_model::{ActivityEdit, Itinerary, ViewMode};
use super::itinerary_view::ItineraryView;

/// Mutable view state of one itinerary screen.
///
/// At most one activity editor is open at a time. Committing an edit writes it
/// into the itinerary and recomputes the owning day's total, so the displayed
/// trip total always equals the sum of the displayed day totals. Totals that
/// would overflow are rejected before anything changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ItinerarySession {
    itinerary: Itinerary,
    view_mode: ViewMode,
    editing: Option<u32>,
}

impl ItinerarySession {
    pub fn new(mut itinerary: Itinerary) -> Result<Self> {
        itinerary.recompute_totals()?;
        itinerary.remaining_budget()?;
        Ok(Self {
            itinerary,
            view_mode: ViewMode::default(),
            editing: None,
        })
    }

    pub fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    pub fn into_itinerary(self) -> Itinerary {
        self.itinerary
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }

    pub fn editing(&self) -> Option<u32> {
        self.editing
    }

    /// Opens the editor for an activity, or closes it if it is already open.
    /// Opening one editor closes any other.
    pub fn toggle_editor(&mut self, activity_id: u32) -> Result<()> {
        if !self.itinerary.contains_activity(activity_id) {
            return Err(ItineraryError::ActivityNotFound(activity_id).into());
        }
        self.editing = if self.editing == Some(activity_id) {
            None
        } else {
            Some(activity_id)
        };
        Ok(())
    }

    /// Closes the editor without touching the itinerary.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Writes the open editor's values into the activity and closes the editor.
    pub fn commit_edit(&mut self, activity_id: u32, edit: &ActivityEdit) -> Result<()> {
        if self.editing != Some(activity_id) {
            return Err(ItineraryError::EditorNotOpen(activity_id).into());
        }
        edit.validate()?;

        let mut updated = self.itinerary.clone();
        let (day, index) = updated
            .locate_activity_mut(activity_id)
            .ok_or(ItineraryError::ActivityNotFound(activity_id))?;
        edit.apply_to(&mut day.activities[index]);
        day.recompute_total()?;
        debug!(
            "Committed edit to activity {} (day {} now totals {})",
            activity_id, day.day, day.total_cost
        );
        updated.remaining_budget()?;

        self.itinerary = updated;
        self.editing = None;
        Ok(())
    }

    pub fn estimated_cost(&self) -> Result<Decimal> {
        self.itinerary.estimated_cost()
    }

    pub fn render(&self) -> Result<ItineraryView> {
        ItineraryView::render(&self.itinerary, self.view_mode, self.editing)
    }
}
