//! Property-based integration tests for trip planning.
//!
//! These tests check invariants across the intake form, itinerary edits,
//! dashboard progress and currency rendering with random inputs.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use proptest::prelude::*;
use rust_decimal::Decimal;
use tokio::sync::mpsc;

use wanderplan_core::currency::format_currency;
use wanderplan_core::dashboard::BudgetProgress;
use wanderplan_core::errors::{Error, ValidationError};
use wanderplan_core::itinerary::{ActivityEdit, ItinerarySession, SampleItineraryProvider};
use wanderplan_core::notifications::MockNotificationSink;
use wanderplan_core::trips::{
    AttractionCategory, TripPlannerService, TripPlannerServiceTrait, TripRequestForm,
};

// =============================================================================
// Generators
// =============================================================================

fn arb_attraction() -> impl Strategy<Value = AttractionCategory> {
    prop::sample::select(AttractionCategory::ALL.to_vec())
}

fn arb_attractions() -> impl Strategy<Value = BTreeSet<AttractionCategory>> {
    prop::collection::btree_set(arb_attraction(), 0..=AttractionCategory::ALL.len())
}

/// A complete form with at least one required field blanked (possibly with whitespace).
fn arb_incomplete_form() -> impl Strategy<Value = TripRequestForm> {
    (
        prop::array::uniform4(any::<bool>()),
        prop::sample::select(vec!["", " ", "\t", "   "]),
    )
        .prop_filter("at least one field blank", |(blank, _)| {
            blank.iter().any(|b| *b)
        })
        .prop_map(|(blank, filler)| {
            let pick = |is_blank: bool, value: &str| {
                if is_blank {
                    filler.to_string()
                } else {
                    value.to_string()
                }
            };
            TripRequestForm {
                destination: pick(blank[0], "Bali, Indonesia"),
                start_date: pick(blank[1], "2024-05-01"),
                end_date: pick(blank[2], "2024-05-08"),
                budget: pick(blank[3], "80000"),
                ..Default::default()
            }
        })
}

/// Edits as (activity id, new cost in whole units).
fn arb_cost_edits() -> impl Strategy<Value = Vec<(u32, u32)>> {
    prop::collection::vec((1u32..=8, 0u32..50_000), 0..20)
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A submission missing any required field fails and never navigates.
    #[test]
    fn prop_incomplete_submission_never_navigates(form in arb_incomplete_form()) {
        let err = form.validate().unwrap_err();
        let is_missing_fields = matches!(
            err,
            Error::Validation(ValidationError::MissingRequiredFields(_))
        );
        prop_assert!(is_missing_fields);

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .start_paused(true)
            .build()
            .unwrap();
        let navigated = runtime.block_on(async {
            let sink = MockNotificationSink::new();
            let service = TripPlannerService::new(Arc::new(sink.clone()))
                .with_delay(Duration::from_millis(1500));
            let (tx, mut rx) = mpsc::unbounded_channel();
            let result = service.submit(&form, tx);
            assert!(result.is_err());
            assert_eq!(sink.titles(), vec!["Missing Information"]);
            tokio::time::sleep(Duration::from_secs(5)).await;
            rx.try_recv().is_ok()
        });
        prop_assert!(!navigated);
    }

    /// Toggling the same attraction twice restores the original set.
    #[test]
    fn prop_attraction_toggle_twice_is_identity(
        initial in arb_attractions(),
        category in arb_attraction(),
    ) {
        let mut form = TripRequestForm {
            attractions: initial.clone(),
            ..Default::default()
        };
        form.toggle_attraction(category);
        prop_assert_ne!(&form.attractions, &initial);
        form.toggle_attraction(category);
        prop_assert_eq!(form.attractions, initial);
    }

    /// After any sequence of committed edits the trip total equals the sum of
    /// the displayed day totals, and each day total equals its activities.
    #[test]
    fn prop_trip_total_matches_day_totals(edits in arb_cost_edits()) {
        let mut session =
            ItinerarySession::new(SampleItineraryProvider::fallback_itinerary().unwrap()).unwrap();
        for (activity_id, cost) in edits {
            session.toggle_editor(activity_id).unwrap();
            let edit = ActivityEdit {
                cost: Some(Decimal::from(cost)),
                ..Default::default()
            };
            session.commit_edit(activity_id, &edit).unwrap();
        }

        let view = session.render().unwrap();
        let day_sum: Decimal = view.days.iter().map(|d| d.total_cost).sum();
        prop_assert_eq!(view.budget.estimated_cost, day_sum);
        prop_assert_eq!(session.estimated_cost().unwrap(), day_sum);
        for day in &view.days {
            let activity_sum: Decimal = day.activities.iter().map(|a| a.cost).sum();
            prop_assert_eq!(day.total_cost, activity_sum);
        }
    }

    /// The warning shows exactly when more than 90% of a positive budget is spent.
    #[test]
    fn prop_budget_warning_threshold(spent in 0u64..1_000_000, budget in 1u64..1_000_000) {
        let progress = BudgetProgress::from_amounts(Decimal::from(spent), Decimal::from(budget));
        prop_assert_eq!(progress.warning, spent * 10 > budget * 9);
        prop_assert_eq!(progress.warning_message().is_some(), progress.warning);
    }

    /// A zero budget never warns.
    #[test]
    fn prop_zero_budget_never_warns(spent in 0u64..1_000_000) {
        let progress = BudgetProgress::from_amounts(Decimal::from(spent), Decimal::ZERO);
        prop_assert!(!progress.warning);
        prop_assert_eq!(progress.percentage, Decimal::ZERO);
    }

    /// Rupee amounts use the rupee sign, every other code the fallback sign, and
    /// the grouped digits read back as the original amount.
    #[test]
    fn prop_currency_symbol_and_grouping(
        amount in 0u64..10_000_000_000,
        code in prop::sample::select(vec!["INR", "USD", "EUR", "GBP", "JPY", "XYZ", ""]),
    ) {
        let rendered = format_currency(Decimal::from(amount), code);
        let expected_symbol = if code == "INR" { "₹" } else { "$" };
        prop_assert!(rendered.starts_with(expected_symbol));

        let digits = &rendered[expected_symbol.len()..];
        for group in digits.split(',').skip(1) {
            prop_assert_eq!(group.len(), 3);
        }
        prop_assert_eq!(digits.replace(',', ""), amount.to_string());
    }
}
