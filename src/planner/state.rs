//! Planner state controller
//!
//! Owns the active view and the two append-only lists. Drafts are owned by
//! the caller and handed in by mutable reference so that a successful
//! submission can clear them and a failed one can leave them alone.

use crate::planner::draft::{GroceryDraft, MealDraft};
use crate::planner::error::DraftResult;
use crate::planner::types::{EntryId, GroceryItem, IdGenerator, Meal, View};
use chrono::Utc;
use serde::Serialize;

/// All in-memory state of one planning session
#[derive(Debug, Default)]
pub struct PlannerState {
    active_view: View,
    meals: Vec<Meal>,
    groceries: Vec<GroceryItem>,
    ids: IdGenerator,
}

/// Borrowed, serializable view of the whole state
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub active_view: View,
    pub meals: &'a [Meal],
    pub groceries: &'a [GroceryItem],
}

impl PlannerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_view(&self) -> View {
        self.active_view
    }

    /// Planned meals in insertion order
    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    /// Grocery items in insertion order
    pub fn groceries(&self) -> &[GroceryItem] {
        &self.groceries
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            active_view: self.active_view,
            meals: &self.meals,
            groceries: &self.groceries,
        }
    }

    /// Make `view` the active panel
    pub fn switch_view(&mut self, view: View) {
        if self.active_view != view {
            tracing::debug!(from = %self.active_view, to = %view, "Switched view");
        }
        self.active_view = view;
    }

    /// Commit a meal draft
    ///
    /// On success the meal is appended, the draft is reset to an empty
    /// breakfast form and the new id is returned. On failure nothing changes.
    pub fn add_meal(&mut self, draft: &mut MealDraft) -> DraftResult<EntryId> {
        let valid = draft.validate().map_err(|e| {
            tracing::debug!(reason = %e, "Discarded meal submission");
            e
        })?;

        let id = self.ids.next_id();
        self.meals.push(Meal {
            id,
            name: valid.name,
            time: valid.time,
            calories: valid.calories,
            created_at: Utc::now(),
        });
        draft.reset();

        tracing::debug!(meal_id = %id, total = self.meals.len(), "Added meal");
        Ok(id)
    }

    /// Commit a grocery draft
    pub fn add_grocery_item(&mut self, draft: &mut GroceryDraft) -> DraftResult<EntryId> {
        let valid = draft.validate().map_err(|e| {
            tracing::debug!(reason = %e, "Discarded grocery submission");
            e
        })?;

        let id = self.ids.next_id();
        self.groceries.push(GroceryItem {
            id,
            name: valid.name,
            quantity: valid.quantity,
            purchased: false,
            created_at: Utc::now(),
        });
        draft.reset();

        tracing::debug!(item_id = %id, total = self.groceries.len(), "Added grocery item");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::error::DraftError;
    use crate::planner::types::MealTime;
    use std::collections::HashSet;

    #[test]
    fn test_initial_state() {
        let state = PlannerState::new();
        assert_eq!(state.active_view(), View::Plan);
        assert!(state.meals().is_empty());
        assert!(state.groceries().is_empty());
    }

    #[test]
    fn test_add_meal_without_name_is_noop() {
        let mut state = PlannerState::new();

        let mut draft = MealDraft::new().calories(300);
        assert_eq!(state.add_meal(&mut draft), Err(DraftError::MissingName));

        let mut draft = MealDraft::new().name("").calories(300);
        assert_eq!(state.add_meal(&mut draft), Err(DraftError::MissingName));

        assert!(state.meals().is_empty());
    }

    #[test]
    fn test_add_meal_without_calories_is_noop() {
        let mut state = PlannerState::new();

        let mut draft = MealDraft::new().name("Eggs");
        assert!(state.add_meal(&mut draft).is_err());

        let mut draft = MealDraft::new().name("Eggs").calories(0);
        assert!(state.add_meal(&mut draft).is_err());

        assert!(state.meals().is_empty());
    }

    #[test]
    fn test_failed_submission_keeps_draft() {
        let mut state = PlannerState::new();
        let mut draft = MealDraft::new().name("Eggs").time(MealTime::Lunch);
        let before = draft.clone();

        assert!(state.add_meal(&mut draft).is_err());
        assert_eq!(draft, before);
    }

    #[test]
    fn test_add_meal_appends_and_resets_draft() {
        let mut state = PlannerState::new();
        let mut draft = MealDraft::new().name("Eggs").calories(300);

        let id = state.add_meal(&mut draft).unwrap();

        assert_eq!(state.meals().len(), 1);
        let meal = &state.meals()[0];
        assert_eq!(meal.id, id);
        assert_eq!(meal.name, "Eggs");
        assert_eq!(meal.calories, 300);
        assert_eq!(meal.time, MealTime::Breakfast);
        assert_eq!(draft, MealDraft::default());
    }

    #[test]
    fn test_reset_restores_breakfast_after_other_slot() {
        let mut state = PlannerState::new();
        let mut draft = MealDraft::new()
            .name("Curry")
            .calories(650)
            .time(MealTime::Dinner);

        state.add_meal(&mut draft).unwrap();

        assert_eq!(state.meals()[0].time, MealTime::Dinner);
        assert_eq!(draft.time, MealTime::Breakfast);
    }

    #[test]
    fn test_meals_keep_insertion_order() {
        let mut state = PlannerState::new();
        state
            .add_meal(&mut MealDraft::new().name("Eggs").calories(300))
            .unwrap();
        state
            .add_meal(&mut MealDraft::new().name("Toast").calories(150))
            .unwrap();

        let names: Vec<&str> = state.meals().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Eggs", "Toast"]);
    }

    #[test]
    fn test_duplicate_meals_are_kept() {
        let mut state = PlannerState::new();
        for _ in 0..2 {
            state
                .add_meal(&mut MealDraft::new().name("Apple").calories(95))
                .unwrap();
        }
        assert_eq!(state.meals().len(), 2);
        assert_ne!(state.meals()[0].id, state.meals()[1].id);
    }

    #[test]
    fn test_add_grocery_item_without_name_is_noop() {
        let mut state = PlannerState::new();
        let mut draft = GroceryDraft::new().quantity("2 loaves");

        assert_eq!(
            state.add_grocery_item(&mut draft),
            Err(DraftError::MissingName)
        );
        assert!(state.groceries().is_empty());
        assert_eq!(draft.quantity.as_deref(), Some("2 loaves"));
    }

    #[test]
    fn test_add_grocery_item() {
        let mut state = PlannerState::new();
        let mut draft = GroceryDraft::new().name("Milk").quantity("1 gallon");

        state.add_grocery_item(&mut draft).unwrap();

        assert_eq!(state.groceries().len(), 1);
        let item = &state.groceries()[0];
        assert_eq!(item.name, "Milk");
        assert_eq!(item.quantity.as_deref(), Some("1 gallon"));
        assert!(!item.purchased);
        assert_eq!(draft, GroceryDraft::default());
    }

    #[test]
    fn test_ids_unique_across_lists() {
        let mut state = PlannerState::new();
        let mut ids = HashSet::new();

        for i in 0..10 {
            let id = state
                .add_meal(&mut MealDraft::new().name(format!("meal {}", i)).calories(100))
                .unwrap();
            assert!(ids.insert(id));

            let id = state
                .add_grocery_item(&mut GroceryDraft::new().name(format!("item {}", i)))
                .unwrap();
            assert!(ids.insert(id));
        }
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_switch_view_is_total_and_idempotent() {
        let mut state = PlannerState::new();

        for &from in View::all() {
            for &to in View::all() {
                state.switch_view(from);
                state.switch_view(to);
                assert_eq!(state.active_view(), to);
                state.switch_view(to);
                assert_eq!(state.active_view(), to);
            }
        }
    }

    #[test]
    fn test_switch_view_keeps_lists() {
        let mut state = PlannerState::new();
        state
            .add_meal(&mut MealDraft::new().name("Eggs").calories(300))
            .unwrap();
        state.switch_view(View::Groceries);
        state.switch_view(View::Plan);
        assert_eq!(state.meals().len(), 1);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut state = PlannerState::new();
        state
            .add_grocery_item(&mut GroceryDraft::new().name("Milk"))
            .unwrap();
        state.switch_view(View::Groceries);

        let json = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(json["active_view"], "groceries");
        assert_eq!(json["meals"].as_array().unwrap().len(), 0);
        assert_eq!(json["groceries"][0]["name"], "Milk");
        assert_eq!(json["groceries"][0]["purchased"], false);
    }
}
