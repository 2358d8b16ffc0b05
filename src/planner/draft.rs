//! Form drafts
//!
//! A draft holds what the user has typed so far. `validate` is a pure
//! predicate: it never touches the draft, so a failed submission leaves the
//! fields exactly as they were.

use crate::planner::error::{DraftError, DraftResult};
use crate::planner::types::MealTime;

/// Uncommitted meal form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealDraft {
    pub name: Option<String>,
    pub calories: Option<u32>,
    pub time: MealTime,
}

/// Fields of a meal draft that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidMeal {
    pub name: String,
    pub calories: u32,
    pub time: MealTime,
}

impl MealDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder: set calories
    pub fn calories(mut self, calories: u32) -> Self {
        self.calories = Some(calories);
        self
    }

    /// Builder: set time slot
    pub fn time(mut self, time: MealTime) -> Self {
        self.time = time;
        self
    }

    /// Replace the name with raw input; empty input clears it
    pub fn set_name(&mut self, input: &str) {
        self.name = non_empty(input);
    }

    /// Replace calories with raw input
    ///
    /// Anything that is not a whole, non-negative number leaves the field
    /// empty, the same as a numeric input the user has not filled.
    pub fn set_calories_input(&mut self, input: &str) {
        self.calories = input.trim().parse::<u32>().ok();
    }

    pub fn set_time(&mut self, time: MealTime) {
        self.time = time;
    }

    /// Check the draft can be committed
    pub fn validate(&self) -> DraftResult<ValidMeal> {
        let name = match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => return Err(DraftError::MissingName),
        };

        let calories = match self.calories {
            Some(calories) if calories > 0 => calories,
            _ => return Err(DraftError::MissingCalories),
        };

        Ok(ValidMeal {
            name: name.to_string(),
            calories,
            time: self.time,
        })
    }

    /// Back to an empty breakfast form
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Uncommitted grocery form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroceryDraft {
    pub name: Option<String>,
    pub quantity: Option<String>,
}

/// Fields of a grocery draft that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidGroceryItem {
    pub name: String,
    pub quantity: Option<String>,
}

impl GroceryDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder: set quantity
    pub fn quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }

    pub fn set_name(&mut self, input: &str) {
        self.name = non_empty(input);
    }

    pub fn set_quantity(&mut self, input: &str) {
        self.quantity = non_empty(input);
    }

    /// Check the draft can be committed
    pub fn validate(&self) -> DraftResult<ValidGroceryItem> {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => Ok(ValidGroceryItem {
                name: name.to_string(),
                quantity: self.quantity.clone().filter(|q| !q.is_empty()),
            }),
            _ => Err(DraftError::MissingName),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The two forms of the planner, one draft each
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forms {
    pub meal: MealDraft,
    pub grocery: GroceryDraft,
}

fn non_empty(input: &str) -> Option<String> {
    if input.is_empty() {
        None
    } else {
        Some(input.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_draft_defaults_to_breakfast() {
        let draft = MealDraft::new();
        assert_eq!(draft.time, MealTime::Breakfast);
        assert!(draft.name.is_none());
        assert!(draft.calories.is_none());
    }

    #[test]
    fn test_meal_draft_requires_name() {
        assert_eq!(
            MealDraft::new().calories(300).validate(),
            Err(DraftError::MissingName)
        );
        assert_eq!(
            MealDraft::new().name("").calories(300).validate(),
            Err(DraftError::MissingName)
        );
    }

    #[test]
    fn test_meal_draft_requires_calories() {
        assert_eq!(
            MealDraft::new().name("Eggs").validate(),
            Err(DraftError::MissingCalories)
        );
        assert_eq!(
            MealDraft::new().name("Eggs").calories(0).validate(),
            Err(DraftError::MissingCalories)
        );
    }

    #[test]
    fn test_meal_draft_validate_keeps_fields() {
        let draft = MealDraft::new()
            .name("Soup")
            .calories(420)
            .time(MealTime::Dinner);
        let valid = draft.validate().unwrap();

        assert_eq!(valid.name, "Soup");
        assert_eq!(valid.calories, 420);
        assert_eq!(valid.time, MealTime::Dinner);
        // Validation is a pure check
        assert_eq!(draft.name.as_deref(), Some("Soup"));
    }

    #[test]
    fn test_calories_input_parsing() {
        let mut draft = MealDraft::new();

        draft.set_calories_input(" 250 ");
        assert_eq!(draft.calories, Some(250));

        draft.set_calories_input("abc");
        assert_eq!(draft.calories, None);

        draft.set_calories_input("-5");
        assert_eq!(draft.calories, None);

        draft.set_calories_input("12.5");
        assert_eq!(draft.calories, None);
    }

    #[test]
    fn test_set_name_keeps_whitespace_only_names() {
        let mut draft = MealDraft::new();
        draft.set_name(" ");
        assert_eq!(draft.name.as_deref(), Some(" "));

        draft.set_name("");
        assert!(draft.name.is_none());
    }

    #[test]
    fn test_meal_draft_reset() {
        let mut draft = MealDraft::new()
            .name("Rice")
            .calories(200)
            .time(MealTime::Lunch);
        draft.reset();
        assert_eq!(draft, MealDraft::default());
    }

    #[test]
    fn test_grocery_draft_validation() {
        assert_eq!(
            GroceryDraft::new().quantity("2").validate(),
            Err(DraftError::MissingName)
        );

        let valid = GroceryDraft::new().name("Milk").validate().unwrap();
        assert_eq!(valid.name, "Milk");
        assert!(valid.quantity.is_none());

        let valid = GroceryDraft::new()
            .name("Milk")
            .quantity("1 gallon")
            .validate()
            .unwrap();
        assert_eq!(valid.quantity.as_deref(), Some("1 gallon"));
    }

    #[test]
    fn test_grocery_draft_setters() {
        let mut draft = GroceryDraft::new();
        draft.set_name("Eggs");
        draft.set_quantity("a dozen");
        assert_eq!(draft.name.as_deref(), Some("Eggs"));
        assert_eq!(draft.quantity.as_deref(), Some("a dozen"));

        draft.set_quantity("");
        assert!(draft.quantity.is_none());

        draft.reset();
        assert_eq!(draft, GroceryDraft::default());
    }
}
