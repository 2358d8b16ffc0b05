//! Core data types for the planner
//!
//! - `Meal`: a committed, planned meal
//! - `GroceryItem`: a committed entry on the grocery list
//! - `MealTime` and `View`: the two closed selectors
//! - `EntryId` and `IdGenerator`: session-unique identifiers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque identifier of a meal or grocery item
///
/// Unique for the lifetime of a `PlannerState`, across both lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(u64);

impl EntryId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic id source
#[derive(Debug)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Hand out the next identifier
    pub fn next_id(&mut self) -> EntryId {
        let id = EntryId(self.next);
        self.next += 1;
        id
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Slot of the day a meal is planned for
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MealTime {
    #[default]
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealTime {
    /// All slots in day order
    pub fn all() -> &'static [MealTime] {
        &[
            MealTime::Breakfast,
            MealTime::Lunch,
            MealTime::Dinner,
            MealTime::Snack,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MealTime::Breakfast => "breakfast",
            MealTime::Lunch => "lunch",
            MealTime::Dinner => "dinner",
            MealTime::Snack => "snack",
        }
    }
}

impl fmt::Display for MealTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        MealTime::all()
            .iter()
            .copied()
            .find(|time| time.as_str() == name)
            .ok_or_else(|| {
                let expected: Vec<_> = MealTime::all().iter().map(MealTime::as_str).collect();
                format!(
                    "unknown meal time '{}' (expected one of: {})",
                    name,
                    expected.join(", ")
                )
            })
    }
}

/// The three mutually exclusive panels
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Meal entry form
    #[default]
    Plan,
    /// Read-only list of planned meals
    Tracker,
    /// Grocery entry form and list
    Groceries,
}

impl View {
    /// All views in tab order
    pub fn all() -> &'static [View] {
        &[View::Plan, View::Tracker, View::Groceries]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Plan => "plan",
            View::Tracker => "tracker",
            View::Groceries => "groceries",
        }
    }

    /// Label shown on the tab bar
    pub fn tab_label(&self) -> &'static str {
        match self {
            View::Plan => "Meal Plan",
            View::Tracker => "Tracker",
            View::Groceries => "Groceries",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        if name == "grocery" {
            return Ok(View::Groceries);
        }

        View::all()
            .iter()
            .copied()
            .find(|view| view.as_str() == name)
            .ok_or_else(|| format!("unknown view '{}'", name))
    }
}

/// A planned meal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meal {
    pub id: EntryId,
    pub name: String,
    pub time: MealTime,
    /// Energy in whole kcal, never zero; fractional input is not accepted
    pub calories: u32,
    pub created_at: DateTime<Utc>,
}

/// An item on the grocery list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroceryItem {
    pub id: EntryId,
    pub name: String,
    /// Free-text amount such as "1 gallon"
    #[serde(default)]
    pub quantity: Option<String>,
    /// Always false; nothing marks an item as bought yet
    pub purchased: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_generator_is_monotonic() {
        let mut ids = IdGenerator::new();
        let a = ids.next_id();
        let b = ids.next_id();
        let c = ids.next_id();
        assert!(a < b && b < c);
        assert_eq!(a.get(), 1);
        assert_eq!(c.to_string(), "3");
    }

    #[test]
    fn test_meal_time_default_and_parse() {
        assert_eq!(MealTime::default(), MealTime::Breakfast);
        assert_eq!("Lunch".parse::<MealTime>().unwrap(), MealTime::Lunch);
        assert_eq!(" snack ".parse::<MealTime>().unwrap(), MealTime::Snack);
        let err = "brunch".parse::<MealTime>().unwrap_err();
        assert_eq!(
            err,
            "unknown meal time 'brunch' (expected one of: breakfast, lunch, dinner, snack)"
        );

        for time in MealTime::all() {
            assert_eq!(time.to_string().parse::<MealTime>().unwrap(), *time);
        }
    }

    #[test]
    fn test_view_default_and_parse() {
        assert_eq!(View::default(), View::Plan);
        assert_eq!("TRACKER".parse::<View>().unwrap(), View::Tracker);
        assert_eq!("grocery".parse::<View>().unwrap(), View::Groceries);
        assert!("settings".parse::<View>().is_err());
        assert_eq!(View::Plan.tab_label(), "Meal Plan");
    }

    #[test]
    fn test_meal_serializes_lowercase_time() {
        let meal = Meal {
            id: IdGenerator::new().next_id(),
            name: "Eggs".to_string(),
            time: MealTime::Dinner,
            calories: 300,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&meal).unwrap();
        assert_eq!(json["time"], "dinner");
        assert_eq!(json["id"], 1);
        assert_eq!(json["calories"], 300);
    }
}
