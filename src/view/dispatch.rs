//! View dispatcher
//!
//! Picks the one panel the active view selects and renders it as text.
//! Rendering only reads state; nothing here mutates the planner.

use crate::planner::{Forms, GroceryDraft, GroceryItem, Meal, MealDraft, PlannerState, View};
use std::fmt;

/// The presentation of the active view
#[derive(Debug, Clone, Copy)]
pub enum Panel<'a> {
    /// Meal entry form
    Plan { draft: &'a MealDraft },
    /// Planned meals, insertion order
    Tracker { meals: &'a [Meal] },
    /// Grocery entry form followed by the items added so far
    Groceries {
        draft: &'a GroceryDraft,
        items: &'a [GroceryItem],
    },
}

/// Select the panel for the state's active view
pub fn dispatch<'a>(state: &'a PlannerState, forms: &'a Forms) -> Panel<'a> {
    match state.active_view() {
        View::Plan => Panel::Plan { draft: &forms.meal },
        View::Tracker => Panel::Tracker {
            meals: state.meals(),
        },
        View::Groceries => Panel::Groceries {
            draft: &forms.grocery,
            items: state.groceries(),
        },
    }
}

impl<'a> Panel<'a> {
    pub fn view(&self) -> View {
        match self {
            Panel::Plan { .. } => View::Plan,
            Panel::Tracker { .. } => View::Tracker,
            Panel::Groceries { .. } => View::Groceries,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Panel::Plan { .. } => "Today's Meal Plan",
            Panel::Tracker { .. } => "Nutrition Tracker",
            Panel::Groceries { .. } => "Grocery List",
        }
    }

    /// Lines of the panel's list, top to bottom
    pub fn entries(&self) -> Vec<String> {
        match self {
            Panel::Plan { .. } => Vec::new(),
            Panel::Tracker { meals } => meals.iter().map(tracker_entry).collect(),
            Panel::Groceries { items, .. } => items.iter().map(grocery_entry).collect(),
        }
    }
}

impl fmt::Display for Panel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title())?;

        match self {
            Panel::Plan { draft } => {
                let calories = draft.calories.map(|c| c.to_string());
                write_field(f, "Meal Name", draft.name.as_deref())?;
                write_field(f, "Calories", calories.as_deref())?;
                write_field(f, "Time", Some(draft.time.as_str()))?;
                writeln!(f, "  [ Add Meal ]")?;
            }
            Panel::Tracker { meals } => {
                if meals.is_empty() {
                    writeln!(f, "  No meals planned yet.")?;
                }
                for meal in meals.iter() {
                    writeln!(f, "  {}", tracker_entry(meal))?;
                }
            }
            Panel::Groceries { draft, items } => {
                write_field(f, "Item Name", draft.name.as_deref())?;
                write_field(f, "Quantity", draft.quantity.as_deref())?;
                writeln!(f, "  [ Add Item ]")?;
                if !items.is_empty() {
                    writeln!(f)?;
                }
                for item in items.iter() {
                    writeln!(f, "  {}", grocery_entry(item))?;
                }
            }
        }

        Ok(())
    }
}

fn write_field(f: &mut fmt::Formatter<'_>, label: &str, value: Option<&str>) -> fmt::Result {
    writeln!(f, "  {:<10}: {}", label, value.unwrap_or("(empty)"))
}

/// One tracker line, e.g. `Oatmeal - 250 kcal`
pub fn tracker_entry(meal: &Meal) -> String {
    format!("{} - {} kcal", meal.name, meal.calories)
}

/// One grocery line, e.g. `[ ] Milk (1 gallon)`
pub fn grocery_entry(item: &GroceryItem) -> String {
    let mark = if item.purchased { "[x]" } else { "[ ]" };
    match item.quantity.as_deref() {
        Some(quantity) => format!("{} {} ({})", mark, item.name, quantity),
        None => format!("{} {}", mark, item.name),
    }
}

/// Tab bar with the active view bracketed
pub fn render_tabs(active: View) -> String {
    View::all()
        .iter()
        .map(|view| {
            if *view == active {
                format!("[{}]", view.tab_label())
            } else {
                format!(" {} ", view.tab_label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::MealTime;

    #[test]
    fn test_dispatch_follows_active_view() {
        let mut state = PlannerState::new();
        let forms = Forms::default();

        assert_eq!(dispatch(&state, &forms).view(), View::Plan);

        for &view in View::all() {
            state.switch_view(view);
            assert_eq!(dispatch(&state, &forms).view(), view);
        }
    }

    #[test]
    fn test_oatmeal_scenario() {
        let mut state = PlannerState::new();
        let mut forms = Forms::default();
        forms.meal.set_name("Oatmeal");
        forms.meal.set_calories_input("250");

        state.add_meal(&mut forms.meal).unwrap();
        state.switch_view(View::Tracker);

        let panel = dispatch(&state, &forms);
        assert_eq!(panel.entries(), vec!["Oatmeal - 250 kcal".to_string()]);
        assert!(panel.to_string().contains("  Oatmeal - 250 kcal\n"));
    }

    #[test]
    fn test_tracker_lists_in_insertion_order() {
        let mut state = PlannerState::new();
        let forms = Forms::default();
        state
            .add_meal(&mut MealDraft::new().name("Eggs").calories(300))
            .unwrap();
        state
            .add_meal(&mut MealDraft::new().name("Toast").calories(150))
            .unwrap();
        state.switch_view(View::Tracker);

        let entries = dispatch(&state, &forms).entries();
        assert_eq!(entries, vec!["Eggs - 300 kcal", "Toast - 150 kcal"]);
    }

    #[test]
    fn test_empty_tracker() {
        let mut state = PlannerState::new();
        let forms = Forms::default();
        state.switch_view(View::Tracker);

        let panel = dispatch(&state, &forms);
        assert!(panel.entries().is_empty());
        assert_eq!(
            panel.to_string(),
            "Nutrition Tracker\n  No meals planned yet.\n"
        );
    }

    #[test]
    fn test_plan_panel_shows_draft() {
        let state = PlannerState::new();
        let mut forms = Forms::default();
        forms.meal.set_name("Salad");
        forms.meal.set_time(MealTime::Lunch);

        let rendered = dispatch(&state, &forms).to_string();
        assert!(rendered.starts_with("Today's Meal Plan\n"));
        assert!(rendered.contains("Meal Name : Salad"));
        assert!(rendered.contains("Calories  : (empty)"));
        assert!(rendered.contains("Time      : lunch"));
        assert!(rendered.contains("[ Add Meal ]"));
    }

    #[test]
    fn test_groceries_panel_lists_items() {
        let mut state = PlannerState::new();
        let forms = Forms::default();
        state
            .add_grocery_item(&mut GroceryDraft::new().name("Milk").quantity("1 gallon"))
            .unwrap();
        state
            .add_grocery_item(&mut GroceryDraft::new().name("Bread"))
            .unwrap();
        state.switch_view(View::Groceries);

        let panel = dispatch(&state, &forms);
        assert_eq!(panel.title(), "Grocery List");
        assert_eq!(panel.entries(), vec!["[ ] Milk (1 gallon)", "[ ] Bread"]);
        assert!(panel.to_string().contains("[ Add Item ]"));
    }

    #[test]
    fn test_render_tabs() {
        assert_eq!(
            render_tabs(View::Tracker),
            " Meal Plan  [Tracker]  Groceries "
        );
        assert!(render_tabs(View::Plan).starts_with("[Meal Plan]"));
    }
}
