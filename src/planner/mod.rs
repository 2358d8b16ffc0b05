//! Planner
//!
//! The state machine behind the planner:
//!
//! - **types**: `Meal`, `GroceryItem`, `MealTime`, `View`, ids
//! - **draft**: uncommitted form contents and their validation
//! - **state**: `PlannerState`, the only owner of the lists
//! - **error**: draft validation errors
//!
//! # Flow
//!
//! ```text
//! form input → draft → validate → append (id assigned) → draft reset
//!                         │
//!                         └─ invalid → discarded, draft untouched
//! ```
//!
//! # Example
//!
//! ```rust
//! use nutrition_planner::planner::{MealDraft, PlannerState, View};
//!
//! let mut state = PlannerState::new();
//! let mut draft = MealDraft::new().name("Oatmeal").calories(250);
//!
//! state.add_meal(&mut draft).unwrap();
//! state.switch_view(View::Tracker);
//!
//! assert_eq!(state.meals().len(), 1);
//! ```

pub mod draft;
pub mod error;
pub mod state;
pub mod types;

pub use draft::{Forms, GroceryDraft, MealDraft, ValidGroceryItem, ValidMeal};
pub use error::{DraftError, DraftResult};
pub use state::{PlannerState, Snapshot};
pub use types::{EntryId, GroceryItem, IdGenerator, Meal, MealTime, View};
