//! # Nutrition Planner
//!
//! Plan meals, track calories and keep a grocery list from the terminal.
//! Everything lives in memory for the length of one session.
//!
//! ## Modules
//!
//! - [`planner`]: meal and grocery state machine
//! - [`view`]: panel dispatch, rendering and export
//! - [`shell`]: command parser, session and interactive loop
//! - [`config`]: TOML configuration with environment overrides
//! - [`logging`]: tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust
//! use nutrition_planner::shell::{parse_command, Session};
//!
//! let mut session = Session::new();
//! for line in ["set name Oatmeal", "set calories 250", "submit", "tab tracker"] {
//!     session.execute(parse_command(line).unwrap()).unwrap();
//! }
//!
//! assert_eq!(session.panel().entries(), vec!["Oatmeal - 250 kcal"]);
//! ```

pub mod config;
pub mod logging;
pub mod planner;
pub mod shell;
pub mod view;

// Re-export top-level types for convenience
pub use planner::{
    DraftError, DraftResult, EntryId, Forms, GroceryDraft, GroceryItem, Meal, MealDraft, MealTime,
    PlannerState, View,
};

pub use view::{dispatch, export, ExportError, ExportTarget, OutputFormat, Panel};

pub use shell::{parse_command, Command, Outcome, Session, ShellError, ShellResult};

pub use config::{Config, ConfigError, LogFormat, LoggingConfig, ShellConfig};

pub use logging::{init_logging, LoggingError};
