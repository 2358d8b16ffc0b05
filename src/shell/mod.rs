//! Planner Shell
//!
//! The terminal front-end of the planner:
//!
//! - **command**: parsed command AST and help text
//! - **parser**: nom parser for one input line
//! - **session**: planner state plus form drafts, applies commands
//! - **runner**: interactive and script loops over a line reader
//! - **error**: shell error types
//!
//! # Architecture
//!
//! ```text
//! line → parse_command → Session::execute → PlannerState
//!                              │
//!                              └→ Outcome → render panel / print output
//! ```

pub mod command;
pub mod error;
pub mod parser;
pub mod runner;
pub mod session;

pub use command::{Command, FormField, HELP};
pub use error::{ShellError, ShellResult};
pub use parser::parse_command;
pub use runner::{run_interactive, run_script};
pub use session::{Outcome, Session};
