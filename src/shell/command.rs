//! Shell command AST

use crate::planner::View;
use crate::view::{ExportTarget, OutputFormat};
use std::fmt;

/// A form input the shell can write to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Calories,
    Time,
    Quantity,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormField::Name => write!(f, "name"),
            FormField::Calories => write!(f, "calories"),
            FormField::Time => write!(f, "time"),
            FormField::Quantity => write!(f, "quantity"),
        }
    }
}

/// One parsed line of shell input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Switch the active panel
    Tab(View),
    /// Write raw input into a field of the active form; empty clears it
    Set { field: FormField, value: String },
    /// Submit the active form
    Submit,
    /// Render the active panel
    Show,
    /// Print a list
    Export {
        target: ExportTarget,
        format: OutputFormat,
    },
    Help,
    Quit,
}

/// Command summary printed by `help`
pub const HELP: &str = "\
Commands:
  tab <plan|tracker|groceries>         switch panel (alias: view)
  set <field> [value]                  fill a field of the active form
                                         plan:      name, calories, time
                                         groceries: name, quantity
                                       an empty value clears the field;
                                       quote values with ' or \" to keep spaces;
                                       double a quote to include it ('Bob''s')
  submit                               add the form as a new entry (alias: add)
  show                                 print the active panel
  export [meals|groceries|all] [table|json|csv]
                                       print a list (default: all, table)
  help                                 this text (alias: ?)
  quit                                 leave the planner (alias: exit)
";
