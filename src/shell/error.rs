//! Shell error types
//!
//! Errors for input the planner forms could never have produced: unknown
//! commands, fields that are not on the active form and the like. A form
//! submitted with missing fields is not one of them; the session drops it
//! silently.

use crate::planner::View;
use crate::shell::command::FormField;
use crate::view::ExportError;
use thiserror::Error;

/// Errors that can occur while running shell input
#[derive(Error, Debug)]
pub enum ShellError {
    /// Input line is not a command
    #[error("Parse error: {0}")]
    Parse(String),

    /// Field value cannot be used
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Active panel has no form to fill or submit
    #[error("The {0} panel has no form")]
    NoForm(View),

    /// Active form does not have the requested field
    #[error("The {view} form has no {field} field")]
    UnknownField { field: FormField, view: View },

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error raised by a script line
    #[error("Line {line}: {source}")]
    Script {
        line: usize,
        source: Box<ShellError>,
    },
}

/// Result type alias for shell operations
pub type ShellResult<T> = Result<T, ShellError>;
