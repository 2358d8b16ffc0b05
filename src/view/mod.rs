//! Views
//!
//! Read-only presentation of planner state:
//!
//! - **dispatch**: the active view → one of three panels
//! - **export**: the lists as table, JSON or CSV

pub mod dispatch;
pub mod export;

pub use dispatch::{dispatch, grocery_entry, render_tabs, tracker_entry, Panel};
pub use export::{export, ExportError, ExportResult, ExportTarget, OutputFormat};
