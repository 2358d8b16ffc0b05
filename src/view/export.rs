//! List export
//!
//! Prints the meal and grocery lists as an aligned table, JSON or CSV.

use crate::planner::{GroceryItem, Meal, PlannerState};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Output encoding for exports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!(
                "unknown format '{}' (expected table, json or csv)",
                other
            )),
        }
    }
}

/// Which list to export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportTarget {
    Meals,
    Groceries,
    All,
}

impl fmt::Display for ExportTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportTarget::Meals => write!(f, "meals"),
            ExportTarget::Groceries => write!(f, "groceries"),
            ExportTarget::All => write!(f, "all"),
        }
    }
}

impl FromStr for ExportTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "meals" => Ok(ExportTarget::Meals),
            "groceries" => Ok(ExportTarget::Groceries),
            "all" => Ok(ExportTarget::All),
            other => Err(format!(
                "unknown export target '{}' (expected meals, groceries or all)",
                other
            )),
        }
    }
}

/// Export errors
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV output error: {0}")]
    CsvOutput(String),

    #[error("{format} export needs a single list (meals or groceries)")]
    Unsupported { format: OutputFormat },
}

/// Result type alias for exports
pub type ExportResult<T> = Result<T, ExportError>;

/// Render `target` of `state` in `format`
pub fn export(
    state: &PlannerState,
    target: ExportTarget,
    format: OutputFormat,
) -> ExportResult<String> {
    match format {
        OutputFormat::Table => Ok(match target {
            ExportTarget::Meals => meals_table(state.meals()),
            ExportTarget::Groceries => groceries_table(state.groceries()),
            ExportTarget::All => format!(
                "{}\n{}",
                meals_table(state.meals()),
                groceries_table(state.groceries())
            ),
        }),
        OutputFormat::Json => {
            let json = match target {
                ExportTarget::Meals => serde_json::to_string_pretty(state.meals())?,
                ExportTarget::Groceries => serde_json::to_string_pretty(state.groceries())?,
                ExportTarget::All => serde_json::to_string_pretty(&state.snapshot())?,
            };
            Ok(format!("{}\n", json))
        }
        OutputFormat::Csv => match target {
            ExportTarget::Meals => meals_csv(state.meals()),
            ExportTarget::Groceries => groceries_csv(state.groceries()),
            ExportTarget::All => Err(ExportError::Unsupported { format }),
        },
    }
}

fn meals_table(meals: &[Meal]) -> String {
    if meals.is_empty() {
        return "No meals planned yet.\n".to_string();
    }

    let mut out = format!(
        "{:<6} {:<24} {:<10} {:>8}\n",
        "ID", "Name", "Time", "Calories"
    );
    out.push_str(&"-".repeat(51));
    out.push('\n');

    for meal in meals {
        out.push_str(&format!(
            "{:<6} {:<24} {:<10} {:>8}\n",
            meal.id,
            meal.name,
            meal.time.as_str(),
            meal.calories
        ));
    }
    out
}

fn groceries_table(items: &[GroceryItem]) -> String {
    if items.is_empty() {
        return "Grocery list is empty.\n".to_string();
    }

    let mut out = format!(
        "{:<6} {:<24} {:<16} {}\n",
        "ID", "Name", "Quantity", "Purchased"
    );
    out.push_str(&"-".repeat(57));
    out.push('\n');

    for item in items {
        out.push_str(&format!(
            "{:<6} {:<24} {:<16} {}\n",
            item.id,
            item.name,
            item.quantity.as_deref().unwrap_or("-"),
            if item.purchased { "yes" } else { "no" }
        ));
    }
    out
}

fn meals_csv(meals: &[Meal]) -> ExportResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["id", "name", "time", "calories", "created_at"])?;

    for meal in meals {
        writer.write_record([
            meal.id.to_string(),
            meal.name.clone(),
            meal.time.to_string(),
            meal.calories.to_string(),
            meal.created_at.to_rfc3339(),
        ])?;
    }

    finish_csv(writer)
}

fn groceries_csv(items: &[GroceryItem]) -> ExportResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["id", "name", "quantity", "purchased", "created_at"])?;

    for item in items {
        writer.write_record([
            item.id.to_string(),
            item.name.clone(),
            item.quantity.clone().unwrap_or_default(),
            item.purchased.to_string(),
            item.created_at.to_rfc3339(),
        ])?;
    }

    finish_csv(writer)
}

fn finish_csv(writer: csv::Writer<Vec<u8>>) -> ExportResult<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::CsvOutput(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::CsvOutput(e.to_string()))
}
