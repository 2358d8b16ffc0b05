//! Planner session
//!
//! Owns the planner state together with the two form drafts and applies
//! parsed commands to them. This is the form layer: it fills drafts, submits
//! them and picks which panel to render.

use crate::planner::{Forms, MealTime, PlannerState, View};
use crate::shell::command::{Command, FormField, HELP};
use crate::shell::error::{ShellError, ShellResult};
use crate::view::{dispatch, export, render_tabs, Panel};

/// What the caller should do after a command ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// State changed; re-render if configured to
    Changed,
    /// Nothing visible changed
    Unchanged,
    /// Render the active panel
    Show,
    /// Print this text
    Output(String),
    /// End the session
    Quit,
}

/// One planning session
#[derive(Debug, Default)]
pub struct Session {
    state: PlannerState,
    forms: Forms,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PlannerState {
        &self.state
    }

    pub fn forms(&self) -> &Forms {
        &self.forms
    }

    /// Panel for the active view
    pub fn panel(&self) -> Panel<'_> {
        dispatch(&self.state, &self.forms)
    }

    /// Tab bar followed by the active panel
    pub fn render(&self) -> String {
        format!("{}\n\n{}", render_tabs(self.state.active_view()), self.panel())
    }

    /// Apply a command
    pub fn execute(&mut self, command: Command) -> ShellResult<Outcome> {
        match command {
            Command::Tab(view) => {
                self.state.switch_view(view);
                Ok(Outcome::Changed)
            }
            Command::Set { field, value } => {
                self.set_field(field, &value)?;
                Ok(Outcome::Unchanged)
            }
            Command::Submit => self.submit(),
            Command::Show => Ok(Outcome::Show),
            Command::Export { target, format } => {
                Ok(Outcome::Output(export(&self.state, target, format)?))
            }
            Command::Help => Ok(Outcome::Output(HELP.to_string())),
            Command::Quit => Ok(Outcome::Quit),
        }
    }

    fn set_field(&mut self, field: FormField, value: &str) -> ShellResult<()> {
        let view = self.state.active_view();

        match (view, field) {
            (View::Tracker, _) => return Err(ShellError::NoForm(view)),
            (View::Plan, FormField::Name) => self.forms.meal.set_name(value),
            (View::Plan, FormField::Calories) => self.forms.meal.set_calories_input(value),
            (View::Plan, FormField::Time) => {
                let time = if value.is_empty() {
                    MealTime::default()
                } else {
                    value.parse::<MealTime>().map_err(ShellError::InvalidValue)?
                };
                self.forms.meal.set_time(time);
            }
            (View::Groceries, FormField::Name) => self.forms.grocery.set_name(value),
            (View::Groceries, FormField::Quantity) => self.forms.grocery.set_quantity(value),
            (view, field) => return Err(ShellError::UnknownField { field, view }),
        }

        Ok(())
    }

    fn submit(&mut self) -> ShellResult<Outcome> {
        let result = match self.state.active_view() {
            View::Plan => self.state.add_meal(&mut self.forms.meal),
            View::Groceries => self.state.add_grocery_item(&mut self.forms.grocery),
            View::Tracker => return Err(ShellError::NoForm(View::Tracker)),
        };

        // Incomplete forms are dropped without feedback; fields keep their input
        Ok(match result {
            Ok(_) => Outcome::Changed,
            Err(_) => Outcome::Unchanged,
        })
    }
}
