use crate::sdk::routing::error::NavError;
use crate::sdk::routing::route::RouteStep;

/// Which view the user is looking at. Pure UI state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Map,
    Directions,
}

/// Prompt shown on the directions view while there is nothing to list.
pub const DIRECTIONS_PLACEHOLDER: &str = "Enter origin and destination to see directions.";

/// Input and display state: the two address fields, the error banner slot,
/// the current directions list, and the active tab. Holds no I/O; the
/// resolver reads the fields and writes back directions or an error.
#[derive(Debug, Default)]
pub struct Shell {
    origin: String,
    destination: String,
    error: Option<String>,
    directions: Vec<RouteStep>,
    active_tab: Tab,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn directions(&self) -> &[RouteStep] {
        &self.directions
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn set_origin(&mut self, origin: impl Into<String>) {
        self.origin = origin.into();
    }

    pub fn set_destination(&mut self, destination: impl Into<String>) {
        self.destination = destination.into();
    }

    /// Both fields filled; the resolver runs whenever this holds, whether or
    /// not the user ever pressed submit.
    pub fn ready(&self) -> bool {
        !self.origin.is_empty() && !self.destination.is_empty()
    }

    /// Validates the two fields. With either one empty, sets the fixed input
    /// error and does nothing else; otherwise clears the banner. Does not
    /// itself trigger resolution.
    pub fn submit(&mut self) -> Result<(), NavError> {
        if self.origin.is_empty() || self.destination.is_empty() {
            self.error = Some(NavError::EmptyInput.to_string());
            return Err(NavError::EmptyInput);
        }
        self.error = None;
        Ok(())
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_directions(&mut self, steps: Vec<RouteStep>) {
        self.directions = steps;
    }

    /// Lines for the directions view: one numbered entry per step with its
    /// instruction and distance in meters, or the placeholder prompt when
    /// there are no steps yet.
    pub fn render_directions(&self) -> Vec<String> {
        if self.directions.is_empty() {
            return vec![DIRECTIONS_PLACEHOLDER.to_string()];
        }
        self.directions
            .iter()
            .enumerate()
            .map(|(i, step)| {
                format!("{}. {} ({} meters)", i + 1, step.instruction, step.distance_m)
            })
            .collect()
    }
}
