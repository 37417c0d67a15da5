// Selection models
// Caller-held drag-to-create state and the values it resolves into

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// In-progress drag state for creating an event.
///
/// `SelectionState::default()` is the Idle state. Exactly one value is live
/// per view; the selection manager never stores it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectionState {
    pub is_selecting: bool,
    pub start_x: f32,
    pub start_y: f32,
    pub current_x: f32,
    pub current_y: f32,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub day_index: Option<usize>,
}

impl SelectionState {
    /// Snapped duration of the current selection, if both bounds are known.
    pub fn duration_minutes(&self) -> Option<i64> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some((end - start).num_minutes()),
            _ => None,
        }
    }
}

/// Committed result of a finished drag, in grid pixels plus times.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub day_index: usize,
}

impl SelectionBounds {
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }
}

/// Advisory outcome of checking a selection against existing events.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionValidation {
    pub is_valid: bool,
    /// Ids of the conflicting events.
    pub conflicts: Vec<String>,
    pub warning: Option<String>,
}

impl SelectionValidation {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            conflicts: Vec::new(),
            warning: None,
        }
    }
}
