//! Drag-to-create selection.
//!
//! `Idle → Selecting → {Committed | Cancelled}`. The manager holds only grid
//! constants; the live [`SelectionState`] belongs to the caller and is passed
//! in and returned by value, so cancelling never leaves anything behind.

mod validation;

pub use validation::{conflict_warning, find_conflicts, validate_interval};

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::models::event::{CalendarEvent, TimeInterval};
use crate::models::selection::{SelectionBounds, SelectionState, SelectionValidation};
use crate::models::settings::GridSettings;
use crate::services::grid::GridMath;
use crate::utils::date::{end_of_day, start_of_day};

pub const SELECTION_SNAP_MINUTES: u32 = 15;
pub const MIN_SELECTION_MINUTES: u32 = 30;

#[derive(Debug, Clone)]
pub struct SelectionManager {
    grid: GridMath,
    min_duration: Duration,
}

impl Default for SelectionManager {
    fn default() -> Self {
        Self {
            grid: GridMath::default().with_snap(SELECTION_SNAP_MINUTES),
            min_duration: Duration::minutes(MIN_SELECTION_MINUTES as i64),
        }
    }
}

impl SelectionManager {
    pub fn new(settings: &GridSettings) -> Self {
        Self {
            grid: GridMath::from_settings(settings).with_snap(settings.selection_snap_minutes),
            min_duration: Duration::minutes(settings.min_selection_minutes as i64),
        }
    }

    pub fn min_duration(&self) -> Duration {
        self.min_duration
    }

    /// Idle → Selecting. The range starts empty at the snapped pointer time.
    pub fn start_selection(
        &self,
        x: f32,
        y: f32,
        day_index: usize,
        base_date: NaiveDate,
        start_hour: u32,
    ) -> SelectionState {
        let start_time = self.grid.y_to_time(y, base_date, start_hour);
        log::trace!("Selection started at {} in column {}", start_time, day_index);

        SelectionState {
            is_selecting: true,
            start_x: x,
            start_y: y,
            current_x: x,
            current_y: y,
            start_time: Some(start_time),
            end_time: Some(start_time),
            day_index: Some(day_index),
        }
    }

    /// Selecting → Selecting. Dragging up or down from the anchor behaves the
    /// same; a state that is not selecting is returned unchanged.
    pub fn update_selection(
        &self,
        state: SelectionState,
        x: f32,
        y: f32,
        base_date: NaiveDate,
        start_hour: u32,
    ) -> SelectionState {
        if !state.is_selecting {
            return state;
        }

        let anchor = self.grid.y_to_time(state.start_y, base_date, start_hour);
        let current = self.grid.y_to_time(y, base_date, start_hour);
        let (start, end) = self.resolve_range(anchor, current);

        SelectionState {
            current_x: x,
            current_y: y,
            start_time: Some(start),
            end_time: Some(end),
            ..state
        }
    }

    /// Selecting → Committed. `None` when the state was never selecting or
    /// is missing its range.
    pub fn end_selection(
        &self,
        state: &SelectionState,
        start_hour: u32,
    ) -> Option<SelectionBounds> {
        if !state.is_selecting {
            return None;
        }
        let (start, end, day_index) = self.snapped_range(state)?;
        let x = state.start_x.min(state.current_x);
        let width = (state.start_x - state.current_x).abs();
        let bounds = self.bounds(start, end, day_index, x, width, start_hour);

        log::debug!(
            "Committed selection {} .. {} in column {}",
            bounds.start_time,
            bounds.end_time,
            bounds.day_index
        );
        Some(bounds)
    }

    /// Any state → Idle.
    pub fn cancel_selection(&self) -> SelectionState {
        SelectionState::default()
    }

    /// Whether the state holds a range at least the minimum duration long.
    pub fn is_valid_selection(&self, state: &SelectionState) -> bool {
        state.is_selecting
            && matches!(
                (state.start_time, state.end_time),
                (Some(start), Some(end)) if end - start >= self.min_duration
            )
    }

    /// Advisory check against existing events; never blocks a commit.
    pub fn validate_selection_against_events(
        &self,
        state: &SelectionState,
        existing_events: &[CalendarEvent],
    ) -> SelectionValidation {
        match (state.start_time, state.end_time) {
            (Some(start), Some(end)) => {
                validate_interval(&TimeInterval::new(start, end), existing_events)
            }
            _ => SelectionValidation {
                is_valid: false,
                conflicts: Vec::new(),
                warning: Some("Selection has no time range yet".to_string()),
            },
        }
    }

    /// Live rectangle for the selection overlay, spanning the whole column.
    pub fn get_selection_visual_bounds(
        &self,
        state: &SelectionState,
        column_width: f32,
        start_hour: u32,
    ) -> Option<SelectionBounds> {
        if !state.is_selecting {
            return None;
        }
        let (start, end, day_index) = self.snapped_range(state)?;
        let x = day_index as f32 * column_width;
        Some(self.bounds(start, end, day_index, x, column_width, start_hour))
    }

    fn snapped_range(
        &self,
        state: &SelectionState,
    ) -> Option<(NaiveDateTime, NaiveDateTime, usize)> {
        let start = GridMath::snap_time(state.start_time?, self.grid.snap_minutes);
        let end = GridMath::snap_time(state.end_time?, self.grid.snap_minutes);
        let (start, end) = self.resolve_range(start, end);
        Some((start, end, state.day_index?))
    }

    /// Order two snapped times and extend the later one to the minimum span.
    /// A span that would run past midnight is pulled back so it ends at the
    /// close of the earlier time's day.
    fn resolve_range(&self, a: NaiveDateTime, b: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
        let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
        let end = later.max(earlier + self.min_duration);
        let day_end = end_of_day(earlier.date());
        if end <= day_end {
            return (earlier, end);
        }
        let start = (day_end - self.min_duration).max(start_of_day(earlier.date()));
        (start.min(earlier), day_end)
    }

    fn bounds(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        day_index: usize,
        x: f32,
        width: f32,
        start_hour: u32,
    ) -> SelectionBounds {
        SelectionBounds {
            x,
            y: self.grid.time_to_y(&start, start_hour),
            width,
            height: self
                .grid
                .duration_to_height((end - start).num_minutes() as f64),
            start_time: start,
            end_time: end,
            day_index,
        }
    }
}
