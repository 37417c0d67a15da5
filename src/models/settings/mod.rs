// Settings module
// Grid constants supplied by the hosting UI layer

use serde::{Deserialize, Serialize};

/// Geometry and interaction constants for the time grid.
///
/// UI toggles such as `debug_layout` live here so they are passed into the
/// engine explicitly instead of being read from global state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Pixels per hour in the timed grid.
    pub hour_height: f32,
    /// Width of the time-label gutter left of the first day column.
    pub time_gutter_width: f32,
    /// Height of the all-day row above the timed grid.
    pub all_day_row_height: f32,
    /// First visible hour of the grid.
    pub start_hour: u32,
    /// Hour at which the grid ends (exclusive, at most 24).
    pub end_hour: u32,
    /// Snap interval for pixel-to-time conversion, in minutes.
    pub snap_minutes: u32,
    /// Snap interval used while drag-selecting, in minutes.
    pub selection_snap_minutes: u32,
    /// Shortest selection a drag can produce, in minutes.
    pub min_selection_minutes: u32,
    /// Horizontal gap between side-by-side lanes.
    pub lane_gap: f32,
    /// Floor for rendered event heights.
    pub min_event_height: f32,
    pub all_day_event_height: f32,
    pub all_day_vertical_gap: f32,
    pub all_day_padding: f32,
    /// Log overlap-group composition for every layout pass.
    pub debug_layout: bool,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            hour_height: 60.0,
            time_gutter_width: 50.0,
            all_day_row_height: 40.0,
            start_hour: 0,
            end_hour: 24,
            snap_minutes: 30,
            selection_snap_minutes: 15,
            min_selection_minutes: 30,
            lane_gap: 2.0,
            min_event_height: 20.0,
            all_day_event_height: 32.0,
            all_day_vertical_gap: 4.0,
            all_day_padding: 4.0,
            debug_layout: false,
        }
    }
}

impl GridSettings {
    /// Check the constants for values the grid math cannot work with.
    pub fn validate(&self) -> Result<(), String> {
        if self.end_hour > 24 {
            return Err(format!("end_hour must be at most 24, got {}", self.end_hour));
        }
        if self.start_hour >= self.end_hour {
            return Err(format!(
                "start_hour ({}) must be before end_hour ({})",
                self.start_hour, self.end_hour
            ));
        }
        if self.hour_height <= 0.0 {
            return Err("hour_height must be positive".to_string());
        }
        if self.snap_minutes == 0 || self.selection_snap_minutes == 0 {
            return Err("snap intervals must be at least one minute".to_string());
        }
        if self.min_event_height < 0.0 || self.lane_gap < 0.0 {
            return Err("min_event_height and lane_gap cannot be negative".to_string());
        }
        Ok(())
    }

    /// Number of visible hours in the grid.
    pub fn visible_hours(&self) -> u32 {
        self.end_hour.saturating_sub(self.start_hour)
    }
}
