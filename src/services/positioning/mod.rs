//! Absolute placement of laid-out events inside the calendar overlay.
//!
//! The overlay's origin is the top-left of the all-day row; the timed grid
//! begins `all_day_row_height` below it, and day columns begin right of the
//! time gutter. All-day events use a negative top offset relative to the
//! timed grid so both kinds share one coordinate system.

use chrono::{NaiveDateTime, Timelike};

use crate::models::event::CalendarEvent;
use crate::models::layout::{EventLayout, LayoutMap, PositionedEvent, ScreenRect};
use crate::models::settings::GridSettings;
use crate::services::grid::GridMath;

#[derive(Debug, Clone)]
pub struct PositioningEngine {
    grid: GridMath,
    gutter_width: f32,
    all_day_row_height: f32,
    column_width: f32,
    min_event_height: f32,
    all_day_event_height: f32,
    all_day_vertical_gap: f32,
    all_day_padding: f32,
}

impl PositioningEngine {
    pub fn new(settings: &GridSettings, column_width: f32) -> Self {
        Self {
            grid: GridMath::from_settings(settings),
            gutter_width: settings.time_gutter_width,
            all_day_row_height: settings.all_day_row_height,
            column_width,
            min_event_height: settings.min_event_height,
            all_day_event_height: settings.all_day_event_height,
            all_day_vertical_gap: settings.all_day_vertical_gap,
            all_day_padding: settings.all_day_padding,
        }
    }

    /// Same chrome, resized columns.
    pub fn with_column_width(mut self, column_width: f32) -> Self {
        self.column_width = column_width;
        self
    }

    pub fn column_width(&self) -> f32 {
        self.column_width
    }

    fn column_left(&self, day_index: usize) -> f32 {
        self.gutter_width + day_index as f32 * self.column_width
    }

    /// Rectangle for a timed event. Without a lane layout the event spans the
    /// whole column.
    pub fn position_timed(
        &self,
        event: &CalendarEvent,
        day_index: usize,
        start_hour: u32,
        lane: Option<&EventLayout>,
    ) -> ScreenRect {
        let top = self.all_day_row_height + self.grid.time_to_y(&event.start, start_hour);
        let height = self
            .grid
            .duration_to_height(event.duration_minutes() as f64)
            .max(self.min_event_height);
        let (offset, width) = match lane {
            Some(layout) => (layout.x, layout.width),
            None => (0.0, self.column_width),
        };

        ScreenRect::new(self.column_left(day_index) + offset, top, width, height)
    }

    /// Rectangle for the `stack_index`-th all-day event of a column.
    pub fn position_all_day(&self, stack_index: usize, day_index: usize) -> ScreenRect {
        let top = -self.all_day_row_height
            + stack_index as f32 * (self.all_day_event_height + self.all_day_vertical_gap)
            + self.all_day_padding;

        ScreenRect::new(
            self.column_left(day_index),
            top,
            self.column_width,
            self.all_day_event_height,
        )
    }

    pub fn position_layout(
        &self,
        event: &CalendarEvent,
        layout: &EventLayout,
        day_index: usize,
        start_hour: u32,
    ) -> ScreenRect {
        match layout.stack_index {
            Some(stack_index) if event.all_day => self.position_all_day(stack_index, day_index),
            _ => self.position_timed(event, day_index, start_hour, Some(layout)),
        }
    }

    /// Place every event of one column that has a layout, ordered for
    /// painting (`z_index`, then top, then id).
    pub fn position_column(
        &self,
        events: &[CalendarEvent],
        layouts: &LayoutMap,
        day_index: usize,
        start_hour: u32,
    ) -> Vec<PositionedEvent> {
        let mut positioned: Vec<PositionedEvent> = events
            .iter()
            .filter_map(|event| {
                let layout = layouts.get(&event.id)?;
                Some(PositionedEvent {
                    id: event.id.clone(),
                    rect: self.position_layout(event, layout, day_index, start_hour),
                    z_index: layout.z_index,
                    all_day: event.all_day,
                })
            })
            .collect();

        positioned.sort_by(|a, b| {
            a.z_index
                .cmp(&b.z_index)
                .then_with(|| a.rect.top.total_cmp(&b.rect.top))
                .then_with(|| a.id.cmp(&b.id))
        });
        positioned
    }

    /// Day column under overlay x, if any.
    pub fn day_index_at(&self, x: f32, day_count: usize) -> Option<usize> {
        if self.column_width <= 0.0 || x < self.gutter_width {
            return None;
        }
        let index = ((x - self.gutter_width) / self.column_width).floor() as usize;
        (index < day_count).then_some(index)
    }

    /// Convert overlay y into timed-grid y.
    pub fn grid_y(&self, y: f32) -> f32 {
        y - self.all_day_row_height
    }

    /// Overlay y of the current-time indicator line.
    pub fn current_time_top(&self, now: NaiveDateTime, start_hour: u32) -> f32 {
        let minutes = now.minute() as f32 + now.second() as f32 / 60.0;
        self.all_day_row_height
            + (now.hour() as f32 - start_hour as f32) * self.grid.hour_height
            + minutes * self.grid.hour_height / 60.0
    }
}
