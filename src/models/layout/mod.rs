// Layout models
// Render-pass scoped projections produced by the layout services

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Position of one event inside its day column, relative to the column's
/// top-left corner of the timed grid (or of the all-day row).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventLayout {
    /// Id of the laid-out event; also the key in a [`LayoutMap`].
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub lane_index: usize,
    pub lane_count: usize,
    pub z_index: i32,
    /// Row in the all-day stack; `None` for timed events.
    pub stack_index: Option<usize>,
}

impl EventLayout {
    pub fn is_all_day(&self) -> bool {
        self.stack_index.is_some()
    }
}

/// Layouts for one day column keyed by event id.
pub type LayoutMap = HashMap<String, EventLayout>;

/// Absolute on-screen rectangle inside the calendar overlay container.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Point-in-rect test, inclusive of the top-left edge only.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x < self.right() && y >= self.top && y < self.bottom()
    }
}

/// An event placed on screen, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedEvent {
    pub id: String,
    pub rect: ScreenRect,
    pub z_index: i32,
    pub all_day: bool,
}
