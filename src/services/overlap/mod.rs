//! Side-by-side layout of overlapping events within one day column.
//!
//! Timed events are grouped into overlap groups (connected components of the
//! strict-overlap relation) and each group is packed into the fewest lanes.
//! All-day events skip packing and stack in the all-day row.
//!
//! Output is relative to the day column; see `services::positioning` for
//! absolute placement.

mod grouping;

pub use grouping::{
    group_by_scan, group_by_sweep, group_overlaps, pack_lanes, sorted_for_layout,
    LaneAssignment, SWEEP_THRESHOLD,
};

use crate::models::event::CalendarEvent;
use crate::models::layout::{EventLayout, LayoutMap};
use crate::models::settings::GridSettings;
use crate::services::grid::GridMath;

pub const LANE_GAP: f32 = 2.0;
pub const MIN_EVENT_HEIGHT: f32 = 20.0;
pub const ALL_DAY_EVENT_HEIGHT: f32 = 32.0;
pub const ALL_DAY_VERTICAL_GAP: f32 = 4.0;

/// Strict overlap; events that only touch at a boundary do not overlap.
pub fn events_overlap(a: &CalendarEvent, b: &CalendarEvent) -> bool {
    a.interval().overlaps(&b.interval())
}

#[derive(Debug, Clone)]
pub struct OverlapCalculator {
    grid: GridMath,
    lane_gap: f32,
    min_event_height: f32,
    all_day_event_height: f32,
    all_day_vertical_gap: f32,
    debug_layout: bool,
}

impl Default for OverlapCalculator {
    fn default() -> Self {
        Self {
            grid: GridMath::default(),
            lane_gap: LANE_GAP,
            min_event_height: MIN_EVENT_HEIGHT,
            all_day_event_height: ALL_DAY_EVENT_HEIGHT,
            all_day_vertical_gap: ALL_DAY_VERTICAL_GAP,
            debug_layout: false,
        }
    }
}

impl OverlapCalculator {
    pub fn new(grid: GridMath) -> Self {
        Self {
            grid,
            ..Self::default()
        }
    }

    pub fn from_settings(settings: &GridSettings) -> Self {
        Self {
            grid: GridMath::from_settings(settings),
            lane_gap: settings.lane_gap,
            min_event_height: settings.min_event_height,
            all_day_event_height: settings.all_day_event_height,
            all_day_vertical_gap: settings.all_day_vertical_gap,
            debug_layout: settings.debug_layout,
        }
    }

    pub fn grid(&self) -> GridMath {
        self.grid
    }

    /// Lay out the events of a single day.
    ///
    /// Every event gets an entry; events that overlap in time never share a
    /// horizontal slice, and events without overlaps keep the full width.
    pub fn calculate_event_layouts(
        &self,
        events: &[CalendarEvent],
        column_width: f32,
        start_hour: u32,
    ) -> LayoutMap {
        let mut layouts = LayoutMap::with_capacity(events.len());
        if events.is_empty() {
            return layouts;
        }

        let (all_day, timed): (Vec<&CalendarEvent>, Vec<&CalendarEvent>) =
            events.iter().partition(|event| event.all_day);

        for event in timed.iter().filter(|event| event.end <= event.start) {
            log::warn!(
                "Event {} has a non-positive interval ({} .. {}); laying it out unvalidated",
                event.id,
                event.start,
                event.end
            );
        }

        let sorted = sorted_for_layout(&timed);
        let groups = group_overlaps(&sorted);

        for group in &groups {
            if self.debug_layout {
                log::debug!(
                    "Overlap group [{}]",
                    group
                        .iter()
                        .map(|event| event.id.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }
            self.layout_group(group, column_width, start_hour, &mut layouts);
        }

        self.layout_all_day(&all_day, column_width, &mut layouts);

        log::debug!(
            "Laid out {} events ({} all-day) in {} overlap groups",
            events.len(),
            all_day.len(),
            groups.len()
        );

        layouts
    }

    fn layout_group(
        &self,
        group: &[&CalendarEvent],
        column_width: f32,
        start_hour: u32,
        layouts: &mut LayoutMap,
    ) {
        if let [event] = group {
            layouts.insert(
                event.id.clone(),
                self.timed_layout(event, 0.0, column_width, 0, 1, start_hour),
            );
            return;
        }

        let packed = pack_lanes(group);
        let slot_width = column_width / packed.lane_count as f32;
        let lane_width = (slot_width - self.lane_gap).max(0.0).round();

        log::trace!(
            "Packed {} overlapping events into {} lanes",
            group.len(),
            packed.lane_count
        );

        for (event, &lane) in group.iter().zip(&packed.lanes) {
            let x = (lane as f32 * slot_width).round();
            layouts.insert(
                event.id.clone(),
                self.timed_layout(event, x, lane_width, lane, packed.lane_count, start_hour),
            );
        }
    }

    fn timed_layout(
        &self,
        event: &CalendarEvent,
        x: f32,
        width: f32,
        lane_index: usize,
        lane_count: usize,
        start_hour: u32,
    ) -> EventLayout {
        let height = self
            .grid
            .duration_to_height(event.duration_minutes() as f64)
            .max(self.min_event_height);

        EventLayout {
            id: event.id.clone(),
            x,
            y: self.grid.time_to_y(&event.start, start_hour),
            width,
            height,
            lane_index,
            lane_count,
            z_index: 1 + lane_index as i32,
            stack_index: None,
        }
    }

    /// Stack all-day events in `(start, id)` order so the row is stable
    /// regardless of input order.
    fn layout_all_day(
        &self,
        all_day: &[&CalendarEvent],
        column_width: f32,
        layouts: &mut LayoutMap,
    ) {
        let mut ordered = all_day.to_vec();
        ordered.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.id.cmp(&b.id)));

        let row_step = self.all_day_event_height + self.all_day_vertical_gap;
        for (stack_index, event) in ordered.into_iter().enumerate() {
            layouts.insert(
                event.id.clone(),
                EventLayout {
                    id: event.id.clone(),
                    x: 0.0,
                    y: stack_index as f32 * row_step,
                    width: column_width,
                    height: self.all_day_event_height,
                    lane_index: 0,
                    lane_count: 1,
                    z_index: 0,
                    stack_index: Some(stack_index),
                },
            );
        }
    }

    /// Events overlapping `target`, excluding `target` itself.
    pub fn get_overlapping_events<'a>(
        &self,
        target: &CalendarEvent,
        all_events: &'a [CalendarEvent],
    ) -> Vec<&'a CalendarEvent> {
        all_events
            .iter()
            .filter(|event| event.id != target.id && events_overlap(target, event))
            .collect()
    }

    /// Largest lane count over all overlap groups of the day's timed events.
    pub fn max_lane_count(&self, events: &[CalendarEvent]) -> usize {
        let timed: Vec<&CalendarEvent> = events.iter().filter(|e| !e.all_day).collect();
        let sorted = sorted_for_layout(&timed);
        group_overlaps(&sorted)
            .iter()
            .map(|group| pack_lanes(group).lane_count)
            .max()
            .unwrap_or(0)
    }

    /// Column width that gives every lane at least `min_width` pixels.
    pub fn calculate_optimal_day_width(&self, events: &[CalendarEvent], min_width: f32) -> f32 {
        let lanes = self.max_lane_count(events);
        if lanes <= 1 {
            min_width
        } else {
            lanes as f32 * (min_width + self.lane_gap)
        }
    }
}
