// Overlap grouping and lane packing for one day's timed events

use chrono::NaiveDateTime;
use std::cmp::Ordering;

use crate::models::event::CalendarEvent;

/// Days with more timed events than this are grouped with a sweep-line pass.
pub const SWEEP_THRESHOLD: usize = 64;

/// Lane assignment for one overlap group, parallel to the group's members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneAssignment {
    pub lanes: Vec<usize>,
    pub lane_count: usize,
}

/// Order by start ascending, then shorter duration first.
pub fn layout_order(a: &CalendarEvent, b: &CalendarEvent) -> Ordering {
    a.start
        .cmp(&b.start)
        .then_with(|| a.duration().cmp(&b.duration()))
}

/// Sort a day's events into layout order.
pub fn sorted_for_layout<'a>(events: &[&'a CalendarEvent]) -> Vec<&'a CalendarEvent> {
    let mut sorted = events.to_vec();
    sorted.sort_by(|a, b| layout_order(a, b));
    sorted
}

/// Group start-sorted events into overlap groups.
///
/// Each event joins the first existing group holding a member it overlaps,
/// or opens a new group. Large days of well-formed events take the sweep-line
/// path, which yields the same groups for start-sorted input.
pub fn group_overlaps<'a>(sorted: &[&'a CalendarEvent]) -> Vec<Vec<&'a CalendarEvent>> {
    if sorted.len() > SWEEP_THRESHOLD && sorted.iter().all(|e| e.end > e.start) {
        group_by_sweep(sorted)
    } else {
        group_by_scan(sorted)
    }
}

/// Incremental connectivity scan, O(n²) in the worst case.
pub fn group_by_scan<'a>(sorted: &[&'a CalendarEvent]) -> Vec<Vec<&'a CalendarEvent>> {
    let mut groups: Vec<Vec<&'a CalendarEvent>> = Vec::new();

    for &event in sorted {
        let interval = event.interval();
        let existing = groups.iter_mut().find(|group| {
            group
                .iter()
                .any(|member| interval.overlaps(&member.interval()))
        });

        match existing {
            Some(group) => group.push(event),
            None => groups.push(vec![event]),
        }
    }

    groups
}

/// Sweep-line grouping: a new group starts once an event begins at or after
/// the latest end seen in the current group.
pub fn group_by_sweep<'a>(sorted: &[&'a CalendarEvent]) -> Vec<Vec<&'a CalendarEvent>> {
    let mut groups: Vec<Vec<&'a CalendarEvent>> = Vec::new();
    let mut group_end: Option<NaiveDateTime> = None;

    for &event in sorted {
        match group_end {
            Some(end) if event.start < end => {
                if let Some(group) = groups.last_mut() {
                    group.push(event);
                }
                group_end = Some(end.max(event.end));
            }
            _ => {
                groups.push(vec![event]);
                group_end = Some(event.end);
            }
        }
    }

    groups
}

/// Greedy interval partitioning: each event takes the first lane whose last
/// event ends at or before its start, or opens a new lane.
///
/// The lane count equals the largest number of events active at one instant.
pub fn pack_lanes(group: &[&CalendarEvent]) -> LaneAssignment {
    let mut order: Vec<usize> = (0..group.len()).collect();
    order.sort_by_key(|&i| group[i].start);

    let mut lane_ends: Vec<NaiveDateTime> = Vec::new();
    let mut lanes = vec![0; group.len()];

    for i in order {
        let event = group[i];
        match lane_ends.iter().position(|end| *end <= event.start) {
            Some(lane) => {
                lane_ends[lane] = event.end;
                lanes[i] = lane;
            }
            None => {
                lanes[i] = lane_ends.len();
                lane_ends.push(event.end);
            }
        }
    }

    LaneAssignment {
        lanes,
        lane_count: lane_ends.len(),
    }
}
