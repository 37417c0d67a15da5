// Advisory conflict checks for a drag selection

use crate::models::event::{CalendarEvent, TimeInterval};
use crate::models::selection::SelectionValidation;

/// Timed events overlapping `interval`. All-day events never conflict.
pub fn find_conflicts<'a>(
    interval: &TimeInterval,
    existing: &'a [CalendarEvent],
) -> Vec<&'a CalendarEvent> {
    existing
        .iter()
        .filter(|event| !event.all_day && interval.overlaps(&event.interval()))
        .collect()
}

/// Non-blocking warning text for a set of conflicts.
pub fn conflict_warning(conflicts: &[&CalendarEvent]) -> Option<String> {
    match conflicts {
        [] => None,
        [single] => Some(format!("Overlaps with \"{}\"", single.title)),
        many => Some(format!("Overlaps with {} other events", many.len())),
    }
}

pub fn validate_interval(
    interval: &TimeInterval,
    existing: &[CalendarEvent],
) -> SelectionValidation {
    let conflicts = find_conflicts(interval, existing);
    if conflicts.is_empty() {
        return SelectionValidation::valid();
    }

    SelectionValidation {
        is_valid: false,
        warning: conflict_warning(&conflicts),
        conflicts: conflicts.iter().map(|event| event.id.clone()).collect(),
    }
}
