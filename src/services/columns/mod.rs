//! Splits a range of events into day columns and lays out each column.
//!
//! Timed events belong to the day they start on. All-day events appear in
//! the all-day row of every day their interval touches.

use chrono::NaiveDate;

use crate::models::event::{CalendarEvent, TimeInterval};
use crate::models::layout::LayoutMap;
use crate::services::grid::GridMath;
use crate::services::overlap::OverlapCalculator;
use crate::utils::date::{days_between, end_of_day, start_of_day};

/// The events of one day, borrowed from the caller's list.
#[derive(Debug, Clone)]
pub struct DayColumn<'a> {
    pub date: NaiveDate,
    pub day_index: usize,
    pub events: Vec<&'a CalendarEvent>,
}

/// Layouts computed for one day column.
#[derive(Debug, Clone)]
pub struct ColumnLayout {
    pub date: NaiveDate,
    pub day_index: usize,
    pub layouts: LayoutMap,
}

fn belongs_to_day(event: &CalendarEvent, date: NaiveDate) -> bool {
    if !event.all_day || event.end <= event.start {
        return event.start.date() == date;
    }
    TimeInterval::new(start_of_day(date), end_of_day(date)).overlaps(&event.interval())
}

/// One column per day of the half-open `range`, in date order.
pub fn partition_by_day<'a>(
    events: &'a [CalendarEvent],
    range: &TimeInterval,
) -> Vec<DayColumn<'a>> {
    let first = range.start.date();
    let last = if range.end.time() == chrono::NaiveTime::MIN {
        range.end.date()
    } else {
        range.end.date().succ_opt().unwrap_or(NaiveDate::MAX)
    };

    days_between(first, last)
        .into_iter()
        .enumerate()
        .map(|(day_index, date)| DayColumn {
            date,
            day_index,
            events: events
                .iter()
                .filter(|event| belongs_to_day(event, date))
                .collect(),
        })
        .collect()
}

/// Runs the per-day overlap layout over a range of days.
#[derive(Debug, Clone, Default)]
pub struct DayColumnLayout {
    calculator: OverlapCalculator,
}

impl DayColumnLayout {
    pub fn new(calculator: OverlapCalculator) -> Self {
        Self { calculator }
    }

    pub fn layout_range(
        &self,
        events: &[CalendarEvent],
        range: &TimeInterval,
        column_width: f32,
        start_hour: u32,
    ) -> Vec<ColumnLayout> {
        partition_by_day(events, range)
            .into_iter()
            .map(|column| {
                let day_events: Vec<CalendarEvent> =
                    column.events.into_iter().cloned().collect();
                ColumnLayout {
                    date: column.date,
                    day_index: column.day_index,
                    layouts: self.calculator.calculate_event_layouts(
                        &day_events,
                        column_width,
                        start_hour,
                    ),
                }
            })
            .collect()
    }

    /// Lay out the Monday-start week containing `anchor`.
    pub fn layout_week(
        &self,
        events: &[CalendarEvent],
        anchor: NaiveDate,
        column_width: f32,
        start_hour: u32,
    ) -> Vec<ColumnLayout> {
        self.layout_range(events, &GridMath::week_bounds(anchor), column_width, start_hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn timed(id: &str, d: u32, start: u32, end: u32) -> CalendarEvent {
        CalendarEvent::new(
            id,
            id,
            date(d).and_hms_opt(start, 0, 0).unwrap(),
            date(d).and_hms_opt(end, 0, 0).unwrap(),
        )
    }

    fn all_day(id: &str, first: u32, last_exclusive: u32) -> CalendarEvent {
        let mut event = CalendarEvent::new(
            id,
            id,
            start_of_day(date(first)),
            start_of_day(date(last_exclusive)),
        );
        event.all_day = true;
        event
    }

    #[test]
    fn test_partition_week() {
        let events = vec![
            timed("mon", 10, 9, 10),
            timed("wed", 12, 14, 15),
            timed("next-week", 17, 9, 10),
            all_day("trip", 11, 14),
        ];
        let columns = partition_by_day(&events, &GridMath::week_bounds(date(12)));
        assert_eq!(columns.len(), 7);
        assert_eq!(columns[0].date, date(10));

        let ids = |i: usize| -> Vec<&str> {
            columns[i].events.iter().map(|e| e.id.as_str()).collect()
        };
        assert_eq!(ids(0), vec!["mon"]);
        assert_eq!(ids(1), vec!["trip"]);
        assert_eq!(ids(2), vec!["wed", "trip"]);
        assert_eq!(ids(3), vec!["trip"]);
        assert!(ids(4).is_empty());
        assert!(columns.iter().all(|c| c.events.iter().all(|e| e.id != "next-week")));
    }

    #[test]
    fn test_partial_day_range_includes_last_day() {
        let range = TimeInterval::new(
            date(10).and_hms_opt(0, 0, 0).unwrap(),
            date(11).and_hms_opt(12, 0, 0).unwrap(),
        );
        assert_eq!(partition_by_day(&[], &range).len(), 2);
    }

    #[test]
    fn test_layout_week_runs_per_day() {
        let events = vec![
            timed("a", 12, 9, 11),
            timed("b", 12, 10, 12),
            timed("c", 13, 10, 12),
        ];
        let columns = DayColumnLayout::default().layout_week(&events, date(12), 160.0, 0);
        assert_eq!(columns.len(), 7);
        assert_eq!(columns[2].layouts["a"].lane_count, 2);
        assert_eq!(columns[3].layouts["c"].lane_count, 1);
        assert_eq!(columns[3].layouts["c"].width, 160.0);
        assert!(columns[0].layouts.is_empty());
    }
}
