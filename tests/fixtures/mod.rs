// Test fixtures - reusable test data
// Provides consistent events and dates across the integration tests

#![allow(dead_code)]

use calendar_layout::CalendarEvent;
use chrono::{NaiveDate, NaiveDateTime};

/// Route `log` output to the test harness when `RUST_LOG` is set.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Wednesday, Jan 15 2025
    pub fn wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    /// Monday of the week containing [`wednesday`]
    pub fn week_monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 13).unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    pub fn at(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
        date.and_hms_opt(hour, minute, 0).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// Timed event on [`dates::wednesday`]
    pub fn timed(id: &str, start: (u32, u32), end: (u32, u32)) -> CalendarEvent {
        let day = dates::wednesday();
        CalendarEvent::new(
            id,
            format!("Event {id}"),
            dates::at(day, start.0, start.1),
            dates::at(day, end.0, end.1),
        )
    }

    /// Timed event on an arbitrary day
    pub fn timed_on(id: &str, day: NaiveDate, start: (u32, u32), end: (u32, u32)) -> CalendarEvent {
        CalendarEvent::new(
            id,
            format!("Event {id}"),
            dates::at(day, start.0, start.1),
            dates::at(day, end.0, end.1),
        )
    }

    /// All-day event covering `days` days from `first`
    pub fn all_day(id: &str, first: NaiveDate, days: i64) -> CalendarEvent {
        let start = dates::at(first, 0, 0);
        let mut event = CalendarEvent::new(
            id,
            format!("All day {id}"),
            start,
            start + chrono::Duration::days(days),
        );
        event.all_day = true;
        event
    }

    /// A/B/C chain: A overlaps B, B overlaps C, A and C never overlap
    pub fn chain() -> Vec<CalendarEvent> {
        vec![
            timed("A", (9, 0), (10, 0)),
            timed("B", (9, 30), (10, 30)),
            timed("C", (10, 0), (11, 0)),
        ]
    }

    /// A busy Wednesday with two groups and one standalone event
    pub fn busy_day() -> Vec<CalendarEvent> {
        vec![
            timed("standup", (9, 0), (9, 15)),
            timed("planning", (9, 0), (10, 30)),
            timed("review", (10, 0), (11, 0)),
            timed("lunch", (12, 0), (13, 0)),
            timed("focus", (14, 0), (17, 0)),
            timed("call", (14, 30), (15, 0)),
            timed("sync", (14, 45), (15, 30)),
            timed("wrap", (16, 0), (16, 30)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_fixture_dates_are_valid() {
        assert_eq!(dates::wednesday().weekday(), chrono::Weekday::Wed);
        assert_eq!(dates::week_monday().weekday(), chrono::Weekday::Mon);
        assert_eq!(dates::leap_day_2024().day(), 29);
    }

    #[test]
    fn test_fixture_events_are_valid() {
        assert!(events::busy_day().iter().all(|e| e.validate().is_ok()));
        assert!(events::all_day("x", dates::wednesday(), 2).all_day);
    }
}
