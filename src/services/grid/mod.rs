//! Time ↔ pixel coordinate system for the hourly grid.
//!
//! All functions are pure. Times are read as wall-clock hour and minute;
//! seconds are ignored when mapping to pixels.

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};

use crate::models::event::TimeInterval;
use crate::models::settings::GridSettings;
use crate::utils::date::{
    end_of_day, start_of_day, start_of_month, start_of_next_month, start_of_week,
};

pub const DEFAULT_HOUR_HEIGHT: f32 = 60.0;
pub const DEFAULT_SNAP_MINUTES: u32 = 30;
const MINUTES_PER_DAY: i64 = 24 * 60;

/// Linear map between times of day and vertical grid offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMath {
    pub hour_height: f32,
    pub snap_minutes: u32,
}

impl Default for GridMath {
    fn default() -> Self {
        Self::new(DEFAULT_HOUR_HEIGHT)
    }
}

impl GridMath {
    pub fn new(hour_height: f32) -> Self {
        Self {
            hour_height,
            snap_minutes: DEFAULT_SNAP_MINUTES,
        }
    }

    pub fn from_settings(settings: &GridSettings) -> Self {
        Self {
            hour_height: settings.hour_height,
            snap_minutes: settings.snap_minutes,
        }
    }

    /// Same scale, different snap interval.
    pub fn with_snap(self, snap_minutes: u32) -> Self {
        Self {
            snap_minutes,
            ..self
        }
    }

    /// Vertical offset of `time` in a grid that begins at `start_hour`.
    pub fn time_to_y<T: Timelike>(&self, time: &T, start_hour: u32) -> f32 {
        let hours = time.hour() as f32 - start_hour as f32;
        hours * self.hour_height + time.minute() as f32 * self.hour_height / 60.0
    }

    /// Inverse of [`GridMath::time_to_y`], snapped to `snap_minutes` and
    /// clamped onto `base_date`; the latest reachable value is the day's last
    /// snap slot.
    pub fn y_to_time(&self, y: f32, base_date: NaiveDate, start_hour: u32) -> NaiveDateTime {
        let minutes = start_hour as f64 * 60.0 + self.height_to_duration(y);
        let snapped = Self::snap_minutes(minutes, self.snap_minutes)
            .clamp(0, Self::last_slot(self.snap_minutes));
        start_of_day(base_date) + Duration::minutes(snapped)
    }

    /// Minute offset of the last `interval` slot that starts on the same day.
    fn last_slot(interval: u32) -> i64 {
        MINUTES_PER_DAY - (interval.max(1) as i64).min(MINUTES_PER_DAY)
    }

    /// Round half-up to the nearest multiple of `interval`.
    pub fn snap_minutes(minutes: f64, interval: u32) -> i64 {
        if interval == 0 {
            return (minutes + 0.5).floor() as i64;
        }
        let interval = interval as f64;
        ((minutes / interval + 0.5).floor() * interval) as i64
    }

    /// Snap a wall-clock time to `interval` minutes, staying on its own day.
    pub fn snap_time(time: NaiveDateTime, interval: u32) -> NaiveDateTime {
        let since_midnight = (time - start_of_day(time.date())).num_seconds() as f64 / 60.0;
        let snapped =
            Self::snap_minutes(since_midnight, interval).clamp(0, Self::last_slot(interval));
        start_of_day(time.date()) + Duration::minutes(snapped)
    }

    pub fn duration_to_height(&self, minutes: f64) -> f32 {
        (minutes / 60.0) as f32 * self.hour_height
    }

    pub fn height_to_duration(&self, pixels: f32) -> f64 {
        if self.hour_height <= 0.0 {
            return 0.0;
        }
        pixels as f64 / self.hour_height as f64 * 60.0
    }

    /// Total pixel height of the grid between two hours.
    pub fn grid_height(&self, start_hour: u32, end_hour: u32) -> f32 {
        end_hour.saturating_sub(start_hour) as f32 * self.hour_height
    }

    /// Monday-start week containing `date`, as `[Monday 00:00, next Monday 00:00)`.
    pub fn week_bounds(date: NaiveDate) -> TimeInterval {
        let monday = start_of_week(date);
        let next_monday = monday + Duration::days(7);
        TimeInterval::new(start_of_day(monday), start_of_day(next_monday))
    }

    /// Calendar month containing `date`, as `[1st 00:00, 1st of next month 00:00)`.
    pub fn month_bounds(date: NaiveDate) -> TimeInterval {
        TimeInterval::new(
            start_of_day(start_of_month(date)),
            start_of_day(start_of_next_month(date)),
        )
    }

    /// The month widened to whole Monday-start weeks, as a month view shows it.
    pub fn month_grid_bounds(date: NaiveDate) -> TimeInterval {
        let first = start_of_month(date);
        let last = start_of_next_month(date) - Duration::days(1);
        let grid_start = start_of_week(first);
        let grid_end = start_of_week(last) + Duration::days(7);
        TimeInterval::new(start_of_day(grid_start), start_of_day(grid_end))
    }

    /// Clip `time` into `[min_hour:00, max_hour:00]` of its own day.
    pub fn clamp_time(time: NaiveDateTime, min_hour: u32, max_hour: u32) -> NaiveDateTime {
        let day = start_of_day(time.date());
        let lower = day + Duration::hours(min_hour.min(24) as i64);
        let upper = if max_hour >= 24 {
            end_of_day(time.date())
        } else {
            day + Duration::hours(max_hour as i64)
        };
        if upper < lower {
            return lower;
        }
        time.clamp(lower, upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use test_case::test_case;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 12).unwrap()
    }

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        date().and_hms_opt(hour, minute, 0).unwrap()
    }

    #[test_case(0.0, 30 => 0 ; "zero")]
    #[test_case(14.0, 30 => 0 ; "just below half rounds down")]
    #[test_case(15.0, 30 => 30 ; "half rounds up")]
    #[test_case(44.9, 30 => 30 ; "below next half")]
    #[test_case(45.0, 30 => 60 ; "next half rounds up")]
    #[test_case(7.5, 15 => 15 ; "quarter hour half up")]
    #[test_case(7.4, 15 => 0 ; "quarter hour down")]
    #[test_case(37.0, 0 => 37 ; "zero interval keeps minutes")]
    fn test_snap_minutes(minutes: f64, interval: u32) -> i64 {
        GridMath::snap_minutes(minutes, interval)
    }

    #[test]
    fn test_time_to_y_linear() {
        let grid = GridMath::new(60.0);
        assert_eq!(grid.time_to_y(&at(0, 0), 0), 0.0);
        assert_eq!(grid.time_to_y(&at(9, 30), 0), 570.0);
        assert_eq!(grid.time_to_y(&at(9, 30), 6), 210.0);
        assert_eq!(grid.time_to_y(&NaiveTime::from_hms_opt(1, 15, 0).unwrap(), 0), 75.0);

        let tall = GridMath::new(80.0);
        assert_eq!(tall.time_to_y(&at(2, 45), 0), 220.0);
    }

    #[test]
    fn test_time_before_start_hour_is_negative() {
        let grid = GridMath::new(60.0);
        assert_eq!(grid.time_to_y(&at(5, 0), 6), -60.0);
    }

    #[test]
    fn test_y_to_time_snaps() {
        let grid = GridMath::new(60.0);
        assert_eq!(grid.y_to_time(570.0, date(), 0), at(9, 30));
        assert_eq!(grid.y_to_time(580.0, date(), 0), at(9, 30));
        assert_eq!(grid.y_to_time(585.0, date(), 0), at(10, 0));
        assert_eq!(grid.y_to_time(0.0, date(), 8), at(8, 0));

        let fine = grid.with_snap(15);
        assert_eq!(fine.y_to_time(580.0, date(), 0), at(9, 45));
    }

    #[test]
    fn test_y_to_time_stays_on_base_date() {
        let grid = GridMath::new(60.0);
        assert_eq!(grid.y_to_time(-500.0, date(), 0), at(0, 0));
        assert_eq!(grid.y_to_time(10_000.0, date(), 0), at(23, 30));

        // Bottom half of the last slot rounds up to 24:00 unless clamped
        let fine = grid.with_snap(15);
        let bottom = fine.y_to_time(1438.0, date(), 0);
        assert_eq!(bottom, at(23, 45));
        assert_eq!(bottom.date(), date());
        assert_eq!(fine.y_to_time(fine.grid_height(0, 24), date(), 0), at(23, 45));
    }

    #[test]
    fn test_snap_time() {
        assert_eq!(GridMath::snap_time(at(9, 7), 15), at(9, 0));
        assert_eq!(GridMath::snap_time(at(9, 8), 15), at(9, 15));
        assert_eq!(GridMath::snap_time(at(23, 55), 15), at(23, 45));
    }

    #[test]
    fn test_duration_height_inverse() {
        let grid = GridMath::new(48.0);
        assert_eq!(grid.duration_to_height(90.0), 72.0);
        assert_eq!(grid.height_to_duration(72.0), 90.0);
        assert_eq!(grid.grid_height(6, 22), 768.0);
        assert_eq!(GridMath::new(0.0).height_to_duration(10.0), 0.0);
    }

    #[test]
    fn test_week_bounds_monday_start() {
        // Wednesday
        let bounds = GridMath::week_bounds(date());
        assert_eq!(bounds.start, start_of_day(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()));
        assert_eq!(bounds.end, start_of_day(NaiveDate::from_ymd_opt(2025, 3, 17).unwrap()));
        assert_eq!(bounds.duration().num_days(), 7);
    }

    #[test]
    fn test_month_bounds() {
        let bounds = GridMath::month_bounds(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());
        assert_eq!(bounds.start.date(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(bounds.end.date(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_month_grid_bounds_cover_whole_weeks() {
        // March 2025 starts on a Saturday and ends on a Monday
        let bounds = GridMath::month_grid_bounds(date());
        assert_eq!(bounds.start.date(), NaiveDate::from_ymd_opt(2025, 2, 24).unwrap());
        assert_eq!(bounds.end.date(), NaiveDate::from_ymd_opt(2025, 4, 7).unwrap());
        assert_eq!(bounds.duration().num_days() % 7, 0);
    }

    #[test]
    fn test_clamp_time() {
        assert_eq!(GridMath::clamp_time(at(5, 30), 8, 18), at(8, 0));
        assert_eq!(GridMath::clamp_time(at(19, 0), 8, 18), at(18, 0));
        assert_eq!(GridMath::clamp_time(at(12, 15), 8, 18), at(12, 15));
        assert_eq!(GridMath::clamp_time(at(23, 59), 0, 24), at(23, 59));
    }
}
