// Date utility functions
// Day, week and month boundaries on wall-clock time

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime};

pub fn is_same_day(date1: NaiveDateTime, date2: NaiveDateTime) -> bool {
    date1.date() == date2.date()
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Midnight at the end of `date`, i.e. the start of the following day.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    start_of_day(date.succ_opt().unwrap_or(NaiveDate::MAX))
}

/// Monday of the week containing `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday() as u64;
    date.checked_sub_days(Days::new(offset)).unwrap_or(NaiveDate::MIN)
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.checked_sub_days(Days::new(date.day0() as u64))
        .unwrap_or(NaiveDate::MIN)
}

pub fn start_of_next_month(date: NaiveDate) -> NaiveDate {
    start_of_month(date)
        .checked_add_months(Months::new(1))
        .unwrap_or(NaiveDate::MAX)
}

/// Every date in `[start, end)`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|day| *day < end).collect()
}
