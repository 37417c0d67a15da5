use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A half-open wall-clock interval `[start, end)`.
///
/// `end > start` is expected but not enforced; layout code treats malformed
/// intervals as-is and leaves validation to the event-creation flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeInterval {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Strict overlap: intervals that only touch at a boundary do not overlap.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Whether `instant` falls inside `[start, end)`.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant < self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn duration_minutes(&self) -> i64 {
        self.duration().num_minutes()
    }

    /// True when the interval has a positive length.
    pub fn is_well_formed(&self) -> bool {
        self.end > self.start
    }
}
