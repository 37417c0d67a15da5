// Event module
// Calendar event record consumed by the layout engine

mod interval;

pub use interval::TimeInterval;

use chrono::{DateTime, NaiveDateTime};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation and parsing failures for events coming from creation flows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("Event title cannot be empty")]
    EmptyTitle,

    #[error("Event {0} is required")]
    MissingField(&'static str),

    #[error("Event end time ({end}) must be after start time ({start})")]
    InvalidTimeRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("Color must be in hex format (#RRGGBB or #RGB), got {0:?}")]
    InvalidColor(String),

    #[error("Invalid ISO-8601 timestamp {value:?}: {message}")]
    InvalidTimestamp { value: String, message: String },
}

/// A concrete event occurrence as the layout engine sees it.
///
/// Times are wall-clock values in the display time zone. The engine only
/// reads events; it never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default)]
    pub all_day: bool,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub priority: i32,
}

impl CalendarEvent {
    /// Create an event record without validating it.
    ///
    /// Use [`CalendarEvent::builder`] or [`CalendarEvent::validate`] in
    /// creation flows that must reject malformed input.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            start,
            end,
            all_day: false,
            color: None,
            priority: 0,
        }
    }

    /// Create a builder for constructing validated events
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Build an event from ISO-8601 / RFC 3339 timestamps, converting them to
    /// wall-clock time in `display_tz`.
    ///
    /// # Examples
    /// ```
    /// use calendar_layout::models::event::CalendarEvent;
    ///
    /// let event = CalendarEvent::from_rfc3339(
    ///     "evt-1",
    ///     "Standup",
    ///     "2025-03-10T09:00:00Z",
    ///     "2025-03-10T09:15:00Z",
    ///     chrono_tz::Europe::Berlin,
    /// )
    /// .unwrap();
    /// assert_eq!(event.start.format("%H:%M").to_string(), "10:00");
    /// ```
    pub fn from_rfc3339(
        id: impl Into<String>,
        title: impl Into<String>,
        start: &str,
        end: &str,
        display_tz: Tz,
    ) -> Result<Self, EventError> {
        let start = parse_timestamp(start, display_tz)?;
        let end = parse_timestamp(end, display_tz)?;
        Ok(Self::new(id, title, start, end))
    }

    pub fn interval(&self) -> TimeInterval {
        TimeInterval::new(self.start, self.end)
    }

    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }

    pub fn duration_minutes(&self) -> i64 {
        self.duration().num_minutes()
    }

    /// Validate the event the way an editing form would before saving it.
    pub fn validate(&self) -> Result<(), EventError> {
        if self.title.trim().is_empty() {
            return Err(EventError::EmptyTitle);
        }

        if self.end <= self.start {
            return Err(EventError::InvalidTimeRange {
                start: self.start,
                end: self.end,
            });
        }

        if let Some(ref color) = self.color {
            if !is_hex_color(color) {
                return Err(EventError::InvalidColor(color.clone()));
            }
        }

        Ok(())
    }
}

fn is_hex_color(color: &str) -> bool {
    let Some(digits) = color.strip_prefix('#') else {
        return false;
    };
    (digits.len() == 6 || digits.len() == 3) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

fn parse_timestamp(value: &str, display_tz: Tz) -> Result<NaiveDateTime, EventError> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&display_tz).naive_local())
        .map_err(|err| EventError::InvalidTimestamp {
            value: value.to_string(),
            message: err.to_string(),
        })
}

/// Builder for creating events with optional fields
pub struct EventBuilder {
    id: Option<String>,
    title: Option<String>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    all_day: bool,
    color: Option<String>,
    priority: i32,
}

impl EventBuilder {
    /// Create a new event builder
    pub fn new() -> Self {
        Self {
            id: None,
            title: None,
            start: None,
            end: None,
            all_day: false,
            color: None,
            priority: 0,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the event title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the start time
    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the end time
    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Set as all-day event
    pub fn all_day(mut self, all_day: bool) -> Self {
        self.all_day = all_day;
        self
    }

    /// Set the event color (hex format)
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Build and validate the event
    pub fn build(self) -> Result<CalendarEvent, EventError> {
        let id = self.id.ok_or(EventError::MissingField("id"))?;
        let title = self.title.ok_or(EventError::MissingField("title"))?;
        let start = self.start.ok_or(EventError::MissingField("start time"))?;
        let end = self.end.ok_or(EventError::MissingField("end time"))?;

        let event = CalendarEvent {
            id,
            title,
            start,
            end,
            all_day: self.all_day,
            color: self.color,
            priority: self.priority,
        };

        event.validate()?;
        Ok(event)
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}
