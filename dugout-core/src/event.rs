//! Calendar event types for the next-event resolver.
//!
//! Events come from a public ICS feed and only exist for the duration of
//! one resolution pass. Both representations the feed can carry are kept:
//! all-day events (a bare calendar date) and timed events (a precise
//! instant, possibly zoned).

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// When an event starts or ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventTime {
    /// All-day: a calendar date with no time component.
    Date(NaiveDate),
    /// Timed, pinned to UTC (`DTSTART:...Z`).
    DateTimeUtc(DateTime<Utc>),
    /// Timed, floating (no zone information on the wire).
    DateTimeFloating(NaiveDateTime),
    /// Timed with an IANA zone (`DTSTART;TZID=...`).
    DateTimeZoned { datetime: NaiveDateTime, tzid: String },
}

impl EventTime {
    /// Whether this is a date-only (all-day) value.
    pub fn is_all_day(&self) -> bool {
        matches!(self, EventTime::Date(_))
    }

    /// Resolve to a concrete local instant.
    ///
    /// All-day values become local midnight of that calendar date,
    /// independent of the current offset. Floating values are read as
    /// local wall-clock time. Zoned values with an unknown TZID fall
    /// back to the floating interpretation.
    pub fn to_local(&self) -> Option<DateTime<Local>> {
        match self {
            EventTime::Date(d) => d
                .and_hms_opt(0, 0, 0)
                .and_then(|dt| Local.from_local_datetime(&dt).earliest()),
            EventTime::DateTimeUtc(dt) => Some(dt.with_timezone(&Local)),
            EventTime::DateTimeFloating(dt) => Local.from_local_datetime(dt).earliest(),
            EventTime::DateTimeZoned { datetime, tzid } => match tzid.parse::<Tz>() {
                Ok(tz) => tz
                    .from_local_datetime(datetime)
                    .earliest()
                    .map(|dt| dt.with_timezone(&Local)),
                Err(_) => Local.from_local_datetime(datetime).earliest(),
            },
        }
    }

    /// The local calendar day of this value, discarding time-of-day.
    pub fn local_date(&self) -> Option<NaiveDate> {
        match self {
            EventTime::Date(d) => Some(*d),
            other => other.to_local().map(|dt| dt.date_naive()),
        }
    }
}

/// A calendar event parsed from the feed, before filtering.
///
/// Invariant: `start` is always present. Records without a resolvable
/// DTSTART never become a `CalendarEvent`; they are skipped during parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub summary: Option<String>,
    pub location: Option<String>,
    pub start: EventTime,
    /// Missing or unparsable DTEND falls back to `start` at parse time.
    pub end: EventTime,
}

impl CalendarEvent {
    pub fn is_all_day(&self) -> bool {
        self.start.is_all_day()
    }
}

/// Placeholder summary for events without a SUMMARY property.
pub const NO_TITLE: &str = "No Title";

/// Placeholder location for events without a LOCATION property.
pub const NO_LOCATION: &str = "No Location";

/// The single selected upcoming event, normalized for display.
///
/// Recomputed from scratch on every resolution pass; nothing persists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextEvent {
    pub summary: String,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    pub location: String,
    pub all_day: bool,
}

impl NextEvent {
    /// Normalize a surviving candidate into a display-ready event.
    ///
    /// Returns `None` only if the start cannot be resolved to an instant,
    /// which the parser already guarantees against.
    pub fn from_event(event: &CalendarEvent) -> Option<Self> {
        let start = event.start.to_local()?;
        let end = event.end.to_local().unwrap_or(start);

        Some(NextEvent {
            summary: event
                .summary
                .clone()
                .unwrap_or_else(|| NO_TITLE.to_string()),
            start,
            end,
            location: event
                .location
                .clone()
                .unwrap_or_else(|| NO_LOCATION.to_string()),
            all_day: event.is_all_day(),
        })
    }
}
