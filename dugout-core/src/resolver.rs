//! Next-event resolution over a public ICS feed.
//!
//! One resolution pass: fetch the feed, parse it, drop events that have
//! fully elapsed, and pick the earliest survivor. The feed is re-fetched
//! every time; nothing is cached between passes.
//!
//! "Today" is an explicit parameter rather than a clock read so callers
//! (and tests) control the reference day. Expiry is lenient on purpose:
//! both sides of the comparison are truncated to the local calendar day,
//! so an event stays a candidate through the whole of its end day.

use chrono::NaiveDate;

use crate::error::{DugoutError, DugoutResult};
use crate::event::{CalendarEvent, NextEvent};
use crate::ics::{SkippedEvent, parse_feed};

/// Outcome of one resolution pass.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// The earliest event that has not yet fully elapsed, if any.
    pub next: Option<NextEvent>,
    /// Records dropped during parsing, for diagnostics.
    pub skipped: Vec<SkippedEvent>,
}

/// Fetch `feed_url` and resolve the next upcoming event as of `today`.
///
/// Transport failures and non-success responses surface as
/// [`DugoutError::Fetch`]; a malformed document as [`DugoutError::IcsParse`].
/// A feed with no qualifying event is not an error: `next` is `None`.
pub async fn resolve_next_event(
    http: &reqwest::Client,
    feed_url: &str,
    today: NaiveDate,
) -> DugoutResult<Resolution> {
    let response = http.get(feed_url).send().await?;

    if !response.status().is_success() {
        return Err(DugoutError::Fetch(format!(
            "calendar feed returned {}",
            response.status()
        )));
    }

    let content = response.text().await?;
    let feed = parse_feed(&content)?;

    Ok(Resolution {
        next: select_next_event(&feed.events, today),
        skipped: feed.skipped,
    })
}

/// Pick the earliest event whose end day is `today` or later.
///
/// Filtering compares calendar days only; ordering uses the raw start
/// instant so that two events on the same day keep their time order.
pub fn select_next_event(events: &[CalendarEvent], today: NaiveDate) -> Option<NextEvent> {
    let mut candidates: Vec<&CalendarEvent> = events
        .iter()
        .filter(|e| matches!(e.end.local_date(), Some(end_day) if end_day >= today))
        .collect();

    candidates.sort_by_key(|e| e.start.to_local());

    candidates.first().and_then(|e| NextEvent::from_event(e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventTime, NO_LOCATION, NO_TITLE};
    use chrono::{NaiveDate, NaiveDateTime};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn all_day(summary: &str, start: NaiveDate) -> CalendarEvent {
        CalendarEvent {
            summary: Some(summary.to_string()),
            location: None,
            start: EventTime::Date(start),
            end: EventTime::Date(start),
        }
    }

    fn timed(summary: &str, start: NaiveDateTime, end: NaiveDateTime) -> CalendarEvent {
        CalendarEvent {
            summary: Some(summary.to_string()),
            location: None,
            start: EventTime::DateTimeFloating(start),
            end: EventTime::DateTimeFloating(end),
        }
    }

    #[test]
    fn test_selects_earliest_qualifying_start() {
        let events = vec![
            all_day("March", day(2025, 3, 1)),
            all_day("February (past)", day(2025, 2, 20)),
            all_day("April", day(2025, 4, 15)),
        ];

        let next = select_next_event(&events, day(2025, 2, 25)).expect("Should find an event");
        assert_eq!(next.summary, "March");
        assert_eq!(next.start.date_naive(), day(2025, 3, 1));
    }

    #[test]
    fn test_expired_events_are_excluded() {
        let events = vec![all_day("Old game", day(2025, 2, 20))];
        assert!(select_next_event(&events, day(2025, 2, 25)).is_none());
    }

    #[test]
    fn test_event_ending_today_is_still_current_after_its_end_time() {
        // Ends 09:00 today; resolution happens later the same day. The
        // day-granular comparison keeps it as a candidate all day long.
        let start = day(2025, 2, 25).and_hms_opt(8, 0, 0).unwrap();
        let end = day(2025, 2, 25).and_hms_opt(9, 0, 0).unwrap();
        let events = vec![timed("Morning practice", start, end)];

        let next = select_next_event(&events, day(2025, 2, 25)).expect("Should find an event");
        assert_eq!(next.summary, "Morning practice");
    }

    #[test]
    fn test_same_day_events_ordered_by_start_instant() {
        let d = day(2025, 3, 1);
        let events = vec![
            timed(
                "Afternoon",
                d.and_hms_opt(14, 0, 0).unwrap(),
                d.and_hms_opt(15, 0, 0).unwrap(),
            ),
            timed(
                "Morning",
                d.and_hms_opt(9, 0, 0).unwrap(),
                d.and_hms_opt(10, 0, 0).unwrap(),
            ),
        ];

        let next = select_next_event(&events, day(2025, 2, 25)).expect("Should find an event");
        assert_eq!(next.summary, "Morning");
    }

    #[test]
    fn test_all_day_event_normalizes_to_local_midnight() {
        let events = vec![all_day("Tournament", day(2025, 3, 1))];

        let next = select_next_event(&events, day(2025, 2, 25)).expect("Should find an event");
        assert!(next.all_day);
        assert_eq!(next.start.date_naive(), day(2025, 3, 1));
        assert_eq!(next.start.time(), chrono::NaiveTime::MIN);
    }

    #[test]
    fn test_no_events_yields_none_not_error() {
        assert!(select_next_event(&[], day(2025, 2, 25)).is_none());
    }

    #[test]
    fn test_missing_summary_and_location_get_placeholders() {
        let events = vec![CalendarEvent {
            summary: None,
            location: None,
            start: EventTime::Date(day(2025, 3, 1)),
            end: EventTime::Date(day(2025, 3, 1)),
        }];

        let next = select_next_event(&events, day(2025, 2, 25)).expect("Should find an event");
        assert_eq!(next.summary, NO_TITLE);
        assert_eq!(next.location, NO_LOCATION);
    }

    #[test]
    fn test_selection_is_idempotent() {
        let events = vec![
            all_day("A", day(2025, 3, 1)),
            all_day("B", day(2025, 3, 2)),
        ];
        let today = day(2025, 2, 25);

        let first = select_next_event(&events, today);
        let second = select_next_event(&events, today);
        assert_eq!(first, second);
    }

    #[test]
    fn test_feed_to_selection_end_to_end() {
        // Bad record in the middle; resolution must still land on the
        // valid next event and report the skip.
        let ics = r#"BEGIN:VCALENDAR
VERSION:2.0
PRODID:TEST
BEGIN:VEVENT
UID:past-1
SUMMARY:Last week
DTSTART;VALUE=DATE:20250218
END:VEVENT
BEGIN:VEVENT
UID:broken-1
SUMMARY:Broken
END:VEVENT
BEGIN:VEVENT
UID:next-1
SUMMARY:Season opener
LOCATION:Oakton Park
DTSTART;VALUE=DATE:20250301
END:VEVENT
END:VCALENDAR"#;

        let feed = parse_feed(ics).expect("Should parse");
        assert_eq!(feed.skipped.len(), 1);

        let next = select_next_event(&feed.events, day(2025, 2, 25))
            .expect("Should find an event");
        assert_eq!(next.summary, "Season opener");
        assert_eq!(next.location, "Oakton Park");
    }
}
