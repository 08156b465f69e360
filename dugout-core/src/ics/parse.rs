//! ICS feed parsing using the icalendar crate's parser.
//!
//! The feed is parsed in one pass. A malformed document is a hard error;
//! a malformed individual VEVENT is not. Bad records are reported through
//! [`ParsedFeed::skipped`] so one broken event never blocks the rest of
//! the feed.

use icalendar::{
    DatePerhapsTime,
    parser::{Component, read_calendar, unfold},
};

use crate::error::{DugoutError, DugoutResult};
use crate::event::{CalendarEvent, EventTime};

/// Outcome of parsing a whole feed: the usable events plus a diagnostic
/// for every record that had to be dropped.
#[derive(Debug, Clone, Default)]
pub struct ParsedFeed {
    pub events: Vec<CalendarEvent>,
    pub skipped: Vec<SkippedEvent>,
}

/// A VEVENT that could not be normalized into a [`CalendarEvent`].
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedEvent {
    /// SUMMARY of the skipped record, when it had one.
    pub summary: Option<String>,
    pub reason: String,
}

/// Parse ICS content into events.
///
/// Returns `Err` only for top-level syntax errors. Per-record problems
/// (missing or unparsable DTSTART) land in [`ParsedFeed::skipped`].
pub fn parse_feed(content: &str) -> DugoutResult<ParsedFeed> {
    let unfolded = unfold(content);
    let calendar = read_calendar(&unfolded).map_err(DugoutError::IcsParse)?;

    let mut feed = ParsedFeed::default();

    for vevent in calendar.components.iter().filter(|c| c.name == "VEVENT") {
        match parse_vevent(vevent) {
            Ok(event) => feed.events.push(event),
            Err(reason) => feed.skipped.push(SkippedEvent {
                summary: vevent.find_prop("SUMMARY").map(|p| p.val.to_string()),
                reason,
            }),
        }
    }

    Ok(feed)
}

/// Normalize one VEVENT. The error string becomes the skip reason.
fn parse_vevent(vevent: &Component<'_>) -> Result<CalendarEvent, String> {
    let summary = vevent.find_prop("SUMMARY").map(|p| p.val.to_string());
    let location = vevent.find_prop("LOCATION").map(|p| p.val.to_string());

    let start_prop = vevent
        .find_prop("DTSTART")
        .ok_or_else(|| "missing DTSTART".to_string())?;
    let start = DatePerhapsTime::try_from(start_prop)
        .map(to_event_time)
        .map_err(|_| format!("unparsable DTSTART '{}'", start_prop.val.as_ref()))?;

    // DTEND absent or unparsable: reuse the start. A bad end never
    // disqualifies an event that has a valid start.
    let end = match vevent.find_prop("DTEND") {
        Some(prop) => DatePerhapsTime::try_from(prop)
            .map(to_event_time)
            .unwrap_or_else(|_| start.clone()),
        None => start.clone(),
    };

    Ok(CalendarEvent {
        summary,
        location,
        start,
        end,
    })
}

/// Convert icalendar's DatePerhapsTime to our EventTime, preserving timezone info
fn to_event_time(dpt: DatePerhapsTime) -> EventTime {
    match dpt {
        DatePerhapsTime::Date(d) => EventTime::Date(d),
        DatePerhapsTime::DateTime(cal_dt) => match cal_dt {
            icalendar::CalendarDateTime::Utc(dt) => EventTime::DateTimeUtc(dt),
            icalendar::CalendarDateTime::Floating(naive) => EventTime::DateTimeFloating(naive),
            icalendar::CalendarDateTime::WithTimezone { date_time, tzid } => {
                EventTime::DateTimeZoned {
                    datetime: date_time,
                    tzid,
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_timed_and_all_day_events() {
        let ics = r#"BEGIN:VCALENDAR
VERSION:2.0
PRODID:TEST
BEGIN:VEVENT
UID:practice-1
SUMMARY:Practice
LOCATION:Field 3
DTSTART:20250320T150000Z
DTEND:20250320T163000Z
END:VEVENT
BEGIN:VEVENT
UID:tournament-1
SUMMARY:Spring Tournament
DTSTART;VALUE=DATE:20250301
DTEND;VALUE=DATE:20250302
END:VEVENT
END:VCALENDAR"#;

        let feed = parse_feed(ics).expect("Should parse");
        assert_eq!(feed.events.len(), 2);
        assert!(feed.skipped.is_empty());

        let practice = &feed.events[0];
        assert_eq!(practice.summary.as_deref(), Some("Practice"));
        assert_eq!(practice.location.as_deref(), Some("Field 3"));
        assert!(!practice.is_all_day());

        let tournament = &feed.events[1];
        assert!(tournament.is_all_day());
        assert_eq!(
            tournament.start,
            EventTime::Date(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
        );
    }

    #[test]
    fn test_missing_dtstart_is_skipped_not_fatal() {
        let ics = r#"BEGIN:VCALENDAR
VERSION:2.0
PRODID:TEST
BEGIN:VEVENT
UID:broken-1
SUMMARY:No start here
END:VEVENT
BEGIN:VEVENT
UID:ok-1
SUMMARY:Game
DTSTART:20250401T180000Z
END:VEVENT
END:VCALENDAR"#;

        let feed = parse_feed(ics).expect("Should parse");
        assert_eq!(feed.events.len(), 1);
        assert_eq!(feed.events[0].summary.as_deref(), Some("Game"));

        assert_eq!(feed.skipped.len(), 1);
        let skipped = &feed.skipped[0];
        assert_eq!(skipped.summary.as_deref(), Some("No start here"));
        assert!(skipped.reason.contains("DTSTART"));
    }

    #[test]
    fn test_missing_dtend_reuses_start() {
        let ics = r#"BEGIN:VCALENDAR
VERSION:2.0
PRODID:TEST
BEGIN:VEVENT
UID:game-1
SUMMARY:Game
DTSTART:20250401T180000Z
END:VEVENT
END:VCALENDAR"#;

        let feed = parse_feed(ics).expect("Should parse");
        let event = &feed.events[0];
        assert_eq!(event.end, event.start);
    }

    #[test]
    fn test_invalid_dtend_falls_back_to_start() {
        let ics = r#"BEGIN:VCALENDAR
VERSION:2.0
PRODID:TEST
BEGIN:VEVENT
UID:game-2
SUMMARY:Game
DTSTART:20250401T180000Z
DTEND:not-a-date
END:VEVENT
END:VCALENDAR"#;

        let feed = parse_feed(ics).expect("Should parse");
        assert!(feed.skipped.is_empty(), "Bad DTEND must not skip the event");
        let event = &feed.events[0];
        assert_eq!(event.end, event.start);
    }

    #[test]
    fn test_zoned_dtstart_preserves_tzid() {
        let ics = r#"BEGIN:VCALENDAR
VERSION:2.0
PRODID:TEST
BEGIN:VEVENT
UID:practice-2
SUMMARY:Practice
DTSTART;TZID=America/Chicago:20250320T170000
DTEND;TZID=America/Chicago:20250320T183000
END:VEVENT
END:VCALENDAR"#;

        let feed = parse_feed(ics).expect("Should parse");
        match &feed.events[0].start {
            EventTime::DateTimeZoned { tzid, .. } => assert_eq!(tzid, "America/Chicago"),
            other => panic!("Expected DateTimeZoned, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_calendar_yields_no_events() {
        let ics = "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:TEST\r\nEND:VCALENDAR";
        let feed = parse_feed(ics).expect("Should parse");
        assert!(feed.events.is_empty());
        assert!(feed.skipped.is_empty());
    }

    #[test]
    fn test_garbage_document_is_a_parse_error() {
        let result = parse_feed("this is not an ics document");
        assert!(matches!(result, Err(DugoutError::IcsParse(_))));
    }
}
