//! ICS file parsing using the icalendar crate's parser.

use chrono::{DateTime, Utc};
use icalendar::parser::{Property, read_calendar, unfold};

use crate::error::{ArtCalError, ArtCalResult};
use crate::time_window::parse_stamp;

/// The parts of a generated .ics file that matter when checking or
/// displaying an invite.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactSummary {
    pub uid: String,
    pub summary: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
}

/// Parse .ics content and summarize its first VEVENT.
///
/// Text values come back unescaped by the icalendar parser.
pub fn parse_artifact(content: &str) -> ArtCalResult<ArtifactSummary> {
    let unfolded = unfold(content);
    let calendar = read_calendar(&unfolded).map_err(|e| ArtCalError::IcsParse(e.to_string()))?;

    let vevent = calendar
        .components
        .iter()
        .find(|c| c.name == "VEVENT")
        .ok_or_else(|| ArtCalError::IcsParse("No VEVENT found".into()))?;

    let uid = required(vevent.find_prop("UID"), "UID")?;
    let summary = required(vevent.find_prop("SUMMARY"), "SUMMARY")?;
    let start = required_time(vevent.find_prop("DTSTART"), "DTSTART")?;
    let end = required_time(vevent.find_prop("DTEND"), "DTEND")?;

    let description = optional(vevent.find_prop("DESCRIPTION"));
    let location = optional(vevent.find_prop("LOCATION"));
    let status = optional(vevent.find_prop("STATUS"));

    Ok(ArtifactSummary {
        uid,
        summary,
        start,
        end,
        description,
        location,
        status,
    })
}

fn optional(prop: Option<&Property<'_>>) -> Option<String> {
    prop.map(|p| p.val.to_string())
}

fn required(prop: Option<&Property<'_>>, name: &str) -> ArtCalResult<String> {
    optional(prop).ok_or_else(|| ArtCalError::IcsParse(format!("Missing {name}")))
}

fn required_time(prop: Option<&Property<'_>>, name: &str) -> ArtCalResult<DateTime<Utc>> {
    let value = required(prop, name)?;
    parse_stamp(&value)
        .ok_or_else(|| ArtCalError::IcsParse(format!("{name} is not a UTC timestamp: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ics::{IcsEvent, generate_ics};
    use crate::time_window::TimeWindow;
    use chrono::TimeZone;

    #[test]
    fn test_parse_generated_artifact() {
        let event = IcsEvent {
            uid: "1741165200000-abc123xyz@event-manager",
            dtstamp: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
            window: TimeWindow {
                start: Utc.with_ymd_and_hms(2025, 3, 5, 9, 0, 0).unwrap(),
                end: Utc.with_ymd_and_hms(2025, 3, 5, 11, 0, 0).unwrap(),
            },
            summary: "Canvas Workshop - Asha, Ravi",
            description: "Venue: Studio 4\\, Indiranagar\\n\\nAdditional Notes:\\nA very long note that will definitely need to be folded across lines",
            location: Some("Studio 4, Indiranagar"),
        };

        let parsed = parse_artifact(&generate_ics(&event)).expect("Should parse generated ICS");

        assert_eq!(parsed.uid, event.uid);
        assert_eq!(parsed.summary, "Canvas Workshop - Asha, Ravi");
        assert_eq!(parsed.start, event.window.start);
        assert_eq!(parsed.end, event.window.end);
        assert_eq!(parsed.location.as_deref(), Some("Studio 4, Indiranagar"));
        assert_eq!(parsed.status.as_deref(), Some("CONFIRMED"));
        assert_eq!(
            parsed.description.as_deref(),
            Some("Venue: Studio 4, Indiranagar\n\nAdditional Notes:\nA very long note that will definitely need to be folded across lines")
        );
    }

    #[test]
    fn test_parse_keeps_literal_backslashes() {
        let ics = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
BEGIN:VEVENT\r\n\
UID:test-123\r\n\
SUMMARY:C:\\\\path\\; a\\,b \\\\n x\r\n\
DTSTART:20250305T090000Z\r\n\
DTEND:20250305T110000Z\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

        let parsed = parse_artifact(ics).expect("Should parse");
        assert_eq!(parsed.summary, r"C:\path; a,b \n x");
    }

    #[test]
    fn test_parse_without_location() {
        let ics = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:TEST\r\n\
BEGIN:VEVENT\r\n\
UID:test-123\r\n\
SUMMARY:Onesie Workshop\r\n\
DTSTART:20250305T090000Z\r\n\
DTEND:20250305T110000Z\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

        let parsed = parse_artifact(ics).expect("Should parse");
        assert_eq!(parsed.summary, "Onesie Workshop");
        assert_eq!(parsed.location, None);
        assert_eq!(parsed.description, None);
    }

    #[test]
    fn test_parse_rejects_missing_dtstart() {
        let ics = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
BEGIN:VEVENT\r\n\
UID:test-123\r\n\
SUMMARY:Onesie Workshop\r\n\
DTEND:20250305T110000Z\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

        assert!(matches!(parse_artifact(ics), Err(ArtCalError::IcsParse(_))));
    }

    #[test]
    fn test_parse_rejects_calendar_without_event() {
        let ics = "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nEND:VCALENDAR\r\n";
        assert!(parse_artifact(ics).is_err());
    }
}
