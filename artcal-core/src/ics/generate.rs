//! ICS file generation.

use chrono::{DateTime, Utc};

use crate::text::escape_text;
use crate::time_window::{TimeWindow, format_stamp};

pub const PRODID: &str = "-//Event Manager//Art Workshop//EN";

/// RFC 5545 limit for a single physical line, excluding the CRLF
const MAX_LINE_OCTETS: usize = 75;

/// Everything needed to write one VEVENT.
#[derive(Debug, Clone)]
pub struct IcsEvent<'a> {
    pub uid: &'a str,
    pub dtstamp: DateTime<Utc>,
    pub window: TimeWindow,
    pub summary: &'a str,
    /// Must already be TEXT-escaped (`EscapeStyle::Ics`)
    pub description: &'a str,
    /// Omitted from the output entirely when `None` or empty
    pub location: Option<&'a str>,
}

/// Generate .ics content for a single event.
pub fn generate_ics(event: &IcsEvent<'_>) -> String {
    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{PRODID}"),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
        "BEGIN:VEVENT".to_string(),
        format!("UID:{}", event.uid),
        format!("DTSTAMP:{}", format_stamp(&event.dtstamp)),
        format!("DTSTART:{}", event.window.start_stamp()),
        format!("DTEND:{}", event.window.end_stamp()),
        format!("SUMMARY:{}", escape_text(event.summary)),
        format!("DESCRIPTION:{}", event.description),
    ];

    if let Some(location) = event.location.filter(|l| !l.trim().is_empty()) {
        lines.push(format!("LOCATION:{}", escape_text(location)));
    }

    lines.push("STATUS:CONFIRMED".to_string());
    lines.push("SEQUENCE:0".to_string());
    lines.push("END:VEVENT".to_string());
    lines.push("END:VCALENDAR".to_string());

    let mut output = String::new();
    for line in &lines {
        output.push_str(&fold_line(line));
        output.push_str("\r\n");
    }
    output
}

/// Fold a content line so no physical line exceeds 75 octets.
///
/// Continuation lines start with a single space, which counts towards the
/// limit. Multi-byte characters are never split.
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut folded = String::with_capacity(line.len() + 3 * (line.len() / MAX_LINE_OCTETS));
    let mut octets = 0;

    for c in line.chars() {
        let width = c.len_utf8();
        if octets + width > MAX_LINE_OCTETS {
            folded.push_str("\r\n ");
            octets = 1;
        }
        folded.push(c);
        octets += width;
    }

    folded
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_window() -> TimeWindow {
        TimeWindow {
            start: Utc.with_ymd_and_hms(2025, 3, 5, 9, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2025, 3, 5, 11, 0, 0).unwrap(),
        }
    }

    fn make_event<'a>(description: &'a str, location: Option<&'a str>) -> IcsEvent<'a> {
        IcsEvent {
            uid: "1741165200000-abc123xyz@event-manager",
            dtstamp: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
            window: make_window(),
            summary: "Canvas Workshop - Asha",
            description,
            location,
        }
    }

    #[test]
    fn test_generate_ics_property_order() {
        let ics = generate_ics(&make_event("Venue: Studio 4\\n", Some("Studio 4")));
        let names: Vec<&str> = ics
            .split("\r\n")
            .filter(|l| !l.is_empty())
            .map(|l| l.split(':').next().unwrap())
            .collect();

        assert_eq!(
            names,
            vec![
                "BEGIN", "VERSION", "PRODID", "CALSCALE", "METHOD", "BEGIN", "UID", "DTSTAMP",
                "DTSTART", "DTEND", "SUMMARY", "DESCRIPTION", "LOCATION", "STATUS", "SEQUENCE",
                "END", "END",
            ],
            "Unexpected property order. ICS:\n{}",
            ics
        );
        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(ics.ends_with("END:VEVENT\r\nEND:VCALENDAR\r\n"));
        assert!(ics.contains("\r\nDTSTAMP:20250301T120000Z\r\n"));
        assert!(ics.contains("\r\nDTSTART:20250305T090000Z\r\n"));
        assert!(ics.contains("\r\nDTEND:20250305T110000Z\r\n"));
    }

    #[test]
    fn test_generate_ics_every_line_ends_with_crlf() {
        let ics = generate_ics(&make_event("", None));
        assert!(!ics.replace("\r\n", "").contains('\n'), "Bare LF in output:\n{}", ics);
    }

    #[test]
    fn test_generate_ics_omits_empty_location() {
        for location in [None, Some(""), Some("   ")] {
            let ics = generate_ics(&make_event("", location));
            assert!(
                !ics.contains("LOCATION"),
                "LOCATION line should be omitted for {:?}. ICS:\n{}",
                location,
                ics
            );
        }
    }

    #[test]
    fn test_generate_ics_escapes_summary_and_location() {
        let mut event = make_event("", Some("Hall A; Floor 2, Block C"));
        event.summary = "Fluid Art, Canvas; Mixed";

        let ics = generate_ics(&event);
        assert!(ics.contains("SUMMARY:Fluid Art\\, Canvas\\; Mixed\r\n"), "ICS:\n{}", ics);
        assert!(ics.contains("LOCATION:Hall A\\; Floor 2\\, Block C\r\n"), "ICS:\n{}", ics);
    }

    #[test]
    fn test_generate_ics_folds_long_description() {
        let description = "Number of Participants: 40\\nPer Person Charge: ₹2500\\nVenue: The Big Community Hall next to the lake\\n\\nAdditional Notes:\\nPlease bring aprons";
        let ics = generate_ics(&make_event(description, None));

        for physical in ics.split("\r\n") {
            assert!(
                physical.len() <= 75,
                "Line longer than 75 octets ({}): {}",
                physical.len(),
                physical
            );
        }

        let unfolded = ics.replace("\r\n ", "");
        assert!(unfolded.contains(&format!("DESCRIPTION:{description}\r\n")));
    }

    #[test]
    fn test_fold_line_short_line_untouched() {
        let line = "SUMMARY:Canvas Workshop";
        assert_eq!(fold_line(line), line);
        let exact = "X".repeat(75);
        assert_eq!(fold_line(&exact), exact);
    }

    #[test]
    fn test_fold_line_never_splits_multibyte_chars() {
        // ₹ is three octets; put one across the 75-octet boundary
        let line = format!("DESCRIPTION:{}₹₹₹₹", "a".repeat(62));
        let folded = fold_line(&line);

        let parts: Vec<&str> = folded.split("\r\n").collect();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].len(), 74, "first line should stop before the split rupee sign");
        assert!(parts[1].starts_with(" ₹"));
        assert_eq!(folded.replace("\r\n ", ""), line);
    }

    #[test]
    fn test_fold_line_continuations_count_leading_space() {
        let line = "D".repeat(200);
        let folded = fold_line(&line);
        let parts: Vec<&str> = folded.split("\r\n").collect();

        assert_eq!(parts[0].len(), 75);
        assert_eq!(parts[1].len(), 75);
        assert!(parts[1].starts_with(' '));
        assert_eq!(folded.replace("\r\n ", ""), line);
    }
}
