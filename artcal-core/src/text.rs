//! Event title and description text.

use crate::booking::BookingRecord;
use crate::catalog::ActivityCatalog;

/// How line breaks and special characters are written into a description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeStyle {
    /// Literal newlines; the calendar link percent-encodes them later.
    Plain,
    /// RFC 5545 TEXT escaping: `\\`, `\;`, `\,` and `\n`.
    Ics,
}

/// "{label} - {host}", or just the label when there is no host.
pub fn derive_title(catalog: &ActivityCatalog, activity_type: &str, host_details: Option<&str>) -> String {
    let label = catalog.label(activity_type);
    match host_details.map(str::trim).filter(|h| !h.is_empty()) {
        Some(host) => format!("{label} - {host}"),
        None => label.to_string(),
    }
}

/// Build the event description from whichever booking fields are present.
pub fn derive_description(record: &BookingRecord, currency_symbol: &str, style: EscapeStyle) -> String {
    let mut description = String::new();

    if let Some(count) = record.participants() {
        description.push_str(&format!("Number of Participants: {count}\n"));
    }
    if let Some(charge) = record.charge() {
        description.push_str(&format!("Per Person Charge: {currency_symbol}{charge}\n"));
    }
    if let Some(venue) = record.venue() {
        description.push_str(&format!("Venue: {venue}\n"));
    }
    if let Some(notes) = record.notes() {
        description.push_str(&format!("\nAdditional Notes:\n{notes}"));
    }

    match style {
        EscapeStyle::Plain => description,
        EscapeStyle::Ics => escape_text(&description),
    }
}

/// Escape a value for an iCalendar TEXT property.
pub fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {
                // CRLF and bare CR both become a single escaped newline
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                escaped.push_str("\\n");
            }
            _ => escaped.push(c),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record() -> BookingRecord {
        BookingRecord {
            activity_type: "canvas".to_string(),
            host_details: Some("Asha".to_string()),
            participants_count: Some(12),
            per_person_charge: Some(2500.0),
            venue: Some("Studio 4, Indiranagar".to_string()),
            event_date: "05/03".to_string(),
            event_time: "14:30".to_string(),
            additional_notes: Some("Bring aprons; wear old clothes".to_string()),
        }
    }

    #[test]
    fn title_without_host_has_no_separator() {
        let catalog = ActivityCatalog::default();
        assert_eq!(derive_title(&catalog, "canvas", None), "Canvas Workshop");
        assert_eq!(derive_title(&catalog, "canvas", Some("")), "Canvas Workshop");
    }

    #[test]
    fn title_with_host() {
        let catalog = ActivityCatalog::default();
        assert_eq!(
            derive_title(&catalog, "fluid-art", Some("Priya")),
            "Fluid Art Workshop - Priya"
        );
    }

    #[test]
    fn title_for_unknown_activity_uses_default_label() {
        let catalog = ActivityCatalog::default();
        assert_eq!(derive_title(&catalog, "unknown-key", None), "Art Workshop");
    }

    #[test]
    fn plain_description_lists_fields_in_order() {
        let description = derive_description(&full_record(), "₹", EscapeStyle::Plain);
        assert_eq!(
            description,
            "Number of Participants: 12\n\
             Per Person Charge: ₹2500\n\
             Venue: Studio 4, Indiranagar\n\
             \n\
             Additional Notes:\n\
             Bring aprons; wear old clothes"
        );
    }

    #[test]
    fn fractional_charge_keeps_decimals() {
        let record = BookingRecord {
            per_person_charge: Some(1499.5),
            ..Default::default()
        };
        assert_eq!(
            derive_description(&record, "₹", EscapeStyle::Plain),
            "Per Person Charge: ₹1499.5\n"
        );
    }

    #[test]
    fn ics_description_escapes_separators_and_newlines() {
        let description = derive_description(&full_record(), "₹", EscapeStyle::Ics);
        assert_eq!(
            description,
            "Number of Participants: 12\\nPer Person Charge: ₹2500\\nVenue: Studio 4\\, Indiranagar\\n\\nAdditional Notes:\\nBring aprons\\; wear old clothes"
        );
        assert!(!description.contains('\n'));
    }

    #[test]
    fn empty_record_has_empty_description() {
        let record = BookingRecord::default();
        assert_eq!(derive_description(&record, "₹", EscapeStyle::Plain), "");
        assert_eq!(derive_description(&record, "₹", EscapeStyle::Ics), "");
    }

    #[test]
    fn notes_only_starts_with_blank_line() {
        let record = BookingRecord {
            additional_notes: Some("Line one\r\nLine two".to_string()),
            ..Default::default()
        };
        assert_eq!(
            derive_description(&record, "₹", EscapeStyle::Ics),
            "\\nAdditional Notes:\\nLine one\\nLine two"
        );
    }

    #[test]
    fn escape_handles_backslashes() {
        assert_eq!(escape_text(r"C:\art"), r"C:\\art");
        assert_eq!(escape_text(r"literal \n"), r"literal \\n");
    }
}
