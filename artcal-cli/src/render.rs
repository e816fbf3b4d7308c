//! Terminal rendering for decoded invites.

use artcal_core::ics::ArtifactSummary;
use artcal_core::link::ServiceLinkSummary;
use artcal_core::time_window::IST_OFFSET_SECS;
use chrono::{DateTime, Duration, Utc};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for ArtifactSummary {
    fn render(&self) -> String {
        let mut lines = vec![
            format!("📅 {}", self.summary.bold()),
            format!("   {}", render_window(&self.start, &self.end)),
        ];
        if let Some(location) = &self.location {
            lines.push(format!("   📍 {location}"));
        }
        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            lines.push(String::new());
            lines.extend(description.lines().map(|l| format!("   {}", l.dimmed())));
        }
        lines.push(String::new());
        lines.push(format!("   {}", format!("UID {}", self.uid).dimmed()));
        lines.join("\n")
    }
}

impl Render for ServiceLinkSummary {
    fn render(&self) -> String {
        let mut lines = vec![
            format!("🔗 {}", self.title.bold()),
            format!("   {}", render_window(&self.start, &self.end)),
        ];
        if !self.location.is_empty() {
            lines.push(format!("   📍 {}", self.location));
        }
        if !self.details.is_empty() {
            lines.push(String::new());
            lines.extend(self.details.lines().map(|l| format!("   {}", l.dimmed())));
        }
        lines.join("\n")
    }
}

/// "05/03 14:30–16:30 IST (09:00–11:00 UTC)"
fn render_window(start: &DateTime<Utc>, end: &DateTime<Utc>) -> String {
    let offset = Duration::seconds(IST_OFFSET_SECS);
    let local_start = start.naive_utc() + offset;
    let local_end = end.naive_utc() + offset;

    format!(
        "{}–{} IST {}",
        local_start.format("%d/%m/%Y %H:%M"),
        local_end.format("%H:%M"),
        format!("({}–{} UTC)", start.format("%H:%M"), end.format("%H:%M")).dimmed()
    )
}
