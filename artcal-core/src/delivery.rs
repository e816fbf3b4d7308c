//! Delivery of encoded invites.
//!
//! The encoder produces exactly one [`Artifact`] per dispatch and hands it to
//! a [`Deliverer`]. Implementations decide what "open a link" and "offer a
//! file for saving" mean in their runtime.

use crate::error::ArtCalResult;

pub const ICS_MIME_TYPE: &str = "text/calendar; charset=utf-8";

/// A downloadable .ics file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileArtifact {
    pub filename: String,
    pub mime_type: &'static str,
    pub content: String,
}

/// The single artifact produced for a booking.
#[derive(Debug, Clone, PartialEq)]
pub enum Artifact {
    Link(String),
    File(FileArtifact),
}

/// Delivery collaborator. Failures should be reported as
/// `ArtCalError::DeliveryFailed`.
pub trait Deliverer {
    /// Open `url` in a new browsing context.
    fn open_link(&mut self, url: &str) -> ArtCalResult<()>;

    /// Offer `file` to the user for saving.
    fn save_file(&mut self, file: &FileArtifact) -> ArtCalResult<()>;
}

/// Build the download filename: `{activity}_workshop_{date}.ics` with every
/// `/` and `-` replaced by `_`.
pub fn artifact_filename(activity_type: &str, event_date: &str) -> String {
    let sanitize = |s: &str| s.trim().replace(['/', '-'], "_");
    format!(
        "{}_workshop_{}.ics",
        sanitize(activity_type),
        sanitize(event_date)
    )
}
