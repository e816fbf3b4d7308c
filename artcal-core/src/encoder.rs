//! Booking to calendar invite encoding.

use chrono::{DateTime, Utc};
use log::{debug, warn};

use crate::booking::BookingRecord;
use crate::config::EncoderConfig;
use crate::delivery::{Artifact, Deliverer, FileArtifact, ICS_MIME_TYPE, artifact_filename};
use crate::device::{DeviceClass, classify_user_agent};
use crate::error::{ArtCalError, ArtCalResult};
use crate::ics::{IcsEvent, generate_ics, generate_uid};
use crate::link::build_service_link;
use crate::text::{self, EscapeStyle};
use crate::time_window::{TimeWindow, derive_time_window};

/// Turns bookings into either a calendar link or an .ics file.
///
/// Holds only immutable configuration, so one encoder can serve any number
/// of bookings. Every operation validates the booking before producing
/// output, and [`EventEncoder::dispatch`] finishes encoding before it
/// touches the deliverer.
#[derive(Debug, Clone, Default)]
pub struct EventEncoder {
    config: EncoderConfig,
}

impl EventEncoder {
    pub fn new(config: EncoderConfig) -> Self {
        EventEncoder { config }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    pub fn derive_time_window(&self, date: &str, time: &str) -> ArtCalResult<TimeWindow> {
        let window = derive_time_window(date, time, self.config.year)?;
        debug!("{date} {time} IST -> {}", window.dates_param());
        Ok(window)
    }

    pub fn derive_title(&self, activity_type: &str, host_details: Option<&str>) -> String {
        if !self.config.catalog.contains(activity_type) {
            warn!(
                "Unknown activity type '{}', using '{}'",
                activity_type, self.config.catalog.default_label
            );
        }
        text::derive_title(&self.config.catalog, activity_type, host_details)
    }

    pub fn derive_description(&self, record: &BookingRecord, style: EscapeStyle) -> String {
        text::derive_description(record, &self.config.currency_symbol, style)
    }

    /// Google Calendar template link for `record`.
    pub fn build_service_link(&self, record: &BookingRecord) -> ArtCalResult<String> {
        record.require_fields()?;
        let window = self.derive_time_window(&record.event_date, &record.event_time)?;
        let title = self.derive_title(&record.activity_type, record.host());
        let details = self.derive_description(record, EscapeStyle::Plain);

        build_service_link(&title, &window, &details, record.venue())
    }

    /// .ics content for `record`, stamped now with a fresh UID.
    pub fn build_file_artifact(&self, record: &BookingRecord) -> ArtCalResult<String> {
        let now = Utc::now();
        let uid = generate_uid(now, &self.config.uid_domain);
        self.build_file_artifact_at(record, now, &uid)
    }

    /// .ics content with a caller-supplied DTSTAMP and UID, for reproducible output.
    pub fn build_file_artifact_at(
        &self,
        record: &BookingRecord,
        now: DateTime<Utc>,
        uid: &str,
    ) -> ArtCalResult<String> {
        record.require_fields()?;
        let window = self.derive_time_window(&record.event_date, &record.event_time)?;
        let summary = self.derive_title(&record.activity_type, record.host());
        let description = self.derive_description(record, EscapeStyle::Ics);

        Ok(generate_ics(&IcsEvent {
            uid,
            dtstamp: now,
            window,
            summary: &summary,
            description: &description,
            location: record.venue(),
        }))
    }

    /// The .ics content wrapped with its download filename and MIME type.
    pub fn file_artifact(&self, record: &BookingRecord) -> ArtCalResult<FileArtifact> {
        let content = self.build_file_artifact(record)?;

        Ok(FileArtifact {
            filename: artifact_filename(&record.activity_type, &record.event_date),
            mime_type: ICS_MIME_TYPE,
            content,
        })
    }

    pub fn classify_device(&self, user_agent: &str) -> DeviceClass {
        classify_user_agent(user_agent, &self.config.mobile_markers)
    }

    /// Produce the one artifact `device` should receive.
    pub fn prepare(&self, record: &BookingRecord, device: DeviceClass) -> ArtCalResult<Artifact> {
        debug!(
            "Encoding {} on {} for {} device",
            record.activity_type, record.event_date, device
        );

        match device {
            DeviceClass::Mobile => self.file_artifact(record).map(Artifact::File),
            DeviceClass::Desktop => self.build_service_link(record).map(Artifact::Link),
        }
    }

    /// Encode `record` for `device` and hand the result to exactly one
    /// delivery method of `deliverer`.
    pub fn dispatch<D>(
        &self,
        record: &BookingRecord,
        device: DeviceClass,
        deliverer: &mut D,
    ) -> ArtCalResult<()>
    where
        D: Deliverer + ?Sized,
    {
        let artifact = self.prepare(record, device)?;

        let delivered = match &artifact {
            Artifact::File(file) => {
                debug!("Offering {} ({} bytes)", file.filename, file.content.len());
                deliverer.save_file(file)
            }
            Artifact::Link(url) => {
                debug!("Opening calendar link");
                deliverer.open_link(url)
            }
        };

        delivered.map_err(|e| match e {
            ArtCalError::DeliveryFailed(_) => e,
            other => ArtCalError::DeliveryFailed(other.to_string()),
        })
    }
}
