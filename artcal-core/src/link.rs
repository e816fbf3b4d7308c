//! Google Calendar "create event" links.
//!
//! Query values are written with `application/x-www-form-urlencoded` rules
//! (spaces become `+`), the same encoding a browser's `URLSearchParams`
//! produces.

use chrono::{DateTime, Utc};
use url::Url;

use crate::error::{ArtCalError, ArtCalResult};
use crate::time_window::{TimeWindow, parse_stamp};

pub const SERVICE_ENDPOINT: &str = "https://calendar.google.com/calendar/render";

/// Build a link that opens Google Calendar's event template pre-filled.
pub fn build_service_link(
    title: &str,
    window: &TimeWindow,
    details: &str,
    location: Option<&str>,
) -> ArtCalResult<String> {
    let mut url = Url::parse(SERVICE_ENDPOINT).map_err(|e| ArtCalError::Link(e.to_string()))?;

    url.query_pairs_mut()
        .append_pair("action", "TEMPLATE")
        .append_pair("text", title)
        .append_pair("dates", &window.dates_param())
        .append_pair("details", details)
        .append_pair("location", location.unwrap_or(""));

    Ok(url.into())
}

/// Decoded contents of a service link.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceLinkSummary {
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub details: String,
    pub location: String,
}

/// Decode a link produced by [`build_service_link`].
pub fn parse_service_link(link: &str) -> ArtCalResult<ServiceLinkSummary> {
    let url = Url::parse(link).map_err(|e| ArtCalError::Link(e.to_string()))?;

    let endpoint = format!(
        "{}://{}{}",
        url.scheme(),
        url.host_str().unwrap_or_default(),
        url.path()
    );
    if endpoint != SERVICE_ENDPOINT {
        return Err(ArtCalError::Link(format!("Not a calendar template link: {endpoint}")));
    }

    let param = |name: &str| {
        url.query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    };

    if param("action").as_deref() != Some("TEMPLATE") {
        return Err(ArtCalError::Link("Missing action=TEMPLATE".into()));
    }

    let dates = param("dates").ok_or_else(|| ArtCalError::Link("Missing dates".into()))?;
    let (start, end) = dates
        .split_once('/')
        .and_then(|(s, e)| Some((parse_stamp(s)?, parse_stamp(e)?)))
        .ok_or_else(|| ArtCalError::Link(format!("Invalid dates: {dates}")))?;

    Ok(ServiceLinkSummary {
        title: param("text").unwrap_or_default(),
        start,
        end,
        details: param("details").unwrap_or_default(),
        location: param("location").unwrap_or_default(),
    })
}
