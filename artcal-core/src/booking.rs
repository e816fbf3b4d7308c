//! Booking records as they arrive from the form / database collaborator.
//!
//! The record is read once per encode call and never mutated. Optional text
//! fields treat the empty string the same as an absent value, and numeric
//! fields accept either JSON numbers or numeric strings because both the
//! HTML form and the hosted table hand them over as text.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, de};

use crate::error::{ArtCalError, ArtCalResult};

/// A single workshop booking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    /// Activity key, e.g. "canvas" or "fluid-art"
    #[serde(default)]
    pub activity_type: String,
    #[serde(default)]
    pub host_details: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub participants_count: Option<u32>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub per_person_charge: Option<f64>,
    #[serde(default)]
    pub venue: Option<String>,
    /// "DD/MM"
    #[serde(default)]
    pub event_date: String,
    /// "HH:MM", 24-hour IST wall-clock
    #[serde(default)]
    pub event_time: String,
    #[serde(default)]
    pub additional_notes: Option<String>,
}

impl BookingRecord {
    /// Parse a booking from a JSON document.
    pub fn from_json(json: &str) -> ArtCalResult<Self> {
        serde_json::from_str(json).map_err(|e| ArtCalError::Config(format!("Invalid booking: {e}")))
    }

    /// Fail with `MissingRequiredField` unless activity type, date and time are all set.
    pub fn require_fields(&self) -> ArtCalResult<()> {
        if self.activity_type.trim().is_empty() {
            return Err(ArtCalError::MissingRequiredField("activity_type"));
        }
        if self.event_date.trim().is_empty() {
            return Err(ArtCalError::MissingRequiredField("event_date"));
        }
        if self.event_time.trim().is_empty() {
            return Err(ArtCalError::MissingRequiredField("event_time"));
        }
        Ok(())
    }

    pub fn host(&self) -> Option<&str> {
        non_empty(&self.host_details)
    }

    pub fn venue(&self) -> Option<&str> {
        non_empty(&self.venue)
    }

    pub fn notes(&self) -> Option<&str> {
        non_empty(&self.additional_notes)
    }

    /// Participant count, treating zero as "not provided".
    pub fn participants(&self) -> Option<u32> {
        self.participants_count.filter(|&n| n != 0)
    }

    /// Per-person charge, treating zero as "not provided".
    pub fn charge(&self) -> Option<f64> {
        self.per_person_charge.filter(|&c| c != 0.0)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText<T> {
    Number(T),
    Text(String),
}

fn lenient_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match Option::<NumberOrText<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                Ok(None)
            } else {
                s.parse().map(Some).map_err(de::Error::custom)
            }
        }
    }
}
