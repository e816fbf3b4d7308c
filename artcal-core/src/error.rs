//! Error types for artcal.

use thiserror::Error;

/// Errors that can occur while encoding or delivering a booking.
#[derive(Error, Debug)]
pub enum ArtCalError {
    #[error("Invalid date '{0}'. Expected DD/MM")]
    InvalidDateFormat(String),

    #[error("Invalid time '{0}'. Expected HH:MM (24-hour)")]
    InvalidTimeFormat(String),

    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),

    #[error("Delivery failed: {0}")]
    DeliveryFailed(String),

    #[error("ICS parse error: {0}")]
    IcsParse(String),

    #[error("Calendar link error: {0}")]
    Link(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for artcal operations.
pub type ArtCalResult<T> = Result<T, ArtCalError>;
