//! Core types for artcal.
//!
//! This crate turns art-workshop bookings into calendar invites:
//! - `encoder` holds the `EventEncoder` that builds links and .ics files
//! - `ics` and `link` hold the two output formats
//! - `delivery` defines how an invite is handed to the user

pub mod booking;
pub mod catalog;
pub mod config;
pub mod delivery;
pub mod device;
pub mod encoder;
pub mod error;
pub mod ics;
pub mod link;
pub mod text;
pub mod time_window;

pub use booking::BookingRecord;
pub use config::EncoderConfig;
pub use delivery::{Artifact, Deliverer, FileArtifact};
pub use device::DeviceClass;
pub use encoder::EventEncoder;
pub use error::{ArtCalError, ArtCalResult};
