//! Reading bookings from files or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use artcal_core::BookingRecord;

/// Read a booking JSON document from `path`, or stdin when `path` is `None` or "-".
pub fn read_booking(path: Option<&Path>) -> Result<BookingRecord> {
    let json = match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("Could not read booking from {}", p.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Could not read booking from stdin")?;
            buf
        }
    };

    Ok(BookingRecord::from_json(&json)?)
}
