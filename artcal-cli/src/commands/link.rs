use std::path::Path;

use anyhow::Result;
use artcal_core::EventEncoder;

use crate::input::read_booking;

pub fn run(encoder: &EventEncoder, booking: Option<&Path>) -> Result<()> {
    let record = read_booking(booking)?;
    let link = encoder.build_service_link(&record)?;

    println!("{link}");

    Ok(())
}
