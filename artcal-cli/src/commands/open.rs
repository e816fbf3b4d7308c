use std::path::{Path, PathBuf};

use anyhow::Result;
use artcal_core::{DeviceClass, EventEncoder};
use owo_colors::OwoColorize;

use crate::delivery::SystemDeliverer;
use crate::input::read_booking;

pub fn run(
    encoder: &EventEncoder,
    booking: Option<&Path>,
    user_agent: Option<&str>,
    mobile: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let record = read_booking(booking)?;

    let device = match user_agent {
        Some(ua) => encoder.classify_device(ua),
        None => DeviceClass::from_flag(mobile),
    };

    let dir = output.unwrap_or_else(|| encoder.config().download_path());
    let mut deliverer = SystemDeliverer::new(dir);

    encoder.dispatch(&record, device, &mut deliverer)?;

    match deliverer.saved_to {
        Some(path) => println!("{}", format!("  Saved: {}", path.display()).green()),
        None => println!("{}", "  Opened in browser".green()),
    }

    Ok(())
}
