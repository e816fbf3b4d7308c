use std::path::{Path, PathBuf};

use anyhow::Result;
use artcal_core::EventEncoder;
use owo_colors::OwoColorize;

use crate::delivery::save_artifact;
use crate::input::read_booking;

pub fn run(
    encoder: &EventEncoder,
    booking: Option<&Path>,
    output: Option<PathBuf>,
    stdout: bool,
) -> Result<()> {
    let record = read_booking(booking)?;
    let file = encoder.file_artifact(&record)?;

    if stdout {
        print!("{}", file.content);
        return Ok(());
    }

    let dir = output.unwrap_or_else(|| encoder.config().download_path());
    let path = save_artifact(&dir, &file)?;

    println!("{}", format!("  Saved: {}", path.display()).green());

    Ok(())
}
