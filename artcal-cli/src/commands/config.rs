use std::path::Path;

use anyhow::Result;
use artcal_core::EncoderConfig;
use owo_colors::OwoColorize;

pub fn run(config_path: Option<&Path>) -> Result<()> {
    let (path, config) = match config_path {
        Some(path) => (path.to_path_buf(), EncoderConfig::load_from(path)?),
        None => (EncoderConfig::config_path()?, EncoderConfig::load()?),
    };

    println!("{}", "Paths".bold());
    println!("  Config:     {}", path.display());
    println!("  Downloads:  {}", config.download_path().display());
    println!();
    println!("{}", "Settings".bold());
    for line in config.to_toml()?.lines() {
        println!("  {line}");
    }

    Ok(())
}
