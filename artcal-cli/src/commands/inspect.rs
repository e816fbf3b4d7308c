use anyhow::{Context, Result};
use artcal_core::ics::parse_artifact;
use artcal_core::link::parse_service_link;

use crate::render::Render;

pub fn run(target: &str) -> Result<()> {
    if target.starts_with("https://") || target.starts_with("http://") {
        let link = parse_service_link(target)?;
        println!("{}", link.render());
        return Ok(());
    }

    let content = std::fs::read_to_string(target)
        .with_context(|| format!("Could not read {target}"))?;
    let summary = parse_artifact(&content)?;
    println!("{}", summary.render());

    Ok(())
}
