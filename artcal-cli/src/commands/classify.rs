use anyhow::Result;
use artcal_core::EventEncoder;

pub fn run(encoder: &EventEncoder, user_agent: &str) -> Result<()> {
    println!("{}", encoder.classify_device(user_agent));
    Ok(())
}
