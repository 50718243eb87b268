//! Config command - print the effective configuration

use anyhow::{Context, Result};
use std::path::Path;

pub fn run(config: Option<&Path>) -> Result<()> {
    let config = super::load_config(config)?;
    config.validate().context("Invalid scene")?;

    let yaml = config.to_yaml().context("Failed to serialize config")?;
    print!("{}", yaml);
    Ok(())
}
