//! `revertnet init`: write the default project configuration.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use crate::domain::models::Config;
use crate::infrastructure::config::{CONFIG_DIR, CONFIG_FILE};

pub fn execute(force: bool, json: bool) -> Result<()> {
    let config_path = Path::new(CONFIG_FILE);
    if config_path.exists() && !force {
        bail!("{CONFIG_FILE} already exists; pass --force to overwrite");
    }

    fs::create_dir_all(CONFIG_DIR)
        .with_context(|| format!("Failed to create {CONFIG_DIR}"))?;
    let yaml = serde_yaml::to_string(&Config::default())
        .context("Failed to serialize default configuration")?;
    fs::write(config_path, yaml).with_context(|| format!("Failed to write {CONFIG_FILE}"))?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "created": CONFIG_FILE }))?
        );
    } else {
        println!("Wrote default configuration to {CONFIG_FILE}");
    }
    Ok(())
}
