use std::{fs, path::Path};

use anyhow::Result;

use super::CommandResult;
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write a config template into `dir`. Leaves an existing file untouched.
pub fn init(dir: &Path) -> Result<CommandResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Ok(CommandResult::init(false));
    }

    fs::write(&config_path, default_config_json()?)?;
    Ok(CommandResult::init(true))
}
