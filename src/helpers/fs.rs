//! File System Utilities
//!
//! Configuration directory management.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::{Error, Result};

/// Get or create the switcher's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/aico-switcher/` or `$XDG_CONFIG_HOME/aico-switcher/`
/// - **macOS**: `~/Library/Application Support/tw.aico.aico-switcher/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\aico\aico-switcher\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("tw", "aico", "aico-switcher") else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };

    let config_dir = project_dirs.config_dir();

    // Create config directory if it doesn't exist
    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}
