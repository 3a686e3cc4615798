//! Config - Site Configuration

use std::fs;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::constants::{CONFIG_FILE, SITE_BASE};
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;

/// Deployment configuration for the switcher
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Path prefix identifying the deployed site root (e.g. "/cooperation.tw/")
    pub site_base: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_base: SITE_BASE.to_string(),
        }
    }
}

impl SiteConfig {
    /// Load the configuration from the platform config directory.
    ///
    /// A missing or empty file yields the default configuration.
    pub fn try_load() -> Result<Self> {
        let path = get_or_create_config_dir()?.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        info!(path = ?path, "Loading site config");
        let value = fs::read_to_string(&path)?;

        if value.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse site config");
            e
        })?;

        Ok(config)
    }
}
