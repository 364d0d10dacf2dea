//! Configuration loading and parsing for `release-summary.toml` files.
//!
//! The file is read from the repository being summarized and is optional:
//! every field falls back to a default.
use log::*;
use serde::Deserialize;

use crate::{
    Result,
    forge::{config::DEFAULT_CONFIG_FILE, traits::Forge},
    inference::config::InferenceSettings,
};

/// Summary generation settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)] // Use default for missing fields
pub struct SummaryConfig {
    /// Globs of files left out of pull request summaries.
    pub ignored_files: Vec<String>,
    /// When not empty, only files matching these globs are summarized.
    pub src_files: Vec<String>,
    /// Personas to impersonate instead of the built-in list.
    pub personas: Vec<String>,
}

/// Root configuration structure for `release-summary.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Inference model settings.
    pub inference: InferenceSettings,
    /// Summary generation settings.
    pub summary: SummaryConfig,
}

/// Loads the repository configuration, using defaults when the file does not
/// exist.
pub async fn load_config(forge: &dyn Forge) -> Result<Config> {
    if let Some(content) = forge.get_file_content(DEFAULT_CONFIG_FILE).await? {
        let config: Config = toml::from_str(&content)?;
        debug!("loaded configuration: {config:#?}");
        Ok(config)
    } else {
        info!("no configuration found: using default");
        Ok(Config::default())
    }
}
