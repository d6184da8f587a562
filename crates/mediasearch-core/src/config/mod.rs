//! Configuration management

use crate::error::{MediaSearchError, Result};
use crate::ltr::{available_models, MediaSearch20210826};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Language code used when none is given on the command line
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Ranking model configuration
    #[serde(default)]
    pub ltr: LtrConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            ltr: LtrConfig::default(),
        }
    }
}

/// Learning-to-rank model selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LtrConfig {
    /// Model version whose parameter builder is used
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for LtrConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
        }
    }
}

fn default_language() -> String {
    std::env::var("MEDIASEARCH_LANGUAGE").unwrap_or_else(|_| "en".to_string())
}

fn default_model() -> String {
    std::env::var("MEDIASEARCH_LTR_MODEL")
        .unwrap_or_else(|_| MediaSearch20210826::MODEL_NAME.to_string())
}

impl Config {
    /// Load config from default path
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load config from a file, falling back to defaults when it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            if content.trim().is_empty() {
                return Ok(Config::default());
            }
            let config: Config = serde_yaml::from_str(&content)?;
            tracing::debug!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get default config path (`MEDIASEARCH_CONFIG` overrides it)
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("MEDIASEARCH_CONFIG") {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }

    /// Check that the configured model exists and a language is set
    pub fn validate(&self) -> Result<()> {
        if self.default_language.trim().is_empty() {
            return Err(MediaSearchError::Config(
                "default_language must not be empty".to_string(),
            ));
        }
        if !available_models().iter().any(|m| *m == self.ltr.model) {
            return Err(MediaSearchError::Config(format!(
                "unknown ltr.model '{}' (available: {})",
                self.ltr.model,
                available_models().join(", ")
            )));
        }
        Ok(())
    }
}
