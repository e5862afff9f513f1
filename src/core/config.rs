use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::bio::classify::ClassifyOptions;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub classifier: ClassifyOptions,
    pub validation: ValidationConfig,
    pub server: ServerConfig,
    pub panel: PanelConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Minimum number of characters in the submitted text
    pub min_length: usize,
    /// Maximum number of characters (unlimited when unset)
    pub max_length: Option<usize>,
    /// At least one validation method must be selected
    pub require_validation_method: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Form action URL the input is posted to
    pub url: Option<String>,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Cookie holding the advanced-parameters panel state
    pub cookie_name: String,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_length: 5,
            max_length: None,
            require_validation_method: true,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: 600, // validations of large inputs run for minutes
            connect_timeout_secs: 30,
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            cookie_name: "GeneValidator_adv_params_status".to_string(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), crate::SeqcheckError> {
        self.classifier.validate()?;

        if let Some(max) = self.validation.max_length {
            if max < self.validation.min_length {
                return Err(crate::SeqcheckError::Config(format!(
                    "validation.max_length ({}) is below validation.min_length ({})",
                    max, self.validation.min_length
                )));
            }
        }
        if self.panel.cookie_name.is_empty()
            || self.panel.cookie_name.contains(|c: char| c == '=' || c == ';' || c.is_whitespace())
        {
            return Err(crate::SeqcheckError::Config(format!(
                "panel.cookie_name is not a valid cookie name: {:?}",
                self.panel.cookie_name
            )));
        }
        Ok(())
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, crate::SeqcheckError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| crate::SeqcheckError::Config(format!("Failed to parse config: {}", e)))?;
    config.validate()?;
    Ok(config)
}

/// Load the config at `path` if given and present, defaults otherwise.
pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Config, crate::SeqcheckError> {
    match path {
        Some(p) if p.as_ref().exists() => {
            debug!("Loading config from {}", p.as_ref().display());
            load_config(p)
        }
        Some(p) => {
            debug!("Config {} not found, using defaults", p.as_ref().display());
            Ok(default_config())
        }
        None => Ok(default_config()),
    }
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), crate::SeqcheckError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| crate::SeqcheckError::Config(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}
