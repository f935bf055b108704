// src/config/loader.rs
//! Layered configuration loader for recording generation runs

use crate::config::constants::paths;
use crate::error::SynthesisError;
use crate::synth::RecordingConfig;
use std::path::{Path, PathBuf};

/// Configuration loading errors
#[derive(Debug)]
pub enum ConfigError {
    FileNotFound(String),
    ParseError(String),
    ValidationError(String),
    IoError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Configuration file not found: {}", path),
            ConfigError::ParseError(msg) => write!(f, "Configuration parse error: {}", msg),
            ConfigError::ValidationError(msg) => {
                write!(f, "Configuration validation error: {}", msg)
            }
            ConfigError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

impl From<SynthesisError> for ConfigError {
    fn from(err: SynthesisError) -> Self {
        ConfigError::ValidationError(err.to_string())
    }
}

/// Loads recording configuration from layered TOML files
pub struct ConfigLoader {
    config_paths: Vec<PathBuf>,
    current_config: RecordingConfig,
}

impl ConfigLoader {
    /// Create a loader over the standard configuration paths
    pub fn new() -> Self {
        Self {
            config_paths: Self::discover_config_paths(),
            current_config: RecordingConfig::default(),
        }
    }

    /// Create a loader with custom paths
    pub fn with_paths(paths: Vec<PathBuf>) -> Self {
        Self {
            config_paths: paths,
            current_config: RecordingConfig::default(),
        }
    }

    /// Load the recording configuration, merging every configured file that
    /// exists over the built-in defaults, then validating the result.
    pub fn load(&mut self) -> Result<RecordingConfig, ConfigError> {
        let config = self.load_and_merge_configs()?;
        config.validate()?;

        self.current_config = config.clone();
        Ok(config)
    }

    /// Load a single configuration file, skipping the layered merge.
    /// Missing keys still fall back to the built-in defaults.
    pub fn load_from_file<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> Result<RecordingConfig, ConfigError> {
        let value = self.load_config_file(path)?;
        let config: RecordingConfig = value
            .try_into()
            .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;
        config.validate()?;

        self.current_config = config.clone();
        Ok(config)
    }

    /// The most recently loaded configuration
    pub fn current_config(&self) -> &RecordingConfig {
        &self.current_config
    }

    /// Export the current configuration to a TOML file
    pub fn export_config<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let toml_content = toml::to_string_pretty(&self.current_config)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        std::fs::write(path, toml_content)?;
        Ok(())
    }

    fn load_and_merge_configs(&self) -> Result<RecordingConfig, ConfigError> {
        let mut merged = toml::Value::try_from(RecordingConfig::default())
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        for config_path in &self.config_paths {
            if config_path.exists() {
                let file_config = self.load_config_file(config_path)?;
                self.merge_toml_values(&mut merged, file_config);
            }
        }

        merged
            .try_into()
            .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))
    }

    fn load_config_file<P: AsRef<Path>>(&self, path: P) -> Result<toml::Value, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config: toml::Value = toml::from_str(&content)?;

        Ok(config)
    }

    fn merge_toml_values(&self, base: &mut toml::Value, overlay: toml::Value) {
        match (base, overlay) {
            (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
                for (key, value) in overlay_table {
                    if let Some(base_value) = base_table.get_mut(&key) {
                        self.merge_toml_values(base_value, value);
                    } else {
                        base_table.insert(key, value);
                    }
                }
            }
            (base_value, overlay_value) => {
                *base_value = overlay_value;
            }
        }
    }

    fn discover_config_paths() -> Vec<PathBuf> {
        // Later entries take precedence during the merge.
        vec![
            PathBuf::from(paths::DEFAULT_CONFIG_FILE),
            PathBuf::from(paths::LOCAL_CONFIG_FILE),
        ]
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
