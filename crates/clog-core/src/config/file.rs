//! Loading and saving configuration files (YAML or JSON)

use std::fs;
use std::path::Path;

use super::LoggerConfig;
use crate::error::{LogError, LogResult};

/// On-disk configuration format, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.yaml` / `.yml`
    Yaml,
    /// `.json`
    Json,
}

impl ConfigFormat {
    /// Detect the format from the extension of `path`
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "json" => Some(ConfigFormat::Json),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigFormat::Yaml => "yaml",
            ConfigFormat::Json => "json",
        }
    }
}

impl LoggerConfig {
    /// Parse a config from a string in the given format
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self, String> {
        match format {
            ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        }
    }

    /// Render the config in the given format
    pub fn render(&self, format: ConfigFormat) -> Result<String, String> {
        match format {
            ConfigFormat::Yaml => serde_yaml::to_string(self).map_err(|e| e.to_string()),
            ConfigFormat::Json => serde_json::to_string_pretty(self).map_err(|e| e.to_string()),
        }
    }

    /// Load a config file; the format follows the file extension
    ///
    /// # Example
    ///
    /// ```no_run
    /// use clog_core::{ConsoleLogger, LoggerConfig};
    ///
    /// let config = LoggerConfig::load("clog.yaml")?;
    /// let logger = ConsoleLogger::from_config(&config)?;
    /// # Ok::<(), clog_core::LogError>(())
    /// ```
    pub fn load(path: impl AsRef<Path>) -> LogResult<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| LogError::UnsupportedConfigFormat(path.to_path_buf()))?;

        let content = fs::read_to_string(path).map_err(|source| LogError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content, format).map_err(|message| LogError::parse_config(path, message))
    }

    /// Write the config to `path`, creating parent directories as needed
    pub fn save(&self, path: impl AsRef<Path>) -> LogResult<()> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| LogError::UnsupportedConfigFormat(path.to_path_buf()))?;

        let content = self
            .render(format)
            .map_err(|message| LogError::parse_config(path, message))?;

        let write = || -> std::io::Result<()> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, content)
        };
        write().map_err(|source| LogError::WriteConfig {
            path: path.to_path_buf(),
            source,
        })
    }
}
