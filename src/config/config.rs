//! Main configuration structure and implementation

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{GenerationConfig, OutputConfig, Source};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// List of source documents to process, in order
    pub sources: Vec<Source>,

    /// Output configuration
    pub output: OutputConfig,

    /// Generation settings
    #[serde(default)]
    pub generation: GenerationConfig,
}

/// Flat `{ "output": ..., "urls": [...] }` configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyConfig {
    /// Output directory
    pub output: PathBuf,

    /// Document locations
    pub urls: Vec<String>,
}

impl From<LegacyConfig> for Config {
    fn from(legacy: LegacyConfig) -> Self {
        let sources = legacy
            .urls
            .into_iter()
            .enumerate()
            .map(|(index, location)| Source::new(format!("source-{}", index + 1), location))
            .collect();

        Self {
            version: "1.0".to_string(),
            sources,
            output: OutputConfig::new(legacy.output),
            generation: GenerationConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML or JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Invalid configuration file {}", path.display()))?;
        Ok(config)
    }

    /// Parse and validate configuration text in either the current or the legacy layout
    pub fn parse(content: &str) -> Result<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(content)?;

        let config = if value.get("urls").is_some() {
            let legacy: LegacyConfig = serde_yaml::from_value(value)?;
            Config::from(legacy)
        } else {
            serde_yaml::from_value(value)?
        };

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file, as JSON when the extension is `.json` and YAML otherwise
    pub fn save_to_file(&self, path: &PathBuf) -> Result<()> {
        let content = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::to_string_pretty(self)?,
            _ => serde_yaml::to_string(self)?,
        };
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.version != "1.0" {
            return Err(anyhow!(
                "Unsupported configuration version: {}",
                self.version
            ));
        }

        if self.sources.is_empty() {
            return Err(anyhow!("At least one source must be configured"));
        }

        for source in &self.sources {
            source.validate()?;
        }

        self.output.validate()?;

        Ok(())
    }

    /// Create a default configuration
    pub fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            sources: Vec::new(),
            output: OutputConfig::default(),
            generation: GenerationConfig::default(),
        }
    }
}
