//! Configuration types for the generator

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving the generated modules
    pub base_path: PathBuf,

    /// File extension of generated modules, without the leading dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Name of the barrel module, without extension
    #[serde(default = "default_barrel_name")]
    pub barrel_name: String,

    /// Module names left behind by other generators that are removed before finalizing
    #[serde(default = "default_placeholder_names")]
    pub placeholder_names: Vec<String>,
}

fn default_extension() -> String {
    "ts".to_string()
}

fn default_barrel_name() -> String {
    "index".to_string()
}

fn default_placeholder_names() -> Vec<String> {
    vec!["data-contracts".to_string()]
}

impl OutputConfig {
    /// Output configuration for a directory, with defaults for everything else
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_path.to_string_lossy().is_empty() {
            return Err(anyhow!("Base path cannot be empty"));
        }

        if self.extension.is_empty() || self.extension.starts_with('.') {
            return Err(anyhow!(
                "Extension must be non-empty and given without a leading dot: {:?}",
                self.extension
            ));
        }

        if self.barrel_name.is_empty() {
            return Err(anyhow!("Barrel name cannot be empty"));
        }

        Ok(())
    }

    /// File name of a module
    pub fn file_name(&self, module: &str) -> String {
        format!("{}.{}", module, self.extension)
    }

    /// Path of a module inside the output directory
    pub fn module_path(&self, module: &str) -> PathBuf {
        self.base_path.join(self.file_name(module))
    }

    /// Path of the barrel module
    pub fn barrel_path(&self) -> PathBuf {
        self.module_path(&self.barrel_name)
    }

    /// Whether a module name is the barrel or a placeholder
    pub fn is_reserved(&self, module: &str) -> bool {
        module.is_empty()
            || module == self.barrel_name
            || self.placeholder_names.iter().any(|name| name == module)
    }

    /// Module slugs that synthesized interfaces may not take
    pub fn reserved_slugs(&self) -> Vec<String> {
        let mut reserved = self.placeholder_names.clone();
        reserved.push(self.barrel_name.clone());
        reserved
    }

    /// Replace the base path
    pub fn with_base_path(mut self, base_path: &Path) -> Self {
        self.base_path = base_path.to_path_buf();
        self
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("./generated"),
            extension: default_extension(),
            barrel_name: default_barrel_name(),
            placeholder_names: default_placeholder_names(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = OutputConfig::new("out");
        assert_eq!(config.module_path("pet"), PathBuf::from("out/pet.ts"));
        assert_eq!(config.barrel_path(), PathBuf::from("out/index.ts"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_reserved_modules() {
        let config = OutputConfig::default();
        assert!(config.is_reserved("index"));
        assert!(config.is_reserved("data-contracts"));
        assert!(config.is_reserved(""));
        assert!(!config.is_reserved("pet"));
        assert_eq!(config.reserved_slugs(), vec!["data-contracts", "index"]);
    }

    #[test]
    fn test_invalid_extension() {
        let mut config = OutputConfig::default();
        config.extension = ".ts".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: OutputConfig = serde_yaml::from_str("base_path: ./types").unwrap();
        assert_eq!(config.extension, "ts");
        assert_eq!(config.barrel_name, "index");
        assert_eq!(config.placeholder_names, vec!["data-contracts"]);
    }
}
