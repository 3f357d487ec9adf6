//! Source document configuration

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::utils::is_remote_location;
use crate::SwaggerTsGenError;

/// A source document (or glob pattern of documents) to generate types from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    /// Name of the source, used in logs and reports
    pub name: String,

    /// Path or glob pattern of the document(s); `~` and environment variables are expanded
    pub location: String,
}

impl Source {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }

    /// Validate the source configuration
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(anyhow!("Source name cannot be empty"));
        }

        if self.location.trim().is_empty() {
            return Err(anyhow!("Source {} has an empty location", self.name));
        }

        Ok(())
    }

    /// Expand the location into the concrete document locations it names.
    ///
    /// Remote locations are passed through unchanged so the loader can reject them per document.
    pub fn expand(&self) -> Result<Vec<String>> {
        if is_remote_location(&self.location) {
            return Ok(vec![self.location.clone()]);
        }

        let expanded = shellexpand::full(&self.location)
            .map_err(|e| anyhow!("Failed to expand {}: {}", self.location, e))?
            .into_owned();

        if !expanded.contains(['*', '?', '[']) {
            return Ok(vec![expanded]);
        }

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in glob::glob(&expanded)? {
            match entry {
                Ok(path) if path.is_file() => paths.push(path),
                Ok(_) => {}
                Err(e) => tracing::warn!("Failed to match pattern {}: {}", expanded, e),
            }
        }

        if paths.is_empty() {
            return Err(SwaggerTsGenError::NoMatchingDocuments(expanded).into());
        }

        paths.sort();
        Ok(paths
            .into_iter()
            .map(|path| path.to_string_lossy().into_owned())
            .collect())
    }
}
