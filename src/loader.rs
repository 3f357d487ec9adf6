//! Loading of source documents

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;
use tracing::debug;

use swagger_ts_generator::{DocumentFormat, SchemaDocument};

use crate::utils::is_remote_location;
use crate::SwaggerTsGenError;

/// Loads the schema definitions of one source document
#[async_trait]
pub trait DocumentLoader: Send + Sync {
    /// Load and parse the document at `location`
    async fn load(&self, location: &str) -> Result<SchemaDocument>;
}

/// Loads JSON or YAML documents from the local file system
#[derive(Debug, Default, Clone, Copy)]
pub struct FileDocumentLoader;

#[async_trait]
impl DocumentLoader for FileDocumentLoader {
    async fn load(&self, location: &str) -> Result<SchemaDocument> {
        if is_remote_location(location) {
            return Err(SwaggerTsGenError::RemoteLocation(location.to_string()).into());
        }

        let path = Path::new(location);
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read document {}", path.display()))?;

        let document = SchemaDocument::parse(&content, DocumentFormat::from_path(path))
            .map_err(|e| SwaggerTsGenError::Document {
                location: location.to_string(),
                message: format!("{e:#}"),
            })?;

        debug!(
            "Loaded {} schema definitions from {} ({:?})",
            document.definitions.len(),
            location,
            document.version
        );
        Ok(document)
    }
}
