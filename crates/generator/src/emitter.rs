//! Writes synthesized interfaces to their module files

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::OutputConfig;
use crate::registry::InterfaceRegistry;
use crate::render::render_interface;
use crate::synth::InterfaceModel;

/// Outcome of emitting a registry
#[derive(Debug, Clone, Default)]
pub struct EmitReport {
    /// Slugs of modules written, in registry order
    pub written: Vec<String>,

    /// Paths of files written
    pub files: Vec<PathBuf>,

    /// Type names that failed to write, with the error
    pub failed: Vec<(String, String)>,
}

/// Writes one module file per interface
pub struct FileEmitter {
    output_config: OutputConfig,
}

impl FileEmitter {
    pub fn new(output_config: OutputConfig) -> Self {
        Self { output_config }
    }

    /// Write one interface to `<base_path>/<slug>.<ext>`, overwriting any existing file
    pub fn emit(&self, model: &InterfaceModel) -> Result<PathBuf> {
        let path = self.output_config.module_path(&model.slug);
        std::fs::write(&path, render_interface(model))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Generated interface file: {:?}", path);
        Ok(path)
    }

    /// Write every registered interface; a failed write does not stop the others
    pub fn emit_all(&self, registry: &InterfaceRegistry) -> EmitReport {
        let mut report = EmitReport::default();

        for model in registry.iter() {
            match self.emit(model) {
                Ok(path) => {
                    report.written.push(model.slug.clone());
                    report.files.push(path);
                }
                Err(e) => {
                    warn!("Failed to generate interface file for {}: {:#}", model.type_name, e);
                    report.failed.push((model.type_name.clone(), format!("{e:#}")));
                }
            }
        }

        report
    }

    /// Rendered files that would be written, without touching the file system
    pub fn plan(&self, registry: &InterfaceRegistry) -> Vec<(PathBuf, String)> {
        registry
            .iter()
            .map(|model| {
                (
                    self.output_config.module_path(&model.slug),
                    render_interface(model),
                )
            })
            .collect()
    }
}
