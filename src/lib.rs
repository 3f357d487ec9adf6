//! swagger-ts-gen library
//!
//! Generates one TypeScript interface module per object schema found in OpenAPI/Swagger
//! documents, plus a barrel module re-exporting them all.

pub mod cli;
pub mod config;
pub mod loader;
pub mod utils;

pub use config::{Config, GenerationConfig, OutputConfig, Source};
pub use loader::{DocumentLoader, FileDocumentLoader};
pub use swagger_ts_generator::{
    AssemblyReport, GenerationResult, GenerationStatistics, InterfaceRegistry, SourceResult,
};

use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

use swagger_ts_generator::{FileEmitter, ModuleAssembler, RegistryOutcome, Synthesizer};

/// Main application context that coordinates all components
pub struct SwaggerTsGen {
    config: Config,
    loader: Arc<dyn DocumentLoader>,
    synthesizer: Synthesizer,
}

impl SwaggerTsGen {
    /// Create a new instance reading documents from the local file system
    pub fn new(config: Config) -> Result<Self> {
        Self::with_loader(config, Arc::new(FileDocumentLoader))
    }

    /// Create a new instance with a custom document loader
    pub fn with_loader(config: Config, loader: Arc<dyn DocumentLoader>) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            loader,
            synthesizer: Synthesizer::new(),
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generate interface modules from all configured sources
    pub async fn generate(&self) -> Result<GenerationResult> {
        info!(
            "Starting type generation for {} sources",
            self.config.sources.len()
        );
        let start_time = Instant::now();
        let output = &self.config.output;

        let prepared = if self.config.generation.clean_output {
            utils::empty_directory(&output.base_path).map(|removed| {
                info!("Cleared {} entries from {:?}", removed, output.base_path);
            })
        } else {
            utils::ensure_directory(&output.base_path)
        };
        prepared.map_err(|e| SwaggerTsGenError::Emission {
            path: output.base_path.clone(),
            message: format!("{e:#}"),
        })?;

        let mut registry = InterfaceRegistry::new(output.reserved_slugs());
        let results = self.collect_interfaces(&mut registry).await?;
        let unresolved = self.report_unresolved_imports(&registry);

        let report = FileEmitter::new(output.clone()).emit_all(&registry);
        let assembly = ModuleAssembler::new(output.clone())
            .finalize(&report.written)
            .map_err(|e| SwaggerTsGenError::Assembly {
                path: output.base_path.clone(),
                message: format!("{e:#}"),
            })?;

        let generation_time = start_time.elapsed();
        info!(
            "Generation completed in {}",
            utils::format_duration(generation_time)
        );

        let error_count =
            results.iter().map(|r| r.errors.len()).sum::<usize>() + report.failed.len();
        let warning_count =
            results.iter().map(|r| r.warnings.len()).sum::<usize>() + unresolved.len();
        let sources_processed = results.iter().filter(|r| r.succeeded()).count();

        Ok(GenerationResult {
            sources_processed,
            total_sources: results.len(),
            files: report.files.clone(),
            barrel_path: Some(assembly.barrel_path),
            removed_placeholders: assembly.removed,
            write_failures: report.failed,
            warnings: unresolved,
            statistics: GenerationStatistics {
                total_processing_time_ms: generation_time.as_millis() as u64,
                sources_processed,
                files_generated: report.files.len(),
                error_count,
                warning_count,
            },
            results,
        })
    }

    /// Synthesize everything `generate` would, without touching the output directory
    pub async fn dry_run(&self) -> Result<DryRunResult> {
        info!("Starting dry run");
        let start_time = Instant::now();
        let output = &self.config.output;

        let mut registry = InterfaceRegistry::new(output.reserved_slugs());
        let results = self.collect_interfaces(&mut registry).await?;
        let unresolved = self.report_unresolved_imports(&registry);
        let planned_files = FileEmitter::new(output.clone())
            .plan(&registry)
            .into_iter()
            .map(|(path, _)| path)
            .collect();

        Ok(DryRunResult {
            sources_processed: results.iter().filter(|r| r.succeeded()).count(),
            total_sources: results.len(),
            results,
            planned_files,
            barrel_path: output.barrel_path(),
            modules: registry.slugs(),
            unresolved_imports: unresolved,
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        })
    }

    /// Empty the output directory
    pub fn clean(&self) -> Result<usize> {
        let removed = utils::empty_directory(&self.config.output.base_path)?;
        info!(
            "Removed {} entries from {:?}",
            removed, self.config.output.base_path
        );
        Ok(removed)
    }

    /// Prune placeholders and rebuild the barrel of an existing output directory
    pub fn rebuild_index(&self) -> Result<AssemblyReport> {
        let output = &self.config.output;
        let report = ModuleAssembler::new(output.clone()).rebuild().map_err(|e| {
            SwaggerTsGenError::Assembly {
                path: output.base_path.clone(),
                message: format!("{e:#}"),
            }
        })?;
        Ok(report)
    }

    /// Process every source in order, registering the interfaces of each document
    async fn collect_interfaces(
        &self,
        registry: &mut InterfaceRegistry,
    ) -> Result<Vec<SourceResult>> {
        let mut results = Vec::new();

        for source in &self.config.sources {
            let locations = match source.expand() {
                Ok(locations) => locations,
                Err(e) => {
                    error!("Failed to resolve source {}: {:#}", source.name, e);
                    if self.config.generation.fail_fast {
                        return Err(e);
                    }
                    let mut result = SourceResult::new(&source.name, &source.location);
                    result.errors.push(format!("{e:#}"));
                    results.push(result);
                    continue;
                }
            };

            for location in locations {
                let start_time = Instant::now();
                match self.process_document(source, &location, registry).await {
                    Ok(mut result) => {
                        result.processing_time_ms = start_time.elapsed().as_millis() as u64;
                        info!("Types generated successfully for {}", location);
                        results.push(result);
                    }
                    Err(e) => {
                        error!("Error generating types for {}: {:#}", location, e);
                        if self.config.generation.fail_fast {
                            return Err(e);
                        }
                        let mut result = SourceResult::new(&source.name, &location);
                        result.errors.push(format!("{e:#}"));
                        result.processing_time_ms = start_time.elapsed().as_millis() as u64;
                        results.push(result);
                    }
                }
            }
        }

        Ok(results)
    }

    /// Load one document and register its object schemas
    async fn process_document(
        &self,
        source: &Source,
        location: &str,
        registry: &mut InterfaceRegistry,
    ) -> Result<SourceResult> {
        let document = self.loader.load(location).await?;
        let mut result = SourceResult::new(&source.name, location);
        result.schemas_found = document.definitions.len();
        info!(
            "{} of {} schema definitions in {} are objects",
            document.object_count(),
            result.schemas_found,
            location
        );

        for (name, reason) in &document.skipped {
            result
                .warnings
                .push(format!("Skipped schema {name}: {reason}"));
        }

        for (type_name, schema) in &document.definitions {
            let Some(model) = self.synthesizer.synthesize(type_name, schema) else {
                registry.record_non_object(type_name);
                continue;
            };

            match registry.insert(model) {
                RegistryOutcome::Added | RegistryOutcome::Replaced => {
                    result.interfaces_synthesized += 1;
                }
                RegistryOutcome::SlugCollision { previous } => {
                    result.interfaces_synthesized += 1;
                    result.warnings.push(format!(
                        "{type_name} replaces {previous}: both map to the same module"
                    ));
                }
                RegistryOutcome::Rejected { reason } => {
                    result
                        .warnings
                        .push(format!("Skipped interface {type_name}: {reason}"));
                }
            }
        }

        Ok(result)
    }

    fn report_unresolved_imports(&self, registry: &InterfaceRegistry) -> Vec<String> {
        registry
            .unresolved_imports()
            .into_iter()
            .map(|(owner, import)| {
                if registry.is_non_object(&import) {
                    warn!(
                        "{} imports {}, which has no module because it is not an object schema",
                        owner, import
                    );
                    format!("{owner} imports {import}, which is not an object schema and has no module")
                } else {
                    warn!("{} imports {}, which no document defines", owner, import);
                    format!("{owner} imports undefined type {import}")
                }
            })
            .collect()
    }
}

/// Result of a dry run
#[derive(Debug, Clone)]
pub struct DryRunResult {
    pub sources_processed: usize,
    pub total_sources: usize,
    pub results: Vec<SourceResult>,
    pub planned_files: Vec<PathBuf>,
    pub barrel_path: PathBuf,
    pub modules: Vec<String>,
    pub unresolved_imports: Vec<String>,
    pub processing_time_ms: u64,
}

/// Application error types
#[derive(thiserror::Error, Debug)]
pub enum SwaggerTsGenError {
    #[error("No configuration file found. Use --config to specify a file or create one with 'swagger-ts-gen init'")]
    ConfigNotFound,

    #[error("Remote document retrieval is not supported: {0}. Download the document and reference the local file")]
    RemoteLocation(String),

    #[error("No documents match pattern {0}")]
    NoMatchingDocuments(String),

    #[error("Failed to parse document {location}: {message}")]
    Document { location: String, message: String },

    #[error("Failed to prepare output directory {path:?}: {message}")]
    Emission { path: PathBuf, message: String },

    #[error("Failed to assemble output directory {path:?}: {message}")]
    Assembly { path: PathBuf, message: String },
}
