//! Result types for generation operations

use std::path::PathBuf;

/// Result of processing one source document
#[derive(Debug, Clone, Default)]
pub struct SourceResult {
    pub source_name: String,
    pub location: String,
    pub schemas_found: usize,
    pub interfaces_synthesized: usize,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub processing_time_ms: u64,
}

impl SourceResult {
    pub fn new(source_name: &str, location: &str) -> Self {
        Self {
            source_name: source_name.to_string(),
            location: location.to_string(),
            ..Self::default()
        }
    }

    /// Whether the document was processed without errors
    pub fn succeeded(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Overall generation result
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub sources_processed: usize,
    pub total_sources: usize,
    pub results: Vec<SourceResult>,
    pub files: Vec<PathBuf>,
    pub barrel_path: Option<PathBuf>,
    pub removed_placeholders: Vec<PathBuf>,
    pub write_failures: Vec<(String, String)>,
    pub warnings: Vec<String>,
    pub statistics: GenerationStatistics,
}

/// Generation statistics
#[derive(Debug, Clone, Default)]
pub struct GenerationStatistics {
    /// Total processing time in milliseconds
    pub total_processing_time_ms: u64,

    /// Number of source documents processed successfully
    pub sources_processed: usize,

    /// Number of interface files written (or planned, on a dry run)
    pub files_generated: usize,

    /// Number of errors encountered
    pub error_count: usize,

    /// Number of warnings encountered
    pub warning_count: usize,
}
