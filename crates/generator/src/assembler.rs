//! Final assembly of the output directory: placeholder pruning and the barrel module

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;
use walkdir::WalkDir;

use crate::config::OutputConfig;
use crate::render::render_barrel;

/// Outcome of assembling the output directory
#[derive(Debug, Clone)]
pub struct AssemblyReport {
    /// Placeholder files that were deleted
    pub removed: Vec<PathBuf>,

    /// Modules re-exported by the barrel, in barrel order
    pub modules: Vec<String>,

    /// Path of the barrel module
    pub barrel_path: PathBuf,
}

/// Prunes placeholder files and writes the barrel module
pub struct ModuleAssembler {
    output_config: OutputConfig,
}

impl ModuleAssembler {
    pub fn new(output_config: OutputConfig) -> Self {
        Self { output_config }
    }

    /// Delete placeholder modules and the unnamed module file, if present
    pub fn remove_placeholders(&self) -> Result<Vec<PathBuf>> {
        let mut candidates: Vec<PathBuf> = self
            .output_config
            .placeholder_names
            .iter()
            .map(|name| self.output_config.module_path(name))
            .collect();
        candidates.push(self.output_config.module_path(""));

        let mut removed = Vec::new();
        for path in candidates {
            if path.is_file() {
                std::fs::remove_file(&path)
                    .with_context(|| format!("Failed to delete {}", path.display()))?;
                info!("{:?} deleted successfully", path);
                removed.push(path);
            }
        }

        Ok(removed)
    }

    /// Write the barrel module re-exporting `modules` in the given order.
    ///
    /// The barrel itself, placeholders and duplicates are filtered out.
    pub fn write_barrel<S: AsRef<str>>(&self, modules: &[S]) -> Result<(PathBuf, Vec<String>)> {
        let mut exported: Vec<String> = Vec::with_capacity(modules.len());
        for module in modules {
            let module = module.as_ref();
            if self.output_config.is_reserved(module) || exported.iter().any(|m| m == module) {
                continue;
            }
            exported.push(module.to_string());
        }

        let barrel_path = self.output_config.barrel_path();
        std::fs::write(&barrel_path, render_barrel(&exported))
            .with_context(|| format!("Failed to write {}", barrel_path.display()))?;
        info!(
            "{:?} generated successfully with {} modules",
            barrel_path,
            exported.len()
        );

        Ok((barrel_path, exported))
    }

    /// Prune placeholders, then write the barrel for `modules`
    pub fn finalize<S: AsRef<str>>(&self, modules: &[S]) -> Result<AssemblyReport> {
        let removed = self.remove_placeholders()?;
        let (barrel_path, modules) = self.write_barrel(modules)?;

        Ok(AssemblyReport {
            removed,
            modules,
            barrel_path,
        })
    }

    /// Module names present in the output directory, sorted, excluding the barrel and placeholders
    pub fn scan_modules(&self) -> Result<Vec<String>> {
        let mut modules = Vec::new();
        let suffix = format!(".{}", self.output_config.extension);

        for entry in WalkDir::new(&self.output_config.base_path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.with_context(|| {
                format!(
                    "Failed to list {}",
                    self.output_config.base_path.display()
                )
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy();
            if let Some(module) = file_name.strip_suffix(&suffix) {
                if !self.output_config.is_reserved(module) {
                    modules.push(module.to_string());
                }
            }
        }

        Ok(modules)
    }

    /// Re-assemble an existing output directory from its listing
    pub fn rebuild(&self) -> Result<AssemblyReport> {
        let removed = self.remove_placeholders()?;
        let modules = self.scan_modules()?;
        let (barrel_path, modules) = self.write_barrel(&modules)?;

        Ok(AssemblyReport {
            removed,
            modules,
            barrel_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) {
        std::fs::write(dir.path().join(name), "export {};\n").unwrap();
    }

    #[test]
    fn test_remove_placeholders() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir, "data-contracts.ts");
        touch(&temp_dir, ".ts");
        touch(&temp_dir, "pet.ts");

        let assembler = ModuleAssembler::new(OutputConfig::new(temp_dir.path()));
        let removed = assembler.remove_placeholders().unwrap();

        assert_eq!(removed.len(), 2);
        assert!(!temp_dir.path().join("data-contracts.ts").exists());
        assert!(!temp_dir.path().join(".ts").exists());
        assert!(temp_dir.path().join("pet.ts").exists());
    }

    #[test]
    fn test_write_barrel_filters_reserved_and_duplicates() {
        let temp_dir = TempDir::new().unwrap();
        let assembler = ModuleAssembler::new(OutputConfig::new(temp_dir.path()));

        let (path, exported) = assembler
            .write_barrel(&["pet", "index", "data-contracts", "", "order", "pet"])
            .unwrap();

        assert_eq!(exported, vec!["pet", "order"]);
        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "export * from './pet';\nexport * from './order';\n"
        );
    }

    #[test]
    fn test_rebuild_from_listing() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir, "user-profile.ts");
        touch(&temp_dir, "category.ts");
        touch(&temp_dir, "data-contracts.ts");
        touch(&temp_dir, "index.ts");
        touch(&temp_dir, "notes.md");
        std::fs::create_dir(temp_dir.path().join("nested.ts")).unwrap();

        let assembler = ModuleAssembler::new(OutputConfig::new(temp_dir.path()));
        let report = assembler.rebuild().unwrap();

        assert_eq!(report.modules, vec!["category", "user-profile"]);
        assert_eq!(report.removed.len(), 1);
        assert_eq!(
            std::fs::read_to_string(temp_dir.path().join("index.ts")).unwrap(),
            "export * from './category';\nexport * from './user-profile';\n"
        );
    }

    #[test]
    fn test_finalize_on_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let assembler =
            ModuleAssembler::new(OutputConfig::new(temp_dir.path().join("missing")));
        assert!(assembler.finalize(&["pet"]).is_err());
    }
}
