//! CLI command implementations

use anyhow::Result;
use clap::{ArgMatches, Command};

pub mod commands;

/// Main CLI application
pub struct CliApp;

impl CliApp {
    /// Create the CLI application
    pub fn app() -> Command {
        Command::new("swagger-ts-gen")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Generate TypeScript interfaces from OpenAPI/Swagger schema definitions")
            .subcommand_negates_reqs(true)
            .subcommand(commands::init::command())
            .subcommand(commands::generate::command())
            .subcommand(commands::validate::command())
            .subcommand(commands::index::command())
            .subcommand(commands::clean::command())
    }

    /// Run the CLI application
    pub async fn run(matches: &ArgMatches) -> Result<()> {
        match matches.subcommand() {
            Some(("init", sub_matches)) => commands::init::run(sub_matches).await,
            Some(("generate", sub_matches)) => commands::generate::run(sub_matches).await,
            Some(("validate", sub_matches)) => commands::validate::run(sub_matches).await,
            Some(("index", sub_matches)) => commands::index::run(sub_matches).await,
            Some(("clean", sub_matches)) => commands::clean::run(sub_matches).await,
            _ => {
                // No subcommand provided, show help
                let _ = Self::app().print_help();
                Ok(())
            }
        }
    }
}

/// Common CLI utilities
pub mod utils {
    use anyhow::Result;
    use std::path::PathBuf;

    /// Configuration file names looked up in the working directory, in order
    pub const DEFAULT_CONFIG_PATHS: [&str; 4] = [
        ".swagger-ts-gen.yaml",
        ".swagger-ts-gen.yml",
        "swagger-ts-gen.yaml",
        "swgToTs.config.json",
    ];

    /// Get configuration file path from arguments or use default
    pub fn get_config_path(matches: &clap::ArgMatches) -> Result<PathBuf> {
        if let Some(config_path) = matches.get_one::<String>("config") {
            return Ok(PathBuf::from(config_path));
        }

        DEFAULT_CONFIG_PATHS
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
            .ok_or_else(|| crate::SwaggerTsGenError::ConfigNotFound.into())
    }

    /// Load configuration from file, applying an `--output` override when the command has one
    pub fn load_config(matches: &clap::ArgMatches) -> Result<crate::Config> {
        let config_path = get_config_path(matches)?;
        let mut config = crate::Config::from_file(&config_path)?;

        if let Ok(Some(output_path)) = matches.try_get_one::<String>("output") {
            config.output.base_path = PathBuf::from(output_path);
        }

        Ok(config)
    }

    /// Create the application instance
    pub fn create_app(config: crate::Config) -> Result<crate::SwaggerTsGen> {
        crate::SwaggerTsGen::new(config)
    }
}
