//! Init command implementation

use crate::{Config, OutputConfig, Source};
use anyhow::{anyhow, Result};
use clap::{ArgMatches, Command};
use std::path::PathBuf;
use tracing::info;

pub fn command() -> Command {
    Command::new("init")
        .about("Initialize a new configuration file")
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file path")
                .value_name("FILE")
                .default_value(".swagger-ts-gen.yaml"),
        )
        .arg(
            clap::Arg::new("example")
                .short('e')
                .long("example")
                .help("Create example configuration")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("force")
                .short('f')
                .long("force")
                .help("Overwrite an existing configuration file")
                .action(clap::ArgAction::SetTrue),
        )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let output_path = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("Missing output path"))?;
    let example = matches.get_flag("example");

    if output_path.exists() && !matches.get_flag("force") {
        return Err(anyhow!(
            "{} already exists; use --force to overwrite it",
            output_path.display()
        ));
    }

    info!("Initializing configuration file: {:?}", output_path);

    let config = if example {
        create_example_config()
    } else {
        create_starter_config()
    };

    config.save_to_file(&output_path)?;

    info!("Configuration file created: {:?}", output_path);

    if example {
        println!("Example configuration created with a sample source.");
        println!("Edit the file to point at your OpenAPI documents.");
    } else {
        println!("Configuration file created with one source at ./openapi.json.");
        println!("Point it at your OpenAPI document or add more sources.");
    }

    Ok(())
}

fn create_starter_config() -> Config {
    let mut config = Config::default();
    config.sources.push(Source::new("api", "./openapi.json"));
    config
}

fn create_example_config() -> Config {
    let mut config = Config::default();

    config
        .sources
        .push(Source::new("petstore", "./specs/petstore.json"));
    config.output = OutputConfig::new("./src/api/types");

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_config_is_valid() {
        assert!(create_example_config().validate().is_ok());
    }

    #[test]
    fn test_starter_config_loads_back() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join(".swagger-ts-gen.yaml");
        create_starter_config().save_to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.sources.len(), 1);
        assert_eq!(loaded.sources[0].location, "./openapi.json");
    }

    #[tokio::test]
    async fn test_init_command_writes_valid_config() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        let path_arg = path.to_string_lossy().to_string();

        let matches = command()
            .try_get_matches_from(["init", "-o", path_arg.as_str()])
            .unwrap();
        run(&matches).await.unwrap();
        assert!(Config::from_file(&path).is_ok());

        // refuses to overwrite without --force
        assert!(run(&matches).await.is_err());
    }
}
