//! Validate command implementation

use crate::cli::utils;
use anyhow::Result;
use clap::{ArgMatches, Command};
use tracing::info;

pub fn command() -> Command {
    Command::new("validate")
        .about("Validate configuration file")
        .arg(
            clap::Arg::new("config")
                .short('c')
                .long("config")
                .help("Configuration file path")
                .value_name("FILE"),
        )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    info!("Validating configuration file");

    let config = utils::load_config(matches)?;

    println!("Configuration file is valid!");
    println!("Version: {}", config.version);
    println!("Sources: {}", config.sources.len());
    println!("Output path: {:?}", config.output.base_path);
    println!(
        "Barrel module: {}",
        config.output.file_name(&config.output.barrel_name)
    );

    for source in &config.sources {
        match source.expand() {
            Ok(locations) => println!("  - {} ({} documents)", source.name, locations.len()),
            Err(e) => println!("  - {} (unresolved: {e})", source.name),
        }
    }

    Ok(())
}
