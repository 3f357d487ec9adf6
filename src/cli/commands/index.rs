//! Index command implementation

use crate::cli::utils;
use anyhow::Result;
use clap::{ArgMatches, Command};
use tracing::info;

pub fn command() -> Command {
    Command::new("index")
        .about("Remove placeholder modules and rebuild the barrel of an existing output directory")
        .arg(
            clap::Arg::new("config")
                .short('c')
                .long("config")
                .help("Configuration file path")
                .value_name("FILE"),
        )
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .help("Output directory")
                .value_name("DIR"),
        )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let config = utils::load_config(matches)?;
    info!("Rebuilding barrel in {:?}", config.output.base_path);

    let app = utils::create_app(config)?;
    let report = app.rebuild_index()?;

    for path in &report.removed {
        println!("Removed placeholder {}", path.display());
    }
    println!(
        "{} re-exports {} modules",
        report.barrel_path.display(),
        report.modules.len()
    );

    Ok(())
}
