//! Clean command implementation

use crate::cli::utils;
use anyhow::Result;
use clap::{ArgMatches, Command};
use tracing::info;

pub fn command() -> Command {
    Command::new("clean")
        .about("Remove everything from the output directory")
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
        .arg(
            clap::Arg::new("dry-run")
                .long("dry-run")
                .help("Show what would be removed without removing it")
                .action(clap::ArgAction::SetTrue),
        )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let config = utils::load_config(matches)?;
    let base_path = config.output.base_path.clone();

    if matches.get_flag("dry-run") {
        println!("Dry run mode - no changes will be made");
        if !base_path.is_dir() {
            println!("{} does not exist - nothing would be removed", base_path.display());
            return Ok(());
        }
        for entry in std::fs::read_dir(&base_path)? {
            println!("  would remove {}", entry?.path().display());
        }
        return Ok(());
    }

    info!("Cleaning output directory {:?}", base_path);

    let app = utils::create_app(config)?;
    let removed = app.clean()?;

    println!("Removed {removed} entries from {}", base_path.display());

    Ok(())
}
