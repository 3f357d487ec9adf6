//! Generate command implementation

use crate::cli::utils;
use anyhow::Result;
use clap::{ArgMatches, Command};
use tracing::info;

pub fn command() -> Command {
    Command::new("generate")
        .about("Generate TypeScript interfaces from configured sources")
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
                .help("Don't write files")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("fail-fast")
                .long("fail-fast")
                .help("Stop on the first source document that fails")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("no-clean")
                .long("no-clean")
                .help("Keep existing files in the output directory")
                .action(clap::ArgAction::SetTrue),
        )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    info!("Starting TypeScript interface generation");

    let mut config = utils::load_config(matches)?;

    if matches.get_flag("fail-fast") {
        config.generation.fail_fast = true;
    }

    if matches.get_flag("no-clean") {
        config.generation.clean_output = false;
    }

    let app = utils::create_app(config)?;

    if matches.get_flag("dry-run") {
        info!("Dry run mode - no files will be written");
        println!("Dry run mode - no files will be written");

        let result = app.dry_run().await?;

        println!("Dry run completed successfully!");
        println!(
            "Sources that would be processed: {}/{}",
            result.sources_processed, result.total_sources
        );
        println!("Files that would be generated: {}", result.planned_files.len());
        for path in &result.planned_files {
            println!("  {}", path.display());
        }
        println!(
            "Barrel {} would re-export {} modules",
            result.barrel_path.display(),
            result.modules.len()
        );

        for source_result in &result.results {
            for error in &source_result.errors {
                eprintln!("    Error ({}): {error}", source_result.location);
            }
        }
        for warning in &result.unresolved_imports {
            println!("    Warning: {warning}");
        }

        return Ok(());
    }

    let result = app.generate().await?;

    println!("Generation completed!");
    println!(
        "Sources processed: {}/{}",
        result.sources_processed, result.total_sources
    );
    println!("Files generated: {}", result.statistics.files_generated);
    if let Some(barrel_path) = &result.barrel_path {
        println!("Barrel: {}", barrel_path.display());
    }
    println!(
        "Processing time: {}ms",
        result.statistics.total_processing_time_ms
    );

    for source_result in &result.results {
        println!(
            "  {} ({}): {} interfaces",
            source_result.source_name, source_result.location, source_result.interfaces_synthesized
        );
        for error in &source_result.errors {
            eprintln!("    Error: {error}");
        }
        for warning in &source_result.warnings {
            println!("    Warning: {warning}");
        }
    }

    for (type_name, error) in &result.write_failures {
        eprintln!("  Failed to write {type_name}: {error}");
    }
    for warning in &result.warnings {
        println!("  Warning: {warning}");
    }

    Ok(())
}
