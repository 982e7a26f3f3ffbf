use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use log::info;
use ppgen_library::{Environment, Settings, Source, bootstrap};

use crate::library::{
    ScanReport,
    constant::{AFTER_HELP, SCAN_AFTER_HELP},
    logging::init_logging,
    table::{print_environment_table, print_stats_table},
};

/// Post-processor for pp source manuscripts.
#[derive(Parser, Debug)]
#[command(name = "ppgen")]
#[command(about = "pp source post-processor", long_about = None, after_help = AFTER_HELP)]
pub struct Cli {
    #[command(flatten)]
    pub settings: Settings,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(long, short, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands for the ppgen tool.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the version identifier.
    Version,
    /// Show the environment fixed at startup.
    Info {
        /// Print JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Count lines, empty lines and directive lines in a pp source.
    #[command(after_help = SCAN_AFTER_HELP)]
    Scan {
        /// Path to the pp source file.
        path: PathBuf,

        /// Print JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

pub fn run() -> anyhow::Result<()> {
    let args = Cli::parse();

    init_logging(args.verbose);

    let environment = bootstrap(&args.settings).context("Startup failed")?;
    info!("ppgen {} started {}", environment.version, environment.started);

    match args.command {
        Commands::Version => println!("{}", environment.version),
        Commands::Info { json } => show_info(&environment, json)?,
        Commands::Scan { path, json } => scan_source(path, json)?,
    }

    Ok(())
}

fn show_info(environment: &Environment, json: bool) -> anyhow::Result<()> {
    match json {
        true => println!("{}", serde_json::to_string_pretty(environment)?),
        false => print_environment_table(environment),
    }

    Ok(())
}

fn scan_source(path: PathBuf, json: bool) -> anyhow::Result<()> {
    let source =
        Source::read(&path).with_context(|| format!("Failed to load {}", path.display()))?;

    let stats = source.stats()?;
    info!("Scanned {} lines from {}", stats.lines, path.display());

    match json {
        true => println!(
            "{}",
            serde_json::to_string_pretty(&ScanReport { path: &path, stats })?
        ),
        false => print_stats_table(&path, &stats),
    }

    Ok(())
}
