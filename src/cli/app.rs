//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use super::commands;
use nbscan::config::Config;
use nbscan::output::OutputMode;

/// nbscan - Find hidden NO-BREAK SPACE characters
#[derive(Parser, Debug)]
#[command(
    name = "nbscan",
    version,
    about = "Find hidden NO-BREAK SPACE characters",
    long_about = "Report lines that contain U+00A0 NO-BREAK SPACE.\n\n\
                  The character looks exactly like a space but is not one.\n\
                  It usually arrives by copy-pasting from formatted documents."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file to use instead of ./.nbscan.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report lines containing NO-BREAK SPACE
    Scan {
        /// Files or directories to scan
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Exit with status 1 when any line is flagged
        #[arg(long)]
        ci: bool,
    },

    /// Replace NO-BREAK SPACE with an ASCII space
    Fix {
        /// Files or directories to fix
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Report what would change without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Scan { paths, ci }) => {
            let config = load_config(cli.config.as_deref())?;
            commands::scan(&paths, ci, &config, output_mode)
        },
        Some(Command::Fix { paths, dry_run }) => {
            let config = load_config(cli.config.as_deref())?;
            commands::fix(&paths, dry_run, &config, output_mode)?;
            Ok(ExitCode::SUCCESS)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("nbscan v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(ExitCode::SUCCESS)
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("nbscan v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'nbscan --help' for usage");
                println!("Run 'nbscan scan <PATH>' to check a file");
            }
            Ok(ExitCode::SUCCESS)
        },
    }
}

fn load_config(explicit: Option<&std::path::Path>) -> anyhow::Result<Config> {
    let cwd = std::env::current_dir()?;
    Ok(Config::load(explicit, &cwd)?)
}
