//! vmxtool
//!
//! Examine and edit VMware VMX configuration files from the command line.

mod build_info;
mod cli;
mod commands;
mod error;

use std::io::{self, Write};

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use build_info::BuildInfo;
use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    let build = BuildInfo::current();
    if let Err(e) = run(&build) {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(build: &BuildInfo) -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd, build),
        None => {
            eprintln!("Run {} for usage information.", "vmxtool help".cyan());
            Err(CliError::user("no command provided"))
        }
    }
}

fn execute_command(cmd: Commands, build: &BuildInfo) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cmd {
        Commands::Version => {
            writeln!(out, "{}", build)?;
            Ok(())
        }
        Commands::Print { file, json } => commands::run_print(&mut out, &file, json),
        Commands::Add {
            file,
            assignment,
            dry_run,
        } => commands::run_add(&mut out, &file, &assignment, dry_run),
        Commands::Set {
            file,
            assignment,
            dry_run,
        } => commands::run_set(&mut out, &file, &assignment, dry_run),
        Commands::Remove { file, key, dry_run } => {
            commands::run_remove(&mut out, &file, &key, dry_run)
        }
        Commands::Query { file, key } => commands::run_query(&mut out, &file, &key),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "vmxtool", &mut out);
            Ok(())
        }
    }
}
