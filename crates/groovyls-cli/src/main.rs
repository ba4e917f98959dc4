//! Groovy classpath CLI
//!
//! Shows which additional libraries folder the Groovy language server will
//! pick up from editor settings, and what that contributes.

mod cli;
mod commands;
mod context;
mod error;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands};
use context::Context;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.clone() {
        Some(cmd) => execute_command(&cli, cmd),
        None => {
            // No command provided - show help hint
            println!("{} Groovy classpath CLI", "groovy-classpath".green().bold());
            println!();
            println!(
                "Run {} for available commands.",
                "groovy-classpath --help".cyan()
            );
            Ok(())
        }
    }
}

/// Logs go to stderr so `--json` output stays clean.
fn init_tracing(verbose: bool) {
    if verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    } else {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
}

fn execute_command(cli: &Cli, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Resolve { json } => commands::run_resolve(&Context::from_cli(cli)?, json),
        Commands::Check => commands::run_check(&Context::from_cli(cli)?),
        Commands::Classpath { json, lines } => {
            commands::run_classpath(&Context::from_cli(cli)?, json, lines)
        }
        Commands::Sources { json } => commands::run_sources(&Context::from_cli(cli)?, json),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "groovy-classpath",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
