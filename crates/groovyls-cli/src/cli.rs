//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Inspect the extra classpath folder the Groovy language server picks up
#[derive(Parser, Debug)]
#[command(name = "groovy-classpath")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Workspace root (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    /// User settings file (defaults to the editor's user settings.json)
    #[arg(long, global = true, value_name = "FILE")]
    pub user_settings: Option<PathBuf>,

    /// Override groovy.additional.libraries
    #[arg(
        long,
        global = true,
        env = "GROOVY_ADDITIONAL_LIBRARIES",
        value_name = "PATH"
    )]
    pub additional_libraries: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the additional classpath folder, or nothing if there is none
    Resolve {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Explain why the configured folder is or is not used
    Check,

    /// Print the jars contributed by the additional classpath folder
    ///
    /// Entries are joined with the platform path separator unless
    /// --lines or --json is given.
    Classpath {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,

        /// One entry per line
        #[arg(long, conflicts_with = "json")]
        lines: bool,
    },

    /// Show the compilation unit built for the workspace
    Sources {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    ///
    /// Examples:
    ///   groovy-classpath completions bash > ~/.local/share/bash-completion/completions/groovy-classpath
    ///   groovy-classpath completions zsh > ~/.zfunc/_groovy-classpath
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
