//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// A tool to examine and modify VMware VMX configuration files
#[derive(Parser, Debug)]
#[command(name = "vmxtool")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose (debug) logging on stderr
    #[arg(short, long, global = true, env = "VMXTOOL_VERBOSE")]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print version information
    Version,

    /// Print the contents of a VMX file
    Print {
        /// VMX file to read
        file: PathBuf,

        /// Print entries as a JSON array instead of file text
        #[arg(long)]
        json: bool,
    },

    /// Add a new entry; fails if the key already exists
    ///
    /// Examples:
    ///   vmxtool add win10.vmx memsize=4096
    ///   vmxtool add win10.vmx 'displayName="My VM"'
    Add {
        /// VMX file to edit (created if missing)
        file: PathBuf,

        /// Entry to add, as KEY=VALUE
        assignment: String,

        /// Show the change as a diff without writing the file
        #[arg(long)]
        dry_run: bool,
    },

    /// Set an entry, adding it if it does not already exist
    Set {
        /// VMX file to edit (created if missing)
        file: PathBuf,

        /// Entry to set, as KEY=VALUE
        assignment: String,

        /// Show the change as a diff without writing the file
        #[arg(long)]
        dry_run: bool,
    },

    /// Remove an entry; fails if the key does not exist
    Remove {
        /// VMX file to edit
        file: PathBuf,

        /// Key to remove (case-insensitive)
        key: String,

        /// Show the change as a diff without writing the file
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the value for a key; fails if the key does not exist
    Query {
        /// VMX file to read
        file: PathBuf,

        /// Key to look up (case-insensitive)
        key: String,
    },

    /// Generate shell completions
    ///
    /// Examples:
    ///   vmxtool completions bash > ~/.local/share/bash-completion/completions/vmxtool
    ///   vmxtool completions zsh > ~/.zfunc/_vmxtool
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
