//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Relog - release changelogs and notes from git history and tracker tickets
#[derive(Parser, Debug)]
#[command(name = "relog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if relog was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report changes from a tag to HEAD as a markdown changelog
    #[command(
        name = "changelog",
        long_about = "Report changes from a tag to HEAD as a markdown changelog.\n\n\
            Commits are parsed for ticket references (#123). Ticket metadata is \
            fetched from the issue tracker and changes are grouped under the \
            subsystem labels carried by their tickets, with a separate Highlights \
            section for tickets labeled Highlight.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Changelog since the most recent v* tag
    relog changelog

    # Changelog since a specific tag
    relog changelog v4.8.12

    # Offline run without tracker lookups (no labels, so only the
    # section headings are printed)
    relog changelog --no-fetch"
    )]
    Changelog {
        /// Target tag; defaults to the most recent v* tag
        tag: Option<String>,

        /// Skip tracker lookups
        #[arg(long)]
        no_fetch: bool,
    },

    /// Generate release notes: download links plus the changelog
    #[command(
        name = "notes",
        long_about = "Generate release notes from a tag to HEAD.\n\n\
            Prints a Downloads section with one link per installer artifact \
            (standard, admin, CLI, CLI admin) built from the [release] templates \
            in relog.toml, followed by the changelog for the same window.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Release notes since the most recent v* tag
    relog notes

    # Pin the build version used in download links
    relog notes --build-version 4.8.12+2024"
    )]
    Notes {
        /// Target tag; defaults to the most recent v* tag
        tag: Option<String>,

        /// Build version for download links; defaults to the target tag
        /// without its leading `v`
        #[arg(long, value_name = "VERSION")]
        build_version: Option<String>,

        /// Skip tracker lookups
        #[arg(long)]
        no_fetch: bool,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
