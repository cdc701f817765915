//! Clap argument definitions for the `folio` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Browse and query hierarchical document catalogs")]
pub struct Cli {
    /// Catalog selection overrides.
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Flags that override the configured catalog.
#[derive(Args, Debug, Clone, Default)]
pub struct CatalogArgs {
    /// Catalog JSON file to load instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Base url that entry urls are resolved against
    #[arg(long, global = true, value_name = "URL")]
    pub base: Option<String>,
}

/// Arguments for `folio ls`.
#[derive(Args, Debug, Clone)]
pub struct LsCommand {
    /// Show metadata and a catalog summary
    #[arg(short = 'l', long)]
    pub long: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `folio at`.
#[derive(Args, Debug, Clone)]
pub struct AtCommand {
    /// Flat position, counting from 0 in depth-first order
    pub position: usize,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `folio get`.
#[derive(Args, Debug, Clone)]
pub struct GetCommand {
    /// Document url, absolute or relative to the base url
    pub url: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `folio position`.
#[derive(Args, Debug, Clone)]
pub struct PositionCommand {
    /// Document url, absolute or relative to the base url
    pub url: String,
}

/// Arguments for `folio init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.folio.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `folio` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// List every document in depth-first order
    Ls(LsCommand),

    /// Show the document at a flat position
    At(AtCommand),

    /// Show every document with a url
    #[command(after_help = "\
URL RESOLUTION:
  Relative urls are resolved against the base url exactly like catalog entries,
  and fragments are ignored:

  folio get chapter-1.html
  folio get https://books.example/library/chapter-1.html#intro")]
    Get(GetCommand),

    /// Print the flat position of the last document with a url
    Position(PositionCommand),

    /// Show configuration, catalog location, and document counts
    Status,

    /// Validate configuration and catalog
    Check,

    /// Initialize folio configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,
}
