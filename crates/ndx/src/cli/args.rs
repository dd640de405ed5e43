//! Clap argument definitions for the `ndx` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use ndx_page::ViewportClass;
use ndx_record::CategoryFilter;

/// Parses a category filter from a CLI string.
fn parse_category(s: &str) -> Result<CategoryFilter, String> {
    s.parse()
}

/// Parses a viewport class from a CLI string.
fn parse_viewport(s: &str) -> Result<ViewportClass, String> {
    s.parse()
}

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "ndx")]
#[command(about = "Nursing Diagnosis Explorer - browse a diagnosis reference collection")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared flag selecting the record collection.
#[derive(Args, Debug, Clone, Default)]
pub struct StoreArgs {
    /// Path to the JSON record collection (overrides configuration)
    #[arg(long)]
    pub data: Option<PathBuf>,
}

/// Shared output mode flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output titles only
    #[arg(long)]
    pub list: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Disable match highlighting in text output
    #[arg(long)]
    pub no_highlight: bool,
}

/// Arguments for `ndx search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Search terms; leave empty to browse the whole collection
    pub query: Vec<String>,

    /// Category filter: all, risk, readiness, or actual [default: all]
    #[arg(short = 'c', long, value_parser = parse_category)]
    pub category: Option<CategoryFilter>,

    /// Page to show, 1-based [default: 1]
    #[arg(short = 'p', long)]
    pub page: Option<usize>,

    /// Records per page [default: 12]
    #[arg(short = 's', long)]
    pub page_size: Option<usize>,

    /// Pagination window size: default, small, or very-small
    #[arg(long, value_parser = parse_viewport)]
    pub viewport: Option<ViewportClass>,

    #[command(flatten)]
    /// Record collection selection.
    pub store: StoreArgs,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `ndx get`.
#[derive(Args, Debug, Clone)]
pub struct GetCommand {
    /// Exact diagnosis title (case-insensitive)
    pub title: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    /// Record collection selection.
    pub store: StoreArgs,
}

/// Arguments for `ndx ls`.
#[derive(Args, Debug, Clone)]
pub struct LsCommand {
    /// Category filter: all, risk, readiness, or actual [default: all]
    #[arg(short = 'c', long, value_parser = parse_category)]
    pub category: Option<CategoryFilter>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    /// Record collection selection.
    pub store: StoreArgs,
}

/// Arguments for `ndx init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.ndx.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `ndx status`.
#[derive(Args, Debug, Clone)]
pub struct StatusCommand {
    #[command(flatten)]
    /// Record collection selection.
    pub store: StoreArgs,
}

/// Supported `ndx` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Search the collection and show a page of ranked matches
    #[command(after_help = "\
MATCHING:
  Every term must occur in a field for that field to match; a record
  matches when any of its fields does. Title matches rank highest,
  definition matches next, list fields lowest.

EXAMPLES:
  ndx search                          Browse everything, page 1
  ndx search acute pain               Ranked search
  ndx search -c risk infection        Search within risk diagnoses
  ndx search -p 3 -s 24               Third page, 24 records per page
  ndx search --viewport small pain    Narrow page-number bar
  ndx search --json pain              Machine-readable output")]
    Search(SearchCommand),

    /// Show one diagnosis in full by its exact title
    Get(GetCommand),

    /// List diagnoses with category and source page
    Ls(LsCommand),

    /// Initialize ndx configuration in current directory
    Init(InitCommand),

    /// Show configuration, effective settings, and collection statistics
    Status(StatusCommand),
}

/// Parses CLI arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}
