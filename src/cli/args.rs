//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// sitemap.xml and robots.txt generator for statically exported sites
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: sitemap.toml)
    #[arg(short = 'C', long, default_value = "sitemap.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write sitemap.xml and robots.txt into the export directory
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Print the additional integration paths as JSON
    #[command(visible_alias = "p")]
    Paths {
        #[command(flatten)]
        args: PathsArgs,
    },

    /// Show whether routes are excluded from the sitemap or disallowed for crawlers
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },
}

/// Build command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Export directory to scan and write into (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Override site URL, e.g. for staging deployments
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Integrations source: JSON slug file or directory of integration pages
    #[arg(short = 'I', long, value_hint = clap::ValueHint::AnyPath)]
    pub integrations: Option<PathBuf>,

    /// Generate robots.txt
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub robots: Option<bool>,

    /// Minify the generated XML
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Paths command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct PathsArgs {
    /// Integrations source: JSON slug file or directory of integration pages
    #[arg(short = 'I', long, value_hint = clap::ValueHint::AnyPath)]
    pub integrations: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

/// Check command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Site-relative routes to check, e.g. `/buy/pro`
    #[arg(value_name = "ROUTE", required = true)]
    pub routes: Vec<String>,
}
