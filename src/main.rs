//! Sitemap and robots.txt generation for the statically exported website.

mod cli;
mod config;
mod generator;
mod integrations;
mod logger;
mod provider;
mod utils;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { .. } => {
            let report = block_on(cli::build::build_site(&config))?;
            log!(
                "build";
                "{} urls ({} pages, {} integrations) in {} file(s)",
                report.urls,
                report.pages,
                report.additional,
                report.sitemaps.files.len()
            );
            if let Some(path) = &report.robots {
                debug!("build"; "robots.txt at {}", path.display());
            }
            Ok(())
        }
        Commands::Paths { args } => block_on(cli::paths::run_paths(args, &config)),
        Commands::Check { args } => cli::check::run_check(args, &config),
    }
}

/// Drive a single command future on a current-thread runtime.
fn block_on<F, T>(future: F) -> Result<T>
where
    F: std::future::Future<Output = Result<T>>,
{
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;

    rt.block_on(future)
}
