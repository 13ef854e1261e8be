//! Site configuration management for `sitemap.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! ├── types/         # ConfigError, diagnostics, field paths
//! ├── util.rs        # Config file lookup, path resolution
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section            | Purpose                                        |
//! |--------------------|------------------------------------------------|
//! | `[site]`           | Absolute site origin                           |
//! | `[sitemap]`        | Robots switch, exclusion globs, chunking       |
//! | `[robots]`         | robots.txt policies and extra sitemaps         |
//! | `[integrations]`   | Source of `/integrations/...` paths            |
//! | `[build]`          | Static export directory, minification          |
//!
//! Every field has a default, so a missing or empty `sitemap.toml` yields
//! the production configuration of the marketing site.

pub mod section;
pub mod types;
mod util;

use util::{find_config_file, resolve_config_path};

pub use section::{
    BuildSectionConfig, ChangeFreq, IntegrationsSectionConfig, RobotsPolicy, RobotsTxtOptions,
    SiteSectionConfig, SitemapSectionConfig,
};
#[cfg(test)]
pub use section::{DEFAULT_EXCLUDE, default_exclude};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{BuildArgs, Cli, Commands, PathsArgs},
    debug, log,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing sitemap.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub site: SiteSectionConfig,

    #[serde(default)]
    pub sitemap: SitemapSectionConfig,

    #[serde(default)]
    pub robots: RobotsTxtOptions,

    #[serde(default)]
    pub integrations: IntegrationsSectionConfig,

    #[serde(default)]
    pub build: BuildSectionConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let mut config = Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            site: SiteSectionConfig::default(),
            sitemap: SitemapSectionConfig::default(),
            robots: RobotsTxtOptions::default(),
            integrations: IntegrationsSectionConfig::default(),
            build: BuildSectionConfig::default(),
        };
        config.resolve_robots();
        config
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. A missing file is not an
    /// error: the defaults describe the production site.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.config_path = path;
                config
            }
            None => {
                debug!("config"; "{} not found, using defaults", cli.config.display());
                Self {
                    config_path: cwd.join(&cli.config),
                    ..Self::default()
                }
            }
        };

        let root = config
            .config_path
            .parent()
            .map_or_else(|| cwd.clone(), Path::to_path_buf);

        config.apply_command_options(cli);
        config.normalize_paths(&root);
        config.validate()?;
        debug!("config"; "root {}", config.get_root().display());

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let mut config: Self = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        config.resolve_robots();
        Ok((config, ignored))
    }

    /// Without explicit `[[robots.policies]]`, robots.txt disallows exactly
    /// what the sitemap excludes.
    fn resolve_robots(&mut self) {
        self.robots.resolve(&self.sitemap.exclude);
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Build { build_args } => self.apply_build_args(build_args),
            Commands::Paths { args } => self.apply_paths_args(args),
            // Check command doesn't modify config
            Commands::Check { .. } => {}
        }
    }

    /// Apply build arguments from CLI.
    fn apply_build_args(&mut self, args: &BuildArgs) {
        crate::logger::set_verbose(args.verbose);

        Self::update_option(&mut self.build.output, args.output.as_ref());
        Self::update_option(&mut self.build.minify, args.minify.as_ref());
        Self::update_option(&mut self.site.url, args.site_url.as_ref());
        Self::update_option(
            &mut self.sitemap.generate_robots_txt,
            args.robots.as_ref(),
        );
        if args.integrations.is_some() {
            self.integrations.source = args.integrations.clone();
        }
    }

    fn apply_paths_args(&mut self, args: &PathsArgs) {
        if args.integrations.is_some() {
            self.integrations.source = args.integrations.clone();
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Normalize all paths relative to root directory.
    fn normalize_paths(&mut self, root: &Path) {
        let root = crate::utils::path::normalize_path(root);
        self.config_path = crate::utils::path::normalize_path(&self.config_path);

        self.build.output = resolve_config_path(&self.build.output, &root);
        if let Some(source) = self.integrations.source.take() {
            self.integrations.source = Some(resolve_config_path(&source, &root));
        }

        self.root = root;
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.sitemap.validate(&mut diag);
        self.robots.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields to catch typos in tests.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
