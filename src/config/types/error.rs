//! Errors raised while loading `sitemap.toml`.

use super::FieldPath;
use owo_colors::{OwoColorize, Stream, Style};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid TOML in config file")]
    Toml(#[from] toml::de::Error),

    // Displayed as-is; no source() so anyhow does not print it twice
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

/// One rejected field value.
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = self.field.as_str();
        write!(
            f,
            "  {} {}",
            field.if_supports_color(Stream::Stderr, |s| s.cyan()),
            self.message
        )?;
        if let Some(hint) = &self.hint {
            write!(
                f,
                "\n    {} {}",
                "hint:".if_supports_color(Stream::Stderr, |s| s.yellow()),
                hint
            )?;
        }
        Ok(())
    }
}

/// Every validation failure of a config file, reported in one go.
///
/// Rendered grouped by TOML table:
///
/// ```text
/// invalid sitemap.toml:
/// [sitemap]
///   sitemap.sitemap_size must be greater than 0
///   sitemap.priority 1.5 is out of range, must be within 0.0 and 1.0
/// ```
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(field, message));
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(field, message).with_hint(hint));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    /// `Err(self)` when anything was reported.
    pub fn into_result(self) -> Result<(), Self> {
        if self.has_errors() {
            Err(self)
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = "invalid sitemap.toml:";
        write!(
            f,
            "{}",
            title.if_supports_color(Stream::Stderr, |s| s.style(Style::new().red().bold()))
        )?;

        // Sections validate in order, so each table's errors are contiguous
        let mut current = None;
        for diag in self.errors() {
            let section = diag.field.section();
            if current != Some(section) {
                let header = format!("[{section}]");
                write!(
                    f,
                    "\n{}",
                    header.if_supports_color(Stream::Stderr, |s| s.bold())
                )?;
                current = Some(section);
            }
            write!(f, "\n{diag}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}
