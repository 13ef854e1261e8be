//! `[robots]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [robots]
//! additional_sitemaps = ["https://example.com/docs-sitemap.xml"]
//!
//! [[robots.policies]]
//! user_agent = "*"
//! allow = "/"
//! disallow = ["/buy/*"]
//! crawl_delay = 10          # optional
//! ```
//!
//! Without `[[robots.policies]]` there is one policy for every crawler that
//! disallows exactly `[sitemap] exclude` (see [`RobotsTxtOptions::default_policy`]).

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// A single `User-agent` block of robots.txt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotsPolicy {
    pub user_agent: String,
    pub allow: String,
    pub disallow: Vec<String>,
    pub crawl_delay: Option<u32>,
}

impl Default for RobotsPolicy {
    fn default() -> Self {
        Self {
            user_agent: "*".into(),
            allow: "/".into(),
            disallow: Vec::new(),
            crawl_delay: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotsTxtOptions {
    /// Empty until resolved against the sitemap exclusions.
    pub policies: Vec<RobotsPolicy>,
    /// Extra `Sitemap:` lines besides the generated sitemap.
    pub additional_sitemaps: Vec<String>,
}

impl RobotsTxtOptions {
    pub const POLICIES: FieldPath = FieldPath::new("robots.policies");

    /// Every crawler is allowed everywhere except `exclude`.
    pub fn default_policy(exclude: &[String]) -> RobotsPolicy {
        RobotsPolicy {
            disallow: exclude.to_vec(),
            ..RobotsPolicy::default()
        }
    }

    /// Fill in the default policy when none were configured.
    pub fn resolve(&mut self, exclude: &[String]) {
        if self.policies.is_empty() {
            self.policies.push(Self::default_policy(exclude));
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (i, policy) in self.policies.iter().enumerate() {
            if policy.user_agent.trim().is_empty() {
                diag.error_with_hint(
                    Self::POLICIES,
                    format!("policy #{} has an empty user_agent", i + 1),
                    "use \"*\" to match every crawler",
                );
            }
        }
    }

    /// First policy whose `Disallow` list matches `path`, via `matches`.
    pub fn disallowing<'a>(
        &'a self,
        path: &str,
        matches: impl Fn(&str, &str) -> bool,
    ) -> Option<&'a RobotsPolicy> {
        self.policies
            .iter()
            .find(|policy| policy.disallow.iter().any(|rule| matches(rule, path)))
    }
}
