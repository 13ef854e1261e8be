//! Glob exclusion matching.
//!
//! Patterns use a single wildcard, `*`, which matches any run of characters
//! including `/`. Everything else is literal and the whole route must match:
//!
//! | Pattern                      | Matches                          | Does not match          |
//! |------------------------------|----------------------------------|-------------------------|
//! | `/buy/*`                     | `/buy/pro`, `/buy/a/b`           | `/buy`, `/buyers`       |
//! | `/docs/plugins/sources/_*`   | `/docs/plugins/sources/_intro`   | `/docs/plugins/sources/aws` |
//! | `/docs/plugins/sources/*/_*` | `/docs/plugins/sources/aws/_x`   | `/docs/plugins/sources/aws/tables` |
//!
//! Patterns are not validated; a string without `*` is an exact route.

use regex::{Regex, RegexSet};

/// Compiled set of exclusion globs.
#[derive(Debug, Clone)]
pub struct ExcludeMatcher {
    set: RegexSet,
    patterns: Vec<String>,
}

impl ExcludeMatcher {
    pub fn new<I, S>(patterns: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns: Vec<String> = patterns
            .into_iter()
            .map(|p| p.as_ref().to_owned())
            .collect();
        let set = RegexSet::new(patterns.iter().map(|p| glob_to_regex(p)))?;
        Ok(Self { set, patterns })
    }

    pub fn is_excluded(&self, path: &str) -> bool {
        self.set.is_match(path)
    }

    /// First pattern (in configured order) that matches `path`.
    pub fn matching(&self, path: &str) -> Option<&str> {
        self.set
            .matches(path)
            .iter()
            .next()
            .map(|i| self.patterns[i].as_str())
    }
}

/// One-off match of a single glob, for rules that are not precompiled.
pub fn glob_matches(pattern: &str, path: &str) -> bool {
    Regex::new(&glob_to_regex(pattern)).is_ok_and(|re| re.is_match(path))
}

/// Translate a `*` glob into an anchored regex.
fn glob_to_regex(pattern: &str) -> String {
    let body = pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    format!("(?s)^{body}$")
}
