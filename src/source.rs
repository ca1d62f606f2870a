use crate::{error::Result, rules::ProviderRule};
use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
};
use tracing::debug;

/// A store of provider rules living outside the field, such as a rule table.
///
/// The composition root decides whether one exists; a field without a source
/// falls back to the built-in rules.
pub trait ProviderRuleSource: Send + Sync {
    /// Short name used for logging.
    fn name(&self) -> &'static str;

    /// Return every stored rule, in storage order.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be read.
    fn provider_rules(&self) -> Result<Vec<ProviderRule>>;
}

impl ProviderRuleSource for Vec<ProviderRule> {
    fn name(&self) -> &'static str {
        "static"
    }

    fn provider_rules(&self) -> Result<Vec<ProviderRule>> {
        Ok(self.clone())
    }
}

/// Rule table kept as a plaintext file: one pattern per line, blank lines and
/// `#` comments ignored.
#[derive(Debug, Clone)]
pub struct FileRuleSource {
    path: PathBuf,
}

impl FileRuleSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProviderRuleSource for FileRuleSource {
    fn name(&self) -> &'static str {
        "file"
    }

    /// # Errors
    ///
    /// Returns `Error::Io` if reading the file fails.
    fn provider_rules(&self) -> Result<Vec<ProviderRule>> {
        let content = read_to_string(&self.path)?;
        let rules = parse_rules(&content);
        debug!(path = %self.path.display(), rules = rules.len(), "read provider rules");
        Ok(rules)
    }
}

fn parse_rules(content: &str) -> Vec<ProviderRule> {
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(ProviderRule::from)
        .collect()
}
