use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Provider URL shapes used when neither explicit rules nor a rule source is
/// available. Kept verbatim: `.` and `?` are regex metacharacters here.
pub const DEFAULT_PROVIDER_RULES: &[&str] = &[
    r"http://vimeo.com/\S*",
    r"http://\S*.youtube.com/watch\S*",
    r"http://video.google.com/videoplay?\S*",
    r"http://qik.com/\S*",
    r"http://\S*?flickr.com/\S*",
];

static DEFAULT_RULE_SET: OnceLock<ProviderRuleSet> = OnceLock::new();

/// A stored provider rule, as kept in a rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderRule {
    pub regex: String,
}

impl ProviderRule {
    #[inline]
    #[must_use]
    pub fn new(regex: impl Into<String>) -> Self {
        Self {
            regex: regex.into(),
        }
    }
}

impl From<&str> for ProviderRule {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ProviderRule {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone)]
struct CompiledRule {
    pattern: String,
    regex: Regex,
}

impl CompiledRule {
    fn compile(pattern: String) -> Result<Self> {
        let regex = Regex::new(&pattern).map_err(|source| Error::InvalidRule {
            pattern: pattern.clone(),
            source,
        })?;
        Ok(Self { pattern, regex })
    }

    /// Leftmost-first search: a match at offset 0 exists iff the leftmost
    /// match starts there.
    fn matches_prefix(&self, candidate: &str) -> bool {
        self.regex.find(candidate).is_some_and(|m| m.start() == 0)
    }
}

/// Ordered provider rules, each matched from the start of the candidate.
#[derive(Debug, Clone, Default)]
pub struct ProviderRuleSet {
    rules: Vec<CompiledRule>,
}

impl ProviderRuleSet {
    /// Compile `patterns` in order.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidRule` for the first pattern that does not compile.
    pub fn compile<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rules = patterns
            .into_iter()
            .map(|p| CompiledRule::compile(p.into()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// The built-in rule set.
    ///
    /// # Panics
    ///
    /// If one of `DEFAULT_PROVIDER_RULES` fails to compile.
    #[must_use]
    pub fn defaults() -> Self {
        DEFAULT_RULE_SET
            .get_or_init(|| {
                Self::compile(DEFAULT_PROVIDER_RULES.iter().copied())
                    .expect("failed to compile default provider rules")
            })
            .clone()
    }

    /// Pattern strings in match order, as they were supplied.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.pattern.as_str())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Return the first rule matching a prefix of `candidate`.
    #[must_use]
    pub fn first_match(&self, candidate: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|r| r.matches_prefix(candidate))
            .map(|r| r.pattern.as_str())
    }

    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        self.first_match(candidate).is_some()
    }
}
