use crate::{error::Result, rules::ProviderRuleSet, source::ProviderRuleSource};
use tracing::{debug, warn};

/// Pick the provider rules for a field.
///
/// Explicit rules always win, even when empty. Without them the external
/// source is asked once; without a source the built-in rules are used.
///
/// # Errors
///
/// - Propagates the source's error if it fails.
/// - Returns `Error::InvalidRule` if a pattern does not compile.
pub fn resolve(
    explicit: Option<&[String]>,
    source: Option<&dyn ProviderRuleSource>,
) -> Result<ProviderRuleSet> {
    if let Some(patterns) = explicit {
        let rules = ProviderRuleSet::compile(patterns.iter().cloned())?;
        debug!(origin = "explicit", rules = rules.len(), "resolved provider rules");
        return Ok(rules);
    }

    let Some(source) = source else {
        let rules = ProviderRuleSet::defaults();
        debug!(origin = "default", rules = rules.len(), "resolved provider rules");
        return Ok(rules);
    };

    let stored = source.provider_rules().map_err(|e| {
        warn!(source = source.name(), %e, "provider rule source failed");
        e
    })?;
    let rules = ProviderRuleSet::compile(stored.into_iter().map(|r| r.regex))?;
    debug!(
        origin = source.name(),
        rules = rules.len(),
        "resolved provider rules"
    );
    Ok(rules)
}
