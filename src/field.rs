use crate::{
    config::Config,
    error::Result,
    introspection::{BaseField, IntrospectionRule},
    resolve::resolve,
    rules::ProviderRuleSet,
    source::{FileRuleSource, ProviderRuleSource},
    validate::{UrlValidator, Validate, validate_provider_url},
};
use std::{
    fmt,
    sync::{Arc, OnceLock},
};

/// A URL pointing to an oEmbed provider.
///
/// Combines the checks of a plain URL field with a list of provider rules.
/// The rules come from, in order of preference: the explicit list given at
/// construction, the injected [`ProviderRuleSource`], or
/// [`DEFAULT_PROVIDER_RULES`](crate::rules::DEFAULT_PROVIDER_RULES). They are
/// resolved once and kept for the lifetime of the field.
///
/// See <http://www.oembed.com/> for information on providers.
#[derive(Clone, Default)]
pub struct OEmbedField {
    explicit_rules: Option<Vec<String>>,
    source: Option<Arc<dyn ProviderRuleSource>>,
    url_validator: UrlValidator,
    resolved: OnceLock<ProviderRuleSet>,
}

impl OEmbedField {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Field restricted to `rules`, an iterable of regex patterns defining
    /// valid provider URL schemes. No rule source is consulted, even when
    /// `rules` is empty.
    #[must_use]
    pub fn from_rules<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            explicit_rules: Some(rules.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Field configured from `config`: its rule file, when set, becomes the
    /// rule source.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let field = Self::new().with_max_length(config.max_length);
        match &config.rules_path {
            Some(path) => field.with_source(Arc::new(FileRuleSource::new(path))),
            None => field,
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn ProviderRuleSource>) -> Self {
        self.source = Some(source);
        self.resolved = OnceLock::new();
        self
    }

    #[must_use]
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.url_validator = UrlValidator::new(max_length);
        self
    }

    #[inline]
    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.url_validator.max_length()
    }

    #[inline]
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }

    /// Resolve the provider rules if that has not happened yet.
    ///
    /// # Errors
    ///
    /// - Propagates the rule source's error; nothing is cached and the next
    ///   call asks the source again.
    /// - Returns `Error::InvalidRule` if a pattern does not compile.
    pub fn ensure_resolved(&self) -> Result<&ProviderRuleSet> {
        if let Some(rules) = self.resolved.get() {
            return Ok(rules);
        }
        let rules = resolve(self.explicit_rules.as_deref(), self.source.as_deref())?;
        // A concurrent first resolution computes the same set; either may win.
        Ok(self.resolved.get_or_init(|| rules))
    }

    /// Check `value` against the provider rules only.
    ///
    /// # Errors
    ///
    /// - `ValidationError::NotOEmbedLink` when no rule matches.
    /// - Any error from [`Self::ensure_resolved`].
    pub fn validate(&self, value: &str) -> Result<()> {
        validate_provider_url(value, self.ensure_resolved()?)
    }

    /// Run the plain URL checks, then the provider check, returning the
    /// cleaned value.
    ///
    /// # Errors
    ///
    /// Returns the first failing check's error.
    pub fn clean(&self, value: &str) -> Result<String> {
        let cleaned = self.url_validator.validate(value)?;
        self.validate(&cleaned)?;
        Ok(cleaned)
    }

    /// Declare this field equivalent to a plain URL field for migrations.
    #[must_use]
    pub fn introspection_rule(&self) -> IntrospectionRule {
        IntrospectionRule::new(
            module_path!(),
            "OEmbedField",
            BaseField::Url,
            self.max_length(),
        )
    }
}

impl Validate for OEmbedField {
    fn validate(&self, input: &str) -> Result<String> {
        self.clean(input)
    }
}

impl fmt::Debug for OEmbedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OEmbedField")
            .field("explicit_rules", &self.explicit_rules)
            .field("source", &self.source.as_ref().map(|s| s.name()))
            .field("url_validator", &self.url_validator)
            .field("resolved", &self.resolved.get())
            .finish()
    }
}
