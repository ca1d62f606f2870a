pub mod utils;

use crate::{
    error::{Result, ValidationError},
    rules::ProviderRuleSet,
};
use tracing::debug;
use url::Url;

pub const DEFAULT_MAX_LENGTH: usize = 200;
const URL_SCHEMES: &[&str] = &["http", "https", "ftp", "ftps"];

/// Trait for validating user-supplied field values.
///
/// Implementors should:
/// - Check format (e.g., length, characters).
/// - Canonicalize if needed (e.g., trim surrounding whitespace).
/// - Return `Ok(canonical_value)` on success or `Err(Error::Validation(...))` on failure.
pub trait Validate {
    /// Validate the input and return a canonicalized String.
    fn validate(&self, input: &str) -> Result<String>;
}

/// Check `candidate` against `rules`, first matching rule wins.
///
/// # Errors
///
/// Returns `ValidationError::NotOEmbedLink` when no rule matches.
pub fn validate_provider_url(candidate: &str, rules: &ProviderRuleSet) -> Result<()> {
    match rules.first_match(candidate) {
        Some(rule) => {
            debug!(rule, "provider rule matched");
            Ok(())
        }
        None => Err(ValidationError::NotOEmbedLink.into()),
    }
}

/// Accepts values matching one of a fixed set of provider rules.
#[derive(Debug, Clone)]
pub struct ProviderValidator {
    rules: ProviderRuleSet,
}

impl ProviderValidator {
    #[inline]
    #[must_use]
    pub const fn new(rules: ProviderRuleSet) -> Self {
        Self { rules }
    }

    #[inline]
    #[must_use]
    pub const fn rules(&self) -> &ProviderRuleSet {
        &self.rules
    }
}

impl Validate for ProviderValidator {
    fn validate(&self, input: &str) -> Result<String> {
        validate_provider_url(input, &self.rules)?;
        Ok(input.to_owned())
    }
}

/// Shape checks of a plain URL field: required, bounded length, absolute
/// URL with a known scheme and a host.
#[derive(Debug, Clone, Copy)]
pub struct UrlValidator {
    max_length: usize,
}

impl UrlValidator {
    #[inline]
    #[must_use]
    pub const fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    #[inline]
    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }
}

impl Default for UrlValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LENGTH)
    }
}

impl Validate for UrlValidator {
    fn validate(&self, input: &str) -> Result<String> {
        let trimmed = utils::validate_non_empty(input)?;
        utils::validate_max_length(trimmed, self.max_length)?;

        let url = Url::parse(trimmed).map_err(|_| ValidationError::InvalidUrl)?;
        if !URL_SCHEMES.contains(&url.scheme()) || url.host_str().is_none_or(str::is_empty) {
            return Err(ValidationError::InvalidUrl.into());
        }
        Ok(trimmed.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn field_error(err: Error) -> ValidationError {
        err.as_validation().cloned().expect("expected a field error")
    }

    #[test]
    fn provider_validator_returns_input() {
        let validator = ProviderValidator::new(ProviderRuleSet::defaults());
        assert_eq!(
            validator.validate("http://vimeo.com/12345").unwrap(),
            "http://vimeo.com/12345"
        );
    }

    #[test]
    fn provider_mismatch_message() {
        let err = validate_provider_url("http://example.com/video", &ProviderRuleSet::defaults())
            .unwrap_err();
        assert_eq!(err.to_string(), "Not a valid oEmbed link");
    }

    #[test]
    fn empty_rule_set_rejects_everything() {
        let rules = ProviderRuleSet::default();
        assert!(validate_provider_url("", &rules).is_err());
        assert!(validate_provider_url("http://vimeo.com/1", &rules).is_err());
    }

    #[test]
    fn url_validator_accepts_and_trims() {
        let validator = UrlValidator::default();
        assert_eq!(
            validator.validate("  http://vimeo.com/1 ").unwrap(),
            "http://vimeo.com/1"
        );
        assert!(validator.validate("ftp://files.example.org/a").is_ok());
    }

    #[test]
    fn url_validator_rejects_bad_shapes() {
        let validator = UrlValidator::default();
        assert_eq!(
            field_error(validator.validate("   ").unwrap_err()),
            ValidationError::Required
        );
        for bad in ["abcdef", "mailto:someone@example.com", "javascript:alert(1)"] {
            assert_eq!(
                field_error(validator.validate(bad).unwrap_err()),
                ValidationError::InvalidUrl,
                "{bad}"
            );
        }
    }

    #[test]
    fn url_validator_enforces_length() {
        let validator = UrlValidator::new(20);
        let url = "http://vimeo.com/123456789";
        assert_eq!(
            field_error(validator.validate(url).unwrap_err()),
            ValidationError::TooLong {
                max: 20,
                len: url.len()
            }
        );
    }
}
