use thiserror::Error;

/// Field-level failures shown to whoever submitted the value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Not a valid oEmbed link")]
    NotOEmbedLink,

    #[error("This field is required.")]
    Required,

    #[error("Enter a valid URL.")]
    InvalidUrl,

    #[error("Ensure this value has at most {max} characters (it has {len}).")]
    TooLong { max: usize, len: usize },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("invalid provider rule {pattern:?}: {source}")]
    InvalidRule {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("provider rule source failed: {0}")]
    RuleSource(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("other: {0}")]
    Other(String),
}

impl Error {
    #[inline]
    pub fn other(text: impl Into<String>) -> Self {
        Self::Other(text.into())
    }

    #[inline]
    pub fn rule_source(text: impl Into<String>) -> Self {
        Self::RuleSource(text.into())
    }

    /// The field error carried by this error, if it is one.
    #[must_use]
    pub const fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages() {
        assert_eq!(
            Error::from(ValidationError::NotOEmbedLink).to_string(),
            "Not a valid oEmbed link"
        );
        assert_eq!(
            ValidationError::TooLong { max: 200, len: 201 }.to_string(),
            "Ensure this value has at most 200 characters (it has 201)."
        );
    }

    #[test]
    fn as_validation_only_for_field_errors() {
        assert_eq!(
            Error::from(ValidationError::InvalidUrl).as_validation(),
            Some(&ValidationError::InvalidUrl)
        );
        assert!(Error::other("boom").as_validation().is_none());
    }
}
