//! A URL field which only accepts links to known oEmbed providers.

pub mod config;
pub mod error;
pub mod field;
pub mod introspection;
pub mod resolve;
pub mod rules;
pub mod source;
pub mod telemetry;
pub mod validate;

pub use error::{Error, Result, ValidationError};
pub use field::OEmbedField;
pub use rules::{DEFAULT_PROVIDER_RULES, ProviderRule, ProviderRuleSet};
pub use source::{FileRuleSource, ProviderRuleSource};
