use crate::error::{Result, ValidationError};

/// Trims whitespace and rejects empty strings.
pub fn validate_non_empty(input: &str) -> Result<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required.into());
    }
    Ok(trimmed)
}

/// Rejects values longer than `max` characters.
pub fn validate_max_length(input: &str, max: usize) -> Result<()> {
    let len = input.chars().count();
    if len > max {
        return Err(ValidationError::TooLong { max, len }.into());
    }
    Ok(())
}
