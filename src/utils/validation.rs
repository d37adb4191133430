use validator::{Validate, ValidationError};

pub fn validate<T: Validate>(val: &T) -> Result<(), validator::ValidationErrors> {
    val.validate()
}

/// Required-field rule: rejects empty and whitespace-only values.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_blank_rejects_whitespace() {
        assert!(not_blank("").is_err());
        assert!(not_blank("   \t").is_err());
        assert!(not_blank("x").is_ok());
    }
}
