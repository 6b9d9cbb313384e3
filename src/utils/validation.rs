use crate::utils::error::{CollatzError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(CollatzError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(CollatzError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("bound", 5, 1).is_ok());
        assert!(validate_positive_number("bound", 0, 1).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("workers", 4, 1, 512).is_ok());
        assert!(validate_range("workers", 0, 1, 512).is_err());
        assert!(validate_range("workers", 1024, 1, 512).is_err());
    }
}
