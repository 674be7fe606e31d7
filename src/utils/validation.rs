use crate::utils::error::{PricingError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_greater_than_zero(field_name: &str, label: &str, value: f64) -> Result<()> {
    if value <= 0.0 {
        return Err(PricingError::validation(
            field_name,
            &format!("{} must be greater than 0", label),
        ));
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, label: &str, value: f64) -> Result<()> {
    if value < 0.0 {
        return Err(PricingError::validation(
            field_name,
            &format!("{} cannot be negative", label),
        ));
    }
    Ok(())
}

/// Rejects NaN and infinities coming from config files or flags.
pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(PricingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PricingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
