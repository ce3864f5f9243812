use crate::utils::error::{DisplayError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(DisplayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(DisplayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty".to_string(),
        });
    }
    Ok(())
}

/// 名稱列表必須剛好有 `expected` 個項目（例如 7 天、12 個月）
pub fn validate_name_list(field_name: &str, names: &[String], expected: usize) -> Result<()> {
    if names.len() != expected {
        return Err(DisplayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: names.join(", "),
            reason: format!("Expected {} entries, found {}", expected, names.len()),
        });
    }

    if let Some(index) = names.iter().position(|name| name.trim().is_empty()) {
        return Err(DisplayError::InvalidConfigValueError {
            field: format!("{}[{}]", field_name, index),
            value: String::new(),
            reason: "Name cannot be empty or whitespace-only".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| DisplayError::MissingConfigError {
        field: field_name.to_string(),
    })
}
