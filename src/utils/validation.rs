use crate::utils::error::{PlanError, Result};
use std::fmt::Display;
use std::path::Path;

/// Linux IFNAMSIZ minus the trailing NUL.
const MAX_INTERFACE_NAME_LEN: usize = 15;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let text = path.to_string_lossy();

    if text.is_empty() {
        return Err(PlanError::settings(field_name, "Path cannot be empty"));
    }

    if text.contains('\0') {
        return Err(PlanError::settings(
            field_name,
            format!("Path '{}' contains null bytes", text.replace('\0', "\\0")),
        ));
    }

    Ok(())
}

pub fn validate_positive_number<T: PartialOrd + Display + Copy>(
    field_name: &str,
    value: T,
    min_value: T,
) -> Result<()> {
    if value < min_value {
        return Err(PlanError::settings(
            field_name,
            format!("Value {} must be at least {}", value, min_value),
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PlanError::settings(
            field_name,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// 介面名稱會被拼入 shell 命令，只允許安全字元
pub fn validate_interface_name(field_name: &str, name: &str) -> Result<()> {
    validate_non_empty_string(field_name, name)?;

    if name.len() > MAX_INTERFACE_NAME_LEN {
        return Err(PlanError::settings(
            field_name,
            format!(
                "Interface name '{}' is longer than {} bytes",
                name, MAX_INTERFACE_NAME_LEN
            ),
        ));
    }

    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | ':' | '@')))
    {
        return Err(PlanError::settings(
            field_name,
            format!("Interface name '{}' contains invalid character {:?}", name, bad),
        ));
    }

    Ok(())
}
