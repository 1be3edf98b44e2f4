use crate::utils::error::{LocationError, Result};

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 驗證經緯度，邊界值 (±90, ±180) 視為合法
///
/// Latitude is checked first, so a point invalid on both axes reports `latitude`.
/// NaN and infinities fall outside the closed ranges and are rejected.
pub fn validate_coordinates(lat: f64, lon: f64) -> Result<()> {
    if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&lat) {
        return Err(LocationError::validation(
            "latitude",
            "must be between -90 and 90",
        ));
    }
    if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&lon) {
        return Err(LocationError::validation(
            "longitude",
            "must be between -180 and 180",
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LocationError::validation(
            field_name,
            "cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(LocationError::ConfigError {
            field: field_name.to_string(),
            message: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(LocationError::ConfigError {
            field: field_name.to_string(),
            message: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(LocationError::ConfigError {
            field: field_name.to_string(),
            message: format!(
                "Unsupported value '{}'. Allowed values: {}",
                value,
                allowed.join(", ")
            ),
        });
    }
    Ok(())
}
