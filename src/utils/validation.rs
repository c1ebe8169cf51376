use crate::config::INTENSITY_FACTOR_VAR;
use crate::utils::error::{InvocationError, Result};

/// Parses the configured intensity factor as a finite `f64`.
pub fn parse_intensity_factor(value: &str) -> Result<f64> {
    let invalid = |reason: String| InvocationError::InvalidIntensityFactor {
        value: value.to_string(),
        reason,
    };

    if value.trim().is_empty() {
        return Err(invalid(format!(
            "{} cannot be empty or whitespace-only",
            INTENSITY_FACTOR_VAR
        )));
    }

    let parsed: f64 = value.trim().parse().map_err(|e: std::num::ParseFloatError| {
        invalid(format!("could not convert {} to float: {}", INTENSITY_FACTOR_VAR, e))
    })?;

    if !parsed.is_finite() {
        return Err(invalid(format!("{} must be a finite number", INTENSITY_FACTOR_VAR)));
    }

    Ok(parsed)
}
