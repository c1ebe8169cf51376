use crate::core::{CarbonRequest, CarbonScore, ConfigProvider, InvocationResult, Result};
use crate::utils::error::InvocationError;
use crate::utils::validation::parse_intensity_factor;
use serde_json::Value;

// Used only if rendering the response itself fails.
const SERIALIZATION_FALLBACK: &str = r#"{"error":"failed to serialize response"}"#;

/// Converts energy consumption into an emissions estimate with a fixed intensity factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarbonScoreCalculator {
    intensity_factor: f64,
}

impl CarbonScoreCalculator {
    pub fn new(intensity_factor: f64) -> Self {
        Self { intensity_factor }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let intensity_factor = parse_intensity_factor(config.intensity_factor())?;
        Ok(Self::new(intensity_factor))
    }

    pub fn intensity_factor(&self) -> f64 {
        self.intensity_factor
    }

    /// Parses the raw request, multiplies and rounds. Errors are returned, not rendered.
    pub fn calculate(&self, raw_input: &str) -> Result<CarbonScore> {
        let request = parse_request(raw_input)?;
        let product = request.kwh * self.intensity_factor;

        if !product.is_finite() {
            return Err(InvocationError::NonFiniteScore {
                kwh: request.kwh,
                intensity_factor: self.intensity_factor,
            });
        }

        let carbon_score = round_to_cents(product);
        tracing::debug!(kwh = request.kwh, carbon_score, "computed carbon score");
        Ok(CarbonScore::new(carbon_score))
    }

    /// Always returns a JSON document: the score on success, `{"error": ...}` otherwise.
    pub fn compute(&self, raw_input: &str) -> String {
        let result = self.calculate(raw_input);
        if let Err(e) = &result {
            tracing::warn!("invocation failed: {}", e);
        }
        render(&InvocationResult::from(result))
    }
}

pub fn parse_request(raw_input: &str) -> Result<CarbonRequest> {
    let value: Value = serde_json::from_str(raw_input).map_err(InvocationError::InvalidJson)?;

    let object = match value {
        Value::Object(map) => map,
        other => {
            return Err(InvocationError::NotAnObject {
                found: json_type_name(&other).to_string(),
            })
        }
    };

    let kwh = match object.get("kwh") {
        None => 0.0,
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| InvocationError::InvalidKwh {
            value: n.to_string(),
        })?,
        Some(other) => {
            return Err(InvocationError::InvalidKwh {
                value: other.to_string(),
            })
        }
    };

    Ok(CarbonRequest { kwh })
}

/// Rounds to two decimals, half away from zero.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn render(result: &InvocationResult) -> String {
    match serde_json::to_string(result) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!("{}", InvocationError::Serialization(e));
            SERIALIZATION_FALLBACK.to_string()
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
