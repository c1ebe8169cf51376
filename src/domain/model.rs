use serde::{Deserialize, Serialize};

pub const UNIT: &str = "kg CO2";
pub const ENGINE: &str = "OpenFaaS-Watchdog";
pub const DEFAULT_INTENSITY_FACTOR: &str = "0.45";

/// The part of a request payload the calculator consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarbonRequest {
    pub kwh: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonScore {
    pub carbon_score: f64,
    pub unit: String,
    pub engine: String,
}

impl CarbonScore {
    pub fn new(carbon_score: f64) -> Self {
        Self {
            carbon_score,
            unit: UNIT.to_string(),
            engine: ENGINE.to_string(),
        }
    }
}

/// Outcome of one invocation, serialized as either the score object or `{"error": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InvocationResult {
    Success(CarbonScore),
    Failure { error: String },
}

impl<E: std::fmt::Display> From<std::result::Result<CarbonScore, E>> for InvocationResult {
    fn from(result: std::result::Result<CarbonScore, E>) -> Self {
        match result {
            Ok(score) => InvocationResult::Success(score),
            Err(e) => InvocationResult::Failure {
                error: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_shape() {
        let result = InvocationResult::Success(CarbonScore::new(45.0));
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"carbonScore":45.0,"unit":"kg CO2","engine":"OpenFaaS-Watchdog"}"#
        );
    }

    #[test]
    fn test_failure_shape() {
        let result = InvocationResult::Failure {
            error: "boom".to_string(),
        };
        assert_eq!(serde_json::to_string(&result).unwrap(), r#"{"error":"boom"}"#);
        assert!(matches!(result, InvocationResult::Failure { .. }));
    }

    #[test]
    fn test_from_result() {
        let ok: std::result::Result<CarbonScore, String> = Ok(CarbonScore::new(1.5));
        assert_eq!(
            InvocationResult::from(ok),
            InvocationResult::Success(CarbonScore::new(1.5))
        );

        let err: std::result::Result<CarbonScore, String> = Err("bad input".to_string());
        assert_eq!(
            InvocationResult::from(err),
            InvocationResult::Failure {
                error: "bad input".to_string()
            }
        );
    }
}
