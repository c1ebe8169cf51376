use crate::core::calculator::{render, CarbonScoreCalculator};
use crate::core::{ConfigProvider, InvocationResult};
use crate::utils::error::InvocationError;
use std::io::Read;

/// Runs one invocation end to end: resolve the factor, compute, render.
///
/// Configuration errors are rendered the same way as input errors, so the
/// returned text is always a single JSON document.
pub fn invoke<C: ConfigProvider + ?Sized>(config: &C, raw_input: &str) -> String {
    match CarbonScoreCalculator::from_config(config) {
        Ok(calculator) => {
            tracing::debug!(
                intensity_factor = calculator.intensity_factor(),
                "resolved intensity factor"
            );
            calculator.compute(raw_input)
        }
        Err(e) => {
            tracing::warn!("invocation failed: {}", e);
            failure(&e)
        }
    }
}

/// Watchdog exchange: read all of `input`, return the response line.
pub fn invoke_reader<C, R>(config: &C, mut input: R) -> String
where
    C: ConfigProvider + ?Sized,
    R: Read,
{
    let mut raw_input = String::new();
    if let Err(e) = input.read_to_string(&mut raw_input) {
        let e = InvocationError::from(e);
        tracing::error!("failed to read request: {}", e);
        return failure(&e);
    }
    tracing::debug!(bytes = raw_input.len(), "read request");
    invoke(config, &raw_input)
}

fn failure(e: &InvocationError) -> String {
    render(&InvocationResult::Failure {
        error: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnvConfig;

    #[test]
    fn test_invoke_with_default_config() {
        let config = EnvConfig::from_lookup(|_| None);
        let output = invoke(&config, r#"{"kwh": 100}"#);
        assert_eq!(
            output,
            r#"{"carbonScore":45.0,"unit":"kg CO2","engine":"OpenFaaS-Watchdog"}"#
        );
    }

    #[test]
    fn test_invoke_with_invalid_factor() {
        let config = EnvConfig::from_lookup(|_| Some("not-a-number".into()));
        let output = invoke(&config, r#"{"kwh": 100}"#);
        let result: InvocationResult = serde_json::from_str(&output).unwrap();
        match result {
            InvocationResult::Failure { error } => {
                assert!(error.contains("intensity_factor"));
                assert!(error.contains("not-a-number"));
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_invoke_reader() {
        let config = EnvConfig::from_lookup(|_| Some("0.6".into()));
        let output = invoke_reader(&config, r#"{"kwh": 10}"#.as_bytes());
        assert_eq!(
            output,
            r#"{"carbonScore":6.0,"unit":"kg CO2","engine":"OpenFaaS-Watchdog"}"#
        );
    }

    #[test]
    fn test_invoke_reader_non_utf8() {
        let config = EnvConfig::from_lookup(|_| None);
        let output = invoke_reader(&config, &[0xff, 0xfe, 0xfd][..]);
        let result: InvocationResult = serde_json::from_str(&output).unwrap();
        assert!(matches!(result, InvocationResult::Failure { .. }));
    }
}
