pub mod cli;

use crate::core::ConfigProvider;
use crate::domain::model::DEFAULT_INTENSITY_FACTOR;
use std::env;
use std::ffi::OsString;

pub const INTENSITY_FACTOR_VAR: &str = "intensity_factor";

/// Settings read from the process environment.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvConfig {
    pub intensity_factor: String,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var_os(key))
    }

    /// Non-UTF-8 values are kept as lossy text; they then fail to parse and
    /// are reported in the response.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        Self {
            intensity_factor: lookup(INTENSITY_FACTOR_VAR)
                .map(|value| value.to_string_lossy().into_owned())
                .unwrap_or_else(|| DEFAULT_INTENSITY_FACTOR.to_string()),
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            intensity_factor: DEFAULT_INTENSITY_FACTOR.to_string(),
        }
    }
}

impl ConfigProvider for EnvConfig {
    fn intensity_factor(&self) -> &str {
        &self.intensity_factor
    }
}
