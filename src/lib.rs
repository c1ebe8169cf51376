pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::CliConfig, EnvConfig};
pub use core::{calculator::CarbonScoreCalculator, invocation::invoke};
pub use domain::model::{CarbonScore, InvocationResult};
pub use utils::error::{InvocationError, Result};
