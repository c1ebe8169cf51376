pub mod calculator;
pub mod invocation;

pub use crate::domain::model::{CarbonRequest, CarbonScore, InvocationResult};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
