use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvocationError {
    #[error("Invalid JSON input: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Request must be a JSON object, got {found}")]
    NotAnObject { found: String },

    #[error("Field 'kwh' must be a number, got {value}")]
    InvalidKwh { value: String },

    #[error("Invalid intensity_factor '{value}': {reason}")]
    InvalidIntensityFactor { value: String, reason: String },

    #[error("Carbon score is not finite (kwh={kwh}, intensity_factor={intensity_factor})")]
    NonFiniteScore { kwh: f64, intensity_factor: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, InvocationError>;
