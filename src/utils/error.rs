use thiserror::Error;

/// Faults while building inputs or rendering output. A pipeline veto is
/// not an error; it travels as `AdmissionState::Vetoed`.
#[derive(Error, Debug)]
pub enum AdmitError {
    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidFieldError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {field}")]
    MissingFieldError { field: String },

    #[error("Could not parse moment '{value}': expected YYYY-MM-DDTHH:MM")]
    MomentParseError { value: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AdmitError>;
