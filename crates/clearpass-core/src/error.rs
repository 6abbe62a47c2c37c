use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClearpassError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Malformed table: {0}")]
    MalformedTable(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for ClearpassError {
    fn from(e: serde_json::Error) -> Self {
        ClearpassError::SerializationError(e.to_string())
    }
}
