use thiserror::Error;

#[derive(Error, Debug)]
pub enum KardexError {
    #[error("missing required field(s): {}", fields.join(", "))]
    Validation { fields: Vec<String> },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Api(String),
}

impl KardexError {
    /// Builds a validation error from the field names a presence check
    /// reported as missing.
    pub fn missing(fields: Vec<&'static str>) -> Self {
        Self::Validation {
            fields: fields.into_iter().map(str::to_string).collect(),
        }
    }
}

pub type Result<T> = std::result::Result<T, KardexError>;
