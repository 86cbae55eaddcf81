//! Failures raised while turning raw parameters into a `RackCfg`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RackError {
    /// A required parameter was not supplied.
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    /// A parameter was supplied but cannot describe a rack.
    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

impl RackError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        RackError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending parameter.
    pub fn field(&self) -> &'static str {
        match self {
            RackError::MissingArgument(field) => *field,
            RackError::InvalidInput { field, .. } => *field,
        }
    }
}
