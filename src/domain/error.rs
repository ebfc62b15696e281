use thiserror::Error;

use super::user::UserValidationError;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        violations: Vec<UserValidationError>,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    /// Build a validation error listing every violated rule
    pub fn validation_failed(violations: Vec<UserValidationError>) -> Self {
        let message = violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");

        Self::Validation {
            message,
            violations,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Violated rules carried by a validation error
    pub fn violations(&self) -> &[UserValidationError] {
        match self {
            Self::Validation { violations, .. } => violations,
            Self::Configuration { .. } => &[],
        }
    }
}
