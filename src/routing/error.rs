//! Routing error types

use thiserror::Error;

/// Failures raised while building the route table or resolving a path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern {
        pattern: String,
        reason: &'static str,
    },

    #[error("pattern '{pattern}' is already mapped to '{existing}'")]
    DuplicateExactPattern { pattern: String, existing: String },

    #[error("handler name '{0}' is already registered")]
    DuplicateName(String),

    #[error("pattern '{pattern}' is mapped by both '{first}' and '{second}'")]
    AmbiguousRoute {
        pattern: String,
        first: String,
        second: String,
    },

    #[error("no handler for path '{0}'")]
    NotFound(String),
}

impl RouteError {
    /// HTTP status reported to the client for this failure
    pub const fn status(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            _ => 500,
        }
    }

    /// Whether this error is a startup-time configuration fault
    pub const fn is_config_fault(&self) -> bool {
        !matches!(self, Self::NotFound(_))
    }
}
