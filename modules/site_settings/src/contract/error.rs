//! Contract error types for site settings
//!
//! These errors are transport-agnostic and used for inter-module communication.
//! Every lookup outcome that is not a success is exactly one of these.

use super::model::Namespace;

/// Classified lookup failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The requested key has no record in its namespace
    #[error("{namespace} key not found: {key}")]
    NotFound {
        /// Namespace that was queried
        namespace: Namespace,
        /// Requested key
        key: String,
    },
    /// The store failed for a reason other than key absence
    #[error("Internal error: {cause}")]
    Internal {
        /// Rendered error chain of the underlying store failure
        cause: String,
    },
}

/// Transport-level category a classified outcome maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    ResourceMissing,
    ServerFailure,
}

impl SettingsError {
    pub fn category(&self) -> StatusCategory {
        match self {
            Self::NotFound { .. } => StatusCategory::ResourceMissing,
            Self::Internal { .. } => StatusCategory::ServerFailure,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Underlying cause, kept for diagnostics
    pub fn cause(&self) -> Option<&str> {
        match self {
            Self::NotFound { .. } => None,
            Self::Internal { cause } => Some(cause),
        }
    }
}
