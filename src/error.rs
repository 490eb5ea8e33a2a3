//! @acp:module "Errors"
//! @acp:summary "Library error type and result alias"
//! @acp:domain cli
//! @acp:layer model

use thiserror::Error;

/// @acp:summary "Errors raised by niche loading, generation and persistence"
#[derive(Debug, Error)]
pub enum CourseError {
    /// Niche key missing from the lookup source, or the source is unusable
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Niche definition failed validation (required field or slug format)
    #[error("invalid niche '{niche}': {reason}")]
    Validation { niche: String, reason: String },

    /// Tier selector not recognized
    #[error("unknown tier '{0}' (expected all, mini-diploma, foundation, practitioner-bundle or income-accelerator)")]
    UnknownTier(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CourseError {
    pub(crate) fn validation(niche: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            niche: niche.into(),
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, CourseError>;
