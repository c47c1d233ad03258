//! Error types for Envmon

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvmonError {
    // Dataset errors. Every loader failure (missing file, bad encoding, bad
    // syntax, unexpected top-level shape) collapses into this one class; the
    // reason is for logs, not for clients.
    #[error("Dataset unavailable: {reason}")]
    DatasetUnavailable { reason: String },

    // Filter validation errors
    #[error("Invalid zone: {value}")]
    InvalidZone { value: String },

    #[error("Invalid sample type: {value}")]
    InvalidSampleType { value: String },

    #[error("Invalid status: {value}")]
    InvalidStatus { value: String },
}

impl EnvmonError {
    /// True for errors caused by a caller-supplied filter value outside its
    /// enumerated domain, as opposed to dataset failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EnvmonError::InvalidZone { .. }
                | EnvmonError::InvalidSampleType { .. }
                | EnvmonError::InvalidStatus { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, EnvmonError>;
