//! Error types for CricScore
//!
//! The scoring core itself is permissive and never fails. Errors only come
//! from strict validation, command parsing, and settings loading.

use thiserror::Error;

use crate::engine::BallKind;

/// Crate-wide error type
#[derive(Debug, Error)]
pub enum ScoreError {
    /// Event rejected by strict validation
    #[error("invalid {kind} event with value {value}: {reason}")]
    InvalidEvent {
        kind: BallKind,
        value: u32,
        reason: &'static str,
    },

    /// Strict mode refuses deliveries once the side is all out
    #[error("innings complete: {wickets} wickets down")]
    InningsComplete { wickets: u32 },

    /// Input that doesn't map to any scorer command
    #[error("unknown command: {0:?}")]
    UnknownCommand(String),

    /// Settings failed validation
    #[error("invalid settings: {0}")]
    Settings(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScoreError {
    /// Whether the error came from strict event validation
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            ScoreError::InvalidEvent { .. } | ScoreError::InningsComplete { .. }
        )
    }
}

/// Result alias for CricScore operations
pub type Result<T> = std::result::Result<T, ScoreError>;
