//! Structured error types for dnakit.

use thiserror::Error;

/// Unified error type for all dnakit operations.
///
/// The analysis engine itself only ever reports [`DnakitError::InvalidInput`];
/// the remaining variants belong to the sequence source (FASTA text, files).
#[derive(Debug, Error)]
pub enum DnakitError {
    /// Invalid input (bad bases, bad frame number, bad primer or enzyme site)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Parse error (FASTA text without any sequence)
    #[error("parse error: {0}")]
    Parse(String),

    /// I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DnakitError {
    /// Whether this is the engine's invalid-input condition.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, DnakitError::InvalidInput(_))
    }
}

/// Convenience alias used throughout dnakit.
pub type Result<T> = std::result::Result<T, DnakitError>;
