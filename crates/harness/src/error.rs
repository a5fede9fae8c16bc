//! Harness error types.
//!
//! A result mismatch is deliberately NOT an error value: mismatches are the
//! harness's subject matter, reported by the runner and tracked in the run
//! summary. The errors here cover the harness's own machinery only.

use thiserror::Error;

/// Errors the harness machinery can hit.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Console or config-file I/O failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be parsed or validated.
    #[error("configuration error: {0}")]
    Config(String),
}
