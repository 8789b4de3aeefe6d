/// Serializable diagnostic and error types.
///
/// Nothing here is ever written to stdout, which carries only the verdict
/// line. These go to stderr.
use serde::{Deserialize, Serialize};

use crate::check::{CheckError, Outcome};

/// One-line summary of a classification, emitted when debug diagnostics are on.
#[derive(Debug, Clone, Serialize)]
pub struct OutcomeReport {
    /// Length of the inspected input, in bytes.
    pub input_len: usize,
    /// The classification result.
    pub outcome: Outcome,
    /// Exit status the process will return.
    pub status: i32,
    /// Line written to stdout.
    pub message: &'static str,
}

impl OutcomeReport {
    #[must_use]
    pub fn new(input_len: usize, outcome: Outcome) -> Self {
        Self {
            input_len,
            outcome,
            status: outcome.status(),
            message: outcome.message(),
        }
    }
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Process exit code that accompanies this error.
    pub exit_code: i32,
}

impl ErrorOutput {
    /// Construct from a `CheckError`.
    #[must_use]
    pub fn from_check_error(err: &CheckError) -> Self {
        let code = match err {
            CheckError::Args(_) => "invalid_arguments",
            CheckError::Output(_) => "output_failed",
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.to_owned(),
                message: err.to_string(),
                exit_code: err.exit_code(),
            },
        }
    }
}
