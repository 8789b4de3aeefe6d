/// Errors from the process layer around the checker.
use thiserror::Error;

/// Failures that are not outcomes: the classifier itself never fails, but
/// reading arguments or writing the verdict can.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Command-line arguments could not be parsed.
    #[error("invalid arguments: {0}")]
    Args(#[from] clap::Error),

    /// The verdict could not be written to stdout.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Exit code mapping for `CheckError` variants.
///
/// Codes stay clear of the outcome statuses (-1, 0, 1, 2).
impl CheckError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Args(_) => 64,
            Self::Output(_) => 74,
        }
    }
}
