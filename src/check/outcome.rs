/// The four-way result of checking an input against the target token.
use serde::Serialize;

/// Classification result. Each variant carries a fixed process status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// No input reference at all (distinct from an empty input).
    NullInput,
    /// Input length is not 5.
    WrongLength,
    /// Input is exactly the target token.
    Match,
    /// Input is 5 bytes long but differs from the target token.
    Mismatch,
}

impl Outcome {
    /// Process exit status for this outcome.
    #[must_use]
    pub fn status(self) -> i32 {
        match self {
            Self::NullInput => -1,
            Self::WrongLength => 1,
            Self::Match => 0,
            Self::Mismatch => 2,
        }
    }

    /// Line printed to stdout: `OK` on a match, `NOPE` for everything else.
    #[must_use]
    pub fn message(self) -> &'static str {
        if self.is_match() { "OK" } else { "NOPE" }
    }

    /// Machine-readable name (snake_case), as used in diagnostics.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::NullInput => "null_input",
            Self::WrongLength => "wrong_length",
            Self::Match => "match",
            Self::Mismatch => "mismatch",
        }
    }

    /// Whether the input equalled the target token.
    #[must_use]
    pub fn is_match(self) -> bool {
        self == Self::Match
    }
}
