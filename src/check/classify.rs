/// Classify an input byte string against the fixed target token.
use super::outcome::Outcome;

/// The token a matching input must equal byte for byte.
pub const TARGET: &[u8; 5] = b"panca";

/// Classify `input` into one of the four [`Outcome`]s.
///
/// `None` stands for a missing input reference and is kept apart from an
/// empty slice, which is simply a wrong-length input. Comparison is
/// byte-wise: no trimming, case folding, or decoding happens here.
#[must_use]
pub fn classify(input: Option<&[u8]>) -> Outcome {
    let Some(bytes) = input else {
        return Outcome::NullInput;
    };
    if bytes.len() != TARGET.len() {
        return Outcome::WrongLength;
    }
    if bytes == TARGET {
        Outcome::Match
    } else {
        Outcome::Mismatch
    }
}
