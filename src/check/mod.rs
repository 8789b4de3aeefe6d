/// Check domain layer: outcome classification against the fixed token.
pub mod classify;
pub mod errors;
pub mod outcome;

pub use classify::classify;
pub use errors::CheckError;
pub use outcome::Outcome;
