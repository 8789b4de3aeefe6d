/// Command implementations.
pub mod check;

pub use check::run;
