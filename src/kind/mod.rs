//! Classifying filesystem entries, with a missing entry as an ordinary answer rather than an error.

mod entry_kind;
mod resolve;
mod tests;

pub use entry_kind::*;
pub use resolve::*;
