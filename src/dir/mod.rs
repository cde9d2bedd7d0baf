//! Iterating over the entries of a directory.
//!
//! [`DirIter`] is the pull-based primitive, [`list_directory`] and [`map_directory`] are the eager
//! and callback forms built on it.

mod error;
mod iter;
mod list;
mod stream;
mod tests;

pub use error::*;
pub use iter::*;
pub use list::*;
pub(crate) use stream::*;
